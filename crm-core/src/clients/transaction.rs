use crate::config::TransactionServiceSettings;
use crate::error::ApiError;
use crate::rpc::{RequestExecutor, classify};
use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};

pub const BALANCE_PATH: &str = "/api/balance";
pub const TRANSACTIONS_PATH: &str = "/api/transactions";
pub const DEPOSIT_PATH: &str = "/api/transactions/deposit";
pub const WITHDRAW_PATH: &str = "/api/transactions/withdraw";
pub const TRANSFER_PATH: &str = "/api/transactions/transfer";

/// Client for the transaction store peer service.
///
/// Balance and listing calls forward the inbound caller's bearer token
/// verbatim so the peer sees the original principal.
#[derive(Clone)]
pub struct TransactionClient {
    executor: RequestExecutor,
    settings: TransactionServiceSettings,
}

impl TransactionClient {
    pub fn new(settings: TransactionServiceSettings) -> Self {
        Self {
            executor: RequestExecutor::new(),
            settings,
        }
    }

    /// Aggregate balance across one or many accounts in the given currency.
    pub async fn get_balance(
        &self,
        account_ids: &[i64],
        currency: &str,
        token: &str,
    ) -> Result<Decimal, ApiError> {
        tracing::info!(
            "Fetching balance for accounts {:?} in {}",
            account_ids,
            currency
        );

        let ids = account_ids
            .iter()
            .map(|id| format!("id={}", id))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!(
            "{}{}?{}&currency={}",
            self.settings.url, BALANCE_PATH, ids, currency
        );
        let outcome = self.executor.get(&url, Some(token)).await?;
        let balance: Decimal = classify(outcome)?;

        tracing::info!("Balance fetched for accounts {:?}", account_ids);
        Ok(balance)
    }

    /// Fetch the transaction listing for one account. The shape of the
    /// listing belongs to the peer; callers treat it as opaque.
    pub async fn get_transactions(
        &self,
        account_id: i64,
        token: &str,
    ) -> Result<serde_json::Value, ApiError> {
        tracing::info!("Fetching transactions for account {}", account_id);

        let url = format!("{}{}/{}", self.settings.url, TRANSACTIONS_PATH, account_id);
        let outcome = self.executor.get(&url, Some(token)).await?;
        let transactions: serde_json::Value = classify(outcome)?;

        tracing::info!("Transactions fetched for account {}", account_id);
        Ok(transactions)
    }

    /// Post a deposit/withdraw/transfer instruction to the given peer path
    /// and return the classified success payload, typically the new
    /// transaction identifier.
    pub async fn post_transaction<T, B>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::info!("Posting transaction to {}", path);

        let url = format!("{}{}", self.settings.url, path);
        let outcome = self.executor.post(&url, body, Some(token)).await?;
        let payload: T = classify(outcome)?;

        tracing::info!("Transaction accepted at {}", path);
        Ok(payload)
    }
}
