use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BalanceQuery {
    #[validate(length(equal = 3, message = "Currency must be a three-letter code"))]
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct DepositRequest {
    #[validate(range(min = 1, message = "Account id must be positive"))]
    pub account_id: i64,
    pub amount: Decimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter code"))]
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct WithdrawRequest {
    #[validate(range(min = 1, message = "Account id must be positive"))]
    pub account_id: i64,
    pub amount: Decimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter code"))]
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TransferRequest {
    #[validate(range(min = 1, message = "Account id must be positive"))]
    pub from_account_id: i64,
    #[validate(range(min = 1, message = "Account id must be positive"))]
    pub to_account_id: i64,
    pub amount: Decimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter code"))]
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
}
