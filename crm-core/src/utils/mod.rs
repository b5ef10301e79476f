/// Mask an email address for log output: keep the first character of the
/// local part and the full domain.
///
/// Masking applies to log lines only; error messages returned to callers
/// never contain caller credentials in the first place.
pub fn mask_email(email: &str) -> String {
    if let Some((local, domain)) = email.split_once('@') {
        if let Some(first) = local.chars().next() {
            return format!("{}***@{}", first, domain);
        }
    }
    "***".to_string()
}
