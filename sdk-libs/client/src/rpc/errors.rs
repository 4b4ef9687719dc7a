use thiserror::Error;
use uniforge_account_checks::AccountError;
use uniforge_event::DecodeError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Unsupported account data encoding `{0}`")]
    UnsupportedEncoding(String),

    #[error("Invalid base64 account data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid response data: {0}")]
    InvalidResponseData(String),

    #[error("DecodeError: {0}")]
    Decode(#[from] DecodeError),

    #[error("AccountError: {0}")]
    Account(#[from] AccountError),

    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
}
