pub mod account;
pub mod base58;
pub mod rpc;
pub mod validate;

pub use account::{decode_forge_account, decode_forge_account_owned_by};
pub use rpc::{
    errors::ClientError,
    types::{AccountInfo, RpcResponse, TransactionRecord},
};
pub use validate::{
    validate_against_forge, validate_transaction, validate_with_minimum, MinimumFee,
    ValidationError, ValidationVerdict, WRAPPED_SOL_MINT,
};
