use thiserror::Error;

use crate::discriminator::DISCRIMINATOR_LEN;

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Invalid account size {0}, expected at least 8 bytes.")]
    InvalidAccountSize(usize),
    #[error("Invalid discriminator, expected {expected:?} found {actual:?}.")]
    InvalidDiscriminator {
        expected: [u8; DISCRIMINATOR_LEN],
        actual: [u8; DISCRIMINATOR_LEN],
    },
    #[error("Account is owned by the wrong program.")]
    AccountOwnedByWrongProgram,
}

impl From<AccountError> for u32 {
    fn from(e: AccountError) -> u32 {
        match e {
            AccountError::InvalidAccountSize(_) => 17101,
            AccountError::InvalidDiscriminator { .. } => 17102,
            AccountError::AccountOwnedByWrongProgram => 17103,
        }
    }
}
