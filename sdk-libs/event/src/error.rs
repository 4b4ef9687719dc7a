use core::str::Utf8Error;

use thiserror::Error;
use uniforge_account_checks::{AccountError, DISCRIMINATOR_LEN};
use uniforge_byte_cursor::errors::CursorError;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error(
        "Truncated buffer: requested {requested} bytes at offset {offset}, {remaining} remaining"
    )]
    TruncatedBuffer {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    #[error("Malformed text field at offset {offset}: {source}")]
    MalformedTextField { offset: usize, source: Utf8Error },
    #[error("Discriminator mismatch, expected {expected:?} found {actual:?}")]
    DiscriminatorMismatch {
        expected: [u8; DISCRIMINATOR_LEN],
        actual: [u8; DISCRIMINATOR_LEN],
    },
    #[error("Unknown event discriminator {0:?}")]
    UnknownDiscriminator([u8; DISCRIMINATOR_LEN]),
    #[error("Supply unclaimed {supply_unclaimed} exceeds max supply {max_supply}")]
    InvalidSupply {
        max_supply: u16,
        supply_unclaimed: u16,
    },
    #[error("Token id 0 is not a valid token id")]
    InvalidTokenId,
    #[error(transparent)]
    Account(AccountError),
}

impl From<CursorError> for DecodeError {
    fn from(e: CursorError) -> Self {
        match e {
            CursorError::Truncated {
                offset,
                requested,
                remaining,
            } => DecodeError::TruncatedBuffer {
                offset,
                requested,
                remaining,
            },
            CursorError::MalformedText { offset, source, .. } => {
                DecodeError::MalformedTextField { offset, source }
            }
        }
    }
}

impl From<AccountError> for DecodeError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::InvalidAccountSize(len) => DecodeError::TruncatedBuffer {
                offset: 0,
                requested: DISCRIMINATOR_LEN,
                remaining: len,
            },
            AccountError::InvalidDiscriminator { expected, actual } => {
                DecodeError::DiscriminatorMismatch { expected, actual }
            }
            other => DecodeError::Account(other),
        }
    }
}

impl From<DecodeError> for u32 {
    fn from(e: DecodeError) -> u32 {
        match e {
            DecodeError::TruncatedBuffer { .. } => 17201,
            DecodeError::MalformedTextField { .. } => 17202,
            DecodeError::DiscriminatorMismatch { .. } => 17203,
            DecodeError::UnknownDiscriminator(_) => 17204,
            DecodeError::InvalidSupply { .. } => 17205,
            DecodeError::InvalidTokenId => 17206,
            DecodeError::Account(e) => u32::from(e),
        }
    }
}
