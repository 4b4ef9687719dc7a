//! Confirms that a transaction legitimately paid the artist of a Forge and
//! was issued against the Forge program.
//!
//! Balances are compared in base units of the wrapped SOL mint (lamports),
//! using the raw `amount` strings rather than the lossy `uiAmount` floats.
//! Both the fee check and the program check always run, so a rejected
//! verdict carries every reason that applies.

use solana_pubkey::Pubkey;
use thiserror::Error;
use tracing::debug;
use uniforge_event::ForgeAccount;

use crate::rpc::types::{TransactionRecord, UiTokenBalance};

/// `So11111111111111111111111111111111111111112`
pub const WRAPPED_SOL_MINT: Pubkey = Pubkey::new_from_array([
    6, 155, 136, 87, 254, 171, 129, 132, 251, 104, 127, 99, 70, 24, 192, 53, 218, 196, 57, 220,
    26, 235, 59, 85, 152, 160, 240, 0, 0, 0, 0, 1,
]);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Transaction does not exist")]
    TransactionNotFound,
    #[error("Artist is not in the accounts listed")]
    ArtistNotInTransaction,
    #[error("Artist does not have a post balance")]
    ArtistHasNoPostBalance,
    #[error("Invalid fee paid to artist: paid {paid}, required {required}")]
    InsufficientFee { paid: i128, required: u64 },
    #[error("No instruction references the artist under the expected program")]
    WrongProgram,
    #[error("Malformed token amount `{0}`")]
    MalformedTokenAmount(String),
    #[error("Invalid minimum fee {0}")]
    InvalidMinimumFee(f64),
}

impl From<ValidationError> for u32 {
    fn from(e: ValidationError) -> u32 {
        match e {
            ValidationError::TransactionNotFound => 17301,
            ValidationError::ArtistNotInTransaction => 17302,
            ValidationError::ArtistHasNoPostBalance => 17303,
            ValidationError::InsufficientFee { .. } => 17304,
            ValidationError::WrongProgram => 17305,
            ValidationError::MalformedTokenAmount(_) => 17306,
            ValidationError::InvalidMinimumFee(_) => 17307,
        }
    }
}

/// Outcome of [`validate_transaction`]. Only the validator constructs it,
/// and it is accepted only if no check rejected the transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationVerdict {
    rejections: Vec<ValidationError>,
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn rejections(&self) -> &[ValidationError] {
        &self.rejections
    }

    /// First reason the transaction was rejected.
    pub fn reason(&self) -> Option<&ValidationError> {
        self.rejections.first()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.rejections.into_iter().next() {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }
}

/// Minimum amount the artist's wrapped SOL balance must grow by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinimumFee {
    /// Native units, scaled by the mint's decimals.
    Sol(f64),
    /// Base units of the wrapped SOL mint.
    Lamports(u64),
}

impl MinimumFee {
    fn to_base_units(self, decimals: u8) -> Result<u64, ValidationError> {
        match self {
            MinimumFee::Lamports(lamports) => Ok(lamports),
            MinimumFee::Sol(sol) => {
                let scaled = (sol * 10f64.powi(i32::from(decimals))).round();
                if !scaled.is_finite() || scaled < 0.0 || scaled > u64::MAX as f64 {
                    return Err(ValidationError::InvalidMinimumFee(sol));
                }
                Ok(scaled as u64)
            }
        }
    }
}

/// Balance of the artist before the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreBalance {
    /// No pre-balance entry: the artist did not hold wrapped SOL before.
    NeverHeld,
    Held(u64),
}

impl PreBalance {
    fn base_units(self) -> u64 {
        match self {
            PreBalance::NeverHeld => 0,
            PreBalance::Held(amount) => amount,
        }
    }
}

/// Validates `tx` with `min_fee` expressed in SOL.
pub fn validate_transaction(
    tx: Option<&TransactionRecord>,
    artist: &Pubkey,
    program_id: &Pubkey,
    min_fee: f64,
) -> ValidationVerdict {
    validate_with_minimum(tx, artist, program_id, MinimumFee::Sol(min_fee))
}

/// Validates `tx` against the artist and minimum fee stored in `forge`.
pub fn validate_against_forge(
    tx: Option<&TransactionRecord>,
    forge: &ForgeAccount,
    program_id: &Pubkey,
) -> ValidationVerdict {
    validate_with_minimum(
        tx,
        &forge.artist,
        program_id,
        MinimumFee::Lamports(forge.min_fee_lamports),
    )
}

pub fn validate_with_minimum(
    tx: Option<&TransactionRecord>,
    artist: &Pubkey,
    program_id: &Pubkey,
    min_fee: MinimumFee,
) -> ValidationVerdict {
    let rejections = match tx {
        None => vec![ValidationError::TransactionNotFound],
        Some(tx) => match tx.account_keys().iter().position(|key| key == artist) {
            None => vec![ValidationError::ArtistNotInTransaction],
            Some(artist_index) => {
                let mut rejections = Vec::new();
                if let Err(e) = check_fee(tx, artist_index, min_fee) {
                    rejections.push(e);
                }
                if let Err(e) = check_program(tx, artist_index, program_id) {
                    rejections.push(e);
                }
                rejections
            }
        },
    };
    for rejection in &rejections {
        debug!(%artist, %program_id, "transaction rejected: {rejection}");
    }
    ValidationVerdict { rejections }
}

fn wrapped_sol_balance(
    balances: &[UiTokenBalance],
    account_index: usize,
) -> Option<&UiTokenBalance> {
    balances.iter().find(|balance| {
        usize::from(balance.account_index) == account_index && balance.mint == WRAPPED_SOL_MINT
    })
}

fn base_units(balance: &UiTokenBalance) -> Result<u64, ValidationError> {
    let amount = &balance.ui_token_amount;
    amount
        .base_units()
        .ok_or_else(|| ValidationError::MalformedTokenAmount(amount.amount.clone()))
}

fn check_fee(
    tx: &TransactionRecord,
    artist_index: usize,
    min_fee: MinimumFee,
) -> Result<(), ValidationError> {
    let pre_balance = match wrapped_sol_balance(tx.pre_token_balances(), artist_index) {
        None => PreBalance::NeverHeld,
        Some(balance) => PreBalance::Held(base_units(balance)?),
    };
    let post = wrapped_sol_balance(tx.post_token_balances(), artist_index)
        .ok_or(ValidationError::ArtistHasNoPostBalance)?;
    let post_balance = base_units(post)?;
    let required = min_fee.to_base_units(post.ui_token_amount.decimals)?;

    let paid = i128::from(post_balance) - i128::from(pre_balance.base_units());
    if paid < i128::from(required) {
        return Err(ValidationError::InsufficientFee { paid, required });
    }
    Ok(())
}

fn check_program(
    tx: &TransactionRecord,
    artist_index: usize,
    program_id: &Pubkey,
) -> Result<(), ValidationError> {
    let keys = tx.account_keys();
    let invoked = tx.instructions().iter().any(|instruction| {
        instruction.references(artist_index)
            && keys.get(usize::from(instruction.program_id_index)) == Some(program_id)
    });
    if !invoked {
        return Err(ValidationError::WrongProgram);
    }
    Ok(())
}
