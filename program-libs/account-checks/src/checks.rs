use crate::{
    discriminator::{Discriminator, DISCRIMINATOR_LEN},
    error::AccountError,
};

/// Reads the leading type tag without interpreting it.
pub fn read_discriminator(bytes: &[u8]) -> Result<[u8; DISCRIMINATOR_LEN], AccountError> {
    if bytes.len() < DISCRIMINATOR_LEN {
        return Err(AccountError::InvalidAccountSize(bytes.len()));
    }
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&bytes[..DISCRIMINATOR_LEN]);
    Ok(discriminator)
}

/// Checks:
/// 1. data is at least `DISCRIMINATOR_LEN` bytes
/// 2. leading tag equals `T::DISCRIMINATOR`
pub fn check_discriminator<T: Discriminator>(bytes: &[u8]) -> Result<(), AccountError> {
    let actual = read_discriminator(bytes)?;
    if actual != T::DISCRIMINATOR {
        return Err(AccountError::InvalidDiscriminator {
            expected: T::DISCRIMINATOR,
            actual,
        });
    }
    Ok(())
}

pub fn check_owner(expected: &[u8; 32], owner: &[u8; 32]) -> Result<(), AccountError> {
    if expected != owner {
        return Err(AccountError::AccountOwnedByWrongProgram);
    }
    Ok(())
}
