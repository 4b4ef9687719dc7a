use solana_pubkey::Pubkey;
use uniforge_account_checks::check_owner;
use uniforge_event::{decode_account, ForgeAccount};

use crate::rpc::{errors::ClientError, types::AccountInfo};

/// Decodes the Forge account carried by a `getAccountInfo` result.
pub fn decode_forge_account(info: &AccountInfo) -> Result<ForgeAccount, ClientError> {
    let account = info.value.as_ref().ok_or(ClientError::AccountNotFound)?;
    let data = account.decode_data()?;
    Ok(decode_account(&data)?)
}

/// Like [`decode_forge_account`], but also requires the account to be owned
/// by `program_id`.
pub fn decode_forge_account_owned_by(
    info: &AccountInfo,
    program_id: &Pubkey,
) -> Result<ForgeAccount, ClientError> {
    let account = info.value.as_ref().ok_or(ClientError::AccountNotFound)?;
    check_owner(&program_id.to_bytes(), &account.owner.to_bytes())?;
    decode_forge_account(info)
}
