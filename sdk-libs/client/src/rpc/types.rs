//! Subset of the Solana JSON-RPC response schema consumed by Uniforge.
//!
//! Only the fields the decoders and the validator read are modeled; unknown
//! fields are ignored. Account keys and mints are parsed from base58 into
//! [`Pubkey`] at the deserialization boundary.

use serde::Deserialize;
use solana_pubkey::Pubkey;

use crate::{
    base58::{decode_base58_to_fixed_array, deserialize_account_keys, deserialize_pubkey},
    rpc::errors::ClientError,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    /// `null` when the requested transaction or account does not exist.
    pub result: Option<T>,
}

impl<T: for<'de> Deserialize<'de>> RpcResponse<T> {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcContext {
    pub slot: u64,
}

/// `getAccountInfo` result.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub context: RpcContext,
    pub value: Option<UiAccount>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiAccount {
    /// `[payload, encoding]`.
    pub data: (String, String),
    pub lamports: u64,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub owner: Pubkey,
    #[serde(default)]
    pub executable: bool,
}

impl UiAccount {
    pub fn decode_data(&self) -> Result<Vec<u8>, ClientError> {
        let (payload, encoding) = &self.data;
        match encoding.as_str() {
            "base64" => Ok(base64::decode(payload)?),
            "base58" => bs58::decode(payload)
                .into_vec()
                .map_err(|e| ClientError::InvalidResponseData(e.to_string())),
            other => Err(ClientError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// `getTransaction` / `getConfirmedTransaction` result.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub slot: u64,
    pub block_time: Option<i64>,
    pub meta: Option<TransactionMeta>,
    pub transaction: UiTransaction,
}

impl TransactionRecord {
    pub fn account_keys(&self) -> &[Pubkey] {
        &self.transaction.message.account_keys
    }

    pub fn instructions(&self) -> &[UiCompiledInstruction] {
        &self.transaction.message.instructions
    }

    pub fn log_messages(&self) -> &[String] {
        self.meta
            .as_ref()
            .map(|meta| meta.log_messages.as_slice())
            .unwrap_or_default()
    }

    pub fn pre_token_balances(&self) -> &[UiTokenBalance] {
        self.meta
            .as_ref()
            .map(|meta| meta.pre_token_balances.as_slice())
            .unwrap_or_default()
    }

    pub fn post_token_balances(&self) -> &[UiTokenBalance] {
        self.meta
            .as_ref()
            .map(|meta| meta.post_token_balances.as_slice())
            .unwrap_or_default()
    }

    /// Whether the transaction executed without error.
    pub fn succeeded(&self) -> bool {
        self.meta
            .as_ref()
            .map(|meta| meta.err.is_none())
            .unwrap_or(false)
    }

    /// First signature, which identifies the transaction.
    pub fn signature(&self) -> Option<[u8; 64]> {
        self.transaction
            .signatures
            .first()
            .and_then(|signature| decode_base58_to_fixed_array(signature).ok())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub log_messages: Vec<String>,
    #[serde(default)]
    pub pre_token_balances: Vec<UiTokenBalance>,
    #[serde(default)]
    pub post_token_balances: Vec<UiTokenBalance>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UiTransaction {
    #[serde(default)]
    pub signatures: Vec<String>,
    pub message: UiMessage,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiMessage {
    #[serde(deserialize_with = "deserialize_account_keys")]
    pub account_keys: Vec<Pubkey>,
    #[serde(default)]
    pub instructions: Vec<UiCompiledInstruction>,
    #[serde(default)]
    pub recent_blockhash: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiCompiledInstruction {
    pub program_id_index: u8,
    #[serde(default)]
    pub accounts: Vec<u8>,
    #[serde(default)]
    pub data: String,
}

impl UiCompiledInstruction {
    pub fn references(&self, account_index: usize) -> bool {
        self.accounts
            .iter()
            .any(|index| usize::from(*index) == account_index)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenBalance {
    pub account_index: u8,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub mint: Pubkey,
    pub owner: Option<String>,
    pub ui_token_amount: UiTokenAmount,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    /// Raw amount in base units, as a decimal string.
    pub amount: String,
    pub decimals: u8,
    pub ui_amount: Option<f64>,
    pub ui_amount_string: Option<String>,
}

impl UiTokenAmount {
    pub fn base_units(&self) -> Option<u64> {
        self.amount.parse().ok()
    }
}
