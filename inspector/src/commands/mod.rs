use std::{fs, path::Path};

use anyhow::Context;
use serde::de::DeserializeOwned;
use uniforge_client::RpcResponse;

pub mod account;
pub mod event;
pub mod validate;

/// Result of a command: text for stdout and whether the process succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub success: bool,
}

impl Report {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

pub(crate) fn read_response<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let response = RpcResponse::<T>::from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(response.result)
}
