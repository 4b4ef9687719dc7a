use std::str::FromStr;

use anyhow::{anyhow, Context};
use solana_pubkey::Pubkey;
use uniforge_event::LogScan;

use crate::cli::GlobalArgs;

/// Options shared by every command, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    pub program_id: Option<Pubkey>,
    pub artist: Option<Pubkey>,
    pub min_fee_sol: Option<f64>,
    pub log_scan: LogScan,
}

impl InspectorConfig {
    pub fn new_for_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let program_id = args
            .program_id
            .as_deref()
            .map(|key| parse_pubkey(key).context("invalid --program-id"))
            .transpose()?;
        let artist = args
            .artist
            .as_deref()
            .map(|key| parse_pubkey(key).context("invalid --artist"))
            .transpose()?;
        if let Some(min_fee) = args.min_fee_sol {
            if !min_fee.is_finite() || min_fee < 0.0 {
                return Err(anyhow!("invalid --min-fee-sol {min_fee}"));
            }
        }

        Ok(Self {
            program_id,
            artist,
            min_fee_sol: args.min_fee_sol,
            log_scan: args.log_scan.into(),
        })
    }

    pub fn require_program_id(&self) -> anyhow::Result<Pubkey> {
        self.program_id
            .ok_or_else(|| anyhow!("--program-id (or UNIFORGE_PROGRAM_ID) is required"))
    }
}

fn parse_pubkey(key: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(key).map_err(|e| anyhow!("`{key}`: {e}"))
}
