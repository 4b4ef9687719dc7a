use anyhow::anyhow;
use tracing::{info, warn};
use uniforge_client::{
    validate_against_forge, validate_transaction, AccountInfo, TransactionRecord,
    ValidationVerdict,
};

use super::{account::load_forge, read_response, Report};
use crate::{cli::ValidateArgs, config::InspectorConfig};

pub fn validate(config: &InspectorConfig, args: &ValidateArgs) -> anyhow::Result<Report> {
    let tx = read_response::<TransactionRecord>(&args.file)?;
    let account = match &args.account {
        Some(path) => Some(
            read_response::<AccountInfo>(path)?
                .ok_or_else(|| anyhow!("{} holds no account", path.display()))?,
        ),
        None => None,
    };
    let verdict = run(config, tx.as_ref(), account.as_ref())?;
    Ok(render(&verdict))
}

/// Validates against the saved Forge account when given, otherwise against
/// the configured artist and minimum fee.
pub fn run(
    config: &InspectorConfig,
    tx: Option<&TransactionRecord>,
    account: Option<&AccountInfo>,
) -> anyhow::Result<ValidationVerdict> {
    let program_id = config.require_program_id()?;
    let verdict = match account {
        Some(account) => {
            let forge = load_forge(config, account)?;
            validate_against_forge(tx, &forge, &program_id)
        }
        None => {
            let artist = config
                .artist
                .ok_or_else(|| anyhow!("--artist is required without --account"))?;
            let min_fee = config
                .min_fee_sol
                .ok_or_else(|| anyhow!("--min-fee-sol is required without --account"))?;
            validate_transaction(tx, &artist, &program_id, min_fee)
        }
    };
    if verdict.is_valid() {
        info!("transaction is valid");
    } else {
        warn!(rejections = verdict.rejections().len(), "transaction rejected");
    }
    Ok(verdict)
}

pub fn render(verdict: &ValidationVerdict) -> Report {
    if verdict.is_valid() {
        return Report::ok("valid");
    }
    let reasons: Vec<String> = verdict
        .rejections()
        .iter()
        .map(|rejection| format!("invalid: {rejection}"))
        .collect();
    Report::failed(reasons.join("\n"))
}
