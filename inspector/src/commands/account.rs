use anyhow::anyhow;
use tracing::info;
use uniforge_client::{decode_forge_account, decode_forge_account_owned_by, AccountInfo};
use uniforge_event::ForgeAccount;

use super::{read_response, Report};
use crate::{cli::AccountArgs, config::InspectorConfig};

pub fn account(config: &InspectorConfig, args: &AccountArgs) -> anyhow::Result<Report> {
    let info = read_response::<AccountInfo>(&args.file)?
        .ok_or_else(|| anyhow!("{} holds no account", args.file.display()))?;
    let forge = load_forge(config, &info)?;
    info!(slot = info.context.slot, "decoded forge account");
    render(&forge, args.previous)
}

/// Decodes the Forge account in a saved `getAccountInfo` response. The
/// owner is checked when a program id is configured.
pub fn load_forge(config: &InspectorConfig, info: &AccountInfo) -> anyhow::Result<ForgeAccount> {
    let forge = match &config.program_id {
        Some(program_id) => decode_forge_account_owned_by(info, program_id)?,
        None => decode_forge_account(info)?,
    };
    Ok(forge)
}

pub fn render(forge: &ForgeAccount, previous: Option<u16>) -> anyhow::Result<Report> {
    let mut text = format!(
        "{forge}\n{}\nClaimed: {}",
        serde_json::to_string_pretty(forge)?,
        forge.claimed_count()
    );
    if let Some(previous) = previous {
        let issued: Vec<String> = forge
            .newly_issued(previous)
            .map(|id| id.to_string())
            .collect();
        if issued.is_empty() {
            text.push_str("\nNo tokens issued");
        } else {
            text.push_str(&format!("\nIssued since {previous}: {}", issued.join(", ")));
        }
    }
    Ok(Report::ok(text))
}
