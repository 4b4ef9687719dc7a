use anyhow::anyhow;
use tracing::{debug, info};
use uniforge_client::TransactionRecord;
use uniforge_event::{find_event_with, find_events, ForgeEvent};

use super::{read_response, Report};
use crate::{
    cli::{EventArgs, KindArg},
    config::InspectorConfig,
};

pub const NO_EVENT: &str = "no event";

pub fn event(config: &InspectorConfig, args: &EventArgs) -> anyhow::Result<Report> {
    let tx = read_response::<TransactionRecord>(&args.file)?
        .ok_or_else(|| anyhow!("{} holds no transaction", args.file.display()))?;
    render(find(config, &tx, args.kind)?)
}

pub fn find(
    config: &InspectorConfig,
    tx: &TransactionRecord,
    kind: KindArg,
) -> anyhow::Result<Option<ForgeEvent>> {
    let program_id = config.require_program_id()?.to_string();
    let logs = tx.log_messages();
    debug!(lines = logs.len(), scan = ?config.log_scan, "scanning logs");

    let event = match kind.event_kind() {
        Some(kind) => find_event_with(config.log_scan, &program_id, logs, kind)?,
        None => find_events(config.log_scan, &program_id, logs)?.pop(),
    };
    if let Some(event) = &event {
        info!(kind = event.kind().name(), token_id = event.token_id(), "found event");
    }
    Ok(event)
}

pub fn render(event: Option<ForgeEvent>) -> anyhow::Result<Report> {
    match event {
        Some(event) => Ok(Report::ok(serde_json::to_string_pretty(&event)?)),
        None => Ok(Report::ok(NO_EVENT)),
    }
}
