//! Recovers event payloads from a transaction's program log lines.
//!
//! The runtime brackets each program invocation with
//! `Program <id> invoke [<depth>]` and `Program <id> success` (or
//! `Program <id> failed: <reason>`). Events are written inside that span as
//! `Program log: <base64>` by older Anchor versions and as
//! `Program data: <base64>` by newer ones.

use uniforge_account_checks::{read_discriminator, DISCRIMINATOR_LEN};

use crate::{
    error::DecodeError,
    event::{decode_event, EventKind, ForgeEvent},
};

pub const PROGRAM_LOG: &str = "Program log: ";
pub const PROGRAM_DATA: &str = "Program data: ";

/// How log lines are attributed to the program that wrote them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogScan {
    /// Attribute `Program log:`/`Program data:` lines to the innermost
    /// program between its invoke and success/failed markers.
    #[default]
    InvocationScoped,
    /// Attribute a `Program log:` line to the program named as the second
    /// token of the line that follows it. Lines written by nested or
    /// adjacent invocations can be misattributed.
    NextLine,
}

/// Returns the payload of the last event emitted by `program_id`, or `None`
/// if it emitted none.
pub fn extract_event_payload<S: AsRef<str>>(program_id: &str, logs: &[S]) -> Option<Vec<u8>> {
    extract_event_payload_with(LogScan::default(), program_id, logs)
}

pub fn extract_event_payload_with<S: AsRef<str>>(
    scan: LogScan,
    program_id: &str,
    logs: &[S],
) -> Option<Vec<u8>> {
    event_payloads(scan, program_id, logs).pop()
}

/// Returns the last event of `kind` emitted by `program_id`.
pub fn find_event<S: AsRef<str>>(
    program_id: &str,
    logs: &[S],
    kind: EventKind,
) -> Result<Option<ForgeEvent>, DecodeError> {
    find_event_with(LogScan::default(), program_id, logs, kind)
}

pub fn find_event_with<S: AsRef<str>>(
    scan: LogScan,
    program_id: &str,
    logs: &[S],
    kind: EventKind,
) -> Result<Option<ForgeEvent>, DecodeError> {
    event_payloads(scan, program_id, logs)
        .into_iter()
        .rev()
        .find(|payload| read_discriminator(payload) == Ok(kind.discriminator()))
        .map(|payload| decode_event(kind, &payload))
        .transpose()
}

/// Decodes every registered event emitted by `program_id`, in log order.
/// Payloads with an unregistered tag are skipped.
pub fn find_events<S: AsRef<str>>(
    scan: LogScan,
    program_id: &str,
    logs: &[S],
) -> Result<Vec<ForgeEvent>, DecodeError> {
    let mut events = Vec::new();
    for payload in event_payloads(scan, program_id, logs) {
        let discriminator = read_discriminator(&payload)?;
        if let Some(kind) = EventKind::from_discriminator(&discriminator) {
            events.push(decode_event(kind, &payload)?);
        }
    }
    Ok(events)
}

/// Candidate lines that are not base64, or too short to carry a tag, are
/// plain text messages and are skipped.
fn event_payloads<S: AsRef<str>>(scan: LogScan, program_id: &str, logs: &[S]) -> Vec<Vec<u8>> {
    let candidates = match scan {
        LogScan::InvocationScoped => invocation_scoped_candidates(program_id, logs),
        LogScan::NextLine => next_line_candidates(program_id, logs),
    };
    candidates
        .into_iter()
        .filter_map(|candidate| base64::decode(candidate).ok())
        .filter(|payload| payload.len() >= DISCRIMINATOR_LEN)
        .collect()
}

fn invocation_scoped_candidates<'a, S: AsRef<str>>(
    program_id: &str,
    logs: &'a [S],
) -> Vec<&'a str> {
    let mut stack: Vec<&str> = Vec::new();
    let mut candidates = Vec::new();

    for line in logs.iter().map(|line| line.as_ref()) {
        if let Some(payload) = line
            .strip_prefix(PROGRAM_LOG)
            .or_else(|| line.strip_prefix(PROGRAM_DATA))
        {
            if stack.last() == Some(&program_id) {
                candidates.push(payload.trim());
            }
            continue;
        }

        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("Program") {
            continue;
        }
        let (Some(id), Some(action)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        match action {
            "invoke" => stack.push(id),
            "success" | "failed:" => {
                // Truncated logs can drop markers; unwind to the matching frame.
                if let Some(position) = stack.iter().rposition(|frame| *frame == id) {
                    stack.truncate(position);
                }
            }
            _ => {}
        }
    }
    candidates
}

fn next_line_candidates<'a, S: AsRef<str>>(program_id: &str, logs: &'a [S]) -> Vec<&'a str> {
    let mut candidates = Vec::new();
    for (i, line) in logs.iter().map(|line| line.as_ref()).enumerate() {
        let Some((category, payload)) = line.split_once(':') else {
            continue;
        };
        if !category.trim().eq_ignore_ascii_case("program log") {
            continue;
        }
        let Some(next) = logs.get(i + 1) else {
            continue;
        };
        if next.as_ref().split_whitespace().nth(1) == Some(program_id) {
            candidates.push(payload.trim());
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "Forge1111111111111111111111111111111111111";

    #[test]
    fn test_next_line_skips_marker_on_last_line() {
        let logs = ["Program log: AAAAAAAAAAAAAA=="];
        assert!(next_line_candidates(PROGRAM, &logs).is_empty());
    }

    #[test]
    fn test_invocation_scoped_nesting() {
        let logs = [
            format!("Program {PROGRAM} invoke [1]"),
            "Program log: outer".to_string(),
            "Program Other111 invoke [2]".to_string(),
            "Program log: inner".to_string(),
            "Program Other111 success".to_string(),
            "Program data: after".to_string(),
            format!("Program {PROGRAM} success"),
            "Program log: outside".to_string(),
        ];
        assert_eq!(
            invocation_scoped_candidates(PROGRAM, &logs),
            vec!["outer", "after"]
        );
    }

    #[test]
    fn test_invocation_scoped_failed_frame_unwinds() {
        let logs = [
            format!("Program {PROGRAM} invoke [1]"),
            "Program Other111 invoke [2]".to_string(),
            format!("Program {PROGRAM} failed: custom program error: 0x1"),
            "Program log: stray".to_string(),
        ];
        assert!(invocation_scoped_candidates(PROGRAM, &logs).is_empty());
    }
}
