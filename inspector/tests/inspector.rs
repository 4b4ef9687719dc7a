use std::{fs, path::PathBuf};

use borsh::BorshSerialize;
use clap::Parser;
use serde_json::{json, Value};
use solana_pubkey::Pubkey;
use uniforge_account_checks::Discriminator;
use uniforge_client::WRAPPED_SOL_MINT;
use uniforge_event::{ForgeAccount, IssuedEvent, TransferEvent};
use uniforge_inspector::{cli::Cli, commands::event::NO_EVENT, run};

const FORGE_PROGRAM: &str = "6dM4TqWyWJsbx7obrdLcviBkTafD5E8av61zfU6jq57X";

fn artist() -> Pubkey {
    Pubkey::new_from_array([2u8; 32])
}

fn write_fixture(name: &str, value: &Value) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("uniforge-inspector-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, value.to_string()).unwrap();
    path
}

fn forge(supply_unclaimed: u16) -> ForgeAccount {
    ForgeAccount {
        discriminator: ForgeAccount::DISCRIMINATOR,
        name: "Genesis".to_string(),
        symbol: "GEN".to_string(),
        content_hash: [4u8; 32],
        authority: Pubkey::new_from_array([1u8; 32]),
        max_supply: 10,
        supply_unclaimed,
        artist: artist(),
        min_fee_lamports: 50_000_000,
        secondary_fee_bps: 0,
        remainder: Vec::new(),
    }
}

fn account_response(forge: &ForgeAccount) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "context": { "slot": 120 },
            "value": {
                "data": [base64::encode(forge.try_to_vec().unwrap()), "base64"],
                "lamports": 2_039_280,
                "owner": FORGE_PROGRAM,
                "executable": false,
            }
        }
    })
}

fn balance(amount: u64) -> Value {
    json!({
        "accountIndex": 1,
        "mint": WRAPPED_SOL_MINT.to_string(),
        "uiTokenAmount": { "amount": amount.to_string(), "decimals": 9 }
    })
}

fn transaction_response(logs: Vec<String>, post_balance: u64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "slot": 121,
            "blockTime": null,
            "meta": {
                "err": null,
                "fee": 5000,
                "logMessages": logs,
                "preTokenBalances": [],
                "postTokenBalances": [balance(post_balance)],
            },
            "transaction": {
                "signatures": [],
                "message": {
                    "accountKeys": [
                        Pubkey::new_from_array([1u8; 32]).to_string(),
                        artist().to_string(),
                        FORGE_PROGRAM,
                    ],
                    "instructions": [{ "programIdIndex": 2, "accounts": [0, 1], "data": "" }],
                }
            }
        }
    })
}

fn mint_logs(payload: &[u8]) -> Vec<String> {
    vec![
        format!("Program {FORGE_PROGRAM} invoke [1]"),
        "Program log: Instruction: Mint".to_string(),
        format!("Program log: {}", base64::encode(payload)),
        format!("Program {FORGE_PROGRAM} success"),
    ]
}

fn inspect(args: &[&str]) -> uniforge_inspector::commands::Report {
    let mut argv = vec!["uniforge-inspector"];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv).unwrap()).unwrap()
}

#[test]
fn test_account_command() {
    let path = write_fixture("account.json", &account_response(&forge(6)));
    let report = inspect(&[
        "account",
        path.to_str().unwrap(),
        "--previous",
        "2",
        "--program-id",
        FORGE_PROGRAM,
    ]);
    assert!(report.success);
    assert!(report
        .text
        .starts_with("Genesis GEN - Max supply: 10, Supply unclaimed: 6"));
    assert!(report.text.contains("Claimed: 4"));
    assert!(report.text.contains("Issued since 2: 3, 4"));
}

#[test]
fn test_account_command_rejects_foreign_owner() {
    let path = write_fixture("account-owner.json", &account_response(&forge(6)));
    let other = Pubkey::new_from_array([9u8; 32]).to_string();
    let cli = Cli::try_parse_from([
        "uniforge-inspector",
        "account",
        path.to_str().unwrap(),
        "--program-id",
        other.as_str(),
    ])
    .unwrap();
    assert!(run(&cli).is_err());
}

#[test]
fn test_event_command() {
    let event = IssuedEvent {
        token_id: 4,
        owner: Pubkey::new_from_array([5u8; 32]),
    };
    let logs = mint_logs(&event.try_to_vec().unwrap());
    let path = write_fixture("event.json", &transaction_response(logs, 0));

    let report = inspect(&["event", path.to_str().unwrap(), "--program-id", FORGE_PROGRAM]);
    let rendered: Value = serde_json::from_str(&report.text).unwrap();
    assert_eq!(rendered["kind"], "issued");
    assert_eq!(rendered["token_id"], 4);

    let report = inspect(&[
        "event",
        path.to_str().unwrap(),
        "--kind",
        "transfer",
        "--program-id",
        FORGE_PROGRAM,
        "--log-scan",
        "next-line",
    ]);
    assert!(report.success);
    assert_eq!(report.text, NO_EVENT);
}

#[test]
fn test_event_command_selects_kind() {
    let transfer = TransferEvent {
        token_id: 2,
        from: Pubkey::new_from_array([5u8; 32]),
        to: Pubkey::new_from_array([6u8; 32]),
    };
    let logs = mint_logs(&transfer.try_to_vec().unwrap());
    let path = write_fixture("event-transfer.json", &transaction_response(logs, 0));

    let report = inspect(&[
        "event",
        path.to_str().unwrap(),
        "--kind",
        "transfer",
        "--program-id",
        FORGE_PROGRAM,
    ]);
    let rendered: Value = serde_json::from_str(&report.text).unwrap();
    assert_eq!(rendered["kind"], "transfer");
    assert_eq!(rendered["to"], Pubkey::new_from_array([6u8; 32]).to_string());
}

#[test]
fn test_validate_command_with_flags() {
    let path = write_fixture("validate.json", &transaction_response(Vec::new(), 50_000_000));
    let artist = artist().to_string();

    let report = inspect(&[
        "validate",
        path.to_str().unwrap(),
        "--program-id",
        FORGE_PROGRAM,
        "--artist",
        artist.as_str(),
        "--min-fee-sol",
        "0.05",
    ]);
    assert_eq!(report.text, "valid");
    assert!(report.success);

    let report = inspect(&[
        "validate",
        path.to_str().unwrap(),
        "--program-id",
        FORGE_PROGRAM,
        "--artist",
        artist.as_str(),
        "--min-fee-sol",
        "0.1",
    ]);
    assert!(!report.success);
    assert!(report.text.starts_with("invalid: Invalid fee paid to artist"));
}

#[test]
fn test_validate_command_with_account() {
    let tx = write_fixture(
        "validate-account-tx.json",
        &transaction_response(Vec::new(), 40_000_000),
    );
    let account = write_fixture("validate-account.json", &account_response(&forge(6)));

    let report = inspect(&[
        "validate",
        tx.to_str().unwrap(),
        "--account",
        account.to_str().unwrap(),
        "--program-id",
        FORGE_PROGRAM,
    ]);
    assert!(!report.success);
    assert_eq!(
        report.text,
        "invalid: Invalid fee paid to artist: paid 40000000, required 50000000"
    );
}

#[test]
fn test_validate_missing_transaction() {
    let path = write_fixture(
        "validate-null.json",
        &json!({ "jsonrpc": "2.0", "id": 1, "result": null }),
    );
    let artist = artist().to_string();
    let report = inspect(&[
        "validate",
        path.to_str().unwrap(),
        "--program-id",
        FORGE_PROGRAM,
        "--artist",
        artist.as_str(),
        "--min-fee-sol",
        "0.05",
    ]);
    assert!(!report.success);
    assert_eq!(report.text, "invalid: Transaction does not exist");
}

#[test]
fn test_validate_requires_artist_without_account() {
    let path = write_fixture("validate-noartist.json", &transaction_response(Vec::new(), 0));
    let cli = Cli::try_parse_from([
        "uniforge-inspector",
        "validate",
        path.to_str().unwrap(),
        "--program-id",
        FORGE_PROGRAM,
    ])
    .unwrap();
    assert!(run(&cli).is_err());
}
