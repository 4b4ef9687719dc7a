pub mod error;
pub mod event;
pub mod forge;
pub mod parse;
mod serde_helpers;

pub use error::DecodeError;
pub use event::{
    decode_any_event, decode_event, EventKind, EventRecord, ForgeEvent, IssuedEvent, OfferEvent,
    TransferEvent,
};
pub use forge::{decode_account, ForgeAccount, FORGE_ACCOUNT_LEN};
pub use parse::{
    extract_event_payload, extract_event_payload_with, find_event, find_event_with, find_events,
    LogScan,
};
pub use solana_pubkey::Pubkey;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
