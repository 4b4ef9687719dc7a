use std::io::{self, Write};

use borsh::BorshSerialize;
use solana_pubkey::Pubkey;
use uniforge_account_checks::{
    check_discriminator, read_discriminator, Discriminator, DISCRIMINATOR_LEN,
};
use uniforge_byte_cursor::ByteCursor;

use crate::error::DecodeError;

/// Emitted when a token is issued to its first owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct IssuedEvent {
    pub token_id: u16,
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub owner: Pubkey,
}

/// Emitted when an owner lists a token for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct OfferEvent {
    pub token_id: u16,
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub seller: Pubkey,
    pub min_bid_lamports: u64,
}

/// Emitted when a token changes owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TransferEvent {
    pub token_id: u16,
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub from: Pubkey,
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub to: Pubkey,
}

// The program declares the issuing event as `ForgeEvent`.
impl Discriminator for IssuedEvent {
    const DISCRIMINATOR: [u8; 8] = [207, 101, 216, 158, 197, 37, 145, 18];
    const NAMESPACE: &'static str = "event";
    const PROGRAM_NAME: &'static str = "ForgeEvent";
}

impl Discriminator for OfferEvent {
    const DISCRIMINATOR: [u8; 8] = [232, 113, 212, 148, 215, 80, 25, 176];
    const NAMESPACE: &'static str = "event";
    const PROGRAM_NAME: &'static str = "OfferEvent";
}

impl Discriminator for TransferEvent {
    const DISCRIMINATOR: [u8; 8] = [100, 10, 46, 113, 8, 28, 179, 125];
    const NAMESPACE: &'static str = "event";
    const PROGRAM_NAME: &'static str = "TransferEvent";
}

/// A fixed-layout event record: an 8-byte tag followed by the fields.
pub trait EventRecord: Discriminator + Sized {
    fn decode_fields(cursor: &mut ByteCursor) -> Result<Self, DecodeError>;

    /// Checks the tag, then decodes the fields. Trailing bytes are ignored.
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        check_discriminator::<Self>(bytes)?;
        let mut cursor = ByteCursor::new(bytes);
        cursor.take(DISCRIMINATOR_LEN)?;
        Self::decode_fields(&mut cursor)
    }
}

fn take_token_id(cursor: &mut ByteCursor) -> Result<u16, DecodeError> {
    match cursor.take_u16_le()? {
        0 => Err(DecodeError::InvalidTokenId),
        token_id => Ok(token_id),
    }
}

fn take_pubkey(cursor: &mut ByteCursor) -> Result<Pubkey, DecodeError> {
    Ok(Pubkey::new_from_array(cursor.take_array()?))
}

impl EventRecord for IssuedEvent {
    fn decode_fields(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        Ok(Self {
            token_id: take_token_id(cursor)?,
            owner: take_pubkey(cursor)?,
        })
    }
}

impl EventRecord for OfferEvent {
    fn decode_fields(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        Ok(Self {
            token_id: take_token_id(cursor)?,
            seller: take_pubkey(cursor)?,
            min_bid_lamports: cursor.take_u64_le()?,
        })
    }
}

impl EventRecord for TransferEvent {
    fn decode_fields(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        Ok(Self {
            token_id: take_token_id(cursor)?,
            from: take_pubkey(cursor)?,
            to: take_pubkey(cursor)?,
        })
    }
}

impl BorshSerialize for IssuedEvent {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&Self::DISCRIMINATOR)?;
        self.token_id.serialize(writer)?;
        writer.write_all(self.owner.as_ref())
    }
}

impl BorshSerialize for OfferEvent {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&Self::DISCRIMINATOR)?;
        self.token_id.serialize(writer)?;
        writer.write_all(self.seller.as_ref())?;
        self.min_bid_lamports.serialize(writer)
    }
}

impl BorshSerialize for TransferEvent {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&Self::DISCRIMINATOR)?;
        self.token_id.serialize(writer)?;
        writer.write_all(self.from.as_ref())?;
        writer.write_all(self.to.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Issued,
    Offer,
    Transfer,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Issued, EventKind::Offer, EventKind::Transfer];

    pub fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            EventKind::Issued => IssuedEvent::DISCRIMINATOR,
            EventKind::Offer => OfferEvent::DISCRIMINATOR,
            EventKind::Transfer => TransferEvent::DISCRIMINATOR,
        }
    }

    pub fn from_discriminator(discriminator: &[u8; DISCRIMINATOR_LEN]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminator() == *discriminator)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Issued => "issued",
            EventKind::Offer => "offer",
            EventKind::Transfer => "transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForgeEvent {
    Issued(IssuedEvent),
    Offer(OfferEvent),
    Transfer(TransferEvent),
}

impl ForgeEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ForgeEvent::Issued(_) => EventKind::Issued,
            ForgeEvent::Offer(_) => EventKind::Offer,
            ForgeEvent::Transfer(_) => EventKind::Transfer,
        }
    }

    pub fn token_id(&self) -> u16 {
        match self {
            ForgeEvent::Issued(event) => event.token_id,
            ForgeEvent::Offer(event) => event.token_id,
            ForgeEvent::Transfer(event) => event.token_id,
        }
    }
}

impl From<IssuedEvent> for ForgeEvent {
    fn from(event: IssuedEvent) -> Self {
        ForgeEvent::Issued(event)
    }
}

impl From<OfferEvent> for ForgeEvent {
    fn from(event: OfferEvent) -> Self {
        ForgeEvent::Offer(event)
    }
}

impl From<TransferEvent> for ForgeEvent {
    fn from(event: TransferEvent) -> Self {
        ForgeEvent::Transfer(event)
    }
}

impl BorshSerialize for ForgeEvent {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            ForgeEvent::Issued(event) => event.serialize(writer),
            ForgeEvent::Offer(event) => event.serialize(writer),
            ForgeEvent::Transfer(event) => event.serialize(writer),
        }
    }
}

/// Decodes `bytes` as an event of the `expected` kind. A payload tagged as
/// any other type fails with [`DecodeError::DiscriminatorMismatch`].
pub fn decode_event(expected: EventKind, bytes: &[u8]) -> Result<ForgeEvent, DecodeError> {
    match expected {
        EventKind::Issued => IssuedEvent::decode(bytes).map(Into::into),
        EventKind::Offer => OfferEvent::decode(bytes).map(Into::into),
        EventKind::Transfer => TransferEvent::decode(bytes).map(Into::into),
    }
}

/// Decodes an event of whichever registered kind its tag names.
pub fn decode_any_event(bytes: &[u8]) -> Result<ForgeEvent, DecodeError> {
    let discriminator = read_discriminator(bytes)?;
    let kind = EventKind::from_discriminator(&discriminator)
        .ok_or(DecodeError::UnknownDiscriminator(discriminator))?;
    decode_event(kind, bytes)
}
