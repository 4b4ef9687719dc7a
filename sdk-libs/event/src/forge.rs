use std::{
    fmt,
    io::{self, Write},
};

use borsh::BorshSerialize;
use solana_pubkey::Pubkey;
use uniforge_account_checks::{check_discriminator, Discriminator, DISCRIMINATOR_LEN};
use uniforge_byte_cursor::{trim_padding, ByteCursor};

use crate::{error::DecodeError, LAMPORTS_PER_SOL};

pub const NAME_LEN: usize = 64;
pub const SYMBOL_LEN: usize = 16;
pub const CONTENT_HASH_LEN: usize = 32;
pub const PUBKEY_LEN: usize = 32;

/// Length of the fixed-width prefix of a Forge account. Bytes past this
/// offset are preserved verbatim in [`ForgeAccount::remainder`].
pub const FORGE_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN
    + NAME_LEN
    + SYMBOL_LEN
    + CONTENT_HASH_LEN
    + PUBKEY_LEN
    + 2
    + 2
    + PUBKEY_LEN
    + 8
    + 8;

/// State of a Forge, the issuing account of a collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ForgeAccount {
    #[serde(skip)]
    pub discriminator: [u8; DISCRIMINATOR_LEN],
    pub name: String,
    pub symbol: String,
    #[serde(serialize_with = "crate::serde_helpers::hex32")]
    pub content_hash: [u8; CONTENT_HASH_LEN],
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub authority: Pubkey,
    pub max_supply: u16,
    pub supply_unclaimed: u16,
    #[serde(serialize_with = "crate::serde_helpers::base58")]
    pub artist: Pubkey,
    pub min_fee_lamports: u64,
    pub secondary_fee_bps: u64,
    /// Fields appended by newer program versions.
    #[serde(skip)]
    pub remainder: Vec<u8>,
}

impl Discriminator for ForgeAccount {
    const DISCRIMINATOR: [u8; 8] = [39, 59, 16, 21, 112, 184, 224, 183];
    const NAMESPACE: &'static str = "account";
    const PROGRAM_NAME: &'static str = "Forge";
}

/// Decodes Forge account data as returned by `getAccountInfo`.
pub fn decode_account(bytes: &[u8]) -> Result<ForgeAccount, DecodeError> {
    ForgeAccount::decode(bytes)
}

impl ForgeAccount {
    /// Fields are read strictly in layout order. The whole fixed-width prefix
    /// is read before the tag and the text fields are checked, so any buffer
    /// shorter than [`FORGE_ACCOUNT_LEN`] fails as truncated regardless of
    /// its content.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        let discriminator = cursor.take_array()?;
        let name_offset = cursor.offset();
        let raw_name = cursor.take(NAME_LEN)?;
        let symbol_offset = cursor.offset();
        let raw_symbol = cursor.take(SYMBOL_LEN)?;
        let content_hash = cursor.take_array()?;
        let authority = Pubkey::new_from_array(cursor.take_array()?);
        let max_supply = cursor.take_u16_le()?;
        let supply_unclaimed = cursor.take_u16_le()?;
        let artist = Pubkey::new_from_array(cursor.take_array()?);
        let min_fee_lamports = cursor.take_u64_le()?;
        let secondary_fee_bps = cursor.take_u64_le()?;
        let remainder = cursor.take_rest().to_vec();

        check_discriminator::<Self>(bytes)?;
        let name = text_field(raw_name, name_offset)?;
        let symbol = text_field(raw_symbol, symbol_offset)?;
        if supply_unclaimed > max_supply {
            return Err(DecodeError::InvalidSupply {
                max_supply,
                supply_unclaimed,
            });
        }

        Ok(Self {
            discriminator,
            name,
            symbol,
            content_hash,
            authority,
            max_supply,
            supply_unclaimed,
            artist,
            min_fee_lamports,
            secondary_fee_bps,
            remainder,
        })
    }

    /// Number of tokens issued so far.
    pub fn claimed_count(&self) -> u16 {
        // supply_unclaimed <= max_supply is enforced by `decode`.
        self.max_supply.saturating_sub(self.supply_unclaimed)
    }

    /// 1-based ids of the tokens issued after `previous_claimed` tokens had
    /// been seen. Empty if nothing new was issued.
    pub fn newly_issued(&self, previous_claimed: u16) -> impl Iterator<Item = u16> {
        (u32::from(previous_claimed) + 1..=u32::from(self.claimed_count())).map(|id| id as u16)
    }

    pub fn is_sold_out(&self) -> bool {
        self.supply_unclaimed == 0
    }

    /// Minimum issuing fee in SOL.
    pub fn min_fee_sol(&self) -> f64 {
        self.min_fee_lamports as f64 / LAMPORTS_PER_SOL as f64
    }

    pub fn content_hash_hex(&self) -> String {
        hex::encode(self.content_hash)
    }
}

fn text_field(raw: &[u8], offset: usize) -> Result<String, DecodeError> {
    core::str::from_utf8(raw)
        .map(|text| trim_padding(text).to_string())
        .map_err(|source| DecodeError::MalformedTextField { offset, source })
}

impl fmt::Display for ForgeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - Max supply: {}, Supply unclaimed: {}",
            self.name, self.symbol, self.max_supply, self.supply_unclaimed
        )
    }
}

impl BorshSerialize for ForgeAccount {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.discriminator)?;
        write_padded(writer, &self.name, NAME_LEN)?;
        write_padded(writer, &self.symbol, SYMBOL_LEN)?;
        writer.write_all(&self.content_hash)?;
        writer.write_all(self.authority.as_ref())?;
        self.max_supply.serialize(writer)?;
        self.supply_unclaimed.serialize(writer)?;
        writer.write_all(self.artist.as_ref())?;
        self.min_fee_lamports.serialize(writer)?;
        self.secondary_fee_bps.serialize(writer)?;
        writer.write_all(&self.remainder)
    }
}

/// Writes `text` into a fixed-width field, zero padded on the right.
fn write_padded<W: Write>(writer: &mut W, text: &str, width: usize) -> io::Result<()> {
    let bytes = text.as_bytes();
    if bytes.len() > width {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("text of {} bytes does not fit a {width} byte field", bytes.len()),
        ));
    }
    writer.write_all(bytes)?;
    writer.write_all(&vec![0u8; width - bytes.len()])
}
