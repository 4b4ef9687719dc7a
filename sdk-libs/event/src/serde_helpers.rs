use serde::Serializer;
use solana_pubkey::Pubkey;

pub(crate) fn base58<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(pubkey)
}

pub(crate) fn hex32<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
