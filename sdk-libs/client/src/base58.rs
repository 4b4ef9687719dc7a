use serde::{de::Error as _, Deserialize, Deserializer};
use solana_pubkey::Pubkey;

use crate::rpc::errors::ClientError;

pub fn decode_base58_to_fixed_array<const N: usize>(input: &str) -> Result<[u8; N], ClientError> {
    let mut buffer = [0u8; N];
    let decoded_len = bs58::decode(input)
        .onto(&mut buffer)
        .map_err(|_| ClientError::InvalidResponseData(format!("invalid base58 `{input}`")))?;

    if decoded_len != N {
        return Err(ClientError::InvalidResponseData(format!(
            "`{input}` decodes to {decoded_len} bytes, expected {N}"
        )));
    }

    Ok(buffer)
}

pub fn decode_base58_to_pubkey(input: &str) -> Result<Pubkey, ClientError> {
    decode_base58_to_fixed_array(input).map(Pubkey::new_from_array)
}

pub(crate) fn deserialize_pubkey<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Pubkey, D::Error> {
    let value = String::deserialize(deserializer)?;
    decode_base58_to_pubkey(&value).map_err(D::Error::custom)
}

pub(crate) fn deserialize_account_keys<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Pubkey>, D::Error> {
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|key| decode_base58_to_pubkey(key).map_err(D::Error::custom))
        .collect()
}
