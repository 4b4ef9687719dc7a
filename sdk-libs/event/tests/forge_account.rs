use borsh::BorshSerialize;
use rand::{thread_rng, Rng};
use uniforge_account_checks::Discriminator;
use uniforge_event::{decode_account, DecodeError, ForgeAccount, Pubkey, FORGE_ACCOUNT_LEN};

fn raw_forge(max_supply: u16, supply_unclaimed: u16) -> Vec<u8> {
    let mut bytes = ForgeAccount::DISCRIMINATOR.to_vec();
    let mut name = [0u8; 64];
    name[..11].copy_from_slice(b"Uniforge #1");
    bytes.extend_from_slice(&name);
    let mut symbol = [b' '; 16];
    symbol[..3].copy_from_slice(b"UNI");
    bytes.extend_from_slice(&symbol);
    bytes.extend_from_slice(&[0x11; 32]);
    bytes.extend_from_slice(&[0x22; 32]);
    bytes.extend_from_slice(&max_supply.to_le_bytes());
    bytes.extend_from_slice(&supply_unclaimed.to_le_bytes());
    bytes.extend_from_slice(&[0x33; 32]);
    bytes.extend_from_slice(&50_000_000u64.to_le_bytes());
    bytes.extend_from_slice(&250u64.to_le_bytes());
    bytes
}

#[test]
fn test_decode_forge_account() {
    let bytes = raw_forge(100, 97);
    assert_eq!(bytes.len(), FORGE_ACCOUNT_LEN);

    let forge = decode_account(&bytes).unwrap();
    assert_eq!(forge.discriminator, ForgeAccount::DISCRIMINATOR);
    assert_eq!(forge.name, "Uniforge #1");
    assert_eq!(forge.symbol, "UNI");
    assert_eq!(forge.content_hash, [0x11; 32]);
    assert_eq!(forge.authority, Pubkey::new_from_array([0x22; 32]));
    assert_eq!(forge.max_supply, 100);
    assert_eq!(forge.supply_unclaimed, 97);
    assert_eq!(forge.artist, Pubkey::new_from_array([0x33; 32]));
    assert_eq!(forge.min_fee_lamports, 50_000_000);
    assert_eq!(forge.secondary_fee_bps, 250);
    assert!(forge.remainder.is_empty());
    assert_eq!(forge.claimed_count(), 3);
    assert_eq!(forge.content_hash_hex(), "11".repeat(32));
}

#[test]
fn test_trailing_bytes_are_preserved() {
    let mut bytes = raw_forge(10, 10);
    bytes.extend_from_slice(&[9, 8, 7]);
    let forge = decode_account(&bytes).unwrap();
    assert_eq!(forge.remainder, vec![9, 8, 7]);

    // The symbol was space padded; re-encoding pads with zeros.
    let mut normalized = bytes.clone();
    normalized[75..88].fill(0);
    assert_eq!(forge.try_to_vec().unwrap(), normalized);
}

#[test]
fn test_short_buffers_are_truncated() {
    let bytes = raw_forge(100, 97);
    for len in [0, 1, 7, 8, 71, 120, 165, 166, FORGE_ACCOUNT_LEN - 1] {
        match decode_account(&bytes[..len]) {
            Err(DecodeError::TruncatedBuffer { requested, .. }) => assert!(requested > 0),
            other => panic!("expected truncated buffer for len {len}, got {other:?}"),
        }
    }
    // Garbage shorter than the prefix is reported as truncated, not mismatched.
    assert!(matches!(
        decode_account(&[0xff; 100]),
        Err(DecodeError::TruncatedBuffer { .. })
    ));
}

#[test]
fn test_short_buffer_with_invalid_text_is_truncated() {
    assert!(matches!(
        decode_account(&[0xff; 72]),
        Err(DecodeError::TruncatedBuffer { .. })
    ));

    let mut bytes = raw_forge(100, 97);
    bytes[8] = 0xc3;
    bytes[9] = 0x28;
    bytes[72] = 0xff;
    for len in [72, 88, FORGE_ACCOUNT_LEN - 1] {
        assert!(
            matches!(
                decode_account(&bytes[..len]),
                Err(DecodeError::TruncatedBuffer { .. })
            ),
            "len {len}"
        );
    }
}

#[test]
fn test_wrong_discriminator() {
    let mut bytes = raw_forge(100, 97);
    bytes[0] ^= 0xff;
    match decode_account(&bytes) {
        Err(DecodeError::DiscriminatorMismatch { expected, actual }) => {
            assert_eq!(expected, ForgeAccount::DISCRIMINATOR);
            assert_eq!(actual, bytes[..8]);
        }
        other => panic!("expected discriminator mismatch, got {other:?}"),
    }
}

#[test]
fn test_supply_unclaimed_above_max_supply() {
    let bytes = raw_forge(3, 4);
    assert_eq!(
        decode_account(&bytes),
        Err(DecodeError::InvalidSupply {
            max_supply: 3,
            supply_unclaimed: 4,
        })
    );
}

#[test]
fn test_malformed_name() {
    let mut bytes = raw_forge(1, 1);
    bytes[8] = 0xc3;
    bytes[9] = 0x28;
    assert!(matches!(
        decode_account(&bytes),
        Err(DecodeError::MalformedTextField { offset: 8, .. })
    ));
}

#[test]
fn test_random_forge_roundtrip() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let max_supply: u16 = rng.gen();
        let name_len = rng.gen_range(0..=64);
        let forge = ForgeAccount {
            discriminator: ForgeAccount::DISCRIMINATOR,
            name: (0..name_len).map(|_| rng.gen_range('a'..='z')).collect(),
            symbol: "RND".to_string(),
            content_hash: rng.gen(),
            authority: Pubkey::new_from_array(rng.gen()),
            max_supply,
            supply_unclaimed: rng.gen_range(0..=max_supply),
            artist: Pubkey::new_from_array(rng.gen()),
            min_fee_lamports: rng.gen(),
            secondary_fee_bps: rng.gen_range(0..10_000),
            remainder: (0..rng.gen_range(0..16)).map(|_| rng.gen()).collect(),
        };
        let bytes = forge.try_to_vec().unwrap();
        assert_eq!(bytes.len(), FORGE_ACCOUNT_LEN + forge.remainder.len());
        assert_eq!(decode_account(&bytes).unwrap(), forge);
    }
}

#[test]
fn test_json_rendering() {
    let forge = decode_account(&raw_forge(100, 97)).unwrap();
    let json = serde_json::to_value(&forge).unwrap();
    assert_eq!(json["name"], "Uniforge #1");
    assert_eq!(json["max_supply"], 100);
    assert_eq!(
        json["artist"],
        Pubkey::new_from_array([0x33; 32]).to_string()
    );
    assert_eq!(json["content_hash"], "11".repeat(32));
    assert!(json.get("remainder").is_none());
}
