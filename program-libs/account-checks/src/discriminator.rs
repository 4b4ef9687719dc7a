pub const DISCRIMINATOR_LEN: usize = 8;

/// Leading 8-byte type tag of a program account or event payload.
///
/// Values follow the Anchor convention: the first 8 bytes of
/// `sha256("<namespace>:<Name>")`, where the namespace is `account` for
/// account state and `event` for emitted events.
pub trait Discriminator {
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN];
    /// Namespace of the preimage, `account` or `event`.
    const NAMESPACE: &'static str;
    /// Type name as declared by the on-chain program.
    const PROGRAM_NAME: &'static str;

    fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        Self::DISCRIMINATOR
    }
}

/// Returns the hash preimage the discriminator of `T` is derived from.
pub fn anchor_preimage<T: Discriminator>() -> String {
    format!("{}:{}", T::NAMESPACE, T::PROGRAM_NAME)
}
