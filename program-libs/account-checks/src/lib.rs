pub mod checks;
pub mod discriminator;
pub mod error;

pub use checks::{check_discriminator, check_owner, read_discriminator};
pub use discriminator::{anchor_preimage, Discriminator, DISCRIMINATOR_LEN};
pub use error::AccountError;
