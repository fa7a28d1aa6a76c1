//! Ledger Solana app derivation paths
//!
//! Builds and parses the length-prefixed BIP32 path the Solana app expects
//! in its public key and signing requests:
//! - hardened index helpers
//! - the `SolanaPath` value type and its string form
//! - the binary wire codec

pub mod bip32;
pub mod codec;
pub mod path;

pub use bip32::{ChildIndex, BIP32_HARDENED_BIT, BIP44_PURPOSE, SOLANA_COIN_TYPE};
pub use codec::{decode, decode_with, encode};
pub use path::SolanaPath;
