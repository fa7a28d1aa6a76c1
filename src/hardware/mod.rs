//! Hardware wallet integration
//!
//! Only the payload formats live here; device transport is handled by the
//! caller.

pub mod ledger;

pub use ledger::{decode, encode, SolanaPath};
