//! BIP32 hardened index helpers
//!
//! Every component of a Solana Ledger path is hardened, so the same mask is
//! applied when writing and stripped when reading.

use crate::core::errors::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BIP32 hardened derivation flag (bit 31)
pub const BIP32_HARDENED_BIT: u32 = 0x8000_0000;

/// BIP44 purpose value
pub const BIP44_PURPOSE: u32 = 44;

/// Solana's registered BIP44 coin type
pub const SOLANA_COIN_TYPE: u32 = 501;

/// Set the hardened bit.
pub const fn harden(index: u32) -> u32 {
    index | BIP32_HARDENED_BIT
}

/// Clear the hardened bit.
pub const fn unharden(value: u32) -> u32 {
    value & !BIP32_HARDENED_BIT
}

pub const fn is_hardened(value: u32) -> bool {
    value & BIP32_HARDENED_BIT != 0
}

/// A child index in `0..2^31`, i.e. one that survives hardening unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct ChildIndex(u32);

impl ChildIndex {
    /// Largest index that can be hardened without losing information.
    pub const MAX: ChildIndex = ChildIndex(BIP32_HARDENED_BIT - 1);

    /// Validate `value` as the path component named `field`.
    pub fn new(field: &'static str, value: u32) -> Result<Self, PathError> {
        if is_hardened(value) {
            return Err(PathError::OutOfRange { field, value: value.into() });
        }
        Ok(Self(value))
    }

    /// Recover the index from a wire word, ignoring bit 31.
    pub const fn from_hardened(value: u32) -> Self {
        Self(unharden(value))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// The hardened wire word.
    pub const fn hardened(self) -> u32 {
        harden(self.0)
    }
}

impl TryFrom<u32> for ChildIndex {
    type Error = PathError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new("index", value)
    }
}

impl From<ChildIndex> for u32 {
    fn from(index: ChildIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}
