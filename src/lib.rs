// src/lib.rs
//! Ledger Solana BIP44 derivation paths: the `44'/501'[/account'[/change']]`
//! string form and the length-prefixed big-endian buffer the device expects.

pub mod cli;
pub mod core;
pub mod hardware;

pub use crate::core::{DecodeConfig, PathConfig, PathError};
pub use crate::hardware::ledger::{
    decode, decode_with, encode, ChildIndex, SolanaPath, BIP32_HARDENED_BIT,
};
