//! Solana BIP44 derivation path
//!
//! `m/44'/501'[/account'[/change']]`, as accepted by the Ledger Solana app.

use super::bip32::{harden, ChildIndex, BIP32_HARDENED_BIT, BIP44_PURPOSE, SOLANA_COIN_TYPE};
use crate::core::errors::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fixed leading components (purpose, coin type)
pub const PREFIX_COMPONENTS: u8 = 2;

/// Largest number of components a Solana Ledger path carries
pub const MAX_COMPONENTS: u8 = 4;

/// Solana derivation path. A change index can only follow an account index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SolanaPath {
    /// `44'/501'`
    #[default]
    PurposeOnly,
    /// `44'/501'/account'`
    WithAccount(ChildIndex),
    /// `44'/501'/account'/change'`
    WithAccountAndChange(ChildIndex, ChildIndex),
}

impl SolanaPath {
    /// Build a path from optional indices.
    ///
    /// Fails with `InvalidArgument` when `change` is given without `account`,
    /// and with `OutOfRange` when either index has bit 31 set.
    pub fn new(account: Option<u32>, change: Option<u32>) -> Result<Self, PathError> {
        match (account, change) {
            (None, None) => Ok(SolanaPath::PurposeOnly),
            (Some(account), None) => {
                Ok(SolanaPath::WithAccount(ChildIndex::new("account", account)?))
            }
            (Some(account), Some(change)) => Ok(SolanaPath::WithAccountAndChange(
                ChildIndex::new("account", account)?,
                ChildIndex::new("change", change)?,
            )),
            (None, Some(change)) => Err(PathError::InvalidArgument(format!(
                "change index {} given without an account index",
                change
            ))),
        }
    }

    pub fn account(&self) -> Option<u32> {
        match self {
            SolanaPath::PurposeOnly => None,
            SolanaPath::WithAccount(account) | SolanaPath::WithAccountAndChange(account, _) => {
                Some(account.value())
            }
        }
    }

    pub fn change(&self) -> Option<u32> {
        match self {
            SolanaPath::WithAccountAndChange(_, change) => Some(change.value()),
            _ => None,
        }
    }

    /// Number of path components, 2 to 4.
    pub fn component_count(&self) -> u8 {
        match self {
            SolanaPath::PurposeOnly => PREFIX_COMPONENTS,
            SolanaPath::WithAccount(_) => PREFIX_COMPONENTS + 1,
            SolanaPath::WithAccountAndChange(..) => PREFIX_COMPONENTS + 2,
        }
    }

    /// Hardened 32-bit words in path order.
    pub fn components(&self) -> Vec<u32> {
        let mut words = Vec::with_capacity(self.component_count() as usize);
        words.push(harden(BIP44_PURPOSE));
        words.push(harden(SOLANA_COIN_TYPE));
        match self {
            SolanaPath::PurposeOnly => {}
            SolanaPath::WithAccount(account) => words.push(account.hardened()),
            SolanaPath::WithAccountAndChange(account, change) => {
                words.push(account.hardened());
                words.push(change.hardened());
            }
        }
        words
    }

    /// `m/`-prefixed form, e.g. `m/44'/501'/0'/0'`.
    pub fn to_string_with_master(&self) -> String {
        format!("m/{}", self)
    }
}

impl fmt::Display for SolanaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'/{}'", BIP44_PURPOSE, SOLANA_COIN_TYPE)?;
        match self {
            SolanaPath::PurposeOnly => Ok(()),
            SolanaPath::WithAccount(account) => write!(f, "/{}", account),
            SolanaPath::WithAccountAndChange(account, change) => {
                write!(f, "/{}/{}", account, change)
            }
        }
    }
}

/// Parse one hardened component such as `501'` or `501h`.
fn parse_hardened_component(
    part: &str,
    field: &'static str,
    path: &str,
) -> Result<u32, PathError> {
    let digits = part
        .strip_suffix('\'')
        .or_else(|| part.strip_suffix('h'))
        .ok_or_else(|| {
            PathError::MalformedInput(format!(
                "component {:?} of {:?} is not hardened",
                part, path
            ))
        })?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::MalformedInput(format!(
            "invalid {} component {:?} in {:?}",
            field, part, path
        )));
    }

    // Only overflow can fail here; the digits are already checked.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    if value >= u64::from(BIP32_HARDENED_BIT) {
        return Err(PathError::OutOfRange { field, value });
    }

    Ok(value as u32)
}

impl FromStr for SolanaPath {
    type Err = PathError;

    /// Accepts `44'/501'[/a'[/c']]`, optionally prefixed with `m/`, with `'` or `h`
    /// as the hardened marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix("m/").unwrap_or(trimmed);

        if body.is_empty() {
            return Err(PathError::MalformedInput("empty derivation path".to_string()));
        }

        let parts: Vec<&str> = body.split('/').collect();
        if parts.len() < PREFIX_COMPONENTS as usize || parts.len() > MAX_COMPONENTS as usize {
            return Err(PathError::MalformedInput(format!(
                "expected {} to {} components, found {} in {:?}",
                PREFIX_COMPONENTS,
                MAX_COMPONENTS,
                parts.len(),
                s
            )));
        }

        let purpose = parse_hardened_component(parts[0], "purpose", s)?;
        if purpose != BIP44_PURPOSE {
            return Err(PathError::MalformedInput(format!(
                "purpose must be {}', found {}'",
                BIP44_PURPOSE, purpose
            )));
        }

        let coin_type = parse_hardened_component(parts[1], "coin_type", s)?;
        if coin_type != SOLANA_COIN_TYPE {
            return Err(PathError::MalformedInput(format!(
                "coin type must be {}', found {}'",
                SOLANA_COIN_TYPE, coin_type
            )));
        }

        let account = parts
            .get(2)
            .map(|part| parse_hardened_component(part, "account", s))
            .transpose()?;
        let change = parts
            .get(3)
            .map(|part| parse_hardened_component(part, "change", s))
            .transpose()?;

        SolanaPath::new(account, change)
    }
}

impl TryFrom<String> for SolanaPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SolanaPath> for String {
    fn from(path: SolanaPath) -> Self {
        path.to_string()
    }
}
