//! Ledger Solana derivation path wire format
//!
//! ```text
//! offset  size  field
//! 0       1     component count N (2, 3 or 4)
//! 1       4     purpose     BE  hardened(44)
//! 5       4     coin type   BE  hardened(501)
//! 9       4     account     BE  hardened(account)   N >= 3
//! 13      4     change      BE  hardened(change)    N == 4
//! ```

use super::bip32::{harden, is_hardened, ChildIndex, BIP44_PURPOSE, SOLANA_COIN_TYPE};
use super::path::{SolanaPath, MAX_COMPONENTS, PREFIX_COMPONENTS};
use crate::core::config::DecodeConfig;
use crate::core::errors::PathError;
use tracing::{debug, warn};

/// Size of one encoded path component
pub const COMPONENT_SIZE: usize = 4;

pub const COUNT_OFFSET: usize = 0;
pub const PURPOSE_OFFSET: usize = COUNT_OFFSET + 1;
pub const COIN_TYPE_OFFSET: usize = PURPOSE_OFFSET + COMPONENT_SIZE;
pub const ACCOUNT_OFFSET: usize = COIN_TYPE_OFFSET + COMPONENT_SIZE;
pub const CHANGE_OFFSET: usize = ACCOUNT_OFFSET + COMPONENT_SIZE;

/// Encoded size of the longest path
pub const MAX_ENCODED_LEN: usize = encoded_len_for(MAX_COMPONENTS);

/// `1 + 4 * count`
pub const fn encoded_len_for(count: u8) -> usize {
    PURPOSE_OFFSET + count as usize * COMPONENT_SIZE
}

fn read_u32_be(buffer: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; COMPONENT_SIZE];
    word.copy_from_slice(&buffer[offset..offset + COMPONENT_SIZE]);
    u32::from_be_bytes(word)
}

impl SolanaPath {
    /// Encoded size in bytes: 9, 13 or 17.
    pub fn encoded_len(&self) -> usize {
        encoded_len_for(self.component_count())
    }

    /// Serialize into the Ledger wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let count = self.component_count();
        let mut bytes = Vec::with_capacity(encoded_len_for(count));
        bytes.push(count);

        for word in self.components() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }

        debug!(count, len = bytes.len(), "encoded derivation path");
        bytes
    }

    /// Parse the Ledger wire format with default (strict) checks.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, PathError> {
        Self::from_bytes_with(buffer, &DecodeConfig::default())
    }

    /// Parse the Ledger wire format.
    ///
    /// The count byte and buffer length are always validated. Bytes after the
    /// last component are ignored.
    pub fn from_bytes_with(buffer: &[u8], config: &DecodeConfig) -> Result<Self, PathError> {
        let count = *buffer
            .get(COUNT_OFFSET)
            .ok_or_else(|| PathError::MalformedInput("empty derivation path buffer".to_string()))?;

        if !(PREFIX_COMPONENTS..=MAX_COMPONENTS).contains(&count) {
            return Err(PathError::MalformedInput(format!(
                "component count must be between {} and {}, found {}",
                PREFIX_COMPONENTS, MAX_COMPONENTS, count
            )));
        }

        let required = encoded_len_for(count);
        if buffer.len() < required {
            return Err(PathError::MalformedInput(format!(
                "buffer holds {} bytes, {} components need {}",
                buffer.len(),
                count,
                required
            )));
        }

        let purpose = read_u32_be(buffer, PURPOSE_OFFSET);
        let coin_type = read_u32_be(buffer, COIN_TYPE_OFFSET);
        if purpose != harden(BIP44_PURPOSE) || coin_type != harden(SOLANA_COIN_TYPE) {
            if config.verify_prefix {
                return Err(PathError::MalformedInput(format!(
                    "expected prefix {:08X}/{:08X}, found {:08X}/{:08X}",
                    harden(BIP44_PURPOSE),
                    harden(SOLANA_COIN_TYPE),
                    purpose,
                    coin_type
                )));
            }
            warn!(purpose, coin_type, "ignoring non-Solana derivation path prefix");
        }

        let read_index = |field: &'static str, offset: usize| -> Result<ChildIndex, PathError> {
            let word = read_u32_be(buffer, offset);
            if !is_hardened(word) {
                if config.require_hardened {
                    return Err(PathError::MalformedInput(format!(
                        "{} component {:08X} is not hardened",
                        field, word
                    )));
                }
                warn!(field, word, "treating unhardened component as hardened");
            }
            Ok(ChildIndex::from_hardened(word))
        };

        let path = match count {
            2 => SolanaPath::PurposeOnly,
            3 => SolanaPath::WithAccount(read_index("account", ACCOUNT_OFFSET)?),
            _ => SolanaPath::WithAccountAndChange(
                read_index("account", ACCOUNT_OFFSET)?,
                read_index("change", CHANGE_OFFSET)?,
            ),
        };

        if buffer.len() > required {
            let extra = buffer.len() - required;
            debug!(extra, "ignoring trailing bytes after derivation path");
        }
        debug!(count, "decoded derivation path");

        Ok(path)
    }
}

impl From<SolanaPath> for Vec<u8> {
    fn from(path: SolanaPath) -> Self {
        path.to_bytes()
    }
}

impl TryFrom<&[u8]> for SolanaPath {
    type Error = PathError;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(buffer)
    }
}

/// Encode an optional account and change index into the Ledger wire format.
pub fn encode(account: Option<u32>, change: Option<u32>) -> Result<Vec<u8>, PathError> {
    Ok(SolanaPath::new(account, change)?.to_bytes())
}

/// Decode a Ledger wire format path into its string form, e.g. `44'/501'/0'/0'`.
pub fn decode(buffer: &[u8]) -> Result<String, PathError> {
    Ok(SolanaPath::from_bytes(buffer)?.to_string())
}

/// Like [`decode`] with explicit decoder checks.
pub fn decode_with(buffer: &[u8], config: &DecodeConfig) -> Result<String, PathError> {
    Ok(SolanaPath::from_bytes_with(buffer, config)?.to_string())
}
