use thiserror::Error;

/// Error type for derivation path encoding, decoding and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The caller combined arguments in a way the path layout cannot express.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An index would collide with the hardened bit.
    #[error("Index out of range: {field} = {value} (must be below 2^31)")]
    OutOfRange {
        /// Which path component was rejected.
        field: &'static str,
        /// The rejected value, saturated at `u64::MAX` for longer digit strings.
        value: u64,
    },
    /// A binary or string path does not follow the expected layout.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PathError {
    /// Whether the error was caused by caller-supplied path data rather than
    /// by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PathError::InvalidArgument(_)
                | PathError::OutOfRange { .. }
                | PathError::MalformedInput(_)
        )
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for PathError {
    fn from(err: toml::de::Error) -> Self {
        PathError::ConfigError(err.to_string())
    }
}
