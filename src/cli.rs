use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{DecodeConfig, PathConfig};
use crate::core::errors::PathError;
use crate::hardware::ledger::SolanaPath;

/// Ledger Solana derivation path tool (library-facing definitions)
#[derive(Debug, Parser)]
#[command(
    name = "ledger-path",
    about = "Encode and decode Ledger Solana derivation paths",
    version
)]
pub struct Cli {
    /// TOML configuration file (overrides LEDGER_PATH_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode account/change indices into the device byte format (hex)
    Encode {
        #[arg(long)]
        account: Option<u32>,
        /// Requires --account
        #[arg(long)]
        change: Option<u32>,
    },
    /// Decode a hex derivation path buffer into its string form
    Decode {
        hex: String,
        /// Skip the purpose/coin type and hardened bit checks
        #[arg(long)]
        lenient: bool,
    },
    /// Parse a string path such as m/44'/501'/0'/0' and print its hex encoding
    Parse { path: String },
}

impl Commands {
    /// Run the command and return what should be printed.
    pub fn execute(&self, config: &PathConfig) -> Result<String, PathError> {
        match self {
            Commands::Encode { account, change } => {
                let path = SolanaPath::new(*account, *change)?;
                Ok(hex::encode(path.to_bytes()))
            }
            Commands::Decode { hex: input, lenient } => {
                let bytes = hex::decode(strip_hex_prefix(input.trim()))
                    .map_err(|e| PathError::MalformedInput(format!("invalid hex: {}", e)))?;
                let decode_config = if *lenient { DecodeConfig::lenient() } else { config.decode };
                let path = SolanaPath::from_bytes_with(&bytes, &decode_config)?;
                Ok(render(&path, config))
            }
            Commands::Parse { path } => {
                let path: SolanaPath = path.parse()?;
                Ok(hex::encode(path.to_bytes()))
            }
        }
    }
}

/// Drop a single `0x`/`0X` prefix.
fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn render(path: &SolanaPath, config: &PathConfig) -> String {
    if config.display.master_prefix {
        path.to_string_with_master()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, PathError> {
        let cli = Cli::try_parse_from(args).unwrap();
        cli.command.execute(&PathConfig::default())
    }

    #[test]
    fn test_encode_command() {
        assert_eq!(run(&["ledger-path", "encode"]).unwrap(), "028000002c800001f5");
        assert_eq!(
            run(&["ledger-path", "encode", "--account", "12", "--change", "0"]).unwrap(),
            "048000002c800001f58000000c80000000"
        );
    }

    #[test]
    fn test_encode_change_without_account() {
        let result = run(&["ledger-path", "encode", "--change", "1"]);
        assert!(matches!(result, Err(PathError::InvalidArgument(_))));
    }

    #[test]
    fn test_decode_command() {
        assert_eq!(
            run(&["ledger-path", "decode", "038000002c800001f580000000"]).unwrap(),
            "44'/501'/0'"
        );
        assert_eq!(
            run(&["ledger-path", "decode", "0x028000002c800001f5"]).unwrap(),
            "44'/501'"
        );
    }

    #[test]
    fn test_decode_hex_prefix_stripped_once() {
        let result = run(&["ledger-path", "decode", "0x0x028000002c800001f5"]);
        assert!(matches!(result, Err(PathError::MalformedInput(_))));

        assert_eq!(
            run(&["ledger-path", "decode", "0X028000002c800001f5"]).unwrap(),
            "44'/501'"
        );
    }

    #[test]
    fn test_decode_invalid_hex() {
        let result = run(&["ledger-path", "decode", "zz"]);
        assert!(matches!(result, Err(PathError::MalformedInput(_))));
    }

    #[test]
    fn test_decode_lenient_flag() {
        // m/44'/60'
        let args = ["ledger-path", "decode", "028000002c8000003c"];
        assert!(run(&args).is_err());

        let lenient = ["ledger-path", "decode", "028000002c8000003c", "--lenient"];
        assert_eq!(run(&lenient).unwrap(), "44'/501'");
    }

    #[test]
    fn test_decode_master_prefix() {
        let cli = Cli::try_parse_from(["ledger-path", "decode", "028000002c800001f5"]).unwrap();
        let mut config = PathConfig::default();
        config.display.master_prefix = true;
        assert_eq!(cli.command.execute(&config).unwrap(), "m/44'/501'");
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            run(&["ledger-path", "parse", "m/44'/501'/0'"]).unwrap(),
            "038000002c800001f580000000"
        );
    }

    #[test]
    fn test_global_config_flag() {
        let args = ["ledger-path", "parse", "44'/501'", "--config", "paths.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("paths.toml")));
    }
}
