pub mod config;
pub mod errors;

pub use config::{DecodeConfig, PathConfig};
pub use errors::PathError;
