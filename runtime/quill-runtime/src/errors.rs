///
/// Runtime setup error types.
///
/// Errors raised while configuring the runtime, before any generated code
/// runs. Value-level failures use `PropertyLookupError` from the core crate.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid log level '{value}': expected one of trace, debug, info, warn, error")]
    InvalidLogLevel { value: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
