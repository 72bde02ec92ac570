///
/// quill Runtime Library
///
/// Provides everything code emitted by the quill compiler calls into.
/// Generated programs link this crate and call `init` once at startup.
///
/// Contains:
/// - The value model (Value, Nil, Keyword, ObjectLiteral, Record, dot)
///   re-exported from quill-std-core
/// - Runtime configuration (RuntimeConfig)
/// - Diagnostics setup through tracing-subscriber
///

mod config;
mod errors;

pub use config::RuntimeConfig;
pub use errors::RuntimeError;
pub use quill_std_core::*;

/// Initialize the runtime (call once at program start).
///
/// Installs a stderr log subscriber unless one is already installed, then
/// interns the configured keywords. Returns the preloaded keywords in
/// configuration order.
pub fn init(config: &RuntimeConfig) -> Result<Vec<Keyword>, RuntimeError> {
    let level = config.level()?;
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(config.log_ansi)
        .with_max_level(level)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed, keeping it");
    }

    let keywords: Vec<Keyword> = config
        .preload_keywords
        .iter()
        .map(|name| Keyword::for_name(name))
        .collect();
    tracing::info!(
        preloaded = keywords.len(),
        registered = keyword_count(),
        "quill runtime initialized"
    );
    Ok(keywords)
}
