//! loopview-core: local dev-server preview URL detection
//!
//! This library recognizes loopback dev-server addresses in agent terminal
//! output and tracks which one a preview surface should show. It is used by
//! the `loopview` CLI.
//!
//! # Main Entry Points
//!
//! - [`preview`] - Normalize addresses, watch clicks, scan output
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod preview;

// Re-export commonly used types at crate root for convenience
pub use config::LoopviewConfig;
pub use errors::{ConfigError, LoopviewError, LoopviewResult};
pub use preview::{
    PreviewWatcher, PreviewWatcherConfig, find_localhost_urls, is_localhost_url,
    normalize_localhost_url,
};

// Re-export logging initialization
pub use logging::init_logging;
