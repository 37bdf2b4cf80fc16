//! Local preview URL detection.
//!
//! [`normalize`] recognizes loopback dev-server addresses, [`watcher`] turns a
//! stream of detections into change notifications, and [`scan`] extracts
//! candidates from raw terminal output.

pub mod normalize;
pub mod scan;
pub mod watcher;

pub use normalize::{is_localhost_url, normalize_localhost_url};
pub use scan::{candidate_tokens, find_localhost_urls, strip_ansi};
pub use watcher::{PreviewWatcher, PreviewWatcherConfig};
