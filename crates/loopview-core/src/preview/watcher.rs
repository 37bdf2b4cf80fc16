//! Click-to-open state machine for local preview URLs.
//!
//! A [`PreviewWatcher`] receives candidate strings (clicked links, tokens from
//! terminal output), normalizes them and notifies its owner only when the
//! canonical URL actually changes. Each watcher owns its last-seen URL; separate
//! preview surfaces use separate watchers.

use tracing::{debug, info};

use super::normalize::normalize_localhost_url;
use super::scan::candidate_tokens;

/// Callback receiving a newly observed canonical URL.
pub type UrlCallback = Box<dyn FnMut(&str)>;

/// Callback fired on every recognized candidate, changed or not.
pub type OpenPanelCallback = Box<dyn FnMut()>;

/// Getter for the URL the preview surface currently displays.
pub type CurrentUrlGetter = Box<dyn Fn() -> Option<String>>;

/// Construction-time configuration for a [`PreviewWatcher`].
pub struct PreviewWatcherConfig {
    /// When false, every click is ignored.
    pub intercept_clicks: bool,
    /// Invoked with the canonical URL when it differs from both the last-seen
    /// URL and the current URL reported by `get_current_url`.
    pub on_url: UrlCallback,
    /// Invoked after every successfully normalized click.
    pub on_open_preview_panel: Option<OpenPanelCallback>,
    /// External view of the URL being shown, consulted alongside the
    /// watcher's own last-seen URL.
    pub get_current_url: Option<CurrentUrlGetter>,
}

impl PreviewWatcherConfig {
    /// Config with interception enabled and no optional callbacks.
    pub fn new(on_url: impl FnMut(&str) + 'static) -> Self {
        Self {
            intercept_clicks: true,
            on_url: Box::new(on_url),
            on_open_preview_panel: None,
            get_current_url: None,
        }
    }

    pub fn with_intercept_clicks(mut self, intercept_clicks: bool) -> Self {
        self.intercept_clicks = intercept_clicks;
        self
    }

    pub fn with_open_preview_panel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open_preview_panel = Some(Box::new(callback));
        self
    }

    pub fn with_current_url(mut self, getter: impl Fn() -> Option<String> + 'static) -> Self {
        self.get_current_url = Some(Box::new(getter));
        self
    }
}

impl std::fmt::Debug for PreviewWatcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewWatcherConfig")
            .field("intercept_clicks", &self.intercept_clicks)
            .field("on_open_preview_panel", &self.on_open_preview_panel.is_some())
            .field("get_current_url", &self.get_current_url.is_some())
            .finish_non_exhaustive()
    }
}

/// Deduplicates detections of local preview URLs.
///
/// The only state carried between calls is the last canonical URL passed to
/// `on_url`. It is never cleared; a fresh watcher starts empty.
#[derive(Debug)]
pub struct PreviewWatcher {
    config: PreviewWatcherConfig,
    last_url: Option<String>,
}

impl PreviewWatcher {
    pub fn new(config: PreviewWatcherConfig) -> Self {
        Self {
            config,
            last_url: None,
        }
    }

    /// The last canonical URL reported through `on_url`, if any.
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    pub fn intercepts_clicks(&self) -> bool {
        self.config.intercept_clicks
    }

    /// Process one candidate string.
    ///
    /// Returns `true` when the candidate was recognized as a local address.
    /// `on_url` fires only when the canonical URL differs from the last-seen
    /// URL and from the current URL getter; the open-panel callback fires on
    /// every recognized candidate.
    pub fn handle_click(&mut self, candidate: &str) -> bool {
        if !self.config.intercept_clicks {
            debug!(
                event = "core.preview.click_ignored",
                reason = "interception_disabled"
            );
            return false;
        }

        if candidate.is_empty() {
            return false;
        }

        let Some(url) = normalize_localhost_url(candidate) else {
            debug!(
                event = "core.preview.click_ignored",
                reason = "not_local",
                candidate = candidate
            );
            return false;
        };

        let is_last = self.last_url.as_deref() == Some(url.as_str());
        let is_current = self
            .config
            .get_current_url
            .as_ref()
            .and_then(|get| get())
            .is_some_and(|current| current == url);

        if !is_last && !is_current {
            info!(
                event = "core.preview.url_changed",
                url = %url,
                previous = self.last_url.as_deref().unwrap_or("")
            );
            (self.config.on_url)(&url);
            self.last_url = Some(url);
        } else {
            debug!(event = "core.preview.url_unchanged", url = %url);
        }

        if let Some(open_panel) = self.config.on_open_preview_panel.as_mut() {
            open_panel();
        }

        true
    }

    /// Feed every candidate token of a line of output through
    /// [`handle_click`](Self::handle_click). Returns how many were handled.
    pub fn handle_line(&mut self, line: &str) -> usize {
        candidate_tokens(line)
            .filter(|token| self.handle_click(token))
            .count()
    }
}
