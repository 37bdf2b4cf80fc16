//! Lifecycle events shared by every loopview command.

use tracing::{error, info};

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

pub fn log_app_shutdown(command: &str, success: bool) {
    info!(
        event = "core.app.shutdown_started",
        command = command,
        success = success
    );
}

pub fn log_app_error(command: &str, error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        command = command,
        error = %error
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_events_do_not_panic() {
        log_app_startup("scan");
        log_app_shutdown("scan", false);
        log_app_error("scan", &std::io::Error::other("broken pipe"));
    }
}
