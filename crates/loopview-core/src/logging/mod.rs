use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target prefix shared by `loopview` and `loopview_core`.
const LOG_TARGET: &str = "loopview";

/// Filter directive applied on top of `RUST_LOG`.
///
/// Quiet mode keeps stderr to errors so `watch` output can be piped while
/// URL changes and ignored clicks stay silent.
pub fn log_directive(quiet: bool) -> String {
    let level = if quiet { "error" } else { "info" };
    format!("{}={}", LOG_TARGET, level)
}

/// Initialize JSON logging on stderr so stdout only carries URLs.
///
/// `quiet` limits output to errors; otherwise info and above are emitted.
/// `RUST_LOG` directives are honored on top of that.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_levels() {
        assert_eq!(log_directive(true), "loopview=error");
        assert_eq!(log_directive(false), "loopview=info");
    }

    #[test]
    fn test_log_directive_parses() {
        // init_logging installs a global subscriber, so it is exercised by the
        // CLI integration tests instead.
        for quiet in [true, false] {
            let directive: Result<tracing_subscriber::filter::Directive, _> =
                log_directive(quiet).parse();
            assert!(directive.is_ok());
        }
    }
}
