use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;

use clap::ArgMatches;
use tracing::{debug, info};

use loopview_core::{PreviewWatcher, PreviewWatcherConfig, normalize_localhost_url};
use loopview_core::preview::strip_ansi;

use super::helpers::{load_config_with_warning, open_input, strip_ansi_enabled};

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();

    let intercept_clicks = !matches.get_flag("no-intercept") && config.preview.intercept_clicks();
    let open_panel = !matches.get_flag("no-panel") && config.preview.open_panel();
    let strip_escapes = strip_ansi_enabled(matches, &config);

    // CLI flag wins over config; config value was already validated as local
    let current_url = match matches.get_one::<String>("current") {
        Some(candidate) => Some(
            normalize_localhost_url(candidate)
                .ok_or_else(|| format!("--current '{}' is not a local preview address", candidate))?,
        ),
        None => config
            .preview
            .current_url
            .as_deref()
            .and_then(normalize_localhost_url),
    };

    info!(
        event = "cli.watch_started",
        intercept_clicks = intercept_clicks,
        open_panel = open_panel,
        current_url = current_url.as_deref().unwrap_or(""),
        json_output = json_output
    );

    // What the preview panel shows: seeded from --current/config, then
    // replaced by every reported URL.
    let displayed_url = Rc::new(RefCell::new(current_url));
    let displayed_sink = Rc::clone(&displayed_url);

    let mut watcher_config = PreviewWatcherConfig::new(move |url| {
        *displayed_sink.borrow_mut() = Some(url.to_string());
        if json_output {
            println!("{}", serde_json::json!({ "type": "url", "url": url }));
        } else {
            println!("{}", url);
        }
    })
    .with_intercept_clicks(intercept_clicks);

    if open_panel {
        watcher_config = watcher_config.with_open_preview_panel(move || {
            debug!(event = "cli.watch.open_panel");
            if json_output {
                println!("{}", serde_json::json!({ "type": "open_panel" }));
            }
        });
    }

    let mut watcher = PreviewWatcher::new(
        watcher_config.with_current_url(move || displayed_url.borrow().clone()),
    );
    let mut reader = open_input(matches)?;
    let mut buf = Vec::new();
    let mut lines = 0usize;
    let mut handled = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        handled += if strip_escapes {
            watcher.handle_line(&strip_ansi(&line))
        } else {
            watcher.handle_line(&line)
        };
    }

    info!(
        event = "cli.watch_completed",
        lines = lines,
        handled = handled,
        last_url = watcher.last_url().unwrap_or("")
    );

    Ok(())
}
