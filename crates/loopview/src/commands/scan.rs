use clap::ArgMatches;
use tracing::info;

use loopview_core::find_localhost_urls;

use super::helpers::{load_config_with_warning, read_input, strip_ansi_enabled};

pub(crate) fn handle_scan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();
    let strip_escapes = strip_ansi_enabled(matches, &config);

    info!(
        event = "cli.scan_started",
        strip_ansi = strip_escapes,
        json_output = json_output
    );

    let text = read_input(matches)?;
    let urls = find_localhost_urls(&text, strip_escapes);

    info!(event = "cli.scan_completed", url_count = urls.len());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&urls)?);
    } else {
        for url in &urls {
            println!("{}", url);
        }
    }

    Ok(())
}
