use clap::ArgMatches;
use tracing::error;

use loopview_core::events;

pub mod helpers;

mod check;
mod completions;
mod normalize;
mod scan;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches.subcommand_name().unwrap_or("");
    events::log_app_startup(command);

    let result = match matches.subcommand() {
        Some(("normalize", sub_matches)) => normalize::handle_normalize_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("scan", sub_matches)) => scan::handle_scan_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(command, e.as_ref());
    }
    events::log_app_shutdown(command, result.is_ok());

    result
}
