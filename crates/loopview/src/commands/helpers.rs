use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use clap::ArgMatches;
use tracing::warn;

use loopview_core::config::LoopviewConfig;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> LoopviewConfig {
    match LoopviewConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.loopview/config.toml and ./.loopview/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            LoopviewConfig::default()
        }
    }
}

/// Resolve the optional `file` argument to a line reader, falling back to stdin.
pub fn open_input(matches: &ArgMatches) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    match matches.get_one::<String>("file") {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read the whole input named by the optional `file` argument.
pub fn read_input(matches: &ArgMatches) -> Result<String, Box<dyn std::error::Error>> {
    let mut reader = open_input(matches)?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve whether escape sequences are stripped, with `--keep-ansi` winning over config.
pub fn strip_ansi_enabled(matches: &ArgMatches, config: &LoopviewConfig) -> bool {
    !matches.get_flag("keep-ansi") && config.scan.strip_ansi()
}
