use clap::ArgMatches;
use tracing::info;

use loopview_core::is_localhost_url;

pub(crate) fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let candidate = matches
        .get_one::<String>("candidate")
        .ok_or("Candidate argument is required")?;

    let is_local = is_localhost_url(candidate);
    info!(
        event = "cli.check_completed",
        candidate = candidate.as_str(),
        is_local = is_local
    );

    println!("{}", is_local);

    if is_local {
        Ok(())
    } else {
        Err(format!("'{}' is not a local preview address", candidate).into())
    }
}
