use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use loopview_core::normalize_localhost_url;

#[derive(Serialize)]
struct NormalizeEntry<'a> {
    input: &'a str,
    url: Option<String>,
}

pub(crate) fn handle_normalize_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let entries: Vec<NormalizeEntry> = matches
        .get_many::<String>("candidate")
        .ok_or("At least one candidate is required")?
        .map(|input| NormalizeEntry {
            input,
            url: normalize_localhost_url(input),
        })
        .collect();

    let rejected = entries.iter().filter(|entry| entry.url.is_none()).count();
    info!(
        event = "cli.normalize_completed",
        total = entries.len(),
        rejected = rejected
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        match &entry.url {
            Some(url) => println!("{}", url),
            None => eprintln!("Not a local preview address: {}", entry.input),
        }
    }

    if rejected > 0 {
        return Err(format!("{} of {} candidate(s) were not local addresses", rejected, entries.len()).into());
    }

    Ok(())
}
