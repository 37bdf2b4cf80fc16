use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("loopview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect and track local dev-server preview URLs")
        .long_about("loopview recognizes loopback dev-server addresses (localhost, 127.x.x.x, 0.0.0.0, [::1]) in agent terminal output, rewrites them into one canonical URL, and reports when the URL a preview panel should show changes.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("normalize")
                .about("Print the canonical preview URL of each candidate")
                .arg(
                    Arg::new("candidate")
                        .help("Address strings to normalize (e.g. localhost:3000)")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("check")
                .about("Report whether a candidate is a local dev-server address")
                .arg(
                    Arg::new("candidate")
                        .help("Address string to check")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("scan")
                .about("List every distinct local preview URL found in output")
                .arg(
                    Arg::new("file")
                        .help("File to scan (reads stdin when omitted)")
                        .index(1)
                )
                .arg(
                    Arg::new("keep-ansi")
                        .long("keep-ansi")
                        .help("Do not strip terminal escape sequences before scanning (overrides config)")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Stream output and report each change of preview URL")
                .long_about(
                    "Reads output line by line (from a file or stdin) and treats every token as a click \
                    on a preview link. A URL is reported only when it differs from the last one reported \
                    and from the current URL. With the preview panel enabled, every recognized link also \
                    emits an open-panel notification."
                )
                .arg(
                    Arg::new("file")
                        .help("File to watch (reads stdin when omitted)")
                        .index(1)
                )
                .arg(
                    Arg::new("current")
                        .long("current")
                        .short('c')
                        .help("URL the preview panel already shows (overrides config)")
                )
                .arg(
                    Arg::new("no-intercept")
                        .long("no-intercept")
                        .help("Disable click interception; nothing is reported (overrides config)")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("no-panel")
                        .long("no-panel")
                        .help("Do not emit open-panel notifications (overrides config)")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("keep-ansi")
                        .long("keep-ansi")
                        .help("Do not strip terminal escape sequences (overrides config)")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit one JSON object per notification")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
