use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ofx_cleanup::{
    Action,
    frontend::{OutputTarget, TerminalFrontend, run_session},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ofx-cleanup", version)]
#[command(about = "Format OFX statements or fix duplicate FITIDs")]
struct Cli {
    /// OFX file to process
    input: PathBuf,

    /// Action to run (format | fix-fitid); prompts when omitted
    #[arg(short, long)]
    action: Option<Action>,

    /// Output file, or directory for the derived file name
    /// (default: next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the duplicate FITID report as JSON
    #[arg(long)]
    report_json: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn output_target(cli: &Cli) -> OutputTarget {
    match &cli.output {
        Some(path) if path.is_dir() => OutputTarget::Directory(path.clone()),
        Some(path) => OutputTarget::File(path.clone()),
        None => OutputTarget::Directory(
            cli.input
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut frontend = TerminalFrontend::new(
        cli.input.clone(),
        output_target(&cli),
        stdin.lock(),
        io::stdout(),
    )
    .with_action(cli.action)
    .with_report_json(cli.report_json);

    run_session(&mut frontend)
        .with_context(|| format!("processing {}", cli.input.display()))?;

    Ok(())
}
