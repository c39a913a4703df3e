/*!
# bracket-check CLI

Prints one line describing the first bracket fault in a file.
Exit code is 0 whenever the file was scanned, 1 if it could not be.
*/

use anyhow::{Context, Result};
use bracket_check::check_file;
use bracket_check::cli_common::{self, CommonArgs, OutputWriter, Report};
use bracket_check::CheckConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "bracket-check",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reports the first unbalanced bracket in a source file"
)]
struct Cli {
    /// File to check (may come from the config file instead)
    path: Option<PathBuf>,

    #[clap(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli_common::init_logging(cli.common.log_level()) {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = run(&cli) {
        cli_common::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.common.config {
        Some(path) => CheckConfig::load_from_file(path)?,
        None => CheckConfig::default(),
    };

    let target = config.resolve_target(cli.path.as_deref())?;
    let format = config.resolve_format(cli.common.format);
    debug!(file = %target.display(), ?format, "checking");

    let outcome = check_file(&target)?;

    OutputWriter::stdout(format)
        .write_report(&Report::new(&target, &outcome))
        .context("failed to write report")?;

    Ok(())
}
