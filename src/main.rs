mod cli;
mod config;
mod error;
mod filesystem;
mod format;
mod listing;
mod logging;
mod options;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::listing::Lister;

fn main() -> ExitCode {
    logging::init();

    // usage errors exit here with status 2
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("dirlist: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::load(),
    };

    let options = cli.listing_options().merge(config.listing_options());
    let settings = match config.display_settings(cli.color) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("dirlist: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?options, ?settings, "starting");

    let out = BufWriter::new(io::stdout().lock());
    let mut lister = Lister::new(options, settings, out, io::stderr());

    for path in &cli.paths {
        if let Err(e) = lister.list(path) {
            eprintln!("dirlist: {e}");
            return ExitCode::FAILURE;
        }
    }

    match lister.finish() {
        Ok((summary, _, _)) => {
            debug!(?summary, "done");
            if summary.failures > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("dirlist: {e}");
            ExitCode::FAILURE
        }
    }
}
