//! `isca`: run and render Intention-Space cellular automata.
//!
//! Usage: `isca run --preset is-rule30 --out is30.pgm`, `isca list`,
//! `isca compare rule110 --format ascii --out out/`

use std::io;
use std::process;

use clap::Parser;
use isca_cli::args::Command;
use isca_cli::{commands, Cli, CliError};
use tracing::error;

fn main() {
    isca_cli::init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => commands::run(args),
        Command::List => commands::list(&mut io::stdout().lock()).map_err(|source| CliError::Io {
            path: "<stdout>".into(),
            source,
        }),
        Command::Compare(args) => commands::compare(args).map(|_| ()),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
