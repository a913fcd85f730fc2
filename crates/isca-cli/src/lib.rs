//! Library half of the `isca` binary: argument types, subcommands and
//! logging setup, kept out of `main.rs` so they can be tested.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod args;
pub mod commands;
pub mod error;

pub use args::Cli;
pub use error::CliError;

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr fmt subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
