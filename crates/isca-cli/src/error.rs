//! Errors surfaced to the command line.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use isca::engine::{ConfigError, ResolutionError};
use isca::presets::PresetError;
use isca::render::RenderError;
use isca::sources::SourceConfigError;
use isca::types::StepError;

/// Anything that can stop a command.
#[derive(Debug)]
pub enum CliError {
    /// Preset lookup or instantiation failed.
    Preset(PresetError),
    /// An ad-hoc source rejected its parameters.
    Source(SourceConfigError),
    /// `--order` is not a valid precedence.
    Order(ResolutionError),
    /// The assembled run configuration is invalid.
    Config(ConfigError),
    /// The run aborted.
    Step(StepError),
    /// Rendering failed.
    Render(RenderError),
    /// A file could not be created or written.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Neither `--preset` nor `--rule` was given.
    NothingToRun,
    /// `compare` needs a preset with a registered counterpart.
    NoCounterpart {
        /// The preset without a pair.
        preset: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(e) => write!(f, "{e}"),
            Self::Source(e) => write!(f, "{e}"),
            Self::Order(e) => write!(f, "--order: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Step(e) => write!(f, "run aborted: {e}"),
            Self::Render(e) => write!(f, "render failed: {e}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::NothingToRun => write!(f, "pass either --preset NAME or --rule N"),
            Self::NoCounterpart { preset } => {
                write!(f, "preset '{preset}' has no classical/intention counterpart")
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Preset(e) => Some(e),
            Self::Source(e) => Some(e),
            Self::Order(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::NothingToRun | Self::NoCounterpart { .. } => None,
        }
    }
}

impl From<PresetError> for CliError {
    fn from(e: PresetError) -> Self {
        Self::Preset(e)
    }
}

impl From<SourceConfigError> for CliError {
    fn from(e: SourceConfigError) -> Self {
        Self::Source(e)
    }
}

impl From<ResolutionError> for CliError {
    fn from(e: ResolutionError) -> Self {
        Self::Order(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for CliError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
