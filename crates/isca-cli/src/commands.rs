//! Subcommand implementations.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use isca::engine::{ResolutionPolicy, RunConfig, SeedPolicy, StepEngine};
use isca::presets::{self, Mode, PresetParams};
use isca::render::{write_audit, AsciiRenderer, GridRenderer, PgmFormat, PgmRenderer};
use isca::sources::SourceConfigError;
use isca::types::{Category, RuleTable};
use tracing::info;

use crate::args::{CompareArgs, Format, RenderOpts, RunArgs, SeedArg};
use crate::error::CliError;

/// Preset parameters from the shared options.
pub fn params(opts: &RenderOpts) -> PresetParams {
    let seed_policy = match opts.init {
        SeedArg::Center => SeedPolicy::SingleCenter,
        SeedArg::Zero => SeedPolicy::AllZero,
        SeedArg::Sparse => SeedPolicy::SparseRandom {
            density: opts.density,
        },
    };
    PresetParams {
        size: opts.size,
        steps: opts.steps,
        seed: opts.seed,
        seed_policy,
    }
}

/// The renderer selected by `--format` and `--scale`.
pub fn renderer(opts: &RenderOpts) -> Result<Box<dyn GridRenderer>, CliError> {
    Ok(match opts.format {
        Format::Ascii => Box::new(AsciiRenderer::new()),
        Format::Pgm => Box::new(PgmRenderer::new().with_scale(opts.scale)?),
        Format::PgmPlain => Box::new(
            PgmRenderer::new()
                .with_format(PgmFormat::Plain)
                .with_scale(opts.scale)?,
        ),
    })
}

/// Resolve `run` arguments into a label and a complete config.
pub fn run_config(args: &RunArgs) -> Result<(String, RunConfig), CliError> {
    let params = params(&args.render);
    let (label, config) = match (&args.preset, args.rule) {
        (Some(name), _) => (name.clone(), presets::find(name)?.config(&params)?),
        (None, Some(number)) => {
            let rule = RuleTable::try_from_number(number).map_err(SourceConfigError::from)?;
            if args.intention {
                (
                    format!("is-rule{}", rule.number()),
                    presets::intention_config(rule.number(), &params)?,
                )
            } else {
                (
                    format!("rule{}", rule.number()),
                    presets::classical_config(rule.number(), &params),
                )
            }
        }
        (None, None) => return Err(CliError::NothingToRun),
    };
    let config = match &args.order {
        Some(order) => config.with_policy(order.parse::<ResolutionPolicy>()?),
        None => config,
    };
    Ok((label, config))
}

/// Build the engine and run it to completion.
pub fn execute(label: &str, config: RunConfig) -> Result<StepEngine, CliError> {
    let mut engine = StepEngine::new(config)?;
    engine.run()?;
    let summary = engine.summary();
    info!(
        run = label,
        rows = engine.grid().len(),
        pattern_trigger = summary.wins_for(Category::PatternTrigger),
        reflection = summary.wins_for(Category::Reflection),
        novelty = summary.wins_for(Category::Novelty),
        "cells won by overrides"
    );
    Ok(engine)
}

fn create(path: &Path) -> Result<BufWriter<File>, CliError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn finish(path: &Path, mut w: impl Write) -> Result<(), CliError> {
    w.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `isca run`
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let (label, config) = run_config(&args)?;
    let renderer = renderer(&args.render)?;
    let engine = execute(&label, config)?;

    match &args.out {
        Some(path) => {
            let mut w = create(path)?;
            renderer.render(engine.grid(), &mut w)?;
            finish(path, w)?;
            info!(path = %path.display(), "wrote {label}");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            renderer.render(engine.grid(), &mut lock)?;
            finish(Path::new("<stdout>"), lock)?;
        }
    }

    if let Some(path) = &args.audit {
        let mut w = create(path)?;
        let n = write_audit(engine.ledger(), engine.plan(), &mut w)?;
        finish(path, w)?;
        info!(path = %path.display(), proposals = n, "wrote ledger audit");
    }
    Ok(())
}

/// `isca list`
pub fn list(out: &mut dyn Write) -> io::Result<()> {
    for (name, preset) in presets::registry() {
        let mode = match preset.mode {
            Mode::Classical => "classical",
            Mode::Intention => "intention",
        };
        writeln!(out, "{name:<12} rule {:<3} {mode}", preset.rule)?;
    }
    Ok(())
}

/// `isca compare`: renders both members of a preset pair into `args.out`.
///
/// Returns the written paths, classical first.
pub fn compare(args: CompareArgs) -> Result<Vec<PathBuf>, CliError> {
    let preset = presets::find(&args.preset)?;
    let other = preset
        .counterpart()
        .ok_or_else(|| CliError::NoCounterpart {
            preset: args.preset.clone(),
        })?;
    let pair = match preset.mode {
        Mode::Classical => [preset, other],
        Mode::Intention => [other, preset],
    };

    fs::create_dir_all(&args.out).map_err(|source| CliError::Io {
        path: args.out.clone(),
        source,
    })?;
    let params = params(&args.render);
    let renderer = renderer(&args.render)?;

    let mut written = Vec::with_capacity(2);
    for p in pair {
        let engine = execute(p.name, p.config(&params)?)?;
        let path = args.out.join(format!("{}.{}", p.name, renderer.extension()));
        let mut w = create(&path)?;
        renderer.render(engine.grid(), &mut w)?;
        finish(&path, w)?;
        info!(path = %path.display(), "wrote {}", p.name);
        written.push(path);
    }
    Ok(written)
}
