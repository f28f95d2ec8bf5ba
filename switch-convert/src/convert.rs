//! `convert` subcommand: read, translate, write.
//!
//! The library never fails on odd input, so everything that can go wrong here
//! is at the edges: unreadable files, an undetectable or unsupported dialect
//! pair, a broken profile, or an output path that would clobber the source.

use anyhow::{bail, Context, Result};
use cfgtext_core::write_file;
use colored::Colorize;

use crate::cli::{ConvertArgs, SourceDialect, TargetDialect};
use crate::path_guard::ensure_output_not_input;
use switch_convert::dialect::{detect_dialect, Dialect};
use switch_convert::pipeline::{self, Direction};
use switch_convert::profile::{embedded_profile, load_profile, TranslationProfile};
use switch_convert::summary::render as render_summary;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_output_not_input(output, &args.input)?;
    }

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let from = resolve_source(args.from, &text)?;
    let to = resolve_target(args.to);
    let Some(direction) = Direction::from_dialects(from, to) else {
        bail!("unsupported conversion: {from} -> {to}");
    };

    let profile = resolve_profile(&args)?;
    tracing::debug!(%direction, ?profile, "converting");

    let translation = pipeline::run(direction, &text, &profile);
    if translation.summary.vlans == 0 && translation.summary.interfaces == 0 {
        eprintln!(
            "warning: no VLAN or interface statements found in {}",
            args.input.display()
        );
    }
    let summary = render_summary(&translation.summary);

    match &args.output {
        Some(path) => {
            write_file(&translation.output, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} {}", "wrote".green(), path.display());
            println!("{summary}");
        }
        None => {
            println!("{}", translation.output);
            if args.summary {
                eprintln!("{summary}");
            }
        }
    }
    Ok(())
}

/// Resolve `--from`, detecting the dialect when asked to.
pub fn resolve_source(from: SourceDialect, text: &str) -> Result<Dialect> {
    match from {
        SourceDialect::Cisco => Ok(Dialect::Cisco),
        SourceDialect::Hp => Ok(Dialect::HpProCurve),
        SourceDialect::Auto => {
            let Some(dialect) = detect_dialect(text) else {
                bail!("could not detect source dialect; pass --from");
            };
            tracing::debug!(%dialect, "detected source dialect");
            Ok(dialect)
        }
    }
}

fn resolve_target(to: TargetDialect) -> Dialect {
    match to {
        TargetDialect::Aruba6100 => Dialect::Aruba6100,
        TargetDialect::Hp => Dialect::HpProCurve,
    }
}

fn resolve_profile(args: &ConvertArgs) -> Result<TranslationProfile> {
    match &args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display())),
        None => Ok(embedded_profile()),
    }
}
