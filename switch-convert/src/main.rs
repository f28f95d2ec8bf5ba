use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use switch_convert::dialect::detect_dialect;
use switch_convert::inspect::render_model;
use switch_convert::parse::parse;

mod cli;
mod convert;
mod logging;
mod path_guard;

use cli::{Cli, Command, DetectArgs, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Detect(args) => run_detect(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let dialect = convert::resolve_source(args.from, &text)?;
    let model = parse(dialect, &text)
        .with_context(|| format!("no reader for {dialect} configs"))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_model(&model)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&model).context("failed to serialize model")?
        ),
    }
    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let name = detect_dialect(&text).map_or("unknown", |d| d.as_str());
    println!("dialect={name}");
    Ok(())
}
