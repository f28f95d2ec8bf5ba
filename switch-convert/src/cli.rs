use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "switch-convert")]
#[command(about = "Translate switch configurations between Cisco IOS, HP ProCurve and Aruba AOS-CX")]
pub struct Cli {
    /// Log parser decisions (dropped and ignored lines) to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate one config into another dialect.
    Convert(ConvertArgs),
    /// Show the parsed VLAN/interface model of one config.
    Inspect(InspectArgs),
    /// Guess the dialect of one config.
    Detect(DetectArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum SourceDialect {
    Auto,
    Cisco,
    Hp,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum TargetDialect {
    Aruba6100,
    Hp,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Source config file to translate.
    pub input: PathBuf,
    /// Output file path. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Source dialect (`auto` detects from characteristic statements).
    #[arg(long, value_enum, default_value_t = SourceDialect::Auto)]
    pub from: SourceDialect,
    /// Destination dialect.
    #[arg(long, value_enum)]
    pub to: TargetDialect,
    /// Site profile TOML (voice VLAN, uplink port, Aruba port prefix).
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Print a conversion summary to stderr when writing to stdout.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = SourceDialect::Auto)]
    pub from: SourceDialect,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    pub file: PathBuf,
}
