//! Flags shared by every projo subcommand.
//!
//! Flattened into [`super::Cli`]. Help text comes from the doc comments: the
//! first paragraph is `-h`, the whole comment is `--help`.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more of the generation run (-v, -vv, -vvv)
    ///
    /// By default only warnings reach stderr. `-v` adds the run summary
    /// (resolved archetype, destination, run id), `-vv` adds one event per
    /// directory and file written, and `-vvv` adds each template render. Any
    /// `-v` also prints the full cause chain of an error. `RUST_LOG`
    /// overrides the level entirely.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only errors and JSON results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also set by NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read defaults from FILE instead of the platform config path
    #[arg(short, long, global = true, value_name = "FILE", env = "PROJO_CONFIG")]
    pub config: Option<PathBuf>,

    /// How results are printed; `auto` picks human on a terminal, plain otherwise
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,

    /// Append JSON log lines for this run to FILE
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering of plans, reports and listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colored text with status symbols
    Human,
    /// Text without ANSI codes
    Plain,
    /// One JSON document on stdout
    Json,
}
