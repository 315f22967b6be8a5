//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "projo",
    bin_name = "projo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Go project structure generator",
    long_about = "projo generates ready-to-build Go project skeletons: \
                  REST APIs, CLI tools, microservices and libraries.",
    after_help = "EXAMPLES:\n\
        \x20 projo gen -n myapi -m github.com/user/myapi -t api\n\
        \x20 projo gen -n mytool -m github.com/user/mytool -t cli\n\
        \x20 projo list\n\
        \x20 projo completions bash > /usr/share/bash-completion/completions/projo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new Go project.
    #[command(
        visible_aliases = ["gen", "new"],
        about = "Generate a new Go project",
        after_help = "PROJECT TYPES:\n\
            \x20 api           REST API server with HTTP handlers\n\
            \x20 cli           Command-line tool\n\
            \x20 microservice  Microservice with HTTP/gRPC and Docker/K8s configs (alias: micro)\n\
            \x20 library       Reusable Go library package (alias: lib)\n\n\
            EXAMPLES:\n\
            \x20 projo gen -n myapi -m github.com/user/myapi -t api\n\
            \x20 projo gen -n myservice -m github.com/user/myservice -t microservice --desc \"My service\"\n\
            \x20 projo gen -n mylib -m github.com/user/mylib -t library --author \"Your Name\"\n\
            \x20 projo gen -n myapi -m github.com/user/myapi -o ~/projects"
    )]
    Generate(GenerateArgs),

    /// List project types.
    #[command(
        visible_alias = "ls",
        about = "List available project types",
        after_help = "EXAMPLES:\n\
            \x20 projo list\n\
            \x20 projo list --format json\n\
            \x20 projo list --verify"
    )]
    List(ListArgs),

    /// Initialise a projo configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 projo init          # default location\n\
            \x20 projo init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 projo completions bash > ~/.local/share/bash-completion/completions/projo\n\
            \x20 projo completions zsh  > ~/.zfunc/_projo\n\
            \x20 projo completions fish > ~/.config/fish/completions/projo.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the projo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projo config get defaults.author\n\
            \x20 projo config set defaults.archetype cli\n\
            \x20 projo config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `projo generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Project name; also the directory created under the output path.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name (required)")]
    pub name: Option<String>,

    /// Go module path.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path (required)"
    )]
    pub module: Option<String>,

    /// Project type. Parsed by the core so unknown tags get its suggestions.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type: api, cli, microservice, library [default: api]"
    )]
    pub archetype: Option<String>,

    #[arg(long = "desc", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(
        long = "go-version",
        value_name = "VERSION",
        help = "Go version [default: 1.24]"
    )]
    pub go_version: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory path [default: .]"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and generate immediately")]
    pub yes: bool,

    /// Render everything in memory and list what would be written.
    #[arg(long = "dry-run", help = "Show what would be created without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `projo list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    /// Render every built-in template to check it.
    #[arg(long = "verify", help = "Check that every built-in template renders")]
    pub verify: bool,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `projo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `projo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `projo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
