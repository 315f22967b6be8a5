//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over `output.format`; Auto resolves on the TTY.
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Pretty-printed JSON document. Printed even in quiet mode since it is
    /// the command's result.
    pub fn print_json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&json)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            log_file: None,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(
            &args(OutputFormat::Human, quiet, no_color),
            &AppConfig::default(),
        )
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn json_is_printed_in_quiet_mode() {
        let out = OutputManager::new(
            &args(OutputFormat::Json, true, false),
            &AppConfig::default(),
        );
        assert!(out.is_json());
        assert!(out.print_json(&serde_json::json!({"files": 7})).is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(!make_manager(false, false).no_color);
        assert!(make_manager(false, true).no_color);
    }

    #[test]
    fn config_no_color_disables_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(OutputFormat::Human, false, false), &config);
        assert!(out.no_color);
    }

    #[test]
    fn plain_format_never_colors() {
        let out = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &AppConfig::default(),
        );
        assert!(out.no_color);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false, false), &config);
        assert!(out.is_json());
    }

    #[test]
    fn flag_overrides_config_format() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Plain, false, false), &config);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }
}
