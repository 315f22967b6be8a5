//! `projo config`: read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get_value(&key)
                .with_cli_context(|| format!("Cannot read '{key}'"))?;
            // Printed even in quiet mode; it is the command's result.
            println!("{}", value.unwrap_or_default());
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::target_path(global.config.as_deref());
            let mut stored = AppConfig::load_file(&path)
                .with_cli_context(|| format!("Cannot read {}", path.display()))?;
            stored
                .set_value(&key, &value)
                .with_cli_context(|| format!("Cannot set '{key}'"))?;
            stored
                .save(&path)
                .with_cli_context(|| format!("Cannot write {}", path.display()))?;

            tracing::info!(key = %key, path = %path.display(), "Configuration updated");
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.print_json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised = config
                .to_toml()
                .map_err(|e| CliError::config("Failed to serialise config", e))?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            println!(
                "{}",
                AppConfig::target_path(global.config.as_deref()).display()
            );
        }
    }

    Ok(())
}
