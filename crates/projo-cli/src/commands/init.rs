//! `projo init`: create a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default projo configuration file.
///
/// Writes to `--config` when given, otherwise to the platform config dir.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = AppConfig::target_path(global.config.as_deref());

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .with_cli_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
