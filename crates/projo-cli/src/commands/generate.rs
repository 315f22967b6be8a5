//! Implementation of the `projo generate` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, call the
//! core generate service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use projo_adapters::{BuiltinTemplates, HandlebarsRenderer, LocalFilesystem, MemoryFilesystem};
use projo_core::{
    application::{Filesystem, GenerateService, GenerationPlan, GenerationReport},
    domain::{Archetype, ProjectConfig},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `projo generate` command.
///
/// Dispatch sequence:
/// 1. Merge flags over config defaults into a `ProjectConfig`
/// 2. Show the plan
/// 3. Confirm with the user unless `--yes` or `--dry-run`
/// 4. Generate on disk, or in memory for `--dry-run`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Build the project configuration
    let project = build_project_config(&args, &config)?;
    debug!(
        project = %project.name(),
        module = %project.module(),
        archetype = %project.archetype(),
        destination = %project.project_root().display(),
        "Configuration resolved"
    );

    // 2. Plan and show it
    let plan = service(Box::new(LocalFilesystem::new())).plan(&project)?;
    if !output.is_json() {
        show_plan(&plan, &output)?;
        if plan.destination_exists {
            output.warning(&format!(
                "Directory {} already exists; generated files will be overwritten",
                plan.destination.display()
            ))?;
        }
    }

    // 3. Dry run: render into memory and list the result
    if args.dry_run {
        let report = service(Box::new(MemoryFilesystem::new())).generate(&project)?;
        info!(files = report.files, "Dry run completed");
        return show_dry_run(&report, &output);
    }

    if !args.yes && !confirm()? {
        return Err(CliError::Cancelled);
    }

    // 4. Generate
    info!(project = %project.name(), path = %plan.destination.display(), "Generation started");
    let report = service(Box::new(LocalFilesystem::new())).generate(&project)?;
    info!(run_id = %report.run_id, files = report.files, "Generation completed");

    // 5. Success + next steps
    if output.is_json() {
        output.print_json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' generated at {}",
        project.name(),
        report.destination.display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.destination.display()))?;
    output.print("  go mod tidy")?;
    output.print("  make build")?;

    Ok(())
}

fn service(filesystem: Box<dyn Filesystem>) -> GenerateService {
    GenerateService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(HandlebarsRenderer::new()),
        filesystem,
    )
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Flags win; config defaults fill the gaps; the core validates the result.
fn build_project_config(args: &GenerateArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
    let defaults = &config.defaults;

    let archetype = match args.archetype.as_deref().or(defaults.archetype.as_deref()) {
        Some(tag) => tag
            .parse::<Archetype>()
            .map_err(|e| CliError::Core(e.into()))?,
        None => Archetype::default(),
    };

    let mut builder = ProjectConfig::builder().archetype(archetype);

    if let Some(name) = &args.name {
        builder = builder.name(name.as_str());
    }
    if let Some(module) = &args.module {
        builder = builder.module(module.as_str());
    }
    if let Some(description) = &args.description {
        builder = builder.description(description.as_str());
    }
    if let Some(author) = args.author.as_ref().or(defaults.author.as_ref()) {
        builder = builder.author(author.as_str());
    }
    if let Some(version) = args
        .go_version
        .as_ref()
        .or(defaults.toolchain_version.as_ref())
    {
        builder = builder.toolchain_version(version.as_str());
    }

    let output_path = args
        .output
        .clone()
        .or_else(|| defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    builder
        .output_path(output_path)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    out.header("Project Configuration")?;
    out.print(&format!("  Project:     {}", plan.name))?;
    out.print(&format!("  Module:      {}", plan.module))?;
    out.print(&format!("  Type:        {}", plan.archetype))?;
    if !plan.description.is_empty() {
        out.print(&format!("  Description: {}", plan.description))?;
    }
    if !plan.author.is_empty() {
        out.print(&format!("  Author:      {}", plan.author))?;
    }
    out.print(&format!("  Go Version:  {}", plan.toolchain_version))?;
    out.print(&format!("  Output Path: {}", plan.destination.display()))?;
    out.print(&format!("  Directories: {}", plan.directories.len()))?;
    out.print(&format!("  Files:       {}", plan.files.len()))?;
    out.print("")?;
    Ok(())
}

fn show_dry_run(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.print_json(report)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} directories and {} files under {}",
        report.directories,
        report.files,
        report.destination.display()
    ))?;
    for file in &report.written_files {
        out.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}

/// Ask `Generate project? [y/N]`. Anything but yes declines.
fn confirm() -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;

        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt("Generate project?")
                .default(false)
                .interact()
                .map_err(|e| CliError::IoError {
                    message: "failed to read confirmation input".into(),
                    source: std::io::Error::other(e),
                });
        }
    }

    confirm_from_stdin()
}

fn confirm_from_stdin() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Generate project? [y/N] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(is_yes(&input))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use projo_core::error::ErrorKind;

    fn args(name: Option<&str>, module: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            name: name.map(Into::into),
            module: module.map(Into::into),
            output: Some(std::env::temp_dir()),
            ..GenerateArgs::default()
        }
    }

    fn kind(err: CliError) -> ErrorKind {
        match err {
            CliError::Core(core) => core.kind(),
            other => panic!("expected a core error, got {other:?}"),
        }
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let mut config = AppConfig::default();
        config.defaults.archetype = Some("lib".into());
        config.defaults.author = Some("Config Author".into());

        let project =
            build_project_config(&args(Some("widget"), Some("example.com/widget")), &config)
                .unwrap();
        assert_eq!(project.archetype(), Archetype::Library);
        assert_eq!(project.author(), "Config Author");
        assert_eq!(project.toolchain_version(), "1.24");
    }

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.author = Some("Config Author".into());

        let mut args = args(Some("orders"), Some("example.com/orders"));
        args.archetype = Some("micro".into());
        args.author = Some("Flag Author".into());
        args.go_version = Some("1.22".into());

        let project = build_project_config(&args, &config).unwrap();
        assert_eq!(project.archetype(), Archetype::Microservice);
        assert_eq!(project.author(), "Flag Author");
        assert_eq!(project.toolchain_version(), "1.22");
    }

    #[test]
    fn unknown_type_is_a_configuration_error() {
        let mut args = args(Some("orders"), Some("example.com/orders"));
        args.archetype = Some("desktop".into());

        let err = build_project_config(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(kind(err), ErrorKind::Configuration);
    }

    #[test]
    fn missing_name_or_module_is_rejected() {
        let config = AppConfig::default();
        assert!(build_project_config(&args(None, Some("example.com/x")), &config).is_err());
        assert!(build_project_config(&args(Some("x"), None), &config).is_err());
    }

    #[test]
    fn output_path_defaults_to_config_then_cwd() {
        let mut config = AppConfig::default();
        config.defaults.output_dir = Some(std::env::temp_dir());

        let mut args = args(Some("orders"), Some("example.com/orders"));
        args.output = None;

        let project = build_project_config(&args, &config).unwrap();
        assert!(project.output_path().is_absolute());
        assert!(project.project_root().ends_with("orders"));
    }

    #[test]
    fn only_explicit_yes_confirms() {
        for yes in ["y", "Y", "yes", " YES \n"] {
            assert!(is_yes(yes), "{yes:?}");
        }
        for no in ["", "\n", "n", "no", "maybe"] {
            assert!(!is_yes(no), "{no:?}");
        }
    }
}
