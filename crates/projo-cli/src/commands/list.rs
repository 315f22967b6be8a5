//! Implementation of the `projo list` command.

use projo_adapters::{BuiltinTemplates, HandlebarsRenderer};
use projo_core::application::{ArchetypeInfo, CatalogService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(HandlebarsRenderer::new()),
    );

    // A broken template fails the command before anything is printed.
    let verified = if args.verify {
        Some(service.verify()?)
    } else {
        None
    };
    let archetypes = service.list();

    match args.format {
        ListFormat::Table => {
            output.header("Available Project Types:")?;
            for info in &archetypes {
                output.print(&table_row(info))?;
            }
        }

        ListFormat::Json => {
            // JSON goes out even in quiet mode so pipes stay parseable.
            match &verified {
                Some(report) => output.print_json(&serde_json::json!({
                    "archetypes": archetypes,
                    "verified": report,
                }))?,
                None => output.print_json(&archetypes)?,
            }
            return Ok(());
        }

        ListFormat::List => {
            for info in &archetypes {
                output.print(info.name)?;
            }
        }

        ListFormat::Csv => {
            output.print("name,aliases,directories,files,summary")?;
            for info in &archetypes {
                output.print(&csv_row(info))?;
            }
        }
    }

    if let Some(report) = verified {
        output.success(&format!(
            "{} templates verified ({} files across {} project types)",
            report.templates, report.files, report.archetypes
        ))?;
    }

    Ok(())
}

fn table_row(info: &ArchetypeInfo) -> String {
    let aliases = if info.aliases.is_empty() {
        String::new()
    } else {
        format!(" (alias: {})", info.aliases.join(", "))
    };
    format!(
        "  {:<14}{}{}  [{} dirs, {} files]",
        info.name, info.summary, aliases, info.directories, info.files
    )
}

fn csv_row(info: &ArchetypeInfo) -> String {
    format!(
        "{},{},{},{},{}",
        info.name,
        info.aliases.join(";"),
        info.directories,
        info.files,
        csv_field(info.summary)
    )
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
