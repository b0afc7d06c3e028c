//! Implementation of the `kiln options` command.

use kiln_core::application::{CatalogService, OptionInfo};

use crate::{
    cli::{ListFormat, OptionsArgs},
    error::CliResult,
    output::OutputManager,
};

const CSV_HEADER: &str = "kind,value,plugins,dependencies,files,note";

pub fn execute(args: OptionsArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new();
    let options = match &args.kind {
        Some(kind) => service.list_kind(kind),
        None => service.list(),
    };

    match args.format {
        ListFormat::Table => print_table(&options, &output)?,
        // Machine-readable formats bypass quiet mode.
        ListFormat::Json => output.json(&options)?,
        ListFormat::List => {
            for option in &options {
                output.raw(&format!("{} {}", option.kind, option.value))?;
            }
        }
        ListFormat::Csv => {
            output.raw(CSV_HEADER)?;
            for option in &options {
                output.raw(&csv_row(option))?;
            }
        }
    }

    Ok(())
}

fn print_table(options: &[OptionInfo], output: &OutputManager) -> CliResult<()> {
    output.header("Available Options:")?;
    let mut current = "";
    for option in options {
        if option.kind != current {
            current = option.kind;
            output.print("")?;
            output.header(&format!("  {current}"))?;
        }
        output.print(&format!("    {}", option.value))?;

        let contributions = option
            .plugins
            .iter()
            .map(|p| format!("plugin {p}"))
            .chain(option.dependencies.iter().cloned())
            .chain(option.files.iter().map(|f| format!("file {f}")))
            .chain(option.note.iter().cloned());
        for line in contributions {
            output.detail(&format!("        {line}"))?;
        }
    }
    Ok(())
}

fn csv_row(option: &OptionInfo) -> String {
    [
        option.kind.to_string(),
        option.value.to_string(),
        option.plugins.join(";"),
        option.dependencies.join(";"),
        option.files.join(";"),
        option.note.clone().unwrap_or_default(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote fields containing separators, quotes or newlines.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
