use std::collections::HashSet;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use sql2struct_core::options::GenerateOptions;
use sql2struct_core::types::TableDefinition;

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::commands::{read_sources, write_file, SqlSource};
use crate::config::{load_config, resolve_generate_options};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `generate` command: turn each input into a Go struct.
///
/// Structs go to stdout, to one file (`-o`), or to one file per table
/// (`--out-dir`).
pub fn run(args: GenerateArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let options = resolve_generate_options(&config, &args)?;
    let sources = read_sources(&args.paths)?;

    let mut tables = Vec::with_capacity(sources.len());
    for source in &sources {
        let table = source.parse(&options.parse)?;
        warn_if_empty(&table, source, &options, output);
        tables.push(table);
    }

    let generated_at = Local::now().naive_local();

    if let Some(dir) = args.out_dir.as_deref() {
        return write_per_table(dir, &sources, &tables, &options, generated_at, output);
    }

    let code = sql2struct_ddl::print_all(&tables, &options.render, generated_at);

    if let Some(path) = args.output.as_deref() {
        write_file(path, &code)?;
        match output.mode {
            OutputMode::Json => output.print_json(&serde_json::json!({
                "written": [{ "file": path.display().to_string(), "tables": table_names(&tables) }],
            })),
            OutputMode::Plain => println!("{}\t{}", path.display(), tables.len()),
            OutputMode::Human => output.success(&format!(
                "{} struct(s) written to {}",
                tables.len(),
                path.display()
            )),
        }
        return Ok(());
    }

    if output.mode == OutputMode::Json {
        let results: Vec<serde_json::Value> = sources
            .iter()
            .zip(&tables)
            .map(|(source, table)| {
                serde_json::json!({
                    "file": source.name,
                    "table": table.raw_name,
                    "struct": table.name,
                    "code": sql2struct_ddl::print(table, &options.render, generated_at),
                })
            })
            .collect();
        output.print_json(&serde_json::json!({ "tables": results }));
    } else {
        print!("{code}");
    }

    Ok(())
}

/// Writes `<raw_name>.go` for every table into `dir`.
fn write_per_table(
    dir: &Path,
    sources: &[SqlSource],
    tables: &[TableDefinition],
    options: &GenerateOptions,
    generated_at: NaiveDateTime,
    output: &OutputContext,
) -> Result<(), CliError> {
    let mut seen = HashSet::new();
    let mut written = Vec::new();

    for (source, table) in sources.iter().zip(tables) {
        if !seen.insert(table.raw_name.as_str()) {
            output.warn(&format!(
                "table '{}' from {} overwrites an earlier definition",
                table.raw_name, source.name
            ));
        }

        let path = dir.join(format!("{}.go", table.raw_name));
        let code = sql2struct_ddl::print(table, &options.render, generated_at);
        write_file(&path, &code)?;
        tracing::info!(table = %table.raw_name, path = %path.display(), "wrote struct");

        match output.mode {
            OutputMode::Human => {
                output.success(&format!("{} -> {}", source.name, path.display()))
            }
            OutputMode::Plain => println!("{}\t{}\t{}", source.name, table.raw_name, path.display()),
            OutputMode::Json => {}
        }
        written.push(serde_json::json!({
            "file": path.display().to_string(),
            "source": source.name,
            "tables": [table.raw_name],
        }));
    }

    if output.mode == OutputMode::Json {
        output.print_json(&serde_json::json!({ "written": written }));
    }
    Ok(())
}

/// Warns when a table parsed but none of its columns has a Go type.
fn warn_if_empty(
    table: &TableDefinition,
    source: &SqlSource,
    options: &GenerateOptions,
    output: &OutputContext,
) {
    let json_column = options.render.json_column;
    if table.fields.iter().all(|f| f.go_type(json_column).is_none()) {
        output.warn(&format!(
            "{}: no column of table '{}' maps to a Go type; the struct is empty",
            source.name, table.raw_name
        ));
    }
}

fn table_names(tables: &[TableDefinition]) -> Vec<&str> {
    tables.iter().map(|t| t.raw_name.as_str()).collect()
}
