use sql2struct_core::types::{ColumnDefinition, JsonColumnPolicy, TableDefinition};

use crate::cli::{GlobalOpts, InspectArgs};
use crate::commands::read_sources;
use crate::config::{load_config, resolve_parse_options};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `inspect` command: parse each input and show the table model.
pub fn run(args: InspectArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let options = resolve_parse_options(&config, &args.naming);
    let json_column = config.output.json_column.unwrap_or_default();
    let sources = read_sources(&args.paths)?;

    let mut results = Vec::new();
    for source in &sources {
        let table = source.parse(&options)?;
        match output.mode {
            OutputMode::Human => print!("{}", human_summary(&table, &source.name, json_column)),
            OutputMode::Plain => {
                for line in plain_rows(&table, json_column) {
                    println!("{line}");
                }
            }
            OutputMode::Json => results.push(serde_json::json!({
                "file": source.name,
                "table": table,
            })),
        }
    }

    if output.mode == OutputMode::Json {
        output.print_json(&serde_json::json!({ "tables": results }));
    }
    Ok(())
}

/// Aligned, human-readable listing of one table.
fn human_summary(table: &TableDefinition, file: &str, json_column: JsonColumnPolicy) -> String {
    let mut out = format!("{} -> {} ({file})\n", table.raw_name, table.name);
    if let Some(comment) = &table.comment {
        out.push_str(&format!("  -- {comment}\n"));
    }

    let rows: Vec<[String; 5]> = table
        .fields
        .iter()
        .map(|f| {
            [
                f.raw_name.clone(),
                f.name.clone(),
                sql_type(f),
                go_type(f, json_column),
                flags(f).join(", "),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    for row in &rows {
        let line = format!(
            "  {:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}  {}",
            row[0],
            row[1],
            row[2],
            row[3],
            row[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One tab-separated row per column:
/// table, column, field, sql type, go type, flags.
fn plain_rows(table: &TableDefinition, json_column: JsonColumnPolicy) -> Vec<String> {
    table
        .fields
        .iter()
        .map(|f| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                table.raw_name,
                f.raw_name,
                f.name,
                sql_type(f),
                go_type(f, json_column),
                flags(f).join(",")
            )
        })
        .collect()
}

fn sql_type(column: &ColumnDefinition) -> String {
    if column.unsigned {
        format!("{} unsigned", column.sql_type)
    } else {
        column.sql_type.clone()
    }
}

fn go_type(column: &ColumnDefinition, json_column: JsonColumnPolicy) -> String {
    column
        .go_type(json_column)
        .map_or_else(|| "-".to_string(), |t| t.to_string())
}

fn flags(column: &ColumnDefinition) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if column.primary_key {
        flags.push("primary key");
    }
    if column.auto_increment {
        flags.push("auto_increment");
    }
    flags
}
