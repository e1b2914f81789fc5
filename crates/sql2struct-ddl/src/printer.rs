use chrono::NaiveDateTime;
use sql2struct_core::options::RenderOptions;
use sql2struct_core::types::{ColumnDefinition, GoType, TableDefinition};

use crate::tags;

const GENERATOR: &str = "sql2struct";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a table definition as a Go struct declaration.
///
/// Columns whose type has no Go mapping are left out. The output only
/// depends on its arguments, so identical inputs give identical text.
pub fn print(table: &TableDefinition, options: &RenderOptions, generated_at: NaiveDateTime) -> String {
    print_all(std::slice::from_ref(table), options, generated_at)
}

/// Render several tables into one Go file.
///
/// The package header is written once, and imports `time` when any of the
/// tables needs it. Structs are separated by a blank line.
pub fn print_all(
    tables: &[TableDefinition],
    options: &RenderOptions,
    generated_at: NaiveDateTime,
) -> String {
    let stamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
    let rendered: Vec<_> = tables
        .iter()
        .map(|table| (table, rendered_fields(table, options)))
        .collect();
    let mut output = String::new();

    if let Some(package) = options.package.as_deref() {
        let uses_time = rendered
            .iter()
            .flat_map(|(_, fields)| fields.iter())
            .any(|(_, go_type)| go_type.is_time());
        print_header(package, options.version.as_deref(), &stamp, uses_time, &mut output);
    }

    for (index, (table, fields)) in rendered.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        print_struct(table, fields, options, &stamp, &mut output);
    }

    output
}

/// Columns that make it into the struct, paired with their Go type.
pub fn rendered_fields<'t>(
    table: &'t TableDefinition,
    options: &RenderOptions,
) -> Vec<(&'t ColumnDefinition, GoType)> {
    table
        .fields
        .iter()
        .filter_map(|column| match column.go_type(options.json_column) {
            Some(go_type) => Some((column, go_type)),
            None => {
                tracing::debug!(
                    column = %column.raw_name,
                    sql_type = %column.sql_type,
                    "no Go type for column, leaving it out"
                );
                None
            }
        })
        .collect()
}

fn print_header(
    package: &str,
    version: Option<&str>,
    stamp: &str,
    uses_time: bool,
    output: &mut String,
) {
    output.push_str(&format!("// Package {package}\n"));
    match version {
        Some(version) => {
            output.push_str(&format!("// Generated by {GENERATOR}-{version} at {stamp}\n"))
        }
        None => output.push_str(&format!("// Generated by {GENERATOR} at {stamp}\n")),
    }
    output.push_str(&format!("package {package}\n\n"));

    if uses_time {
        output.push_str("import \"time\"\n\n");
    }
}

fn print_struct(
    table: &TableDefinition,
    fields: &[(&ColumnDefinition, GoType)],
    options: &RenderOptions,
    stamp: &str,
    output: &mut String,
) {
    match table.comment.as_deref() {
        Some(comment) => {
            output.push_str(&format!("// {} {}\n", table.name, comment));
            output.push_str(&format!("// Generated by {GENERATOR} at {stamp}\n"));
        }
        None => {
            output.push_str(&format!("// {} Generated by {GENERATOR} at {stamp}\n", table.name));
        }
    }

    output.push_str(&format!("type {} struct {{\n", table.name));
    for (column, go_type) in fields {
        print_field(column, *go_type, options, output);
    }
    output.push_str("}\n");

    if options.table_name_func {
        print_table_name_func(table, output);
    }
}

fn print_field(column: &ColumnDefinition, go_type: GoType, options: &RenderOptions, output: &mut String) {
    let tag = tags::compose(column, &options.tags);
    output.push_str("    ");
    output.push_str(&column.name);
    output.push(' ');
    output.push_str(&go_type.render(options.pointer_mode));
    output.push_str(&tag);
    if let Some(comment) = column.comment.as_deref() {
        output.push_str(" // ");
        output.push_str(comment);
    }
    output.push('\n');
}

fn print_table_name_func(table: &TableDefinition, output: &mut String) {
    let receiver: String = table
        .name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "t".to_string());
    output.push_str(&format!(
        "\nfunc ({receiver} *{}) TableName() string {{\n",
        table.name
    ));
    output.push_str(&format!("    return \"{}\"\n", table.raw_name));
    output.push_str("}\n");
}
