//! Struct tag composition.
//!
//! Segments are emitted in a fixed order: `gorm`, `json`, `db`, `form`, then
//! custom tags in configuration order.

use sql2struct_core::options::TagOptions;
use sql2struct_core::types::ColumnDefinition;

/// Builds the struct tag for one column, including the leading space and the
/// surrounding backticks. Returns an empty string when no tag is enabled.
pub fn compose(column: &ColumnDefinition, options: &TagOptions) -> String {
    let segments = segments(column, options);
    if segments.is_empty() {
        String::new()
    } else {
        format!(" `{}`", segments.join(" "))
    }
}

/// The individual `key:"value"` segments, in emission order.
pub fn segments(column: &ColumnDefinition, options: &TagOptions) -> Vec<String> {
    let raw_name = column.raw_name.as_str();
    let field_name = column.stripped_name.as_str();
    let mut segments = Vec::new();

    if options.gorm {
        segments.push(gorm_tag(column));
    }
    if options.json {
        let value = if options.json_with_prefix {
            raw_name
        } else {
            field_name
        };
        segments.push(segment("json", value));
    }
    if options.db {
        segments.push(segment("db", raw_name));
    }
    if options.form {
        let value = if options.form_with_prefix {
            raw_name
        } else {
            field_name
        };
        segments.push(segment("form", value));
    }
    for tag in &options.custom {
        let value = if tag.use_field_name() {
            field_name
        } else {
            raw_name
        };
        segments.push(segment(tag.key(), value));
    }

    segments
}

fn gorm_tag(column: &ColumnDefinition) -> String {
    let mut parts = vec![format!("column:{}", column.raw_name)];
    if column.primary_key {
        parts.push("primaryKey".to_string());
    }
    if column.auto_increment {
        parts.push("autoIncrement".to_string());
    }
    segment("gorm", &parts.join(";"))
}

fn segment(key: &str, value: &str) -> String {
    format!("{key}:\"{value}\"")
}
