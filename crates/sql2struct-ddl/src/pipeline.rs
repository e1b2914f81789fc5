//! The line pipeline: normalize, drop block comments, drop non-column
//! declarations, then parse.
//!
//! Comment tracking runs before the skip filter because commented-out text
//! may itself look like an index or a `create table` line.

use chrono::{Local, NaiveDateTime};
use sql2struct_core::options::{GenerateOptions, ParseOptions};
use sql2struct_core::types::TableDefinition;

use crate::comment::CommentBlockTracker;
use crate::error::DdlError;
use crate::line;
use crate::parser::DdlParser;
use crate::printer;

/// The stages a raw line passes through before reaching the parser.
#[derive(Debug, Default)]
struct LineStages {
    comments: CommentBlockTracker,
}

impl LineStages {
    /// Returns the normalized line if it should be parsed.
    fn admit(&mut self, raw: &str) -> Option<String> {
        let line = line::normalize(raw)?;
        if self.comments.consume(&line) {
            return None;
        }
        if line::should_skip(&line) {
            tracing::debug!(line = %line, "skipping non-column line");
            return None;
        }
        Some(line)
    }
}

/// Parse DDL lines into a table definition.
///
/// # Errors
///
/// Returns `DdlError::NoTableNameFound` as soon as a `create table` line
/// without a name is seen, and `DdlError::NoTableParsed` when the input ends
/// without a table name or without columns.
pub fn parse<I, S>(lines: I, options: &ParseOptions) -> Result<TableDefinition, DdlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stages = LineStages::default();
    let mut parser = DdlParser::new(options);

    for (index, raw) in lines.into_iter().enumerate() {
        if let Some(line) = stages.admit(raw.as_ref()) {
            parser.parse_line(&line, index + 1)?;
        }
    }

    parser.finish()
}

/// Parse DDL lines and render the Go struct, stamped with the current local
/// time.
pub fn generate<I, S>(lines: I, options: &GenerateOptions) -> Result<String, DdlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    generate_at(lines, options, Local::now().naive_local())
}

/// Parse DDL lines and render the Go struct with a fixed generation time.
pub fn generate_at<I, S>(
    lines: I,
    options: &GenerateOptions,
    generated_at: NaiveDateTime,
) -> Result<String, DdlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = parse(lines, &options.parse)?;
    tracing::info!(
        table = %table.raw_name,
        fields = table.fields.len(),
        "parsed table"
    );
    Ok(printer::print(&table, &options.render, generated_at))
}
