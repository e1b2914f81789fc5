use miette::{Diagnostic, NamedSource, SourceSpan};
use sql2struct_ddl::DdlError;

/// A diagnostic wrapping a `DdlError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct DdlDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DdlError` into a miette `DdlDiagnostic`.
///
/// Errors that carry a line number label that whole line of the input.
pub fn ddl_error_to_diagnostic(error: &DdlError, source: &str, filename: &str) -> DdlDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());

    match error {
        DdlError::NoTableNameFound { line, .. } => DdlDiagnostic {
            src: named_src,
            span: line_span(source, *line),
            message: "no table name found".to_string(),
            label: "CREATE TABLE without a name".to_string(),
            suggestion: Some("Name the table, e.g. CREATE TABLE t_user (".to_string()),
        },

        DdlError::NoTableParsed => DdlDiagnostic {
            src: named_src,
            span: (0, 0).into(),
            message: "no table parsed".to_string(),
            label: "expected a CREATE TABLE statement".to_string(),
            suggestion: Some(
                "The input needs a CREATE TABLE line followed by at least one column.".to_string(),
            ),
        },

        _ => DdlDiagnostic {
            src: named_src,
            span: (0, 0).into(),
            message: error.to_string(),
            label: "error".to_string(),
            suggestion: None,
        },
    }
}

/// Byte span of the 1-based `line` in `source`, without its line terminator.
fn line_span(source: &str, line: usize) -> SourceSpan {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let len = text.trim_end_matches(&['\n', '\r'][..]).len();
            return (offset, len).into();
        }
        offset += text.len();
    }
    (source.len(), 0).into()
}
