use std::fmt;

/// Errors that abort a DDL parse.
///
/// Malformed column lines never produce an error; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DdlError {
    /// A `CREATE TABLE` line had no table name after the keywords.
    NoTableNameFound {
        /// 1-based line number in the input.
        line: usize,
        /// The normalized line text.
        text: String,
    },

    /// The input ended without a table name or without any column.
    NoTableParsed,
}

impl DdlError {
    /// The 1-based input line the error points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NoTableNameFound { line, .. } => Some(*line),
            Self::NoTableParsed => None,
        }
    }
}

impl fmt::Display for DdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTableNameFound { line, text } => {
                write!(f, "no table name found on line {line}: {text}")
            }
            Self::NoTableParsed => {
                write!(f, "no table parsed: input has no table name or no fields")
            }
        }
    }
}

impl std::error::Error for DdlError {}
