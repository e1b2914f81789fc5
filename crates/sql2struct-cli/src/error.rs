use std::path::PathBuf;

use sql2struct_core::CoreError;
use sql2struct_ddl::DdlError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments or configuration
/// - 3: parse error (malformed DDL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// DDL that could not be turned into a table.
    #[error("parse error in {file}: {error}")]
    Parse {
        error: DdlError,
        source_text: String,
        file: String,
    },

    /// Invalid option values (custom tags, pointer mode).
    #[error("invalid option: {0}")]
    Core(#[from] CoreError),

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Path given on the command line holds no SQL files.
    #[error("no SQL files found in {path}")]
    NoSqlFiles { path: PathBuf },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Core(_) | Self::Config { .. } | Self::NoSqlFiles { .. } => {
                ExitCode::InvalidArguments
            }
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { error, file, .. } => serde_json::json!({
                "error": "parse_error",
                "file": file,
                "line": error.line(),
                "message": error.to_string(),
            }),
            Self::Core(e) => serde_json::json!({
                "error": "invalid_option",
                "message": e.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> CliError {
        CliError::Parse {
            error: DdlError::NoTableNameFound {
                line: 2,
                text: "create table (".into(),
            },
            source_text: "-- users\nCREATE TABLE (\n".into(),
            file: "user.sql".into(),
        }
    }

    #[test]
    fn parse_error_exit_code() {
        assert_eq!(parse_error().exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn core_error_exit_code() {
        let err = CliError::Core(CoreError::InvalidCustomTag("a b".into()));
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::Config {
            message: "bad config".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn no_sql_files_exit_code() {
        let err = CliError::NoSqlFiles {
            path: PathBuf::from("ddl/"),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn other_exit_code() {
        let err = CliError::Other("something".into());
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn display_parse_error() {
        let msg = parse_error().to_string();
        assert!(msg.contains("user.sql"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn core_error_converts_with_question_mark() {
        fn custom() -> Result<(), CliError> {
            sql2struct_core::types::CustomTag::new("")?;
            Ok(())
        }
        assert!(matches!(custom(), Err(CliError::Core(_))));
    }

    #[test]
    fn to_json_parse_error() {
        let json = parse_error().to_json();
        assert_eq!(json["error"], "parse_error");
        assert_eq!(json["file"], "user.sql");
        assert_eq!(json["line"], 2);
    }

    #[test]
    fn to_json_parse_error_without_line() {
        let err = CliError::Parse {
            error: DdlError::NoTableParsed,
            source_text: String::new(),
            file: "<stdin>".into(),
        };
        let json = err.to_json();
        assert!(json["line"].is_null());
    }

    #[test]
    fn to_json_io_error() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "io_error");
        assert_eq!(json["path"], "/tmp/file");
    }

    #[test]
    fn to_json_config_error() {
        let err = CliError::Config {
            message: "bad value".into(),
        };
        assert_eq!(err.to_json()["error"], "config_error");
    }

    #[test]
    fn to_json_other_error() {
        let err = CliError::Other("unexpected".into());
        let json = err.to_json();
        assert_eq!(json["error"], "error");
        assert!(json["message"].as_str().unwrap().contains("unexpected"));
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::ParseError as i32, 3);
    }
}
