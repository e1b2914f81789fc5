pub mod completions;
pub mod generate;
pub mod inspect;

use std::io::Read;
use std::path::{Path, PathBuf};

use sql2struct_core::options::ParseOptions;
use sql2struct_core::types::TableDefinition;

use crate::error::CliError;

/// Display name used for DDL read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// One input holding a `CREATE TABLE` statement.
#[derive(Debug)]
pub struct SqlSource {
    /// File path, or `<stdin>`.
    pub name: String,
    pub text: String,
}

impl SqlSource {
    /// Parse this source into a table definition.
    pub fn parse(&self, options: &ParseOptions) -> Result<TableDefinition, CliError> {
        sql2struct_ddl::parse(self.text.lines(), options).map_err(|error| CliError::Parse {
            error,
            source_text: self.text.clone(),
            file: self.name.clone(),
        })
    }
}

/// Read every input named on the command line, in order.
///
/// `-` reads stdin; directories contribute their `.sql` files.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SqlSource>, CliError> {
    let mut sources = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::Io {
                    path: path.clone(),
                    source: e,
                })?;
            sources.push(SqlSource {
                name: STDIN_NAME.to_string(),
                text,
            });
            continue;
        }

        for file in discover_sql_files(std::slice::from_ref(path))? {
            let text = std::fs::read_to_string(&file).map_err(|e| CliError::Io {
                path: file.clone(),
                source: e,
            })?;
            sources.push(SqlSource {
                name: file.display().to_string(),
                text,
            });
        }
    }

    tracing::debug!(count = sources.len(), "read SQL inputs");
    Ok(sources)
}

/// Discover .sql files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for files matching `**/*.sql`).
fn discover_sql_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/**/*.sql", path.display());
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
        } else {
            return Err(CliError::NoSqlFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."));
        return Err(CliError::NoSqlFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_sql_files_nonexistent_path() {
        let result = discover_sql_files(&[PathBuf::from("/nonexistent/path")]);
        assert!(matches!(result, Err(CliError::NoSqlFiles { .. })));
    }

    #[test]
    fn discover_sql_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_sql_files(&[dir.path().to_path_buf()]);
        assert!(result.is_err());
    }

    #[test]
    fn discover_sql_files_finds_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("user");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("b.sql"), "CREATE TABLE t_b (f_id int);").unwrap();
        std::fs::write(dir.path().join("a.sql"), "CREATE TABLE t_a (f_id int);").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not sql").unwrap();

        let files = discover_sql_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.sql"));
        assert!(files[1].ends_with("user/b.sql"));
    }

    #[test]
    fn discover_sql_files_accepts_direct_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("direct.ddl");
        std::fs::write(&path, "CREATE TABLE t_x (f_id int);").unwrap();
        let files = discover_sql_files(std::slice::from_ref(&path)).unwrap();
        assert_eq!(files[0], path);
    }

    #[test]
    fn discover_sql_files_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.sql");
        std::fs::write(&path, "CREATE TABLE t_user (f_id int);").unwrap();
        let files = discover_sql_files(&[path.clone(), path.clone()]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn read_sources_keeps_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.sql");
        std::fs::write(&path, "CREATE TABLE t_user (\n  f_id int\n);").unwrap();
        let sources = read_sources(std::slice::from_ref(&path)).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, path.display().to_string());
        assert!(sources[0].text.contains("t_user"));
    }

    #[test]
    fn source_parse_error_keeps_context() {
        let source = SqlSource {
            name: "broken.sql".into(),
            text: "CREATE TABLE (\n  f_id int\n)".into(),
        };
        match source.parse(&ParseOptions::default()) {
            Err(CliError::Parse {
                file, source_text, ..
            }) => {
                assert_eq!(file, "broken.sql");
                assert!(source_text.starts_with("CREATE TABLE"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model/user.go");
        write_file(&path, "package model\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "package model\n");
    }
}
