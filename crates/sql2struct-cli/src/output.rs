use console::Term;

use crate::cli::GlobalOpts;
use crate::diagnostic::ddl_error_to_diagnostic;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// Output context derived from global flags.
///
/// Generated code and inspection results go to stdout; status, warnings
/// and errors go to stderr.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from global CLI options.
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };

        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode,
            quiet: global.quiet,
            use_color,
        }
    }

    /// Print a success message to stderr (human mode only, not in quiet mode).
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        if self.use_color {
            let style = console::Style::new().green().bold();
            eprintln!("{} {}", style.apply_to("ok"), msg);
        } else {
            eprintln!("ok {msg}");
        }
    }

    /// Print a warning to stderr (not in quiet mode).
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                if self.use_color {
                    let style = console::Style::new().yellow().bold();
                    eprintln!("{} {}", style.apply_to("warning:"), msg);
                } else {
                    eprintln!("warning: {msg}");
                }
            }
            OutputMode::Json => {
                let json = serde_json::json!({ "warning": msg });
                eprintln!("{json}");
            }
            OutputMode::Plain => {
                eprintln!("warning\t{msg}");
            }
        }
    }

    /// Print an error using the appropriate output mode.
    ///
    /// Parse errors in human mode are rendered as source diagnostics.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let diagnostic = ddl_error_to_diagnostic(error, source_text, file);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            (OutputMode::Human, _) => {
                if self.use_color {
                    let style = console::Style::new().red().bold();
                    eprintln!("{} {}", style.apply_to("error:"), err);
                } else {
                    eprintln!("error: {err}");
                }
            }
            (OutputMode::Json, _) => {
                let json = err.to_json();
                eprintln!("{json}");
            }
            (OutputMode::Plain, _) => {
                eprintln!("error\t{err}");
            }
        }
    }

    /// Print JSON data to stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }
}
