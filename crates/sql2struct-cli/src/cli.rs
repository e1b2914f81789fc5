use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Generate Go structs from MySQL `CREATE TABLE` statements.
///
/// Reads DDL from files, directories or stdin and prints one Go struct per
/// table, with gorm, json, db and form tags.
#[derive(Parser)]
#[command(
    name = "sql2struct",
    version,
    about = "Generate Go structs from MySQL CREATE TABLE statements",
    after_help = "Use 'sql2struct <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: SQL2STRUCT_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "SQL2STRUCT_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate Go structs from CREATE TABLE statements
    Generate(GenerateArgs),

    /// Parse CREATE TABLE statements and show the table model
    Inspect(InspectArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Identifier prefixes stripped before PascalCasing.
#[derive(Args, Debug, Default)]
pub struct NamingArgs {
    /// Table name prefix to strip [default: t_]
    #[arg(long = "tp", value_name = "PREFIX")]
    pub table_prefix: Option<String>,

    /// Column name prefix to strip [default: f_]
    #[arg(long = "fp", value_name = "PREFIX")]
    pub field_prefix: Option<String>,
}

/// Arguments for `sql2struct generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// SQL files or directories; `-` reads stdin
    #[arg(default_value = "-")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub naming: NamingArgs,

    /// Emit a package header with this package name
    #[arg(long = "package")]
    pub package: Option<String>,

    /// Emit gorm tags [default: true]
    #[arg(long = "gorm", value_name = "BOOL", action = ArgAction::Set)]
    pub gorm: Option<bool>,

    /// Emit json tags [default: true]
    #[arg(long = "json", value_name = "BOOL", action = ArgAction::Set)]
    pub json: Option<bool>,

    /// Emit db tags [default: true]
    #[arg(long = "db", value_name = "BOOL", action = ArgAction::Set)]
    pub db: Option<bool>,

    /// Emit form tags [default: true]
    #[arg(long = "form", value_name = "BOOL", action = ArgAction::Set)]
    pub form: Option<bool>,

    /// Add a TableName() method returning the raw table name
    #[arg(long = "with-tablename-func")]
    pub with_tablename_func: bool,

    /// Keep the column prefix in json tags
    #[arg(long = "json-with-prefix")]
    pub json_with_prefix: bool,

    /// Keep the column prefix in form tags
    #[arg(long = "form-with-prefix")]
    pub form_with_prefix: bool,

    /// Extra tags, comma separated; a leading `-` uses the stripped name (e.g. "sql,-xorm")
    #[arg(long = "custom-tags", value_name = "TAGS")]
    pub custom_tags: Option<String>,

    /// Render every field as a pointer
    #[arg(long = "pointer", conflicts_with = "time_pointer")]
    pub pointer: bool,

    /// Render only time.Time fields as pointers
    #[arg(long = "time-pointer")]
    pub time_pointer: bool,

    /// Leave out columns of type json instead of mapping them to string
    #[arg(long = "json-as-skip")]
    pub json_as_skip: bool,

    /// Write all structs to this file instead of stdout
    #[arg(short = 'o', long = "output", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write one <table>.go file per table into this directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for `sql2struct inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// SQL files or directories; `-` reads stdin
    #[arg(default_value = "-")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub naming: NamingArgs,
}

/// Arguments for `sql2struct completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
