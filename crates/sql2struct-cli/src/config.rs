use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sql2struct_core::options::{GenerateOptions, ParseOptions, RenderOptions, TagOptions};
use sql2struct_core::types::{CustomTag, JsonColumnPolicy, PointerMode};

use crate::cli::{GenerateArgs, NamingArgs};
use crate::error::CliError;

/// CLI configuration loaded from a TOML file.
///
/// Every value is optional; unset values fall back to the generator
/// defaults, and command-line flags override both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[naming]`: prefixes stripped from table and column names.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamingConfig {
    pub table_prefix: Option<String>,
    pub field_prefix: Option<String>,
}

/// `[tags]`: which struct tags are emitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TagsConfig {
    pub gorm: Option<bool>,
    pub json: Option<bool>,
    pub db: Option<bool>,
    pub form: Option<bool>,
    pub json_with_prefix: Option<bool>,
    pub form_with_prefix: Option<bool>,
    pub custom: Option<Vec<CustomTag>>,
}

/// `[output]`: rendering switches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub package: Option<String>,
    pub table_name_func: Option<bool>,
    pub pointer: Option<PointerMode>,
    pub json_column: Option<JsonColumnPolicy>,
}

/// Discovery order for the config file:
/// 1. `--config <path>` (explicit)
/// 2. `SQL2STRUCT_CONFIG` env var
/// 3. `./sql2struct.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/sql2struct/config.toml`
/// 5. `~/.config/sql2struct/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var("SQL2STRUCT_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("sql2struct.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("sql2struct/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/sql2struct/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Resolve parse options from config + CLI overrides.
pub fn resolve_parse_options(config: &CliConfig, naming: &NamingArgs) -> ParseOptions {
    let defaults = ParseOptions::default();
    ParseOptions {
        table_prefix: naming
            .table_prefix
            .clone()
            .or_else(|| config.naming.table_prefix.clone())
            .unwrap_or(defaults.table_prefix),
        field_prefix: naming
            .field_prefix
            .clone()
            .or_else(|| config.naming.field_prefix.clone())
            .unwrap_or(defaults.field_prefix),
    }
}

/// Resolve the full generator options from config + CLI overrides.
///
/// CLI flags take precedence over config file values. Switch flags such as
/// `--pointer` can only turn a setting on.
pub fn resolve_generate_options(
    config: &CliConfig,
    args: &GenerateArgs,
) -> Result<GenerateOptions, CliError> {
    let parse = resolve_parse_options(config, &args.naming);
    let defaults = TagOptions::default();

    let custom = match args.custom_tags.as_deref() {
        Some(list) => CustomTag::parse_list(list)?,
        None => config.tags.custom.clone().unwrap_or_default(),
    };

    let tags = TagOptions {
        gorm: args.gorm.or(config.tags.gorm).unwrap_or(defaults.gorm),
        json: args.json.or(config.tags.json).unwrap_or(defaults.json),
        db: args.db.or(config.tags.db).unwrap_or(defaults.db),
        form: args.form.or(config.tags.form).unwrap_or(defaults.form),
        json_with_prefix: args.json_with_prefix
            || config.tags.json_with_prefix.unwrap_or(defaults.json_with_prefix),
        form_with_prefix: args.form_with_prefix
            || config.tags.form_with_prefix.unwrap_or(defaults.form_with_prefix),
        custom,
    };

    let pointer_mode = if args.pointer {
        PointerMode::All
    } else if args.time_pointer {
        PointerMode::TimeOnly
    } else {
        config.output.pointer.unwrap_or_default()
    };

    let json_column = if args.json_as_skip {
        JsonColumnPolicy::Skip
    } else {
        config.output.json_column.unwrap_or_default()
    };

    let render = RenderOptions {
        tags,
        package: args
            .package
            .clone()
            .or_else(|| config.output.package.clone())
            .filter(|p| !p.is_empty()),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        table_name_func: args.with_tablename_func
            || config.output.table_name_func.unwrap_or(false),
        pointer_mode,
        json_column,
    };

    Ok(GenerateOptions::new(parse, render))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn generate_args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["sql2struct", "generate"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(args) => args,
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn default_config_is_empty() {
        let config = CliConfig::default();
        assert!(config.naming.table_prefix.is_none());
        assert!(config.tags.gorm.is_none());
        assert!(config.output.pointer.is_none());
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
[naming]
table_prefix = "tb_"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.naming.table_prefix.as_deref(), Some("tb_"));
        assert!(config.naming.field_prefix.is_none());
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[naming]
table_prefix = "tb_"
field_prefix = "c_"

[tags]
gorm = false
json = true
db = false
form = false
json_with_prefix = true
custom = ["sql", "-xorm"]

[output]
package = "model"
table_name_func = true
pointer = "time"
json_column = "skip"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.naming.field_prefix.as_deref(), Some("c_"));
        assert_eq!(config.tags.gorm, Some(false));
        assert_eq!(config.tags.json_with_prefix, Some(true));
        let custom = config.tags.custom.as_ref().unwrap();
        assert_eq!(custom.len(), 2);
        assert!(custom[1].use_field_name());
        assert_eq!(config.output.package.as_deref(), Some("model"));
        assert_eq!(config.output.pointer, Some(PointerMode::TimeOnly));
        assert_eq!(config.output.json_column, Some(JsonColumnPolicy::Skip));
    }

    #[test]
    fn parse_rejects_bad_pointer_mode() {
        let result: Result<CliConfig, _> = toml::from_str("[output]\npointer = \"some\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_bad_custom_tag() {
        let result: Result<CliConfig, _> = toml::from_str("[tags]\ncustom = [\"a b\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn resolve_uses_defaults_without_config() {
        let opts = resolve_generate_options(&CliConfig::default(), &generate_args(&[])).unwrap();
        assert_eq!(opts.parse.table_prefix, "t_");
        assert_eq!(opts.parse.field_prefix, "f_");
        assert!(opts.render.tags.gorm && opts.render.tags.json);
        assert!(opts.render.tags.db && opts.render.tags.form);
        assert!(opts.render.package.is_none());
        assert_eq!(opts.render.pointer_mode, PointerMode::None);
        assert_eq!(opts.render.json_column, JsonColumnPolicy::String);
        assert_eq!(opts.render.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn resolve_config_overrides_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[naming]
field_prefix = "c_"
[tags]
form = false
[output]
package = "model"
pointer = "all"
"#,
        )
        .unwrap();
        let opts = resolve_generate_options(&config, &generate_args(&[])).unwrap();
        assert_eq!(opts.parse.field_prefix, "c_");
        assert!(!opts.render.tags.form);
        assert_eq!(opts.render.package.as_deref(), Some("model"));
        assert_eq!(opts.render.pointer_mode, PointerMode::All);
    }

    #[test]
    fn resolve_cli_overrides_config() {
        let config: CliConfig = toml::from_str(
            r#"
[naming]
table_prefix = "tb_"
[tags]
gorm = false
custom = ["sql"]
[output]
package = "model"
pointer = "all"
"#,
        )
        .unwrap();
        let args = generate_args(&[
            "--tp",
            "",
            "--gorm",
            "true",
            "--custom-tags",
            "-xorm",
            "--package",
            "entity",
            "--time-pointer",
            "--json-as-skip",
        ]);
        let opts = resolve_generate_options(&config, &args).unwrap();
        assert_eq!(opts.parse.table_prefix, "");
        assert!(opts.render.tags.gorm);
        assert_eq!(opts.render.tags.custom.len(), 1);
        assert_eq!(opts.render.tags.custom[0].key(), "xorm");
        assert_eq!(opts.render.package.as_deref(), Some("entity"));
        assert_eq!(opts.render.pointer_mode, PointerMode::TimeOnly);
        assert_eq!(opts.render.json_column, JsonColumnPolicy::Skip);
    }

    #[test]
    fn resolve_rejects_invalid_custom_tags() {
        let args = generate_args(&["--custom-tags", "sql,a:b"]);
        let result = resolve_generate_options(&CliConfig::default(), &args);
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn resolve_parse_options_for_inspect() {
        let naming = NamingArgs {
            table_prefix: None,
            field_prefix: Some("col_".into()),
        };
        let opts = resolve_parse_options(&CliConfig::default(), &naming);
        assert_eq!(opts.table_prefix, "t_");
        assert_eq!(opts.field_prefix, "col_");
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\npackage = \"dao\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.package.as_deref(), Some("dao"));
    }

    #[test]
    fn load_config_from_explicit_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }

    #[test]
    fn load_config_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[naming\n").unwrap();
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }
}
