//! Options controlling how DDL is parsed and how structs are rendered.

use serde::{Deserialize, Serialize};

use crate::types::{CustomTag, JsonColumnPolicy, PointerMode};

/// Prefixes stripped from identifiers before PascalCasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub table_prefix: String,
    pub field_prefix: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            table_prefix: "t_".to_string(),
            field_prefix: "f_".to_string(),
        }
    }
}

impl ParseOptions {
    /// Options that strip nothing.
    pub fn without_prefixes() -> Self {
        Self {
            table_prefix: String::new(),
            field_prefix: String::new(),
        }
    }
}

/// Which struct tags are emitted for each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    pub gorm: bool,
    pub json: bool,
    pub db: bool,
    pub form: bool,
    /// Use the raw column name for `json` tags.
    pub json_with_prefix: bool,
    /// Use the raw column name for `form` tags.
    pub form_with_prefix: bool,
    pub custom: Vec<CustomTag>,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            gorm: true,
            json: true,
            db: true,
            form: true,
            json_with_prefix: false,
            form_with_prefix: false,
            custom: Vec::new(),
        }
    }
}

impl TagOptions {
    /// No tag kind enabled.
    pub fn none() -> Self {
        Self {
            gorm: false,
            json: false,
            db: false,
            form: false,
            ..Self::default()
        }
    }
}

/// Options for the struct renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub tags: TagOptions,
    /// Emits a package header when set.
    pub package: Option<String>,
    /// Version shown in the generated-by header line.
    pub version: Option<String>,
    /// Emits a `TableName()` method returning the raw table name.
    pub table_name_func: bool,
    pub pointer_mode: PointerMode,
    pub json_column: JsonColumnPolicy,
}

/// Everything needed to turn DDL lines into a Go struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub parse: ParseOptions,
    pub render: RenderOptions,
}

impl GenerateOptions {
    pub fn new(parse: ParseOptions, render: RenderOptions) -> Self {
        Self { parse, render }
    }
}
