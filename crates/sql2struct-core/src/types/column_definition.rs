use serde::{Deserialize, Serialize};

use super::go_type::{GoType, JsonColumnPolicy};
use crate::naming::strip_prefix;

/// One column of a parsed `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name as written in the DDL.
    pub raw_name: String,
    /// `raw_name` without the field prefix, PascalCased.
    pub name: String,
    /// `raw_name` without the field prefix. Value of stripped json, form and
    /// custom tags.
    #[serde(default)]
    pub stripped_name: String,
    /// Lowercase type keyword without any `(...)` parameters.
    pub sql_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub is_json: bool,
}

impl ColumnDefinition {
    /// Creates a column with every flag cleared. The stripped name starts out
    /// equal to `raw_name`.
    pub fn new(
        raw_name: impl Into<String>,
        name: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> Self {
        let raw_name = raw_name.into();
        let sql_type = sql_type.into();
        let is_json = sql_type == "json";
        Self {
            stripped_name: raw_name.clone(),
            raw_name,
            name: name.into(),
            sql_type,
            comment: None,
            unsigned: false,
            primary_key: false,
            auto_increment: false,
            is_json,
        }
    }

    /// Sets the stripped name by removing `field_prefix` from the raw name.
    pub fn with_field_prefix(mut self, field_prefix: &str) -> Self {
        self.stripped_name = strip_prefix(field_prefix, &self.raw_name).to_string();
        self
    }

    /// The Go type this column maps to, if any.
    pub fn go_type(&self, json_policy: JsonColumnPolicy) -> Option<GoType> {
        GoType::from_sql(&self.sql_type, self.unsigned, json_policy)
    }
}

impl std::fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.raw_name, self.sql_type)?;
        if self.unsigned {
            write!(f, " unsigned")?;
        }
        if self.primary_key {
            write!(f, " primary key")?;
        }
        if self.auto_increment {
            write!(f, " auto_increment")?;
        }
        Ok(())
    }
}
