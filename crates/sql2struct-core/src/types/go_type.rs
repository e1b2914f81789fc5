use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The Go scalar and composite types a column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoType {
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    String,
    Time,
    Bytes,
    Bool,
}

impl GoType {
    /// Maps a lowercase SQL type keyword to a Go type.
    ///
    /// Returns `None` for keywords outside the supported MySQL set; such
    /// columns are left out of the generated struct. `json` columns follow
    /// `json_policy`.
    pub fn from_sql(sql_type: &str, unsigned: bool, json_policy: JsonColumnPolicy) -> Option<Self> {
        let go_type = match sql_type {
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" => {
                if unsigned {
                    Self::Uint32
                } else {
                    Self::Int32
                }
            }
            "bigint" => {
                if unsigned {
                    Self::Uint64
                } else {
                    Self::Int64
                }
            }
            "float" => Self::Float32,
            "double" | "decimal" => Self::Float64,
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" => Self::String,
            "json" => match json_policy {
                JsonColumnPolicy::String => Self::String,
                JsonColumnPolicy::Skip => return None,
            },
            "date" | "datetime" | "timestamp" | "time" => Self::Time,
            "tinyblob" | "blob" | "mediumblob" | "longblob" | "binary" | "varbinary" => {
                Self::Bytes
            }
            "bit" => Self::Bool,
            "enum" | "set" => Self::String,
            _ => return None,
        };
        Some(go_type)
    }

    /// Returns the Go spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Time => "time.Time",
            Self::Bytes => "[]byte",
            Self::Bool => "bool",
        }
    }

    /// Returns true for `time.Time`, which needs an import in the header.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time)
    }

    /// Renders the type, wrapped in a pointer when `mode` asks for it.
    pub fn render(&self, mode: PointerMode) -> String {
        let pointer = match mode {
            PointerMode::None => false,
            PointerMode::All => true,
            PointerMode::TimeOnly => self.is_time(),
        };
        if pointer {
            format!("*{}", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which generated fields are rendered as pointers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Plain value types.
    #[default]
    None,
    /// Every field becomes `*T`.
    All,
    /// Only `time.Time` fields become `*time.Time`.
    #[serde(rename = "time")]
    TimeOnly,
}

impl FromStr for PointerMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "all" => Ok(Self::All),
            "time" => Ok(Self::TimeOnly),
            other => Err(CoreError::UnknownPointerMode(other.to_string())),
        }
    }
}

/// How columns declared as `json` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColumnPolicy {
    /// Map to `string`.
    #[default]
    String,
    /// Treat as unsupported and leave the column out.
    Skip,
}

impl FromStr for JsonColumnPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "skip" => Ok(Self::Skip),
            other => Err(CoreError::UnknownJsonColumnPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(sql: &str, unsigned: bool) -> Option<GoType> {
        GoType::from_sql(sql, unsigned, JsonColumnPolicy::String)
    }

    #[test]
    fn integer_family_respects_unsigned() {
        for kw in ["tinyint", "smallint", "mediumint", "int", "integer"] {
            assert_eq!(map(kw, false), Some(GoType::Int32), "{kw}");
            assert_eq!(map(kw, true), Some(GoType::Uint32), "{kw}");
        }
        assert_eq!(map("bigint", false), Some(GoType::Int64));
        assert_eq!(map("bigint", true), Some(GoType::Uint64));
    }

    #[test]
    fn floats_ignore_unsigned() {
        assert_eq!(map("float", true), Some(GoType::Float32));
        assert_eq!(map("double", true), Some(GoType::Float64));
        assert_eq!(map("decimal", false), Some(GoType::Float64));
    }

    #[test]
    fn text_time_bytes_and_bool() {
        for kw in ["char", "varchar", "tinytext", "text", "mediumtext", "longtext", "enum", "set"] {
            assert_eq!(map(kw, false), Some(GoType::String), "{kw}");
        }
        for kw in ["date", "datetime", "timestamp", "time"] {
            assert_eq!(map(kw, false), Some(GoType::Time), "{kw}");
        }
        for kw in ["tinyblob", "blob", "mediumblob", "longblob", "binary", "varbinary"] {
            assert_eq!(map(kw, false), Some(GoType::Bytes), "{kw}");
        }
        assert_eq!(map("bit", false), Some(GoType::Bool));
    }

    #[test]
    fn unknown_keywords_are_unmapped() {
        assert_eq!(map("geometry", false), None);
        assert_eq!(map("key", false), None);
        assert_eq!(map("", false), None);
    }

    #[test]
    fn json_follows_policy() {
        assert_eq!(
            GoType::from_sql("json", false, JsonColumnPolicy::String),
            Some(GoType::String)
        );
        assert_eq!(GoType::from_sql("json", false, JsonColumnPolicy::Skip), None);
    }

    #[test]
    fn render_pointer_modes() {
        assert_eq!(GoType::Int32.render(PointerMode::None), "int32");
        assert_eq!(GoType::Int32.render(PointerMode::All), "*int32");
        assert_eq!(GoType::Int32.render(PointerMode::TimeOnly), "int32");
        assert_eq!(GoType::Time.render(PointerMode::TimeOnly), "*time.Time");
        assert_eq!(GoType::Bytes.render(PointerMode::All), "*[]byte");
    }

    #[test]
    fn pointer_mode_from_str() {
        assert_eq!("all".parse::<PointerMode>().unwrap(), PointerMode::All);
        assert_eq!("time".parse::<PointerMode>().unwrap(), PointerMode::TimeOnly);
        assert!(matches!(
            "sometimes".parse::<PointerMode>(),
            Err(CoreError::UnknownPointerMode(_))
        ));
    }

    #[test]
    fn pointer_mode_serde_names() {
        let json = serde_json::to_string(&PointerMode::TimeOnly).unwrap();
        assert_eq!(json, "\"time\"");
        let back: PointerMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, PointerMode::All);
    }

    #[test]
    fn json_policy_from_str() {
        assert_eq!(
            "skip".parse::<JsonColumnPolicy>().unwrap(),
            JsonColumnPolicy::Skip
        );
        assert!("drop".parse::<JsonColumnPolicy>().is_err());
    }
}
