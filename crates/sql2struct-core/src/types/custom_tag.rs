use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A user-defined struct tag key, e.g. `sql` or `-xorm`.
///
/// A leading `-` means the tag value is the prefix-stripped field name
/// instead of the raw column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomTag {
    key: String,
    use_field_name: bool,
}

impl CustomTag {
    /// Parses a single entry, validating the key.
    pub fn new(entry: impl Into<String>) -> Result<Self, CoreError> {
        let entry = entry.into();
        let trimmed = entry.trim();
        let (key, use_field_name) = match trimmed.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };
        if !is_tag_key(key) {
            return Err(CoreError::InvalidCustomTag(entry));
        }
        Ok(Self {
            key: key.to_string(),
            use_field_name,
        })
    }

    /// Parses a comma-separated list such as `sql,-xorm,ent`.
    ///
    /// An empty or all-whitespace list yields no tags.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, CoreError> {
        if list.trim().is_empty() {
            return Ok(Vec::new());
        }
        list.split(',').map(Self::new).collect()
    }

    /// The tag key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the value is the stripped field name rather than the raw name.
    pub fn use_field_name(&self) -> bool {
        self.use_field_name
    }
}

fn is_tag_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | ':' | '`' | ','))
}

impl fmt::Display for CustomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_field_name {
            write!(f, "-{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

impl From<CustomTag> for String {
    fn from(t: CustomTag) -> String {
        t.to_string()
    }
}

impl TryFrom<String> for CustomTag {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
