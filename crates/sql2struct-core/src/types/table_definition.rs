use serde::{Deserialize, Serialize};

use super::column_definition::ColumnDefinition;

/// The table model accumulated while parsing one `CREATE TABLE` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name as written in the DDL.
    pub raw_name: String,
    /// `raw_name` without the table prefix, PascalCased.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Columns in order of appearance.
    pub fields: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Creates an empty table model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once both a table name and at least one column exist.
    pub fn is_complete(&self) -> bool {
        !self.raw_name.is_empty() && !self.fields.is_empty()
    }

    /// Appends a column.
    pub fn push_field(&mut self, field: ColumnDefinition) {
        self.fields.push(field);
    }

    /// Flags the first column named `raw_name` as part of the primary key.
    ///
    /// Returns false when no column has that name.
    pub fn mark_primary_key(&mut self, raw_name: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.raw_name == raw_name) {
            Some(field) => {
                field.primary_key = true;
                true
            }
            None => false,
        }
    }

    /// Returns the columns flagged as primary key, in declaration order.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.fields.iter().filter(|f| f.primary_key)
    }
}

impl std::fmt::Display for TableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "table {} ({}) {{", self.raw_name, self.name)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        write!(f, "}}")
    }
}
