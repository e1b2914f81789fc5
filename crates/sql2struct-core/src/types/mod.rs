mod column_definition;
mod custom_tag;
mod go_type;
mod table_definition;

pub use column_definition::ColumnDefinition;
pub use custom_tag::CustomTag;
pub use go_type::{GoType, JsonColumnPolicy, PointerMode};
pub use table_definition::TableDefinition;
