//! # sql2struct-core
//!
//! Shared model for the sql2struct generator: the table and column
//! definitions produced by the DDL parser, the SQL-to-Go type mapping,
//! identifier transforms, and the options consumed by the parser and the
//! struct renderer.

pub mod error;
pub mod naming;
pub mod options;
pub mod types;

pub use error::CoreError;
