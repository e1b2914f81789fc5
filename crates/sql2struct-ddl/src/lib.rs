//! # sql2struct-ddl
//!
//! Turns a MySQL-style `CREATE TABLE` statement into a Go struct declaration.
//!
//! This crate provides:
//! - Line normalization and a filter for index/engine/constraint lines
//! - A block-comment tracker for `/* ... */` spans across lines
//! - A lexer and a line parser that build a `TableDefinition`
//! - A tag composer and a printer that render the Go struct
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sql2struct_core::options::GenerateOptions;
//! use sql2struct_ddl::generate_at;
//!
//! let source = "\
//! CREATE TABLE t_user (
//!   f_id int unsigned auto_increment,
//!   f_name varchar(64) COMMENT 'user name',
//!   PRIMARY KEY (f_id)
//! );";
//!
//! let stamp = NaiveDate::from_ymd_opt(2024, 3, 3)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let go = generate_at(source.lines(), &GenerateOptions::default(), stamp).expect("parse failed");
//! assert!(go.contains("type User struct {"));
//! assert!(go.contains("    Id uint32 `gorm:\"column:f_id;primaryKey;autoIncrement\""));
//! ```

mod comment;
pub mod error;
mod lexer;
pub mod line;
pub mod parser;
pub mod pipeline;
pub mod printer;
pub mod tags;
pub mod token;

pub use comment::{CommentBlockTracker, CommentState};
pub use error::DdlError;
pub use pipeline::{generate, generate_at, parse};
pub use printer::{print, print_all};
