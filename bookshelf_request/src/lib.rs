//! Building blocks for turning catalog requests into parameterized SQL.
//!
//! Values are never interpolated into statement text. Every value ends up in
//! the statement's argument list and is referenced by a placeholder.

pub mod error;
pub mod sql;
pub mod value;
