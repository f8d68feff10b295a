//! `PostgreSQL` statement building.
//!
//! Identifiers are double-quoted and arguments use numbered `$n` placeholders.

pub use select::{SqlSelectBuilder, SqlSelectStatement};

mod select;
mod utility;
