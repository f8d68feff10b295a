//! Book listing module.
//!
//! Provides the read side of the catalog:
//! - Filter arguments for narrowing a selection
//! - Query manager resolving books and their authors
//! - Repository abstraction for data access

/// Book filter arguments.
pub mod filter;

/// Book query manager for data retrieval.
pub mod query_manager;

/// Book repository abstraction and implementations.
pub mod repository;
