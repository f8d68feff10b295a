//! Tracing and observability module.
//!
//! Provides distributed tracing capabilities for the bookshelf service.

/// Tracer configuration and initialization.
pub mod tracer;
