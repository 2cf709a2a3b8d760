//! `SalesDesk` - A sales CRM core.
//!
//! This crate holds customer, product, lead, quote, and sales-activity
//! records in a process-local store, prices quotes from the product
//! catalog with a fixed tax rate, and aggregates the pipeline into live
//! dashboard metrics. The store is an in-memory `SQLite` database by
//! default; its handle is created once at startup and passed by reference
//! to every operation.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy here
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// Configuration management for the store and the demo dataset
pub mod config;
/// Core business logic - customer, catalog, pipeline, quote, and metrics operations
pub mod core;
/// SeaORM entity definitions for the store tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
