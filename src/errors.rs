//! Unified error types and result handling.
//!
//! Lookup misses on `get`-style reads are expressed as `Ok(None)`; only
//! operations addressed at a specific record (updates, status changes,
//! detail reads) surface the `*NotFound` variants.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input-boundary validation failure
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what was rejected
        message: String,
    },

    /// Update or delete addressed at a customer id that does not exist
    #[error("customer {id} not found")]
    CustomerNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// Update addressed at a lead id that does not exist
    #[error("lead {id} not found")]
    LeadNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// Status change or detail read addressed at a quote id that does not exist
    #[error("quote {id} not found")]
    QuoteNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// Monetary input that is negative or not finite
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Quote line quantity below 1
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// Lead probability outside 0..=100
    #[error("invalid probability: {probability}")]
    InvalidProbability {
        /// The rejected probability
        probability: i32,
    },

    /// Underlying store failure
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
