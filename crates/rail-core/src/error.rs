//! Workspace error type.
//!
//! Every foreseeable failure in the engine resolves to a reportable,
//! typed outcome — nothing in `rail-*` panics on bad queries.  Callers
//! decide how each variant is surfaced.

use thiserror::Error;

/// The error type shared by all `rail-*` crates.
#[derive(Debug, Error)]
pub enum RailError {
    /// A query or removal referenced a station the network does not know.
    #[error("station '{0}' not found in network")]
    StationNotFound(String),

    /// `remove_route` targeted a direct route that does not exist.
    #[error("route {from} -> {to} not found")]
    RouteNotFound { from: String, to: String },

    /// The graph holds both endpoints but no path connects them.
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}

/// Shorthand result type for all `rail-*` crates.
pub type RailResult<T> = Result<T, RailError>;
