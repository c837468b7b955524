//! `rail-core` — foundational types for the `railnet` workspace.
//!
//! This crate is a dependency of every other `rail-*` crate.  It
//! intentionally has no `rail-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`key`]   | `StationKey` — case-insensitive station identity        |
//! | [`error`] | `RailError`, `RailResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod key;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RailError, RailResult};
pub use key::StationKey;
