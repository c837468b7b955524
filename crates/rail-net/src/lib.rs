//! `rail-net` — railway network graph, routing, and multi-stop planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`network`] | `RailNetwork` (mutable adjacency store), `RouteEdge`      |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`                 |
//! | [`planner`] | `plan_with_stops` — mandatory-stop route optimization     |
//! | [`seed`]    | `load_sample_network` — fixed demo dataset                |
//!
//! # Layering
//!
//! The store never routes and the routers never mutate: a caller mutates
//! [`RailNetwork`], then issues queries through a [`Router`] (or the
//! planner), which read the store through `&` borrows only.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod network;
pub mod planner;
pub mod router;
pub mod seed;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use network::{RailNetwork, RouteEdge};
pub use planner::plan_with_stops;
pub use router::{DijkstraRouter, Route, Router};
pub use seed::load_sample_network;
