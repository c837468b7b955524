//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The multi-stop planner calls routing via the [`Router`] trait, so
//! applications can swap in custom implementations (A*, landmark
//! heuristics, fare-based costs) without touching the planner or the
//! store.  The default [`DijkstraRouter`] is sufficient for networks of
//! interactive size.
//!
//! # Cost units
//!
//! All costs are kilometre distances (`u32`), accumulated with saturating
//! arithmetic so pathological inputs degrade to "very far" rather than
//! wrapping.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use rail_core::{RailError, RailResult, StationKey};

use crate::network::RailNetwork;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: stations to pass through, in order, and
/// the total distance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stations visited in order, source to destination inclusive, in
    /// canonical casing.
    pub stations: Vec<String>,
    /// Cumulative distance in kilometres.
    pub total_km: u32,
}

impl Route {
    /// `true` if source and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.stations.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-route engine.
///
/// Implementations read the network but never mutate it.
pub trait Router {
    /// Compute the cheapest route from `from` to `to`.
    ///
    /// Errors with [`RailError::StationNotFound`] if either endpoint is
    /// unknown, and [`RailError::NoRoute`] if the graph does not connect
    /// them.  `from == to` (case-insensitively) is the trivial
    /// one-station route with distance 0, not an error.
    fn route(&self, network: &RailNetwork, from: &str, to: &str) -> RailResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the adjacency map.
///
/// Correct only for non-negative distances, which [`RouteEdge`]'s `u32`
/// guarantees by construction.
///
/// [`RouteEdge`]: crate::network::RouteEdge
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, network: &RailNetwork, from: &str, to: &str) -> RailResult<Route> {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(network: &RailNetwork, from: &str, to: &str) -> RailResult<Route> {
    let from_key = StationKey::new(from);
    let to_key = StationKey::new(to);

    let origin = network
        .station(&from_key)
        .ok_or_else(|| RailError::StationNotFound(from.to_owned()))?;
    network
        .station(&to_key)
        .ok_or_else(|| RailError::StationNotFound(to.to_owned()))?;

    if from_key == to_key {
        return Ok(Route { stations: vec![origin.name.clone()], total_km: 0 });
    }

    // dist[k] = best known distance from the source to k.
    let mut dist: HashMap<StationKey, u32> = network
        .station_keys()
        .map(|k| (k.clone(), u32::MAX))
        .collect();
    // prev[k] = predecessor of k on the best known route.
    let mut prev: HashMap<StationKey, StationKey> = HashMap::new();

    dist.insert(from_key.clone(), 0);

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.  The
    // station key as secondary sort field gives deterministic tie-breaking
    // between equal-distance candidates.
    let mut frontier: BinaryHeap<Reverse<(u32, StationKey)>> = BinaryHeap::new();
    frontier.push(Reverse((0, from_key.clone())));

    while let Some(Reverse((cost, key))) = frontier.pop() {
        if key == to_key {
            return Ok(reconstruct(network, &prev, &from_key, &to_key, cost));
        }

        // Skip stale heap entries: the station was already settled with a
        // smaller distance on an earlier pop.
        if dist.get(&key).is_some_and(|&d| cost > d) {
            continue;
        }

        let Some(station) = network.station(&key) else { continue };
        for edge in &station.routes {
            let neighbor = StationKey::new(&edge.to);
            let new_cost = cost.saturating_add(edge.distance_km);

            if dist.get(&neighbor).is_some_and(|&d| new_cost < d) {
                dist.insert(neighbor.clone(), new_cost);
                prev.insert(neighbor.clone(), key.clone());
                frontier.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(RailError::NoRoute { from: from.to_owned(), to: to.to_owned() })
}

/// Walk the predecessor map backward from `to` to `from`, then reverse
/// into a forward route in canonical station names.
fn reconstruct(
    network: &RailNetwork,
    prev: &HashMap<StationKey, StationKey>,
    from: &StationKey,
    to: &StationKey,
    total_km: u32,
) -> Route {
    let mut keys = vec![to.clone()];
    let mut cursor = to;
    while cursor != from {
        // Every settled station except the source has a predecessor; an
        // absent entry would mean reconstruct was called on an unreached
        // destination, so stop rather than loop.
        match prev.get(cursor) {
            Some(p) => {
                keys.push(p.clone());
                cursor = p;
            }
            None => break,
        }
    }
    keys.reverse();

    let stations = keys
        .iter()
        .filter_map(|k| network.station(k))
        .map(|s| s.name.clone())
        .collect();

    Route { stations, total_km }
}
