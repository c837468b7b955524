//! Mandatory-stop route planning.
//!
//! # Search structure
//!
//! The planner brute-forces every ordering of the mandatory stop set: `k`
//! stops cost `k!` chained shortest-path evaluations.  That is the
//! intended contract — stop sets are a handful of forced waypoints, not a
//! general TSP instance.  Orderings are generated lazily with Heap's
//! algorithm, so only one permutation is materialized at a time.

use rail_core::{RailError, RailResult, StationKey};

use crate::network::RailNetwork;
use crate::router::{Route, Router};

// ── Planner ───────────────────────────────────────────────────────────────────

/// Cheapest route from `from` to `to` passing through every station in
/// `stops`, in whichever order minimizes total distance.
///
/// Stops are deduplicated case-insensitively, and stops equal to `from`
/// or `to` are dropped as redundant — the endpoints are visited anyway.
/// With no effective stops this is exactly `router.route(network, from,
/// to)`.
///
/// An ordering in which any leg is unreachable (or references an unknown
/// station) is discarded; if no ordering survives, the result is
/// [`RailError::NoRoute`].
pub fn plan_with_stops<R: Router>(
    network: &RailNetwork,
    router: &R,
    from: &str,
    to: &str,
    stops: &[&str],
) -> RailResult<Route> {
    let from_key = StationKey::new(from);
    let to_key = StationKey::new(to);

    // Effective stop set: unique by identity, endpoints excluded.
    let mut seen: Vec<StationKey> = Vec::new();
    let mut waypoints: Vec<&str> = Vec::new();
    for &stop in stops {
        let key = StationKey::new(stop);
        if key == from_key || key == to_key || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        waypoints.push(stop);
    }

    if waypoints.is_empty() {
        return router.route(network, from, to);
    }

    let mut best: Option<Route> = None;
    for ordering in Permutations::new(waypoints) {
        let Some(candidate) = chain_legs(network, router, from, to, &ordering) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| candidate.total_km < b.total_km) {
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| RailError::NoRoute { from: from.to_owned(), to: to.to_owned() })
}

/// Chain shortest-path legs through `waypoints` and on to `to`, eliding
/// the duplicated junction station between consecutive legs.  `None` if
/// any leg fails to route.
fn chain_legs<R: Router>(
    network: &RailNetwork,
    router: &R,
    from: &str,
    to: &str,
    waypoints: &[&str],
) -> Option<Route> {
    let mut stations: Vec<String> = Vec::new();
    let mut total_km: u32 = 0;
    let mut leg_start = from;

    for &target in waypoints.iter().chain(std::iter::once(&to)) {
        let leg = router.route(network, leg_start, target).ok()?;
        total_km = total_km.saturating_add(leg.total_km);
        // Each leg starts where the previous one ended.
        if !stations.is_empty() {
            stations.pop();
        }
        stations.extend(leg.stations);
        leg_start = target;
    }

    Some(Route { stations, total_km })
}

// ── Permutations ──────────────────────────────────────────────────────────────

/// Lazy permutation sequence over a set of items (Heap's algorithm).
///
/// Yields each of the `n!` orderings exactly once, holding a single
/// ordering in memory at a time.  An empty input yields nothing.
pub(crate) struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    depth: usize,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Permutations { items, counters: vec![0; n], depth: 1, started: false }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            if self.items.is_empty() {
                return None;
            }
            return Some(self.items.clone());
        }
        while self.depth < self.items.len() {
            if self.counters[self.depth] < self.depth {
                if self.depth % 2 == 0 {
                    self.items.swap(0, self.depth);
                } else {
                    self.items.swap(self.counters[self.depth], self.depth);
                }
                self.counters[self.depth] += 1;
                self.depth = 1;
                return Some(self.items.clone());
            }
            self.counters[self.depth] = 0;
            self.depth += 1;
        }
        None
    }
}
