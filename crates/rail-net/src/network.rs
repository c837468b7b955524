//! Railway network storage.
//!
//! # Data layout
//!
//! The graph is a mutable adjacency map keyed by [`StationKey`]: each
//! station owns its outgoing [`RouteEdge`] list in insertion order.  The
//! map supports add/remove of stations and routes at any time, and every
//! mutation is immediately visible to the next read — there are no hidden
//! caches and no frozen build step.
//!
//! At most one route exists per `(source, destination)` pair; adding a
//! route that already exists (matched case-insensitively by destination)
//! overwrites its distance instead of duplicating.
//!
//! Routes are **directed**: `Colombo -> Kandy` says nothing about
//! `Kandy -> Colombo`.  Bidirectional lines are modelled as two routes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rail_core::{RailError, RailResult, StationKey};

// ── RouteEdge ─────────────────────────────────────────────────────────────────

/// A directed route leaving a station.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEdge {
    /// Canonical name of the destination station.
    pub to: String,
    /// Track distance in kilometres.  `u32` makes negative distances
    /// unrepresentable, which is what keeps Dijkstra's relaxation sound.
    pub distance_km: u32,
}

// ── Station ───────────────────────────────────────────────────────────────────

/// A station: canonical display name plus departures in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Station {
    pub(crate) name: String,
    pub(crate) routes: Vec<RouteEdge>,
}

impl Station {
    fn new(name: &str) -> Self {
        Station { name: name.to_owned(), routes: Vec::new() }
    }
}

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// Directed railway graph keyed by case-insensitive station name.
///
/// The casing that first introduced a station — by [`add_station`] or as
/// either endpoint of [`add_route`] — becomes its canonical display form;
/// later references in any casing resolve to the same station.
///
/// [`add_station`]: RailNetwork::add_station
/// [`add_route`]: RailNetwork::add_route
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    stations: HashMap<StationKey, Station>,
}

impl RailNetwork {
    /// Construct an empty network with no stations or routes.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.stations.values().map(|s| s.routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a station if it is not already present (case-insensitively).
    ///
    /// Returns `true` if the station was newly created.  Never fails;
    /// re-adding an existing station in any casing is a no-op.
    pub fn add_station(&mut self, name: &str) -> bool {
        match self.stations.entry(StationKey::new(name)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Station::new(name));
                true
            }
        }
    }

    /// Add a directed route `from -> to`, creating either endpoint if
    /// absent.
    ///
    /// If a `from -> to` route already exists its distance is replaced;
    /// otherwise the route is appended to `from`'s departure list.
    pub fn add_route(&mut self, from: &str, to: &str, distance_km: u32) {
        self.add_station(to);
        let to_key = StationKey::new(to);
        let dest = self.stations[&to_key].name.clone();

        let origin = self
            .stations
            .entry(StationKey::new(from))
            .or_insert_with(|| Station::new(from));

        match origin.routes.iter_mut().find(|r| StationKey::new(&r.to) == to_key) {
            Some(existing) => existing.distance_km = distance_km,
            None => origin.routes.push(RouteEdge { to: dest, distance_km }),
        }
    }

    /// Remove a station and every route that references it.
    ///
    /// Cascades: the station's own departures go away with it, and every
    /// route elsewhere in the network arriving at the station is deleted
    /// too.  If the station is unknown, nothing changes and
    /// [`RailError::StationNotFound`] is returned.
    pub fn remove_station(&mut self, name: &str) -> RailResult<()> {
        let key = StationKey::new(name);
        if self.stations.remove(&key).is_none() {
            return Err(RailError::StationNotFound(name.to_owned()));
        }
        for station in self.stations.values_mut() {
            station.routes.retain(|r| StationKey::new(&r.to) != key);
        }
        Ok(())
    }

    /// Remove the directed route `from -> to`.
    ///
    /// [`RailError::RouteNotFound`] if no such route exists, including
    /// when `from` itself is unknown.
    pub fn remove_route(&mut self, from: &str, to: &str) -> RailResult<()> {
        let missing = || RailError::RouteNotFound {
            from: from.to_owned(),
            to: to.to_owned(),
        };

        let origin = self
            .stations
            .get_mut(&StationKey::new(from))
            .ok_or_else(missing)?;

        let to_key = StationKey::new(to);
        let before = origin.routes.len();
        origin.routes.retain(|r| StationKey::new(&r.to) != to_key);
        if origin.routes.len() == before {
            return Err(missing());
        }
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `true` if a station with this name exists, in any casing.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(&StationKey::new(name))
    }

    /// Canonical display name for `name`, if the station exists.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.stations
            .get(&StationKey::new(name))
            .map(|s| s.name.as_str())
    }

    /// Outgoing routes of `name`, in insertion order.
    ///
    /// Unknown stations and stations with no departures both yield an
    /// empty slice rather than an error.
    pub fn routes_from(&self, name: &str) -> &[RouteEdge] {
        self.stations
            .get(&StationKey::new(name))
            .map_or(&[], |s| s.routes.as_slice())
    }

    /// All station names in canonical casing, sorted for stable display.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.values().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Every station with its departure list, sorted by name.  This is the
    /// display surface: one row per station, routes in insertion order.
    pub fn stations(&self) -> Vec<(&str, &[RouteEdge])> {
        let mut rows: Vec<(&str, &[RouteEdge])> = self
            .stations
            .values()
            .map(|s| (s.name.as_str(), s.routes.as_slice()))
            .collect();
        rows.sort_unstable_by_key(|&(name, _)| name);
        rows
    }

    // ── Router internals ──────────────────────────────────────────────────

    /// Iterate the normalized keys of all stations.
    pub(crate) fn station_keys(&self) -> impl Iterator<Item = &StationKey> {
        self.stations.keys()
    }

    /// Resolve a normalized key to its station record.
    pub(crate) fn station(&self, key: &StationKey) -> Option<&Station> {
        self.stations.get(key)
    }
}
