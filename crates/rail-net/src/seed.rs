//! Fixed sample dataset.
//!
//! The demo network covers the Sri Lankan intercity lines used by the
//! `railctl` console.  Only the public mutation operations are used — the
//! loader's whole contract with the store is "call them in some order" —
//! so re-running it against a populated network is harmless (routes
//! upsert, stations are idempotent).

use crate::network::RailNetwork;

/// Populate `network` with the sample Sri Lanka intercity network.
///
/// Distances are in kilometres.  Galle and Colombo are connected in both
/// directions; Trincomalee has no departures.
pub fn load_sample_network(network: &mut RailNetwork) {
    network.add_route("Colombo", "Kandy", 115);
    network.add_route("Colombo", "Galle", 120);
    network.add_route("Kandy", "Anuradhapura", 138);
    network.add_route("Anuradhapura", "Jaffna", 193);
    network.add_route("Kandy", "Trincomalee", 174);
    network.add_route("Galle", "Colombo", 120);
    network.add_station("Trincomalee");
    network.add_station("Jaffna");
}
