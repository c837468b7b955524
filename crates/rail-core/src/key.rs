//! Case-insensitive station identity.
//!
//! Station names compare case-insensitively everywhere: "Colombo" and
//! "colombo" denote the same station.  Rather than relying on a
//! case-insensitive comparator baked into a map type, identity is an
//! explicit normalized key — [`StationKey`] folds the name to Unicode
//! lowercase once, and the folded form is what gets hashed, compared, and
//! ordered.

use std::fmt;

/// Normalized station identity: the lowercase folding of a station name.
///
/// `Ord` on the folded form doubles as the deterministic tie-break key in
/// the router's frontier, so equal-distance candidates dequeue in a stable
/// order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationKey(String);

impl StationKey {
    /// Fold `name` to its canonical lookup form.
    pub fn new(name: &str) -> Self {
        StationKey(name.to_lowercase())
    }

    /// The folded form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationKey {
    fn from(name: &str) -> Self {
        StationKey::new(name)
    }
}
