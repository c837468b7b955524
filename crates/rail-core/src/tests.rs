//! Unit tests for rail-core.

#[cfg(test)]
mod key {
    use std::collections::HashMap;

    use crate::StationKey;

    #[test]
    fn folding_equates_casings() {
        assert_eq!(StationKey::new("Colombo"), StationKey::new("COLOMBO"));
        assert_eq!(StationKey::new("colombo"), StationKey::new("Colombo"));
        assert_ne!(StationKey::new("Colombo"), StationKey::new("Kandy"));
    }

    #[test]
    fn display_is_folded() {
        assert_eq!(StationKey::new("Anuradhapura").to_string(), "anuradhapura");
        assert_eq!(StationKey::new("JAFFNA").as_str(), "jaffna");
    }

    #[test]
    fn ordering_ignores_case() {
        let mut keys = vec![
            StationKey::new("Trincomalee"),
            StationKey::new("GALLE"),
            StationKey::new("kandy"),
        ];
        keys.sort();
        let folded: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(folded, ["galle", "kandy", "trincomalee"]);
    }

    #[test]
    fn usable_as_map_key_across_casings() {
        let mut map = HashMap::new();
        map.insert(StationKey::new("Colombo"), 1);
        map.insert(StationKey::new("COLOMBO"), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&StationKey::new("cOlOmBo")], 2);
    }
}

#[cfg(test)]
mod error {
    use crate::RailError;

    #[test]
    fn messages_name_the_stations() {
        let not_found = RailError::StationNotFound("Matara".into());
        assert_eq!(not_found.to_string(), "station 'Matara' not found in network");

        let no_route = RailError::NoRoute { from: "Colombo".into(), to: "Jaffna".into() };
        assert_eq!(no_route.to_string(), "no route from Colombo to Jaffna");

        let missing = RailError::RouteNotFound { from: "Galle".into(), to: "Kandy".into() };
        assert_eq!(missing.to_string(), "route Galle -> Kandy not found");
    }
}
