//! Transport modes, terminal kinds, and optimization metrics.

use serde::Deserialize;

/// How one leg of a trip is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walk,
    Ride,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Ride => "ride",
        }
    }
}

/// Which vehicles serve a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    Bus,
    Jeep,
    EJeep,
    Tricycle,
    Mixed,
}

impl TerminalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TerminalKind::Bus => "bus",
            TerminalKind::Jeep => "jeep",
            TerminalKind::EJeep => "e-jeep",
            TerminalKind::Tricycle => "tricycle",
            TerminalKind::Mixed => "mixed",
        }
    }
}

/// The edge-weight dimension the pathfinder minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Time,
    Distance,
    Cost,
}

impl Metric {
    /// The presentation category an itinerary optimized for this metric
    /// carries.
    pub fn category(self) -> RouteCategory {
        match self {
            Metric::Time => RouteCategory::Fastest,
            Metric::Distance => RouteCategory::Shortest,
            Metric::Cost => RouteCategory::Cheapest,
        }
    }
}

/// Presentation category of a computed itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCategory {
    Fastest,
    Cheapest,
    Shortest,
}

impl RouteCategory {
    pub fn label(self) -> &'static str {
        match self {
            RouteCategory::Fastest => "fastest",
            RouteCategory::Cheapest => "cheapest",
            RouteCategory::Shortest => "shortest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_maps_to_category() {
        assert_eq!(Metric::Time.category(), RouteCategory::Fastest);
        assert_eq!(Metric::Distance.category(), RouteCategory::Shortest);
        assert_eq!(Metric::Cost.category(), RouteCategory::Cheapest);
    }

    #[test]
    fn metric_deserializes_lowercase() {
        let m: Metric = serde_json::from_str("\"time\"").unwrap();
        assert_eq!(m, Metric::Time);
        let m: Metric = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(m, Metric::Cost);
        assert!(serde_json::from_str::<Metric>("\"TIME\"").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(RouteCategory::Fastest.label(), "fastest");
        assert_eq!(RouteCategory::Cheapest.label(), "cheapest");
        assert_eq!(RouteCategory::Shortest.label(), "shortest");
        assert_eq!(TravelMode::Walk.as_str(), "walk");
        assert_eq!(TerminalKind::EJeep.as_str(), "e-jeep");
    }
}
