//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Values outside the nominal ranges (|lat| ≤ 90, |lng| ≤ 180) are accepted
/// and carried through unchanged. Callers hand us raw map positions, and the
/// routing constants downstream were tuned against those positions as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    /// Create a coordinate. No range validation is performed.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared planar distance in degrees.
    ///
    /// Deliberately not geodesic: nearest-terminal selection and the fare
    /// and time constants were all tuned against plain degree deltas. Do not
    /// swap in haversine.
    pub fn sq_dist(&self, other: &LatLng) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlng = self.longitude - other.longitude;
        dlat * dlat + dlng * dlng
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
