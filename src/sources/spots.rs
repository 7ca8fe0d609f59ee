use serde::{Deserialize, Serialize};

/// A cluster spot as forwarded by the logging program. Only the call sign
/// matters here; other fields are kept for display and ignored otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub freq: Option<f64>,
    #[serde(default)]
    pub spotter: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Spotted call signs in spot order, without missing or empty entries.
pub fn spot_calls(spots: &[Spot]) -> Vec<String> {
    spots
        .iter()
        .filter_map(|spot| spot.callsign.as_deref())
        .filter(|call| !call.is_empty())
        .map(str::to_string)
        .collect()
}
