//! Wire types for the two provider endpoints. Field names follow the JSON
//! the API emits, so responses pass through serialization losslessly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather station as returned by the `/stations` endpoint.
///
/// Immutable once received; the crate never mutates provider data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub resolution: String,
    pub dataset: String,
    pub station_id: String,
    /// Start of the station's validity interval, when the provider knows it.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the station's validity interval, when the provider knows it.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub height: f64,
    pub name: String,
    /// Administrative state, not reported for every provider.
    #[serde(default)]
    pub state: Option<String>,
    /// Distance from the query point in kilometers, present only for
    /// coordinate-based station searches.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// A single observation value as returned by the `/values` endpoint.
///
/// Belongs to exactly one station, identified by `station_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub station_id: String,
    pub resolution: String,
    pub dataset: String,
    pub parameter: String,
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default)]
    pub quality: Option<f64>,
}

/// Data provider attribution carried in every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub name_local: String,
    pub name_english: String,
    pub country: String,
    pub copyright: String,
    pub url: String,
}

/// Producing software attribution carried in every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
    pub repository: String,
    pub documentation: String,
    pub doi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub provider: Provider,
    pub producer: Producer,
}

/// Response shape of the `/stations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsResponse {
    pub metadata: ResponseMetadata,
    pub stations: Vec<Station>,
}

/// Response shape of the `/values` endpoint. Carries the stations the values
/// belong to alongside the values themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesResponse {
    pub metadata: ResponseMetadata,
    pub stations: Vec<Station>,
    pub values: Vec<Observation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_deserializes_with_and_without_optional_fields() {
        let full: Station = serde_json::from_value(serde_json::json!({
            "resolution": "daily",
            "dataset": "climate_summary",
            "station_id": "01048",
            "start_date": "1934-01-01T00:00:00+00:00",
            "end_date": "2024-12-31T00:00:00+00:00",
            "latitude": 51.1278,
            "longitude": 13.7543,
            "height": 228.0,
            "name": "Dresden-Klotzsche",
            "state": "Sachsen",
            "distance": 4.2
        }))
        .unwrap();
        assert_eq!(full.station_id, "01048");
        assert_eq!(full.distance, Some(4.2));

        let sparse: Station = serde_json::from_value(serde_json::json!({
            "resolution": "daily",
            "dataset": "climate_summary",
            "station_id": "01048",
            "latitude": 51.1278,
            "longitude": 13.7543,
            "height": 228.0,
            "name": "Dresden-Klotzsche"
        }))
        .unwrap();
        assert!(sparse.state.is_none());
        assert!(sparse.distance.is_none());
        assert!(sparse.start_date.is_none());
    }

    #[test]
    fn observation_roundtrips_through_json() {
        let observation: Observation = serde_json::from_value(serde_json::json!({
            "station_id": "01048",
            "resolution": "daily",
            "dataset": "climate_summary",
            "parameter": "temperature_air_mean_2m",
            "date": "2024-06-01T00:00:00+00:00",
            "value": 21.5,
            "quality": 3.0
        }))
        .unwrap();

        let encoded = serde_json::to_value(&observation).unwrap();
        assert_eq!(encoded["parameter"], "temperature_air_mean_2m");
        assert_eq!(encoded["value"], 21.5);
    }
}
