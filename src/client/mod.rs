//! The HTTP client for the wetterdienst REST API: URL construction, bounded
//! retries with exponential backoff, and a per-attempt timeout that cancels
//! the in-flight request.

pub mod error;
pub mod query;

use std::time::Duration;

use bon::bon;
use log::{debug, warn};
use reqwest::Url;
use serde_json::Value as JsonValue;

use crate::client::error::FetchError;
use crate::error::{ValidationError, WetterdienstRdfError};
use crate::types::params::{BoundingBox, LatLon};
use crate::types::response::{StationsResponse, ValuesResponse};
use query::QueryValue;

const DEFAULT_BASE_URL: &str = "https://wetterdienst.eobs.org/api/";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
const BACKOFF_BASE_MS: u64 = 1000;
const BACKOFF_CAP_MS: u64 = 5000;

/// Delay before the next attempt: doubles per attempt starting at one
/// second, capped at five.
fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    Duration::from_millis((BACKOFF_BASE_MS << exponent).min(BACKOFF_CAP_MS))
}

/// Client for the wetterdienst REST API.
///
/// One instance owns one connection pool and its retry configuration;
/// construct it once and pass it by reference wherever requests are made.
/// All requests are GETs and carry no state, so a single client can serve
/// concurrent lookups without synchronization.
///
/// # Examples
///
/// ```no_run
/// # use wetterdienst_rdf::{WetterdienstClient, WetterdienstRdfError};
/// # async fn run() -> Result<(), WetterdienstRdfError> {
/// let client = WetterdienstClient::new()?;
/// let stations = client
///     .stations()
///     .provider("dwd")
///     .network("observation")
///     .parameters("daily/climate_summary")
///     .call()
///     .await?;
/// println!("{} stations", stations.stations.len());
/// # Ok(())
/// # }
/// ```
pub struct WetterdienstClient {
    http: reqwest::Client,
    base_url: Url,
    max_retries: u32,
    timeout: Duration,
}

#[bon]
impl WetterdienstClient {
    /// Creates a client against the default API base URL with 3 attempts
    /// per request and a 10 second per-attempt timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the compiled-in base URL fails
    /// to parse, which indicates a build problem rather than a runtime one.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT)
    }

    /// Creates a client with explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root the endpoint paths are resolved against;
    ///   must end with a slash for the resolution to keep its path.
    /// * `max_retries` - Total number of attempts per request (a value of 0
    ///   still performs one attempt).
    /// * `timeout` - Deadline applied to each attempt independently.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] when `base_url` is not an
    /// absolute URL.
    pub fn with_config(
        base_url: &str,
        max_retries: u32,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|_| FetchError::InvalidUrl {
            url: base_url.to_string(),
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            max_retries: max_retries.max(1),
            timeout,
        })
    }

    /// Fetches JSON from an API endpoint with retry, backoff and timeout.
    ///
    /// Parameters with a `None` value are omitted from the query string;
    /// the rest encode per [`QueryValue`]. Up to `max_retries` attempts are
    /// made, with `min(1000 * 2^(attempt-1), 5000)` milliseconds of backoff
    /// between them and none after the last. A timed-out attempt cancels
    /// the in-flight request and fails the whole call immediately: the
    /// deadline was already spent once, so another attempt under the same
    /// budget is pointless.
    ///
    /// # Errors
    ///
    /// Returns the last [`FetchError`] once the retry budget is exhausted,
    /// or [`FetchError::Timeout`] as soon as an attempt exceeds its
    /// deadline.
    pub async fn fetch_json(
        &self,
        endpoint: &str,
        params: &[(&str, Option<QueryValue>)],
    ) -> Result<JsonValue, FetchError> {
        let url = self.build_url(endpoint, params)?;

        let mut attempt = 1u32;
        loop {
            debug!("GET {url} (attempt {attempt}/{})", self.max_retries);
            let error = match self.attempt(&url).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if matches!(error, FetchError::Timeout { .. }) || attempt >= self.max_retries {
                return Err(error);
            }

            let delay = backoff_delay(attempt);
            warn!(
                "attempt {attempt} failed, retrying in {}ms: {error}",
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn attempt(&self, url: &Url) -> Result<JsonValue, FetchError> {
        let send = self.http.get(url.clone()).send();
        let response = match tokio::time::timeout(self.timeout, send).await {
            Ok(sent) => sent.map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?,
            // Dropping the send future aborts the in-flight request.
            Err(_elapsed) => {
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
                body,
            });
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }

    fn build_url(
        &self,
        endpoint: &str,
        params: &[(&str, Option<QueryValue>)],
    ) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|_| FetchError::InvalidUrl {
                url: format!("{}{endpoint}", self.base_url),
            })?;

        let pairs: Vec<(&str, String)> = params
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (*key, value.encode())))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Fetches stations with optional filtering.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.provider(&str)`: **Required.** Data provider identifier (e.g. `"dwd"`).
    /// * `.network(&str)`: **Required.** Measurement network (e.g. `"observation"`).
    /// * `.parameters(&str)`: **Required.** One or more
    ///   `resolution/dataset/parameter` paths; must be non-empty.
    /// * `.periods(&str)`: Optional. Period filter such as `"recent"`.
    /// * `.all(bool)`: Optional. Request the full station list.
    /// * `.station(Vec<String>)`: Optional. Restrict to specific station ids.
    /// * `.name(&str)`: Optional. Filter by station name.
    /// * `.coordinates(LatLon)`: Optional. Center of a proximity search,
    ///   encoded as `"lat,lon"`.
    /// * `.rank(u32)`: Optional. Number of nearest stations to return for a
    ///   proximity search; must be at least 1.
    /// * `.distance(f64)`: Optional. Maximum distance in kilometers for a
    ///   proximity search.
    /// * `.bbox(BoundingBox)`: Optional. Rectangular search area, encoded as
    ///   four comma-joined numbers.
    /// * `.sql(&str)`: Optional. Provider-side SQL filter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] variants for an empty `parameters`
    /// value, out-of-range coordinates, an unordered bounding box or a zero
    /// rank, all raised before any request is sent. Network and decoding
    /// failures surface as [`FetchError`] variants.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use wetterdienst_rdf::{LatLon, WetterdienstClient, WetterdienstRdfError};
    /// # async fn run() -> Result<(), WetterdienstRdfError> {
    /// let client = WetterdienstClient::new()?;
    /// let nearby = client
    ///     .stations()
    ///     .provider("dwd")
    ///     .network("observation")
    ///     .parameters("daily/climate_summary")
    ///     .periods("recent")
    ///     .coordinates(LatLon(52.52, 13.40))
    ///     .rank(5)
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn stations(
        &self,
        provider: &str,
        network: &str,
        parameters: &str,
        periods: Option<&str>,
        all: Option<bool>,
        station: Option<Vec<String>>,
        name: Option<&str>,
        coordinates: Option<LatLon>,
        rank: Option<u32>,
        distance: Option<f64>,
        bbox: Option<BoundingBox>,
        sql: Option<&str>,
    ) -> Result<StationsResponse, WetterdienstRdfError> {
        if parameters.trim().is_empty() {
            return Err(ValidationError::MissingParameter("parameters").into());
        }
        if let Some(coordinates) = coordinates {
            coordinates.validate()?;
        }
        if let Some(bbox) = bbox {
            bbox.validate()?;
        }
        if rank == Some(0) {
            return Err(ValidationError::ZeroRank.into());
        }

        let params: Vec<(&str, Option<QueryValue>)> = vec![
            ("provider", Some(QueryValue::from(provider))),
            ("network", Some(QueryValue::from(network))),
            ("parameters", Some(QueryValue::from(parameters))),
            ("periods", periods.map(QueryValue::from)),
            ("sql", sql.map(QueryValue::from)),
            ("all", all.map(QueryValue::from)),
            ("station", station.map(QueryValue::from)),
            ("name", name.map(QueryValue::from)),
            (
                "coordinates",
                coordinates.map(|coordinates| QueryValue::Text(coordinates.to_query())),
            ),
            ("rank", rank.map(QueryValue::from)),
            ("distance", distance.map(QueryValue::from)),
            ("bbox", bbox.map(|bbox| QueryValue::Text(bbox.to_query()))),
        ];

        let value = self.fetch_json("stations", &params).await?;
        let response = serde_json::from_value(value).map_err(|source| {
            FetchError::Deserialize {
                endpoint: "stations",
                source,
            }
        })?;
        Ok(response)
    }

    /// Fetches observation values for one or more stations.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.provider(&str)`: **Required.** Data provider identifier.
    /// * `.network(&str)`: **Required.** Measurement network.
    /// * `.parameters(&str)`: **Required.** Parameter paths; must be non-empty.
    /// * `.station(Vec<String>)`: **Required.** Station ids to fetch values
    ///   for; must contain at least one id.
    /// * `.periods(&str)`: Optional. Period filter.
    /// * `.date(&str)`: Optional. Date or date range filter.
    /// * `.shape(&str)`: Optional. Response shaping hint (`"long"`/`"wide"`).
    /// * `.sql(&str)`: Optional. Provider-side SQL filter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty `parameters` or `station`
    /// value before any request is sent; network and decoding failures
    /// surface as [`FetchError`] variants.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use wetterdienst_rdf::{WetterdienstClient, WetterdienstRdfError};
    /// # async fn run() -> Result<(), WetterdienstRdfError> {
    /// let client = WetterdienstClient::new()?;
    /// let values = client
    ///     .values()
    ///     .provider("dwd")
    ///     .network("observation")
    ///     .parameters("daily/climate_summary/temperature_air_mean_2m")
    ///     .station(vec!["01048".to_string()])
    ///     .date("2024-06-01")
    ///     .call()
    ///     .await?;
    /// println!("{} values", values.values.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn values(
        &self,
        provider: &str,
        network: &str,
        parameters: &str,
        station: Vec<String>,
        periods: Option<&str>,
        date: Option<&str>,
        shape: Option<&str>,
        sql: Option<&str>,
    ) -> Result<ValuesResponse, WetterdienstRdfError> {
        if parameters.trim().is_empty() {
            return Err(ValidationError::MissingParameter("parameters").into());
        }
        if station.is_empty() || station.iter().all(|id| id.trim().is_empty()) {
            return Err(ValidationError::MissingParameter("station").into());
        }

        let params: Vec<(&str, Option<QueryValue>)> = vec![
            ("provider", Some(QueryValue::from(provider))),
            ("network", Some(QueryValue::from(network))),
            ("parameters", Some(QueryValue::from(parameters))),
            ("periods", periods.map(QueryValue::from)),
            ("station", Some(QueryValue::from(station))),
            ("date", date.map(QueryValue::from)),
            ("shape", shape.map(QueryValue::from)),
            ("sql", sql.map(QueryValue::from)),
        ];

        let value = self.fetch_json("values", &params).await?;
        let response = serde_json::from_value(value).map_err(|source| {
            FetchError::Deserialize {
                endpoint: "values",
                source,
            }
        })?;
        Ok(response)
    }
}
