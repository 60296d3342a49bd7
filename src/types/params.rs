//! Request-side filter types and well-known parameter paths.

use crate::error::ValidationError;

/// A geographical coordinate as latitude and longitude.
///
/// Latitude is the first element (index 0), longitude the second (index 1),
/// both in decimal degrees.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !self.0.is_finite() || !(-90.0..=90.0).contains(&self.0) {
            return Err(ValidationError::LatitudeOutOfRange(self.0));
        }
        if !self.1.is_finite() || !(-180.0..=180.0).contains(&self.1) {
            return Err(ValidationError::LongitudeOutOfRange(self.1));
        }
        Ok(())
    }

    /// Encodes as the `"lat,lon"` query value the provider expects.
    pub(crate) fn to_query(self) -> String {
        format!("{},{}", self.0, self.1)
    }
}

/// A rectangular search area for station listings.
///
/// `lat_min`/`lon_min` name the south-west corner, `lat_max`/`lon_max` the
/// north-east corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        LatLon(self.lat_min, self.lon_min).validate()?;
        LatLon(self.lat_max, self.lon_max).validate()?;
        if self.lat_min > self.lat_max || self.lon_min > self.lon_max {
            return Err(ValidationError::UnorderedBoundingBox);
        }
        Ok(())
    }

    /// Encodes as four comma-joined numbers, south-west corner first.
    pub(crate) fn to_query(self) -> String {
        format!(
            "{},{},{},{}",
            self.lat_min, self.lon_min, self.lat_max, self.lon_max
        )
    }
}

/// Builds a `resolution/dataset/parameter` path for the `parameters` query
/// value.
///
/// The taxonomy of valid combinations is the provider's; this helper only
/// joins the segments.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::parameter_path;
///
/// assert_eq!(
///     parameter_path("daily", "climate_summary", "sunshine_duration"),
///     "daily/climate_summary/sunshine_duration"
/// );
/// ```
pub fn parameter_path(resolution: &str, dataset: &str, parameter: &str) -> String {
    format!("{resolution}/{dataset}/{parameter}")
}

/// Pre-defined parameter paths for common weather data.
pub mod weather_parameters {
    pub const SUNSHINE_DURATION_ANNUAL: &str = "annual/climate_summary/sunshine_duration";
    pub const SUNSHINE_DURATION_DAILY: &str = "daily/climate_summary/sunshine_duration";
    pub const SUNSHINE_DURATION_HOURLY: &str = "hourly/sun/sunshine_duration";
    pub const TEMPERATURE_MEAN_ANNUAL: &str = "annual/climate_summary/temperature_air_mean_2m";
    pub const PRECIPITATION_ANNUAL: &str = "annual/climate_summary/precipitation_height";
    pub const CLOUD_COVER_DAILY: &str = "daily/climate_summary/cloud_cover_total";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlon_bounds_are_checked() {
        assert!(LatLon(52.52, 13.40).validate().is_ok());
        assert!(LatLon(90.0, 180.0).validate().is_ok());
        assert_eq!(
            LatLon(91.0, 0.0).validate(),
            Err(ValidationError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            LatLon(0.0, -181.0).validate(),
            Err(ValidationError::LongitudeOutOfRange(-181.0))
        );
        assert!(LatLon(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn latlon_encodes_as_comma_pair() {
        assert_eq!(LatLon(52.52, 13.4).to_query(), "52.52,13.4");
    }

    #[test]
    fn bounding_box_corner_order_is_checked() {
        let bbox = BoundingBox {
            lat_min: 50.0,
            lon_min: 10.0,
            lat_max: 54.0,
            lon_max: 15.0,
        };
        assert!(bbox.validate().is_ok());
        assert_eq!(bbox.to_query(), "50,10,54,15");

        let inverted = BoundingBox {
            lat_min: 54.0,
            lon_min: 10.0,
            lat_max: 50.0,
            lon_max: 15.0,
        };
        assert_eq!(
            inverted.validate(),
            Err(ValidationError::UnorderedBoundingBox)
        );
    }
}
