use crate::client::error::FetchError;
use crate::rdf::error::SerializationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WetterdienstRdfError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejection of a malformed request before any network or serialization work
/// happens.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("bounding box corners are not ordered (min must be south-west)")]
    UnorderedBoundingBox,

    #[error("rank must be at least 1")]
    ZeroRank,
}
