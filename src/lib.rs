mod client;
mod error;
mod negotiate;
mod rdf;
mod render;
mod types;

pub use error::{ValidationError, WetterdienstRdfError};

pub use client::error::FetchError;
pub use client::query::QueryValue;
pub use client::WetterdienstClient;

pub use negotiate::{
    choose_format, parse_accept, MediaRange, Negotiated, ResponseFormat, RDF_MEDIA_TYPES,
};

pub use rdf::error::SerializationError;
pub use rdf::graph::{observation_uri, station_uri, stations_to_graph, values_to_graph};
pub use rdf::model::{Graph, Statement, Term};
pub use rdf::namespaces;
pub use rdf::units;
pub use rdf::units::{UnitMapping, XsdDatatype};
pub use rdf::writer::{serialize, RdfFormat};

pub use render::{render_stations, render_values, Rendered};

pub use types::params::{parameter_path, weather_parameters, BoundingBox, LatLon};
pub use types::response::{
    Observation, Producer, Provider, ResponseMetadata, Station, StationsResponse, ValuesResponse,
};
