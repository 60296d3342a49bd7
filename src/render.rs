//! Turns a fetched response plus an `Accept` header into a response body:
//! pass-through JSON or a serialized RDF graph, together with the exact
//! content type that selected the serialization.

use crate::negotiate::{choose_format, ResponseFormat};
use crate::rdf::error::SerializationError;
use crate::rdf::graph::{stations_to_graph, values_to_graph};
use crate::rdf::writer::{serialize, RdfFormat};
use crate::types::response::{StationsResponse, ValuesResponse};

/// A rendered response body and the content type it should be served with.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub body: String,
    pub content_type: String,
}

/// Renders a station listing for the given `Accept` header.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::{render_stations, StationsResponse};
///
/// # fn demo(response: &StationsResponse) -> Result<(), wetterdienst_rdf::SerializationError> {
/// let rendered = render_stations(response, Some("text/turtle"))?;
/// assert_eq!(rendered.content_type, "text/turtle");
/// # Ok(())
/// # }
/// ```
pub fn render_stations(
    response: &StationsResponse,
    accept: Option<&str>,
) -> Result<Rendered, SerializationError> {
    let negotiated = choose_format(accept);
    let body = match negotiated.format {
        ResponseFormat::Json => serde_json::to_string(response)?,
        ResponseFormat::Rdf => {
            let graph = stations_to_graph(response);
            let format = RdfFormat::from_content_type(Some(&negotiated.content_type));
            serialize(&graph, format)?
        }
    };
    Ok(Rendered {
        body,
        content_type: negotiated.content_type,
    })
}

/// Renders a values response for the given `Accept` header.
pub fn render_values(
    response: &ValuesResponse,
    accept: Option<&str>,
) -> Result<Rendered, SerializationError> {
    let negotiated = choose_format(accept);
    let body = match negotiated.format {
        ResponseFormat::Json => serde_json::to_string(response)?,
        ResponseFormat::Rdf => {
            let graph = values_to_graph(response);
            let format = RdfFormat::from_content_type(Some(&negotiated.content_type));
            serialize(&graph, format)?
        }
    };
    Ok(Rendered {
        body,
        content_type: negotiated.content_type,
    })
}
