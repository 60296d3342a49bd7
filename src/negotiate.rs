//! HTTP `Accept` header parsing and response format selection.

use std::cmp::Ordering;

/// One media type from an `Accept` header together with its quality.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    pub media_type: String,
    pub quality: f64,
}

/// The two response shapes the adapter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Rdf,
}

/// The outcome of content negotiation: which shape to produce and the exact
/// content type that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct Negotiated {
    pub format: ResponseFormat,
    pub content_type: String,
}

/// RDF media types the serializers support.
pub const RDF_MEDIA_TYPES: [&str; 6] = [
    "text/turtle",
    "application/n-triples",
    "application/n-quads",
    "application/trig",
    "text/n3",
    "application/ld+json",
];

/// Parses an `Accept` header into media types ordered by descending quality.
///
/// Each comma-separated entry is split on semicolons; the first token is the
/// media type and a `q=` parameter supplies the quality (1.0 when absent).
/// Entries whose quality is non-numeric or not positive are dropped. The
/// sort is stable, so equal qualities keep their header order.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::parse_accept;
///
/// let ranges = parse_accept("text/turtle;q=0.9, application/n-triples");
/// assert_eq!(ranges[0].media_type, "application/n-triples");
/// assert_eq!(ranges[1].media_type, "text/turtle");
/// ```
pub fn parse_accept(header: &str) -> Vec<MediaRange> {
    let mut entries: Vec<MediaRange> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let media_type = parts.next().unwrap_or_default().trim().to_string();
            let quality = parts
                .find_map(|parameter| parameter.trim().strip_prefix("q="))
                .map_or(Some(1.0), |value| value.trim().parse::<f64>().ok());

            match quality {
                Some(quality) if quality > 0.0 => Some(MediaRange {
                    media_type,
                    quality,
                }),
                _ => None,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });
    entries
}

/// Decides the response format for an `Accept` header.
///
/// Walks the parsed media types in priority order: exact `application/json`
/// selects JSON, a supported RDF media type selects RDF with that content
/// type, and any `+json` suffix falls back to JSON. A non-empty header that
/// matches nothing defaults to Turtle RDF; an absent or empty header
/// defaults to JSON.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::{choose_format, ResponseFormat};
///
/// let negotiated = choose_format(Some("text/turtle"));
/// assert_eq!(negotiated.format, ResponseFormat::Rdf);
/// assert_eq!(negotiated.content_type, "text/turtle");
///
/// assert_eq!(choose_format(None).format, ResponseFormat::Json);
/// ```
pub fn choose_format(accept: Option<&str>) -> Negotiated {
    fn json() -> Negotiated {
        Negotiated {
            format: ResponseFormat::Json,
            content_type: "application/json".to_string(),
        }
    }

    let header = accept.unwrap_or("");
    if header.trim().is_empty() {
        return json();
    }

    for range in parse_accept(header) {
        let media_type = range.media_type.as_str();
        if media_type == "application/json" {
            return json();
        }
        if RDF_MEDIA_TYPES.contains(&media_type) {
            return Negotiated {
                format: ResponseFormat::Rdf,
                content_type: range.media_type,
            };
        }
        if media_type.ends_with("+json") {
            return json();
        }
    }

    Negotiated {
        format: ResponseFormat::Rdf,
        content_type: "text/turtle".to_string(),
    }
}
