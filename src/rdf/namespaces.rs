//! IRI namespaces and resource bases used throughout the generated graphs.

/// Base IRI under which station resources are minted.
pub const BASE_STATION_URL: &str = "https://wetterdienst.eobs.org/station/";
/// Base IRI under which observation resources are minted.
pub const BASE_OBSERVATION_URL: &str = "https://wetterdienst.eobs.org/observation/";

pub const DWD: &str = "https://opendata.dwd.de/#";
pub const SOSA: &str = "http://www.w3.org/ns/sosa/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const WGS84: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";
pub const QUDT: &str = "http://qudt.org/1.1/schema/qudt#";
pub const QUDT_UNIT: &str = "http://qudt.org/1.1/vocab/unit#";

/// Prefix table shared by every serializer. The order is fixed so that
/// serialized output is deterministic.
pub const PREFIXES: [(&str, &str); 8] = [
    ("dwd", DWD),
    ("sosa", SOSA),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("wgs", WGS84),
    ("qudt", QUDT),
    ("qudt_unit", QUDT_UNIT),
];
