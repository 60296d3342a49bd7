//! Builds statement graphs from provider responses.
//!
//! Stations are modeled as SOSA platforms (station listings) or sensors
//! (observation responses); observations link back to their station and
//! carry their result as a separate quantity-value node so the measured
//! value stays distinguishable from the observation itself.

use crate::rdf::model::{Graph, Term};
use crate::rdf::namespaces::{
    BASE_OBSERVATION_URL, BASE_STATION_URL, DWD, QUDT, RDF, SOSA, WGS84, XSD,
};
use crate::rdf::units;
use crate::types::response::{Observation, Station, StationsResponse, ValuesResponse};

/// The two rendering contexts a station can appear in.
enum StationContext {
    /// A `/stations` listing: the station is a `sosa:Platform` and carries
    /// dataset, validity interval and distance.
    Listing,
    /// A `/values` response: the station is the `sosa:Sensor` observations
    /// point back to.
    Observing,
}

/// The IRI minted for a station.
pub fn station_uri(station_id: &str) -> String {
    format!("{BASE_STATION_URL}{station_id}")
}

/// The IRI minted for an observation.
///
/// Derived from station, parameter and the epoch milliseconds of the
/// observation date, so the same observation always maps to the same IRI and
/// two observations collide only if they agree on all three.
pub fn observation_uri(observation: &Observation) -> String {
    format!(
        "{BASE_OBSERVATION_URL}{}_{}_{}",
        observation.station_id,
        observation.parameter,
        observation.date.timestamp_millis()
    )
}

/// Renders a station listing into statements.
pub fn stations_to_graph(response: &StationsResponse) -> Graph {
    let mut graph = Graph::new();
    for station in &response.stations {
        push_station(&mut graph, station, StationContext::Listing);
    }
    graph
}

/// Renders a values response into statements: first the owning stations,
/// then one observation node per value, each linked to its station.
pub fn values_to_graph(response: &ValuesResponse) -> Graph {
    let mut graph = Graph::new();
    for station in &response.stations {
        push_station(&mut graph, station, StationContext::Observing);
    }
    for observation in &response.values {
        push_observation(&mut graph, observation);
    }
    graph
}

fn push_station(graph: &mut Graph, station: &Station, context: StationContext) {
    let subject = Term::named(station_uri(&station.station_id));
    let rdf_type = Term::named(format!("{RDF}type"));

    graph.insert(
        subject.clone(),
        rdf_type.clone(),
        Term::named(format!("{DWD}WeatherStation")),
    );
    let sensing_type = match context {
        StationContext::Listing => "Platform",
        StationContext::Observing => "Sensor",
    };
    graph.insert(
        subject.clone(),
        rdf_type,
        Term::named(format!("{SOSA}{sensing_type}")),
    );

    graph.insert(
        subject.clone(),
        Term::named(format!("{DWD}station_id")),
        Term::literal(station.station_id.clone()),
    );
    graph.insert(
        subject.clone(),
        Term::named(format!("{DWD}station_name")),
        Term::literal(station.name.clone()),
    );

    graph.insert(
        subject.clone(),
        Term::named(format!("{WGS84}lat")),
        Term::typed_literal(station.latitude.to_string(), format!("{XSD}float")),
    );
    graph.insert(
        subject.clone(),
        Term::named(format!("{WGS84}long")),
        Term::typed_literal(station.longitude.to_string(), format!("{XSD}float")),
    );
    graph.insert(
        subject.clone(),
        Term::named(format!("{DWD}elevation")),
        Term::typed_literal(station.height.to_string(), format!("{XSD}int")),
    );

    if let Some(state) = &station.state {
        graph.insert(
            subject.clone(),
            Term::named(format!("{DWD}state")),
            Term::literal(state.clone()),
        );
    }

    if let StationContext::Listing = context {
        graph.insert(
            subject.clone(),
            Term::named(format!("{DWD}dataset")),
            Term::literal(station.dataset.clone()),
        );
        if let Some(start_date) = station.start_date {
            graph.insert(
                subject.clone(),
                Term::named(format!("{DWD}start_date")),
                Term::typed_literal(start_date.to_rfc3339(), format!("{XSD}dateTime")),
            );
        }
        if let Some(end_date) = station.end_date {
            graph.insert(
                subject.clone(),
                Term::named(format!("{DWD}end_date")),
                Term::typed_literal(end_date.to_rfc3339(), format!("{XSD}dateTime")),
            );
        }
        // Downstream consumers expect the distance statement to always be
        // present; an absent distance renders as "0 km".
        let distance = match station.distance {
            Some(distance) => format!("{distance} km"),
            None => "0 km".to_string(),
        };
        graph.insert(
            subject,
            Term::named(format!("{DWD}distance")),
            Term::literal(distance),
        );
    }
}

fn push_observation(graph: &mut Graph, observation: &Observation) {
    let subject = Term::named(observation_uri(observation));
    let rdf_type = Term::named(format!("{RDF}type"));

    graph.insert(
        subject.clone(),
        rdf_type.clone(),
        Term::named(format!("{DWD}Observation")),
    );
    graph.insert(
        subject.clone(),
        rdf_type.clone(),
        Term::named(format!("{SOSA}Observation")),
    );

    graph.insert(
        subject.clone(),
        Term::named(format!("{DWD}observation_station_id")),
        Term::literal(observation.station_id.clone()),
    );
    graph.insert(
        subject.clone(),
        Term::named(format!("{SOSA}madeBySensor")),
        Term::named(station_uri(&observation.station_id)),
    );

    let mapping = units::lookup(&observation.parameter);
    let converted = mapping.convert(observation.value);

    // The result is its own node: a quantity value with magnitude and unit,
    // reachable from the observation through a single predicate.
    let result = graph.fresh_blank();
    graph.insert(
        subject,
        Term::named(format!("{SOSA}hasResult")),
        result.clone(),
    );
    graph.insert(
        result.clone(),
        rdf_type,
        Term::named(format!("{QUDT}QuantityValue")),
    );
    graph.insert(
        result.clone(),
        Term::named(format!("{QUDT}numericValue")),
        Term::typed_literal(converted.to_string(), mapping.datatype.iri()),
    );
    graph.insert(
        result,
        Term::named(format!("{QUDT}unit")),
        Term::named(mapping.unit_iri()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::writer::{serialize, RdfFormat};
    use crate::types::response::{Producer, Provider, ResponseMetadata};
    use chrono::{TimeZone, Utc};

    fn metadata() -> ResponseMetadata {
        ResponseMetadata {
            provider: Provider {
                name_local: "Deutscher Wetterdienst".to_string(),
                name_english: "German Weather Service".to_string(),
                country: "Germany".to_string(),
                copyright: "© Deutscher Wetterdienst".to_string(),
                url: "https://opendata.dwd.de".to_string(),
            },
            producer: Producer {
                name: "wetterdienst".to_string(),
                version: "0.89.0".to_string(),
                repository: "https://github.com/earthobservations/wetterdienst".to_string(),
                documentation: "https://wetterdienst.readthedocs.io".to_string(),
                doi: "10.5281/zenodo.3960624".to_string(),
            },
        }
    }

    fn sample_station(station_id: &str) -> Station {
        Station {
            resolution: "daily".to_string(),
            dataset: "climate_summary".to_string(),
            station_id: station_id.to_string(),
            start_date: Some(Utc.with_ymd_and_hms(1951, 1, 1, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            latitude: 52.52,
            longitude: 13.4,
            height: 48.0,
            name: "Berlin-Mitte".to_string(),
            state: Some("Berlin".to_string()),
            distance: None,
        }
    }

    fn sample_observation() -> Observation {
        Observation {
            station_id: "01234".to_string(),
            resolution: "daily".to_string(),
            dataset: "climate_summary".to_string(),
            parameter: "temperature_air_mean_2m".to_string(),
            date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            value: 21.5,
            quality: Some(3.0),
        }
    }

    #[test]
    fn station_listing_carries_both_types_and_listing_fields() {
        let response = StationsResponse {
            metadata: metadata(),
            stations: vec![sample_station("01048")],
        };
        let graph = stations_to_graph(&response);
        let statements = graph.statements();

        // 2 types, id, name, lat, long, elevation, state, dataset,
        // start_date, end_date, distance
        assert_eq!(graph.len(), 12);

        let subject = Term::named("https://wetterdienst.eobs.org/station/01048");
        assert!(statements.iter().all(|s| s.subject == subject));
        assert!(statements.iter().any(|s| {
            s.object == Term::named(format!("{SOSA}Platform"))
        }));
        assert!(statements.iter().any(|s| {
            s.predicate == Term::named(format!("{DWD}start_date"))
                && s.object
                    == Term::typed_literal(
                        "1951-01-01T00:00:00+00:00",
                        format!("{XSD}dateTime"),
                    )
        }));
    }

    #[test]
    fn absent_distance_defaults_to_zero_km() {
        let response = StationsResponse {
            metadata: metadata(),
            stations: vec![sample_station("01048")],
        };
        let graph = stations_to_graph(&response);
        assert!(graph.statements().iter().any(|s| {
            s.predicate == Term::named(format!("{DWD}distance"))
                && s.object == Term::literal("0 km")
        }));
    }

    #[test]
    fn present_distance_renders_with_km_suffix() {
        let mut station = sample_station("01048");
        station.distance = Some(4.2);
        let response = StationsResponse {
            metadata: metadata(),
            stations: vec![station],
        };
        let graph = stations_to_graph(&response);
        assert!(graph.statements().iter().any(|s| {
            s.predicate == Term::named(format!("{DWD}distance"))
                && s.object == Term::literal("4.2 km")
        }));
    }

    #[test]
    fn observation_links_value_and_unit_through_a_result_node() {
        let response = ValuesResponse {
            metadata: metadata(),
            stations: vec![sample_station("01234")],
            values: vec![sample_observation()],
        };
        let graph = values_to_graph(&response);
        let statements = graph.statements();

        let station = Term::named("https://wetterdienst.eobs.org/station/01234");

        // Values context renders the station as a sensor, not a platform.
        assert!(statements
            .iter()
            .any(|s| s.subject == station && s.object == Term::named(format!("{SOSA}Sensor"))));
        assert!(!statements
            .iter()
            .any(|s| s.object == Term::named(format!("{SOSA}Platform"))));

        let observation = statements
            .iter()
            .find(|s| s.object == Term::named(format!("{SOSA}Observation")))
            .map(|s| s.subject.clone())
            .expect("observation node missing");

        assert!(statements
            .iter()
            .any(|s| s.subject == observation
                && s.predicate == Term::named(format!("{SOSA}madeBySensor"))
                && s.object == station));

        // The result is a blank node with exactly its own three statements.
        let result = statements
            .iter()
            .find(|s| s.subject == observation
                && s.predicate == Term::named(format!("{SOSA}hasResult")))
            .map(|s| s.object.clone())
            .expect("result link missing");
        assert!(matches!(result, Term::BlankNode(_)));

        let result_statements: Vec<_> = statements
            .iter()
            .filter(|s| s.subject == result)
            .collect();
        assert_eq!(result_statements.len(), 3);
        assert!(result_statements.iter().any(|s| {
            s.object
                == Term::typed_literal("21.5", "http://www.w3.org/2001/XMLSchema#float")
        }));
        assert!(result_statements.iter().any(|s| {
            s.object == Term::named("http://qudt.org/1.1/vocab/unit#DegreeCelsius")
        }));
    }

    #[test]
    fn observation_uri_is_deterministic() {
        let observation = sample_observation();
        assert_eq!(observation_uri(&observation), observation_uri(&observation));

        let mut later = sample_observation();
        later.date = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
        assert_ne!(observation_uri(&observation), observation_uri(&later));

        assert_eq!(
            observation_uri(&observation),
            format!(
                "{BASE_OBSERVATION_URL}01234_temperature_air_mean_2m_{}",
                observation.date.timestamp_millis()
            )
        );
    }

    #[test]
    fn sunshine_duration_is_converted_before_embedding() {
        let mut observation = sample_observation();
        observation.parameter = "sunshine_duration".to_string();
        observation.value = 5400.0;
        let response = ValuesResponse {
            metadata: metadata(),
            stations: vec![],
            values: vec![observation],
        };
        let graph = values_to_graph(&response);
        assert!(graph.statements().iter().any(|s| {
            s.object == Term::typed_literal("1.5", "http://www.w3.org/2001/XMLSchema#decimal")
        }));
    }

    /// Counts the statements in a Turtle document the writers of this crate
    /// produce (one statement per line, prefix directives up front).
    fn turtle_statement_count(turtle: &str) -> usize {
        turtle
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !line.starts_with("@prefix") && !line.starts_with("@base"))
            .filter(|line| line.trim_end().ends_with('.'))
            .count()
    }

    #[test]
    fn turtle_roundtrip_preserves_statement_count() {
        let response = StationsResponse {
            metadata: metadata(),
            stations: vec![sample_station("01048"), sample_station("00433")],
        };
        let graph = stations_to_graph(&response);
        let turtle = serialize(&graph, RdfFormat::Turtle).unwrap();
        assert_eq!(turtle_statement_count(&turtle), graph.len());

        // And across a format change: N-Triples carries the same statements.
        let ntriples = serialize(&graph, RdfFormat::NTriples).unwrap();
        assert_eq!(ntriples.lines().count(), graph.len());
    }
}
