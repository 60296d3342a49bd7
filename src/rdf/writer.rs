//! Flushes a [`Graph`] to text. The Turtle family shares one writer surface
//! (TriG and N3 output for a default-graph statement set is valid Turtle),
//! N-Triples/N-Quads emit absolute IRIs one statement per line, and JSON-LD
//! groups statements into subject nodes.

use std::fmt::Write as _;

use serde_json::{Map, Value as JsonValue};

use crate::rdf::error::SerializationError;
use crate::rdf::model::{Graph, Term};
use crate::rdf::namespaces::{PREFIXES, RDF, XSD};

/// Output serialization for an RDF graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
    NQuads,
    TriG,
    N3,
    JsonLd,
}

impl RdfFormat {
    /// Maps an HTTP content type to a serialization format.
    ///
    /// Matching is a case-insensitive substring check; anything unrecognized,
    /// including an absent content type, falls back to Turtle.
    ///
    /// # Examples
    ///
    /// ```
    /// use wetterdienst_rdf::RdfFormat;
    ///
    /// assert_eq!(
    ///     RdfFormat::from_content_type(Some("application/n-triples")),
    ///     RdfFormat::NTriples
    /// );
    /// assert_eq!(RdfFormat::from_content_type(None), RdfFormat::Turtle);
    /// assert_eq!(
    ///     RdfFormat::from_content_type(Some("application/ld+json")),
    ///     RdfFormat::JsonLd
    /// );
    /// ```
    pub fn from_content_type(content_type: Option<&str>) -> RdfFormat {
        let Some(content_type) = content_type else {
            return RdfFormat::Turtle;
        };
        let lowered = content_type.to_ascii_lowercase();

        if lowered.contains("application/n-triples") {
            RdfFormat::NTriples
        } else if lowered.contains("application/n-quads") {
            RdfFormat::NQuads
        } else if lowered.contains("application/trig") {
            RdfFormat::TriG
        } else if lowered.contains("text/n3") {
            RdfFormat::N3
        } else if lowered.contains("application/ld+json") || lowered.contains("application/json") {
            RdfFormat::JsonLd
        } else {
            // text/turtle and anything else
            RdfFormat::Turtle
        }
    }
}

/// Serializes every statement of `graph` in the requested format.
///
/// Fails only on malformed statements (literal subject, non-IRI predicate)
/// or an underlying writer error; a well-formed graph always serializes.
pub fn serialize(graph: &Graph, format: RdfFormat) -> Result<String, SerializationError> {
    match format {
        RdfFormat::Turtle | RdfFormat::TriG | RdfFormat::N3 => write_turtle(graph),
        RdfFormat::NTriples | RdfFormat::NQuads => write_ntriples(graph),
        RdfFormat::JsonLd => write_jsonld(graph),
    }
}

fn write_turtle(graph: &Graph) -> Result<String, SerializationError> {
    let mut out = String::new();

    for (prefix, namespace) in PREFIXES {
        writeln!(out, "@prefix {prefix}: <{namespace}> .")?;
    }
    if !graph.is_empty() {
        writeln!(out)?;
    }

    for statement in graph.statements() {
        let subject = turtle_subject(&statement.subject)?;
        let predicate = turtle_predicate(&statement.predicate)?;
        let object = turtle_object(&statement.object);
        writeln!(out, "{subject} {predicate} {object} .")?;
    }

    Ok(out)
}

fn turtle_subject(subject: &Term) -> Result<String, SerializationError> {
    match subject {
        Term::NamedNode(iri) => Ok(compact_iri(iri)),
        Term::BlankNode(label) => Ok(format!("_:{label}")),
        Term::Literal { .. } => Err(SerializationError::LiteralSubject),
    }
}

fn turtle_predicate(predicate: &Term) -> Result<String, SerializationError> {
    match predicate {
        Term::NamedNode(iri) if iri.strip_prefix(RDF) == Some("type") => Ok("a".to_string()),
        Term::NamedNode(iri) => Ok(compact_iri(iri)),
        Term::BlankNode(label) => Err(SerializationError::InvalidPredicate(format!("_:{label}"))),
        Term::Literal { value, .. } => Err(SerializationError::InvalidPredicate(value.clone())),
    }
}

fn turtle_object(object: &Term) -> String {
    match object {
        Term::NamedNode(iri) => compact_iri(iri),
        Term::BlankNode(label) => format!("_:{label}"),
        Term::Literal { value, datatype } => {
            let escaped = escape_literal(value);
            match datatype {
                None => format!("\"{escaped}\""),
                Some(datatype) if datatype.strip_prefix(XSD) == Some("string") => {
                    format!("\"{escaped}\"")
                }
                Some(datatype) => format!("\"{escaped}\"^^{}", compact_iri(datatype)),
            }
        }
    }
}

fn write_ntriples(graph: &Graph) -> Result<String, SerializationError> {
    let mut out = String::new();

    for statement in graph.statements() {
        let subject = match &statement.subject {
            Term::NamedNode(iri) => format!("<{iri}>"),
            Term::BlankNode(label) => format!("_:{label}"),
            Term::Literal { .. } => return Err(SerializationError::LiteralSubject),
        };
        let predicate = match &statement.predicate {
            Term::NamedNode(iri) => format!("<{iri}>"),
            Term::BlankNode(label) => {
                return Err(SerializationError::InvalidPredicate(format!("_:{label}")))
            }
            Term::Literal { value, .. } => {
                return Err(SerializationError::InvalidPredicate(value.clone()))
            }
        };
        let object = match &statement.object {
            Term::NamedNode(iri) => format!("<{iri}>"),
            Term::BlankNode(label) => format!("_:{label}"),
            Term::Literal { value, datatype } => {
                let escaped = escape_literal(value);
                match datatype {
                    None => format!("\"{escaped}\""),
                    Some(datatype) if datatype.strip_prefix(XSD) == Some("string") => {
                        format!("\"{escaped}\"")
                    }
                    Some(datatype) => format!("\"{escaped}\"^^<{datatype}>"),
                }
            }
        };
        writeln!(out, "{subject} {predicate} {object} .")?;
    }

    Ok(out)
}

fn write_jsonld(graph: &Graph) -> Result<String, SerializationError> {

    // Group statements into one node per subject, preserving the order in
    // which subjects first appear.
    let mut subject_order: Vec<String> = Vec::new();
    let mut nodes: std::collections::HashMap<String, Map<String, JsonValue>> =
        std::collections::HashMap::new();

    for statement in graph.statements() {
        let subject_id = match &statement.subject {
            Term::NamedNode(iri) => iri.clone(),
            Term::BlankNode(label) => format!("_:{label}"),
            Term::Literal { .. } => return Err(SerializationError::LiteralSubject),
        };
        let predicate = match &statement.predicate {
            Term::NamedNode(iri) => iri.clone(),
            Term::BlankNode(label) => {
                return Err(SerializationError::InvalidPredicate(format!("_:{label}")))
            }
            Term::Literal { value, .. } => {
                return Err(SerializationError::InvalidPredicate(value.clone()))
            }
        };

        let node = nodes.entry(subject_id.clone()).or_insert_with(|| {
            subject_order.push(subject_id.clone());
            let mut node = Map::new();
            node.insert("@id".to_string(), JsonValue::String(subject_id.clone()));
            node
        });

        if predicate.strip_prefix(RDF) == Some("type") {
            let type_value = JsonValue::String(match &statement.object {
                Term::NamedNode(iri) => compact_name(iri),
                Term::BlankNode(label) => format!("_:{label}"),
                Term::Literal { value, .. } => value.clone(),
            });
            append_value(node, "@type", type_value);
            continue;
        }

        let key = compact_name(&predicate);
        let value = match &statement.object {
            Term::NamedNode(iri) => {
                let mut reference = Map::new();
                reference.insert("@id".to_string(), JsonValue::String(iri.clone()));
                JsonValue::Object(reference)
            }
            Term::BlankNode(label) => {
                let mut reference = Map::new();
                reference.insert("@id".to_string(), JsonValue::String(format!("_:{label}")));
                JsonValue::Object(reference)
            }
            Term::Literal { value, datatype } => match datatype {
                None => JsonValue::String(value.clone()),
                Some(datatype) if datatype.strip_prefix(XSD) == Some("string") => {
                    JsonValue::String(value.clone())
                }
                Some(datatype) => {
                    let mut typed = Map::new();
                    typed.insert("@value".to_string(), JsonValue::String(value.clone()));
                    typed.insert("@type".to_string(), JsonValue::String(compact_name(datatype)));
                    JsonValue::Object(typed)
                }
            },
        };
        append_value(node, &key, value);
    }

    let mut context = Map::new();
    for (prefix, namespace) in PREFIXES {
        context.insert(prefix.to_string(), JsonValue::String(namespace.to_string()));
    }

    let nodes_in_order: Vec<JsonValue> = subject_order
        .into_iter()
        .filter_map(|subject_id| nodes.remove(&subject_id).map(JsonValue::Object))
        .collect();

    let mut document = Map::new();
    document.insert("@context".to_string(), JsonValue::Object(context));
    document.insert("@graph".to_string(), JsonValue::Array(nodes_in_order));

    Ok(serde_json::to_string_pretty(&JsonValue::Object(document))?)
}

/// Adds `value` under `key`, promoting an existing scalar to an array when a
/// subject carries the same predicate more than once.
fn append_value(node: &mut Map<String, JsonValue>, key: &str, value: JsonValue) {
    match node.get_mut(key) {
        None => {
            node.insert(key.to_string(), value);
        }
        Some(JsonValue::Array(values)) => values.push(value),
        Some(existing) => {
            let previous = existing.take();
            *existing = JsonValue::Array(vec![previous, value]);
        }
    }
}

/// Compacts an IRI against the shared prefix table, falling back to the
/// bracketed absolute form.
fn compact_iri(iri: &str) -> String {
    for (prefix, namespace) in PREFIXES {
        if let Some(local) = iri.strip_prefix(namespace) {
            if is_valid_local_name(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    format!("<{iri}>")
}

/// Like [`compact_iri`] but without angle brackets, for JSON-LD keys.
fn compact_name(iri: &str) -> String {
    for (prefix, namespace) in PREFIXES {
        if let Some(local) = iri.strip_prefix(namespace) {
            if is_valid_local_name(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    iri.to_string()
}

fn is_valid_local_name(local: &str) -> bool {
    if local.is_empty() {
        return true;
    }

    let mut chars = local.chars();
    match chars.next() {
        Some(first) if is_pn_chars_base(first) || first == '_' => {}
        _ => return false,
    }
    for ch in chars {
        if !is_pn_chars(ch) && ch != '.' && ch != '-' {
            return false;
        }
    }

    // A trailing dot would merge with the statement terminator.
    !local.ends_with('.')
}

fn is_pn_chars_base(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{00D6}').contains(&ch)
        || ('\u{00D8}'..='\u{00F6}').contains(&ch)
        || ('\u{00F8}'..='\u{02FF}').contains(&ch)
        || ('\u{0370}'..='\u{037D}').contains(&ch)
        || ('\u{037F}'..='\u{1FFF}').contains(&ch)
        || ('\u{200C}'..='\u{200D}').contains(&ch)
        || ('\u{2070}'..='\u{218F}').contains(&ch)
        || ('\u{2C00}'..='\u{2FEF}').contains(&ch)
        || ('\u{3001}'..='\u{D7FF}').contains(&ch)
        || ('\u{F900}'..='\u{FDCF}').contains(&ch)
        || ('\u{FDF0}'..='\u{FFFD}').contains(&ch)
}

fn is_pn_chars(ch: char) -> bool {
    is_pn_chars_base(ch)
        || ch == '_'
        || ch.is_ascii_digit()
        || ch == '\u{00B7}'
        || ('\u{0300}'..='\u{036F}').contains(&ch)
        || ('\u{203F}'..='\u{2040}').contains(&ch)
}

fn escape_literal(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            c if c.is_control() => {
                let code = c as u32;
                result.push_str(&format!("\\u{code:04X}"));
            }
            c => result.push(c),
        }
    }

    result
}
