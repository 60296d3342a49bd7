use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("a literal cannot appear in the subject position")]
    LiteralSubject,

    #[error("predicate must be an IRI, found '{0}'")]
    InvalidPredicate(String),

    #[error("failed to write RDF output")]
    Write(#[from] std::fmt::Error),

    #[error("failed to encode JSON output")]
    Json(#[from] serde_json::Error),
}
