//! Query string values and their wire encoding.

/// A value destined for the request query string.
///
/// Booleans serialize lowercase, lists join with commas, everything else
/// uses its display form.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl QueryValue {
    pub(crate) fn encode(&self) -> String {
        match self {
            QueryValue::Bool(value) => if *value { "true" } else { "false" }.to_string(),
            QueryValue::Integer(value) => value.to_string(),
            QueryValue::Float(value) => value.to_string(),
            QueryValue::Text(value) => value.clone(),
            QueryValue::List(items) => items.join(","),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> QueryValue {
        QueryValue::Bool(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> QueryValue {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> QueryValue {
        QueryValue::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> QueryValue {
        QueryValue::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> QueryValue {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> QueryValue {
        QueryValue::Text(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> QueryValue {
        QueryValue::List(items)
    }
}
