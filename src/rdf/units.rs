//! Static catalog mapping weather parameter keys to physical units and the
//! XSD datatype their literals carry. The lookup is total: keys the catalog
//! does not know resolve to a dimensionless float mapping rather than an
//! error, so new upstream parameters degrade gracefully.

use crate::rdf::namespaces::{QUDT_UNIT, XSD};

/// The XSD datatypes the catalog is allowed to assign to observation
/// literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XsdDatatype {
    Decimal,
    Float,
    Integer,
    String,
    DateTime,
}

impl XsdDatatype {
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            XsdDatatype::Decimal => "decimal",
            XsdDatatype::Float => "float",
            XsdDatatype::Integer => "integer",
            XsdDatatype::String => "string",
            XsdDatatype::DateTime => "dateTime",
        }
    }

    /// The full datatype IRI, e.g. `http://www.w3.org/2001/XMLSchema#float`.
    pub fn iri(&self) -> String {
        format!("{}{}", XSD, self.suffix())
    }
}

/// How one weather parameter maps onto a unit and literal datatype.
///
/// `conversion_factor` is applied multiplicatively to the raw value before it
/// is embedded as a literal; absent means the value passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMapping {
    /// Local name within the QUDT unit vocabulary, e.g. `DegreeCelsius`.
    pub unit: &'static str,
    pub symbol: &'static str,
    pub datatype: XsdDatatype,
    pub conversion_factor: Option<f64>,
    pub description: Option<&'static str>,
}

impl UnitMapping {
    /// The full unit IRI, e.g. `http://qudt.org/1.1/vocab/unit#DegreeCelsius`.
    pub fn unit_iri(&self) -> String {
        format!("{}{}", QUDT_UNIT, self.unit)
    }

    /// Applies the conversion factor to a raw observation value.
    pub fn convert(&self, raw: f64) -> f64 {
        match self.conversion_factor {
            Some(factor) => raw * factor,
            None => raw,
        }
    }
}

const DEFAULT_MAPPING: UnitMapping = UnitMapping {
    unit: "Dimensionless",
    symbol: "-",
    datatype: XsdDatatype::Float,
    conversion_factor: None,
    description: None,
};

/// Resolves the unit mapping for a parameter key.
///
/// Never fails; unrecognized keys return the dimensionless float default.
///
/// # Examples
///
/// ```
/// use wetterdienst_rdf::units::{lookup, XsdDatatype};
///
/// let sunshine = lookup("sunshine_duration");
/// assert_eq!(sunshine.symbol, "h");
/// assert_eq!(sunshine.datatype, XsdDatatype::Decimal);
///
/// let unknown = lookup("parameter_from_the_future");
/// assert_eq!(unknown.symbol, "-");
/// ```
pub fn lookup(parameter: &str) -> &'static UnitMapping {
    match parameter {
        // Sunshine arrives in seconds; published as hours.
        "sunshine_duration" => &UnitMapping {
            unit: "Hour",
            symbol: "h",
            datatype: XsdDatatype::Decimal,
            conversion_factor: Some(1.0 / 3600.0),
            description: None,
        },
        "temperature_air_mean_2m" => &UnitMapping {
            unit: "DegreeCelsius",
            symbol: "\u{b0}C",
            datatype: XsdDatatype::Float,
            conversion_factor: None,
            description: Some("Mean air temperature measured at 2m height"),
        },
        "temperature_air_max_2m" => &UnitMapping {
            unit: "DegreeCelsius",
            symbol: "\u{b0}C",
            datatype: XsdDatatype::Float,
            conversion_factor: None,
            description: Some("Max air temperature measured at 2m height"),
        },
        "temperature_air_min_2m" => &UnitMapping {
            unit: "DegreeCelsius",
            symbol: "\u{b0}C",
            datatype: XsdDatatype::Float,
            conversion_factor: None,
            description: Some("Min air temperature measured at 2m height"),
        },
        "precipitation_height" => &UnitMapping {
            unit: "Millimeter",
            symbol: "mm",
            datatype: XsdDatatype::Decimal,
            conversion_factor: None,
            description: None,
        },
        "precipitation_duration" => &UnitMapping {
            unit: "Second",
            symbol: "s",
            datatype: XsdDatatype::Integer,
            conversion_factor: None,
            description: None,
        },
        "wind_speed" => &UnitMapping {
            unit: "MeterPerSecond",
            symbol: "m/s",
            datatype: XsdDatatype::Float,
            conversion_factor: None,
            description: None,
        },
        "wind_direction" => &UnitMapping {
            unit: "DegreeAngle",
            symbol: "\u{b0}",
            datatype: XsdDatatype::Integer,
            conversion_factor: None,
            description: None,
        },
        "wind_force_beaufort" => &UnitMapping {
            unit: "Beaufort",
            symbol: "bft",
            datatype: XsdDatatype::Integer,
            conversion_factor: None,
            description: None,
        },
        "pressure_air_site" => &UnitMapping {
            unit: "Hectopascal",
            symbol: "hPa",
            datatype: XsdDatatype::Float,
            conversion_factor: None,
            description: None,
        },
        "cloud_cover_total" => &UnitMapping {
            unit: "Percent",
            symbol: "%",
            datatype: XsdDatatype::Integer,
            conversion_factor: None,
            description: None,
        },
        "humidity" => &UnitMapping {
            unit: "Percent",
            symbol: "%",
            datatype: XsdDatatype::Integer,
            conversion_factor: None,
            description: None,
        },
        _ => &DEFAULT_MAPPING,
    }
}
