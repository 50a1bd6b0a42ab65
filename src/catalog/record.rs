//! Catalog record types
//!
//! The public meteorite landings dataset ships every numeric field as a JSON
//! string (`"mass": "21"`, `"reclat": "50.775000"`), and a handful of entries
//! omit fields entirely. Decoding here is lenient for everything except the
//! two fields a record cannot live without: `id` and `name`.
//!
//! # Identity
//!
//! Two records are equal when their ids are equal. No other field takes part
//! in equality or hashing.
//!
//! # Examples
//!
//! ```
//! use metcat::catalog::{Fall, Record};
//!
//! let json = r#"{
//!     "name": "Aachen", "id": "1", "nametype": "Valid", "recclass": "L5",
//!     "mass": "21", "fall": "Fell", "year": "1880-01-01T00:00:00.000",
//!     "reclat": "50.775000", "reclong": "6.083330",
//!     "geolocation": { "type": "Point", "coordinates": [6.08333, 50.775] }
//! }"#;
//!
//! let record: Record = serde_json::from_str(json).unwrap();
//! assert_eq!(record.id.as_str(), "1");
//! assert_eq!(record.mass, Some(21.0));
//! assert_eq!(record.fall, Some(Fall::Fell));
//! assert_eq!(record.year_number(), Some(1880));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier of a catalog record
///
/// Accepts either a JSON string or a JSON number when decoding and always
/// serializes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(Self(text)),
            RawId::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

/// How the meteorite was recovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Fall {
    /// The fall was observed
    Fell,
    /// Found after the fact
    Found,
    /// Any other label the dataset carries
    Other(String),
}

impl From<String> for Fall {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Fell" => Self::Fell,
            "Found" => Self::Found,
            _ => Self::Other(label),
        }
    }
}

impl From<Fall> for String {
    fn from(fall: Fall) -> Self {
        match fall {
            Fall::Fell => "Fell".to_string(),
            Fall::Found => "Found".to_string(),
            Fall::Other(label) => label,
        }
    }
}

impl fmt::Display for Fall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fell => f.write_str("Fell"),
            Self::Found => f.write_str("Found"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// GeoJSON point attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Geolocation {
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

impl fmt::Display for Geolocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}°", self.latitude(), self.longitude())
    }
}

/// A single meteorite landing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Empty when the entry has no usable name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub nametype: String,
    #[serde(default)]
    pub recclass: String,
    /// Mass in grams
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall: Option<Fall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub reclat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub reclong: Option<f64>,
    /// `None` when missing or not a `[longitude, latitude]` point
    #[serde(default, deserialize_with = "lenient_geolocation", skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
}

impl Record {
    /// Create a record carrying only its identity and name
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nametype: String::new(),
            recclass: String::new(),
            mass: None,
            fall: None,
            year: None,
            reclat: None,
            reclong: None,
            geolocation: None,
        }
    }

    /// Parse `year` into a calendar date
    ///
    /// Understands the dataset's `1880-01-01T00:00:00.000` form and a bare
    /// `1880-01-01` date.
    #[must_use]
    pub fn year_date(&self) -> Option<NaiveDate> {
        let raw = self.year.as_deref()?.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    #[must_use]
    pub fn year_number(&self) -> Option<i32> {
        self.year_date().map(|date| date.year())
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

fn lenient_geolocation<'de, D>(deserializer: D) -> Result<Option<Geolocation>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}
