//! Place records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A point of interest near a station.
///
/// Only the fields used for filtering and trip cost are typed. Everything
/// else in the source record (name, address, opening hours...) is kept in
/// `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Kind of place (e.g. "museum", "park")
    #[serde(rename = "type")]
    pub kind: String,

    /// Rating, usually 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Walking time from the station, in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_minutes: Option<f64>,

    /// Descriptive fields passed through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Create a place with no descriptive fields.
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            rating: None,
            walk_minutes: None,
            extra: Map::new(),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the walking time.
    pub fn with_walk_minutes(mut self, minutes: f64) -> Self {
        self.walk_minutes = Some(minutes);
        self
    }

    /// Add a descriptive field.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Rating, counting an unrated place as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Walking time, counting a missing value as 0.
    pub fn walk_or_zero(&self) -> f64 {
        self.walk_minutes.unwrap_or(0.0)
    }

    /// Check the kind of place.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}
