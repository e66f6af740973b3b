//! Edge records and attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Line label substituted when an edge record names no line.
pub const UNKNOWN_LINE: &str = "M?";

/// An edge as it appears in the source data.
///
/// `line` is optional: records without one are accepted and given
/// [`UNKNOWN_LINE`] when the network is built. Any other fields are kept
/// in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Station code at one end
    pub from: String,

    /// Station code at the other end
    pub to: String,

    /// Travel time in minutes
    pub time: f64,

    /// Transit line traversing this edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Descriptive fields not used for routing
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRecord {
    /// Create a record with no extra fields.
    pub fn new(from: &str, to: &str, time: f64, line: Option<&str>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            time,
            line: line.map(str::to_string),
            extra: Map::new(),
        }
    }
}

/// Routing attributes stored for a station pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttributes {
    /// Travel time in minutes
    pub time: f64,

    /// Transit line label
    pub line: String,

    /// Descriptive fields carried over from the record
    pub extra: Map<String, Value>,
}

impl EdgeAttributes {
    /// Take the attributes of a record, defaulting the line.
    pub(crate) fn from_record(record: EdgeRecord) -> Self {
        Self {
            time: record.time,
            line: record.line.unwrap_or_else(|| UNKNOWN_LINE.to_string()),
            extra: record.extra,
        }
    }
}
