//! Access condition model types
//!
//! An access condition is described by up to five dimensions: user, device,
//! environment (keyword lists), time (an interval), and outdoor (a circular
//! area). A dimension object is present in the model **iff** it contributes
//! at least one clause to the compiled output; the `bool`-returning setters
//! enforce that gate, so an empty or invalid dimension never commits.

use crate::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use prissma_vocab::keywords::KeywordDef;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timestamp layout used for compiled `tl:start` values
pub(crate) const ISO_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Configurable calendar/clock rendering for the time dimension
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLayout {
    /// chrono format string for dates (e.g. `%d/%m/%Y`)
    pub date_format: String,
    /// chrono format string for times of day (e.g. `%H:%M`)
    pub time_format: String,
}

impl Default for TimeLayout {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            time_format: "%H:%M".to_string(),
        }
    }
}

/// One selected keyword with its user-entered value.
///
/// `value` is either a quoted literal (`"Alice"`) or a bare URI; the quote is
/// what tells the compiler which form to emit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordValue {
    /// Human-readable label from the vocabulary
    pub label: String,
    /// Absolute IRI of the leaf property
    pub uri: String,
    /// Prefix of the leaf property
    pub prefix: String,
    /// Local name of the leaf property
    pub local_name: String,
    /// User-entered value (quoted literal or bare URI)
    pub value: String,
    /// Graph-pattern path from the dimension anchor to the leaf's parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<String>,
    /// `rdf:type` IRI of the leaf's parent node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
}

impl KeywordValue {
    /// Build a keyword value from a vocabulary entry
    pub fn from_def(def: &KeywordDef, value: impl Into<String>) -> Self {
        Self {
            label: def.label.to_string(),
            uri: def.uri.to_string(),
            prefix: def.prefix.to_string(),
            local_name: def.local_name.to_string(),
            value: value.into(),
            prepend: def.prepend.map(str::to_string),
            parent_type: def.parent_type.map(str::to_string),
        }
    }

    /// Check whether a value has been entered
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// A committed keyword dimension (user, device, or environment)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDimension {
    /// Keywords in selection order
    pub keywords: Vec<KeywordValue>,
}

/// The time dimension: a calendar interval in the configured layout
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDimension {
    /// Start date
    pub date_from: String,
    /// End date
    pub date_to: String,
    /// Start time of day
    pub time_from: String,
    /// End time of day
    pub time_to: String,
}

impl TimeDimension {
    /// Parse the start endpoint under a layout
    pub fn start(&self, layout: &TimeLayout) -> Result<NaiveDateTime> {
        parse_endpoint(&self.date_from, &self.time_from, layout)
    }

    /// Parse the end endpoint under a layout
    pub fn end(&self, layout: &TimeLayout) -> Result<NaiveDateTime> {
        parse_endpoint(&self.date_to, &self.time_to, layout)
    }

    /// Compiled form: ISO-8601 start timestamp and duration in whole seconds.
    ///
    /// A negative interval clamps to zero rather than emitting a negative
    /// xsd:duration.
    pub fn interval(&self, layout: &TimeLayout) -> Result<(String, i64)> {
        let start = self.start(layout)?;
        let end = self.end(layout)?;
        let duration = (end - start).num_seconds().max(0);
        Ok((start.format(ISO_LAYOUT).to_string(), duration))
    }
}

fn parse_endpoint(date: &str, time: &str, layout: &TimeLayout) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, &layout.date_format)?;
    let time = NaiveTime::parse_from_str(time, &layout.time_format)?;
    Ok(NaiveDateTime::new(date, time))
}

/// The outdoor dimension: a circular area around a point
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdoorDimension {
    /// WGS84 latitude
    pub lat: String,
    /// WGS84 longitude
    pub lon: String,
    /// Radius in metres
    pub radius: String,
}

impl OutdoorDimension {
    /// All three fields are mandatory; a partial dimension is never emitted
    pub fn is_complete(&self) -> bool {
        !self.lat.trim().is_empty()
            && !self.lon.trim().is_empty()
            && !self.radius.trim().is_empty()
    }
}

/// Structured description of one access condition.
///
/// Absent dimensions contribute nothing to the compiled query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessConditionModel {
    /// User dimension (`?consumer`)
    pub user: Option<KeywordDimension>,
    /// Device dimension (`?dev`)
    pub device: Option<KeywordDimension>,
    /// Environment dimension (`?env`)
    pub environment: Option<KeywordDimension>,
    /// Time dimension
    pub time: Option<TimeDimension>,
    /// Outdoor location dimension
    pub outdoor: Option<OutdoorDimension>,
}

impl AccessConditionModel {
    /// Commit the user dimension; `false` leaves the model untouched
    pub fn set_user(&mut self, keywords: Vec<KeywordValue>) -> bool {
        match commit_keywords(keywords) {
            Some(dim) => {
                self.user = Some(dim);
                true
            }
            None => false,
        }
    }

    /// Commit the device dimension; `false` leaves the model untouched
    pub fn set_device(&mut self, keywords: Vec<KeywordValue>) -> bool {
        match commit_keywords(keywords) {
            Some(dim) => {
                self.device = Some(dim);
                true
            }
            None => false,
        }
    }

    /// Commit the environment dimension; `false` leaves the model untouched
    pub fn set_environment(&mut self, keywords: Vec<KeywordValue>) -> bool {
        match commit_keywords(keywords) {
            Some(dim) => {
                self.environment = Some(dim);
                true
            }
            None => false,
        }
    }

    /// Commit the time dimension; `false` (unparseable endpoint) leaves the
    /// model untouched
    pub fn set_time(&mut self, time: TimeDimension, layout: &TimeLayout) -> bool {
        if time.start(layout).is_err() || time.end(layout).is_err() {
            return false;
        }
        self.time = Some(time);
        true
    }

    /// Commit the outdoor dimension; an incomplete one is silently omitted
    /// and `false` is returned
    pub fn set_outdoor(&mut self, outdoor: OutdoorDimension) -> bool {
        if !outdoor.is_complete() {
            return false;
        }
        self.outdoor = Some(outdoor);
        true
    }

    /// Check whether no dimension is present
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.device.is_none()
            && self.environment.is_none()
            && self.time.is_none()
            && self.outdoor.is_none()
    }
}

/// Validity gate for keyword dimensions.
///
/// The last keyword is the row the user is still editing: if it has no value
/// the whole dimension is invalid. Earlier keywords without a value are
/// dropped with a warning.
fn commit_keywords(keywords: Vec<KeywordValue>) -> Option<KeywordDimension> {
    let last = keywords.last()?;
    if !last.has_value() {
        return None;
    }
    let keywords: Vec<_> = keywords
        .into_iter()
        .filter(|kw| {
            if kw.has_value() {
                true
            } else {
                warn!(label = %kw.label, "dropping keyword without a value");
                false
            }
        })
        .collect();
    if keywords.is_empty() {
        None
    } else {
        Some(KeywordDimension { keywords })
    }
}
