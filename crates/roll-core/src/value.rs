//! Dynamic field values.
//!
//! The generic table and form engine are schema-driven: they do not know the
//! concrete entity type they are displaying. Records cross into that engine
//! as a [`FieldMap`] — an ordered map of field key to [`FieldValue`] — and
//! cross back out through serde when a screen submits a typed payload.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value as Json;

/// Wire date format used by the backend for date-only fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

/// An entity record flattened to field key → value, ordered by key.
pub type FieldMap = BTreeMap<String, FieldValue>;

impl FieldValue {
    /// True for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert a JSON value into a field value.
    ///
    /// Strings matching the backend's `YYYY-MM-DD` wire format stay as text;
    /// date interpretation is the descriptor's job, not the value's. Arrays
    /// and objects have no field-level representation and collapse to their
    /// JSON text so they still display as *something* rather than vanishing.
    #[must_use]
    pub fn from_json(json: &Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(*b),
            Json::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Json::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Convert back to a JSON value for serialization.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Text(s) => Json::String(s.clone()),
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
            Self::Bool(b) => Json::Bool(*b),
            Self::Date(d) => Json::String(d.format(DATE_FORMAT).to_string()),
        }
    }

    /// The value as text, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a number, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a date. Text holding a `YYYY-MM-DD` string counts.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
            _ => None,
        }
    }
}

/// Flatten a serializable record into a [`FieldMap`].
///
/// # Errors
///
/// Returns a serde error if `record` does not serialize to a JSON object.
pub fn to_field_map<T: serde::Serialize>(record: &T) -> Result<FieldMap, serde_json::Error> {
    let json = serde_json::to_value(record)?;
    let Json::Object(obj) = json else {
        return Err(serde::ser::Error::custom("record is not a JSON object"));
    };
    Ok(obj
        .iter()
        .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
        .collect())
}

/// Rebuild a typed value from a [`FieldMap`].
///
/// # Errors
///
/// Returns a serde error if the map does not deserialize into `T`.
pub fn from_field_map<T: serde::de::DeserializeOwned>(
    fields: &FieldMap,
) -> Result<T, serde_json::Error> {
    let obj: serde_json::Map<String, Json> = fields
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json()))
        .collect();
    serde_json::from_value(Json::Object(obj))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: String,
        name: String,
        score: Option<f64>,
        active: bool,
    }

    #[test]
    fn round_trip_through_field_map() {
        let sample = Sample {
            id: "s1".into(),
            name: "小明".into(),
            score: Some(92.5),
            active: true,
        };

        let fields = to_field_map(&sample).expect("serialize");
        assert_eq!(fields["name"], FieldValue::Text("小明".into()));
        assert_eq!(fields["score"], FieldValue::Number(92.5));
        assert_eq!(fields["active"], FieldValue::Bool(true));

        let back: Sample = from_field_map(&fields).expect("deserialize");
        assert_eq!(back, sample);
    }

    #[test]
    fn null_json_maps_to_null_value() {
        let sample = Sample {
            id: "s1".into(),
            name: "x".into(),
            score: None,
            active: false,
        };
        let fields = to_field_map(&sample).expect("serialize");
        assert_eq!(fields["score"], FieldValue::Null);
    }

    #[test]
    fn date_serializes_to_wire_format() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date");
        assert_eq!(
            FieldValue::Date(date).to_json(),
            Json::String("2024-09-01".into())
        );
    }

    #[test]
    fn as_date_reads_wire_strings() {
        let value = FieldValue::Text("2024-09-01".into());
        assert_eq!(
            value.as_date(),
            Some(NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"))
        );
        assert_eq!(FieldValue::Text("not a date".into()).as_date(), None);
    }
}
