//! Lenient date handling for wire values.
//!
//! The backend sends dates as strings. List payloads name their date fields
//! explicitly ([`convert_dates`]); typed entity fields use the
//! [`lenient_date`] serde helper so a malformed date never fails an entire
//! fetch.

use chrono::NaiveDate;
use serde_json::Value as Json;

use crate::value::DATE_FORMAT;

/// Normalize named date fields inside a JSON value in place.
///
/// Strings that parse as `YYYY-MM-DD` (or as an RFC 3339 timestamp, from
/// which the date part is taken) are rewritten to the canonical wire format.
/// Values that do not parse are left exactly as received. Arrays are
/// converted element-wise, matching how list responses arrive.
pub fn convert_dates(json: &mut Json, date_fields: &[&str]) {
    match json {
        Json::Array(items) => {
            for item in items {
                convert_dates(item, date_fields);
            }
        }
        Json::Object(obj) => {
            for field in date_fields {
                if let Some(Json::String(raw)) = obj.get(*field)
                    && let Some(date) = parse_wire_date(raw)
                {
                    obj.insert(
                        (*field).to_string(),
                        Json::String(date.format(DATE_FORMAT).to_string()),
                    );
                }
            }
        }
        _ => {}
    }
}

/// Parse a wire date string: plain `YYYY-MM-DD` or an RFC 3339 timestamp.
#[must_use]
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Serde helper for `Option<NaiveDate>` fields holding lenient wire dates.
///
/// Deserializes `null`, missing, or unparseable strings to `None`;
/// serializes as `YYYY-MM-DD`.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::parse_wire_date;
    use crate::value::DATE_FORMAT;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_wire_date))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn converts_rfc3339_to_date_only() {
        let mut value = json!({"joined_at": "2024-09-01T08:30:00+08:00", "name": "x"});
        convert_dates(&mut value, &["joined_at"]);
        assert_eq!(value["joined_at"], json!("2024-09-01"));
    }

    #[test]
    fn unparseable_date_keeps_original_wire_value() {
        let mut value = json!({"joined_at": "next tuesday"});
        convert_dates(&mut value, &["joined_at"]);
        assert_eq!(value["joined_at"], json!("next tuesday"));
    }

    #[test]
    fn converts_each_array_element() {
        let mut value = json!([
            {"date_of_birth": "2015-03-02T00:00:00Z"},
            {"date_of_birth": null},
        ]);
        convert_dates(&mut value, &["date_of_birth"]);
        assert_eq!(value[0]["date_of_birth"], json!("2015-03-02"));
        assert_eq!(value[1]["date_of_birth"], json!(null));
    }

    #[test]
    fn lenient_date_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Row {
            #[serde(default, with = "lenient_date")]
            birth: Option<NaiveDate>,
        }

        let row: Row = serde_json::from_value(json!({"birth": "2010-01-15"})).expect("parse");
        assert_eq!(row.birth, NaiveDate::from_ymd_opt(2010, 1, 15));

        let bad: Row = serde_json::from_value(json!({"birth": "??"})).expect("parse");
        assert_eq!(bad.birth, None);

        let out = serde_json::to_value(Row {
            birth: NaiveDate::from_ymd_opt(2010, 1, 15),
        })
        .expect("serialize");
        assert_eq!(out, json!({"birth": "2010-01-15"}));
    }
}
