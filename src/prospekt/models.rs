// src/prospekt/models.rs
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// Date format used for `valid_from` / `valid_to` in the output file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp format used for `parsed_time` (local clock).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// End of a brochure's validity range.
///
/// Serialized as `"YYYY-MM-DD"`, `null` or `""` respectively; the three states
/// are distinct in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidTo {
    /// Closed range ending on this date.
    Until(NaiveDate),
    /// Already started, no known end.
    OpenEnded,
    /// No end date could be determined.
    Undetermined,
}

impl Serialize for ValidTo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidTo::Until(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            ValidTo::OpenEnded => serializer.serialize_none(),
            ValidTo::Undetermined => serializer.serialize_str(""),
        }
    }
}

/// One brochure card from the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct Brochure {
    pub title: String,
    pub thumbnail: String,
    pub shop_name: String,
    #[serde(serialize_with = "serialize_date")]
    pub valid_from: NaiveDate,
    pub valid_to: ValidTo,
    #[serde(rename = "parsed_time", serialize_with = "serialize_timestamp")]
    parsed_at: NaiveDateTime,
}

impl Brochure {
    /// Builds a record stamped with the current local time.
    pub fn new(
        title: String,
        thumbnail: String,
        shop_name: String,
        valid_from: NaiveDate,
        valid_to: ValidTo,
    ) -> Self {
        Self {
            title,
            thumbnail,
            shop_name,
            valid_from,
            valid_to,
            parsed_at: Local::now().naive_local(),
        }
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::{json, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(valid_to: ValidTo) -> Brochure {
        Brochure::new(
            "Wochenangebote".to_string(),
            "https://img.example/1.jpg".to_string(),
            "Kaufland".to_string(),
            date(2024, 3, 1),
            valid_to,
        )
    }

    #[test]
    fn valid_to_keeps_three_states_apart() {
        assert_eq!(serde_json::to_value(ValidTo::Until(date(2024, 3, 15))).unwrap(), json!("2024-03-15"));
        assert_eq!(serde_json::to_value(ValidTo::OpenEnded).unwrap(), Value::Null);
        assert_eq!(serde_json::to_value(ValidTo::Undetermined).unwrap(), json!(""));
    }

    #[test]
    fn brochure_serializes_keys_in_output_order() {
        let brochure = sample(ValidTo::OpenEnded);
        let text = serde_json::to_string(&brochure).unwrap();

        let keys = ["\"title\"", "\"thumbnail\"", "\"shop_name\"", "\"valid_from\"", "\"valid_to\"", "\"parsed_time\""];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).expect(k)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {}", text);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid_from"], json!("2024-03-01"));
        assert_eq!(value["valid_to"], Value::Null);
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn parsed_time_uses_local_timestamp_format() {
        let brochure = sample(ValidTo::Undetermined);
        let value = serde_json::to_value(&brochure).unwrap();
        let stamp = value["parsed_time"].as_str().unwrap();

        assert_eq!(stamp.len(), "2024-03-01 12:00:00".len());
        let reparsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(reparsed, brochure.parsed_at.with_nanosecond(0).unwrap());
    }
}
