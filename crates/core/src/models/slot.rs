use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor, value::MapAccessDeserializer},
};

use crate::errors::{SchedulingError, SchedulingResult};

/// Wire format of a slot date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of a slot hour.
pub const HOUR_FORMAT: &str = "%H:%M";

/// A (date, hour) pair that is already booked.
///
/// Both fields are kept as the raw strings they were seeded with; matching
/// against them is byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusySlot {
    pub date: String,
    pub hour: String,
}

impl BusySlot {
    pub fn new(date: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hour: hour.into(),
        }
    }

    /// Returns true when both fields equal the given strings exactly.
    pub fn matches(&self, date: &str, hour: &str) -> bool {
        self.date == date && self.hour == hour
    }
}

/// A single availability question, as received by either adapter.
///
/// Only deserializes from a map; a positional `["2025-10-20", "14:00"]` is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AvailabilityRequest {
    /// Data no formato YYYY-MM-DD
    pub date: String,
    /// Hora no formato HH:MM
    pub hour: String,
}

#[derive(Deserialize)]
#[serde(remote = "AvailabilityRequest")]
#[allow(dead_code)]
struct AvailabilityRequestFields {
    date: String,
    hour: String,
}

struct AvailabilityRequestVisitor;

impl<'de> Visitor<'de> for AvailabilityRequestVisitor {
    type Value = AvailabilityRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with string fields `date` and `hour`")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        AvailabilityRequestFields::deserialize(MapAccessDeserializer::new(map))
    }
}

impl<'de> Deserialize<'de> for AvailabilityRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AvailabilityRequestVisitor)
    }
}

impl AvailabilityRequest {
    pub fn new(date: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hour: hour.into(),
        }
    }

    /// Checks that `date` is a real calendar day written as `YYYY-MM-DD` and
    /// `hour` a real time of day written as `HH:MM`.
    ///
    /// The strings themselves are left untouched; a request that passes is
    /// still matched exactly as given.
    pub fn validate(&self) -> SchedulingResult<()> {
        // chrono tolerates padding and signs, so the value must survive a round trip.
        let date_ok = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == self.date);
        if !date_ok {
            return Err(SchedulingError::Validation(format!(
                "data '{}' inválida, use o formato YYYY-MM-DD",
                self.date
            )));
        }

        let hour_ok = NaiveTime::parse_from_str(&self.hour, HOUR_FORMAT)
            .is_ok_and(|hour| hour.format(HOUR_FORMAT).to_string() == self.hour);
        if !hour_ok {
            return Err(SchedulingError::Validation(format!(
                "hora '{}' inválida, use o formato HH:MM",
                self.hour
            )));
        }

        Ok(())
    }
}

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Free,
    Occupied,
}

impl AvailabilityStatus {
    pub fn from_free(free: bool) -> Self {
        if free { Self::Free } else { Self::Occupied }
    }
}

/// Payload returned by `POST /api/check-availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub status: AvailabilityStatus,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2025-10-20", "14:00")]
    #[case("2099-01-01", "09:00")]
    #[case("2024-02-29", "23:59")]
    #[case("2025-01-01", "00:00")]
    fn accepts_well_formed_requests(#[case] date: &str, #[case] hour: &str) {
        assert!(AvailabilityRequest::new(date, hour).validate().is_ok());
    }

    #[rstest]
    #[case("", "14:00")]
    #[case("20-10-2025", "14:00")]
    #[case("2025-10-2", "14:00")]
    #[case("2025-02-30", "14:00")]
    #[case("2025-10-20T00:00", "14:00")]
    #[case("2025-10-20", "")]
    #[case("2025-10-20", "9:00")]
    #[case("2025-10-20", "24:00")]
    #[case("2025-10-20", "14:00:00")]
    #[case("2025-10-20", "14h00")]
    #[case("2025-10-20", " 9:00")]
    #[case("2025-10-20", "14: 0")]
    #[case("2025-10- 2", "14:00")]
    #[case("2025- 1-20", "14:00")]
    #[case("+025-10-20", "14:00")]
    #[case("2025-10-20 ", "14:00")]
    fn rejects_malformed_requests(#[case] date: &str, #[case] hour: &str) {
        let err = AvailabilityRequest::new(date, hour).validate().unwrap_err();
        assert!(matches!(err, SchedulingError::Validation(_)));
    }

    #[test]
    fn validation_names_the_offending_field() {
        let err = AvailabilityRequest::new("2025-10-20", "").validate().unwrap_err();
        assert!(err.to_string().contains("HH:MM"));

        let err = AvailabilityRequest::new("amanhã", "14:00").validate().unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn deserializes_from_object_only() {
        let request: AvailabilityRequest =
            serde_json::from_str(r#"{"date": "2025-10-20", "hour": "14:00"}"#).unwrap();
        assert_eq!(request, AvailabilityRequest::new("2025-10-20", "14:00"));

        assert!(serde_json::from_str::<AvailabilityRequest>(r#"["2025-10-20", "14:00"]"#).is_err());
        assert!(serde_json::from_str::<AvailabilityRequest>(r#"{"date": "2025-10-20"}"#).is_err());
        assert!(serde_json::from_str::<AvailabilityRequest>(r#""2025-10-20 14:00""#).is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AvailabilityStatus::Free).unwrap(), "\"free\"");
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::Occupied).unwrap(),
            "\"occupied\""
        );
    }

    #[test]
    fn busy_slot_matching_is_case_sensitive_and_exact() {
        let slot = BusySlot::new("2025-10-20", "14:00");
        assert!(slot.matches("2025-10-20", "14:00"));
        assert!(!slot.matches("2025-10-20", "14:00 "));
        assert!(!slot.matches("2025-10-20", "14:0"));
        assert!(!slot.matches("2025-10-21", "14:00"));
    }
}
