use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid slot '{0}', expected HH:MM")]
    InvalidSlot(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// A bookable time of day, always rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slot(NaiveTime);

impl Slot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for Slot {
    type Err = PrimitiveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(PrimitiveError::InvalidSlot(value.to_string()));
        }
        NaiveTime::parse_from_str(value, "%H:%M")
            .map(Self)
            .map_err(|_| PrimitiveError::InvalidSlot(value.to_string()))
    }
}

impl TryFrom<String> for Slot {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// A calendar day in ISO `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for BookingDate {
    type Err = PrimitiveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != 10 {
            return Err(PrimitiveError::InvalidDate(value.to_string()));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PrimitiveError::InvalidDate(value.to_string()))
    }
}

impl TryFrom<String> for BookingDate {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookingDate> for String {
    fn from(date: BookingDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("09:00", 9, 0)]
    #[case("00:00", 0, 0)]
    #[case("23:59", 23, 59)]
    fn it_should_parse_a_slot(#[case] input: &str, #[case] hour: u32, #[case] minute: u32) {
        let slot: Slot = input.parse().expect("valid slot");
        assert_eq!(slot, Slot::new(hour, minute).unwrap());
        assert_eq!(slot.to_string(), input);
    }

    #[rstest]
    #[case("9:00")]
    #[case("24:00")]
    #[case("10:60")]
    #[case("10-00")]
    #[case("")]
    fn it_should_reject_a_malformed_slot(#[case] input: &str) {
        assert_eq!(
            input.parse::<Slot>(),
            Err(PrimitiveError::InvalidSlot(input.to_string()))
        );
    }

    #[rstest]
    fn it_should_order_slots_by_time_of_day() {
        let early: Slot = "09:00".parse().unwrap();
        let late: Slot = "17:30".parse().unwrap();
        assert!(early < late);
    }

    #[rstest]
    fn it_should_parse_and_render_a_booking_date() {
        let date: BookingDate = "2026-03-01".parse().expect("valid date");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(date.to_string(), "2026-03-01");
    }

    #[rstest]
    #[case("2026-02-30")]
    #[case("2026-3-1")]
    #[case("01/03/2026")]
    #[case("tomorrow")]
    fn it_should_reject_an_invalid_booking_date(#[case] input: &str) {
        assert_eq!(
            input.parse::<BookingDate>(),
            Err(PrimitiveError::InvalidDate(input.to_string()))
        );
    }

    #[rstest]
    fn it_should_serialize_as_plain_strings() {
        let slot: Slot = "10:00".parse().unwrap();
        let date: BookingDate = "2026-03-01".parse().unwrap();
        assert_eq!(serde_json::to_value(slot).unwrap(), serde_json::json!("10:00"));
        assert_eq!(
            serde_json::to_value(date).unwrap(),
            serde_json::json!("2026-03-01")
        );
        assert!(serde_json::from_value::<Slot>(serde_json::json!("25:00")).is_err());
    }
}
