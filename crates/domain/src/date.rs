// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The service-wide date-time layout `YYYY-MM-DDThh:mm:ssZ`.

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Textual layout of every date-time exchanged by the service.
pub const DATE_TIME_LAYOUT: &str = "YYYY-MM-DDThh:mm:ssZ";

const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Why a date-time string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// The text does not follow the layout.
    Format,
    /// The layout matches but the calendar values are impossible.
    Calendar,
}

/// Parses a date-time in the service layout.
///
/// # Errors
///
/// Returns [`DateTimeError::Calendar`] when every component is present but
/// they do not form a real date-time (e.g. February 30th), and
/// [`DateTimeError::Format`] for anything else.
pub fn parse_date_time(text: &str) -> Result<PrimitiveDateTime, DateTimeError> {
    PrimitiveDateTime::parse(text, DATE_TIME_FORMAT).map_err(|error| match error {
        time::error::Parse::TryFromParsed(_) => DateTimeError::Calendar,
        _ => DateTimeError::Format,
    })
}

/// Renders a date-time in the service layout.
#[must_use]
pub fn format_date_time(value: PrimitiveDateTime) -> String {
    // Every component the layout names is present on a PrimitiveDateTime.
    value.format(DATE_TIME_FORMAT).unwrap_or_default()
}

/// Serde adapter for `PrimitiveDateTime` fields in the service layout.
pub mod serde_date_time {
    use super::{format_date_time, parse_date_time};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    /// Serializes a date-time as a layout string.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(
        value: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_time(*value))
    }

    /// Deserializes a date-time from a layout string.
    ///
    /// # Errors
    ///
    /// Fails when the string is not a valid date-time in the layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        parse_date_time(&text)
            .map_err(|_| serde::de::Error::custom(format!("invalid date-time '{text}'")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_and_format_agree() {
        let parsed: PrimitiveDateTime = parse_date_time("2020-02-10T08:49:55Z").unwrap();
        assert_eq!(parsed, datetime!(2020-02-10 08:49:55));
        assert_eq!(format_date_time(parsed), "2020-02-10T08:49:55Z");
    }

    #[test]
    fn test_impossible_calendar_date_is_reported_separately() {
        assert_eq!(
            parse_date_time("2020-02-30T08:49:55Z"),
            Err(DateTimeError::Calendar)
        );
    }

    #[test]
    fn test_wrong_layout_is_a_format_error() {
        assert_eq!(parse_date_time("10.02.2020 08:49"), Err(DateTimeError::Format));
        assert_eq!(parse_date_time("2020-02-10T08:49:55"), Err(DateTimeError::Format));
    }
}
