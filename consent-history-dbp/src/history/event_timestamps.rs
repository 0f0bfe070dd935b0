/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Timestamp handling for stored history data.

use super::ConsentHistoryError;
use super::ConsentHistoryErrorKind;
use chrono::DateTime;
use chrono::Utc;

/// Parse an ISO-8601 offset timestamp from its stored string form and
/// normalize it to UTC.
///
/// Normalization keeps the wall-clock fields and replaces the offset with
/// UTC. Records written with a non-zero offset keep their local reading.
pub fn parse_event_timestamp(value: &str) -> Result<DateTime<Utc>, ConsentHistoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.naive_local().and_utc())
        .map_err(|e| {
            ConsentHistoryErrorKind::Infrastructure
                .error_with_msg(format!("Malformed stored timestamp '{value}': {e}"))
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalizes_offset_to_utc_keeping_wall_clock() {
        let parsed = parse_event_timestamp("2024-05-01T10:15:30+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn utc_input_is_unchanged() {
        let parsed = parse_event_timestamp("2024-05-01T10:15:30Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let e = parse_event_timestamp("yesterday-ish").unwrap_err();
        assert!(matches!(e.kind(), ConsentHistoryErrorKind::Infrastructure));
    }
}
