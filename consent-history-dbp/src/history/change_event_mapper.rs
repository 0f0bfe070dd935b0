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

//! Mapper of persisted history records to domain change events.

use super::ConsentChangeEvent;
use super::ConsentEventType;
use super::ConsentHistoryError;
use super::ConsentHistoryRecord;
use super::StoredConsent;
use super::event_timestamps;
use std::str::FromStr;

/// Mapper of persisted history records to domain change events.
pub struct ChangeEventMapper {}

impl ChangeEventMapper {
    /// Map one persisted record to a [ConsentChangeEvent].
    ///
    /// The record's partition key becomes the event's `consentId`: the
    /// identity of a history stream is the compound key, distinct from the
    /// bare `consentId` attribute inside the images. Either image may be
    /// absent and absence is carried through unchanged.
    pub fn to_change_event(
        record: &ConsentHistoryRecord,
    ) -> Result<ConsentChangeEvent, ConsentHistoryError> {
        let event_time = event_timestamps::parse_event_timestamp(record.get_event_time())?;
        let event_type = ConsentEventType::from_str(record.get_event_type())?;
        let old_image = record
            .get_old_image()
            .map(StoredConsent::decode)
            .transpose()?;
        let new_image = record
            .get_new_image()
            .map(StoredConsent::decode)
            .transpose()?;
        Ok(ConsentChangeEvent::new(
            record.get_id(),
            record.get_event_id(),
            event_time,
            event_type,
            old_image,
            new_image,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::history::ConsentImage;
    use crate::history::ConsentStatus;
    use chrono::TimeZone;
    use chrono::Utc;

    const STREAM_KEY: &str = "TestServiceId|TestUserId|TestConsentId";

    fn image(consent_version: i32) -> ConsentImage {
        ConsentImage::new(
            "TestServiceId",
            "TestUserId",
            "TestConsentId",
            consent_version,
            ConsentStatus::Active,
            None,
            None,
            None,
        )
    }

    #[test]
    fn maps_modify_record_one_to_one() {
        let event_id = uuid::Uuid::new_v4().to_string();
        let record = ConsentHistoryRecord::new(
            STREAM_KEY,
            &event_id,
            "2024-05-01T10:15:30+02:00",
            "MODIFY",
            Some(StoredConsent::encode(&image(1))),
            Some(StoredConsent::encode(&image(2))),
        );
        let event = ChangeEventMapper::to_change_event(&record).unwrap();
        assert_eq!(event.get_consent_id(), STREAM_KEY);
        assert_eq!(event.get_event_id(), event_id);
        assert_eq!(
            event.get_event_time(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap()
        );
        assert_eq!(event.get_event_type(), ConsentEventType::Modify);
        assert_eq!(event.get_old_image(), Some(&image(1)));
        assert_eq!(event.get_new_image(), Some(&image(2)));
    }

    #[test]
    fn absent_images_stay_absent() {
        let record = ConsentHistoryRecord::new(
            STREAM_KEY,
            "event-1",
            "2024-05-01T10:15:30Z",
            "INSERT",
            None,
            Some(StoredConsent::encode(&image(1))),
        );
        let event = ChangeEventMapper::to_change_event(&record).unwrap();
        assert!(event.get_old_image().is_none());
        assert!(event.get_new_image().is_some());
    }

    #[test]
    fn unknown_event_type_is_a_mapping_failure() {
        let record = ConsentHistoryRecord::new(
            STREAM_KEY,
            "event-1",
            "2024-05-01T10:15:30Z",
            "TRUNCATE",
            None,
            None,
        );
        assert!(ChangeEventMapper::to_change_event(&record).is_err());
    }

    #[test]
    fn malformed_event_time_is_a_mapping_failure() {
        let record =
            ConsentHistoryRecord::new(STREAM_KEY, "event-1", "not-a-timestamp", "MODIFY", None, None);
        assert!(ChangeEventMapper::to_change_event(&record).is_err());
    }
}
