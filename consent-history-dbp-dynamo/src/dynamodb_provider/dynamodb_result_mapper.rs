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

//! DynamoDB query result mapping.

use aws_sdk_dynamodb::types::AttributeValue;
use consent_history_dbp::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentHistoryErrorKind;
use consent_history_dbp::history::ConsentHistoryRecord;
use consent_history_dbp::history::StoredConsent;
use std::collections::HashMap;

/// DynamoDB query result mapper.
pub struct DynamoDbResultMapper {}

impl DynamoDbResultMapper {
    /// Map one table or index item into a [ConsentHistoryRecord].
    ///
    /// Consent images are stored as JSON string attributes. A missing or
    /// non-string core attribute and a malformed image document are both
    /// corrupt stored data.
    pub fn into_history_record(
        item: &HashMap<String, AttributeValue>,
    ) -> Result<ConsentHistoryRecord, ConsentHistoryError> {
        Ok(ConsentHistoryRecord::new(
            Self::string_attribute(item, "id")?,
            Self::string_attribute(item, "eventId")?,
            Self::string_attribute(item, "eventTime")?,
            Self::string_attribute(item, "eventType")?,
            Self::image_attribute(item, "oldImage")?,
            Self::image_attribute(item, "newImage")?,
        ))
    }

    fn string_attribute<'a>(
        item: &'a HashMap<String, AttributeValue>,
        name: &str,
    ) -> Result<&'a str, ConsentHistoryError> {
        item.get(name)
            .and_then(|attribute_value| attribute_value.as_s().ok())
            .map(String::as_str)
            .ok_or_else(|| {
                ConsentHistoryErrorKind::Infrastructure.error_with_msg(format!(
                    "History record is missing string attribute '{name}'."
                ))
            })
    }

    fn image_attribute(
        item: &HashMap<String, AttributeValue>,
        name: &str,
    ) -> Result<Option<StoredConsent>, ConsentHistoryError> {
        match item.get(name) {
            None | Some(AttributeValue::Null(_)) => Ok(None),
            Some(attribute_value) => {
                let json = attribute_value.as_s().map_err(|_| {
                    ConsentHistoryErrorKind::Infrastructure.error_with_msg(format!(
                        "History record attribute '{name}' is not a string."
                    ))
                })?;
                serde_json::from_str::<StoredConsent>(json)
                    .map(Some)
                    .map_err(|e| {
                        ConsentHistoryErrorKind::Infrastructure.error_with_msg(format!(
                            "Malformed consent image in attribute '{name}': {e}"
                        ))
                    })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn item_with_images() -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                "id".to_owned(),
                AttributeValue::S("s|u|c".to_owned()),
            ),
            (
                "eventId".to_owned(),
                AttributeValue::S("event-1".to_owned()),
            ),
            (
                "eventTime".to_owned(),
                AttributeValue::S("2024-05-01T10:15:30Z".to_owned()),
            ),
            (
                "eventType".to_owned(),
                AttributeValue::S("INSERT".to_owned()),
            ),
            ("oldImage".to_owned(), AttributeValue::Null(true)),
            (
                "newImage".to_owned(),
                AttributeValue::S(
                    r#"{"id":"s|u|c","consentId":"c","consentVersion":1,"userId":"u","serviceId":"s","consentStatus":"ACTIVE"}"#
                        .to_owned(),
                ),
            ),
        ])
    }

    #[test]
    fn maps_item_with_null_and_json_images() {
        let record = DynamoDbResultMapper::into_history_record(&item_with_images()).unwrap();
        assert_eq!(record.get_id(), "s|u|c");
        assert_eq!(record.get_event_id(), "event-1");
        assert_eq!(record.get_event_type(), "INSERT");
        assert!(record.get_old_image().is_none());
        let image = record.get_new_image().unwrap().decode().unwrap();
        assert_eq!(image.get_consent_version(), 1);
    }

    #[test]
    fn missing_core_attribute_is_corrupt_data() {
        let mut item = item_with_images();
        item.remove("eventTime");
        assert!(DynamoDbResultMapper::into_history_record(&item).is_err());
    }

    #[test]
    fn malformed_image_json_is_corrupt_data() {
        let mut item = item_with_images();
        item.insert(
            "newImage".to_owned(),
            AttributeValue::S("{not json".to_owned()),
        );
        assert!(DynamoDbResultMapper::into_history_record(&item).is_err());
    }
}
