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

//! Persisted consent snapshot representation and codec.

use super::ConsentHistoryError;
use super::ConsentHistoryErrorKind;
use super::ConsentImage;
use super::ConsentStatus;
use super::event_timestamps;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Persisted representation of a [ConsentImage].
///
/// Differences from the externalized image:
/// - the stored form carries an `id` attribute holding the compound
///   `serviceId|userId|consentId` partition key,
/// - the status attribute is named `consentStatus` instead of `status`,
/// - timestamps stay in their stored string form until decoded.
///
/// Every attribute is optional at this level. Presence of the always-present
/// attributes is enforced by [Self::decode].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_status: Option<ConsentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_time: Option<String>,
}

impl StoredConsent {
    /// Encode an externalized image into its persisted form.
    pub fn encode(image: &ConsentImage) -> Self {
        Self {
            id: Some(format!(
                "{}|{}|{}",
                image.get_service_id(),
                image.get_user_id(),
                image.get_consent_id()
            )),
            consent_id: Some(image.get_consent_id().to_owned()),
            consent_version: Some(image.get_consent_version()),
            user_id: Some(image.get_user_id().to_owned()),
            service_id: Some(image.get_service_id().to_owned()),
            consent_status: Some(image.get_status()),
            consent_type: image.get_consent_type().map(str::to_owned),
            consent_data: image.get_consent_data().cloned(),
            expiry_time: image.get_expiry_time().map(|ts| ts.to_rfc3339()),
        }
    }

    /// Decode the persisted form into an externalized image.
    ///
    /// A stored snapshot missing any always-present attribute, or carrying a
    /// malformed expiry timestamp, is corrupt stored data.
    pub fn decode(&self) -> Result<ConsentImage, ConsentHistoryError> {
        let service_id = self
            .service_id
            .as_deref()
            .ok_or_else(|| Self::missing_attribute("serviceId"))?;
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| Self::missing_attribute("userId"))?;
        let consent_id = self
            .consent_id
            .as_deref()
            .ok_or_else(|| Self::missing_attribute("consentId"))?;
        let consent_version = self
            .consent_version
            .ok_or_else(|| Self::missing_attribute("consentVersion"))?;
        let consent_status = self
            .consent_status
            .ok_or_else(|| Self::missing_attribute("consentStatus"))?;
        let expiry_time = self
            .expiry_time
            .as_deref()
            .map(event_timestamps::parse_event_timestamp)
            .transpose()?;
        Ok(ConsentImage::new(
            service_id,
            user_id,
            consent_id,
            consent_version,
            consent_status,
            self.consent_type.to_owned(),
            self.consent_data.to_owned(),
            expiry_time,
        ))
    }

    fn missing_attribute(name: &str) -> ConsentHistoryError {
        ConsentHistoryErrorKind::Infrastructure
            .error_with_msg(format!("Stored consent is missing attribute '{name}'."))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn full_image() -> ConsentImage {
        ConsentImage::new(
            "TestServiceId",
            "TestUserId",
            "TestConsentId",
            3,
            ConsentStatus::Active,
            Some("marketing".to_owned()),
            Some(HashMap::from([(
                "channel".to_owned(),
                "email".to_owned(),
            )])),
            Some(Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap()),
        )
    }

    fn minimal_image() -> ConsentImage {
        ConsentImage::new(
            "TestServiceId",
            "TestUserId",
            "TestConsentId",
            1,
            ConsentStatus::Revoked,
            None,
            None,
            None,
        )
    }

    #[test]
    fn round_trip_with_all_attributes() {
        let image = full_image();
        assert_eq!(StoredConsent::encode(&image).decode().unwrap(), image);
    }

    #[test]
    fn round_trip_with_optional_attributes_absent() {
        let image = minimal_image();
        assert_eq!(StoredConsent::encode(&image).decode().unwrap(), image);
    }

    #[test]
    fn encode_derives_compound_id() {
        let stored = StoredConsent::encode(&minimal_image());
        assert_eq!(
            stored.id.as_deref(),
            Some("TestServiceId|TestUserId|TestConsentId")
        );
    }

    #[test]
    fn decode_fails_on_each_missing_required_attribute() {
        for clear in [
            |s: &mut StoredConsent| s.service_id = None,
            |s: &mut StoredConsent| s.user_id = None,
            |s: &mut StoredConsent| s.consent_id = None,
            |s: &mut StoredConsent| s.consent_version = None,
            |s: &mut StoredConsent| s.consent_status = None,
        ] {
            let mut stored = StoredConsent::encode(&full_image());
            clear(&mut stored);
            let e = stored.decode().unwrap_err();
            assert!(matches!(e.kind(), ConsentHistoryErrorKind::Infrastructure));
        }
    }

    #[test]
    fn decode_fails_on_malformed_expiry_time() {
        let mut stored = StoredConsent::encode(&full_image());
        stored.expiry_time = Some("soon".to_owned());
        assert!(stored.decode().is_err());
    }

    #[test]
    fn stored_json_uses_persisted_attribute_names() {
        let json = serde_json::to_value(StoredConsent::encode(&minimal_image())).unwrap();
        assert!(json.get("consentStatus").is_some());
        assert!(json.get("status").is_none());
        assert!(json.get("id").is_some());
    }
}
