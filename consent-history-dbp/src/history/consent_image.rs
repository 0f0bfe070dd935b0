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

//! Point-in-time consent snapshot.

use super::ConsentStatus;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Snapshot of one consent's attributes at a single point in time.
///
/// Absence of a whole image is expressed as `Option<ConsentImage>` at the
/// call sites: an INSERT event has no image before the change and a REMOVE
/// event has none after it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentImage {
    service_id: String,
    user_id: String,
    consent_id: String,
    consent_version: i32,
    status: ConsentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_time: Option<DateTime<Utc>>,
}

impl ConsentImage {
    /// Return a new instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        service_id: &str,
        user_id: &str,
        consent_id: &str,
        consent_version: i32,
        status: ConsentStatus,
        consent_type: Option<String>,
        consent_data: Option<HashMap<String, String>>,
        expiry_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            service_id: service_id.to_owned(),
            user_id: user_id.to_owned(),
            consent_id: consent_id.to_owned(),
            consent_version,
            status,
            consent_type,
            consent_data,
            expiry_time,
        }
    }

    /// Return the service identifier.
    pub fn get_service_id(&self) -> &str {
        &self.service_id
    }

    /// Return the user identifier.
    pub fn get_user_id(&self) -> &str {
        &self.user_id
    }

    /// Return the bare consent identifier, scoped to the service-user pair.
    pub fn get_consent_id(&self) -> &str {
        &self.consent_id
    }

    /// Return the monotonically increasing consent version.
    pub fn get_consent_version(&self) -> i32 {
        self.consent_version
    }

    /// Return the lifecycle status.
    pub fn get_status(&self) -> ConsentStatus {
        self.status
    }

    /// Return the consent type, if any.
    pub fn get_consent_type(&self) -> Option<&str> {
        self.consent_type.as_deref()
    }

    /// Return the free-form consent data, if any.
    pub fn get_consent_data(&self) -> Option<&HashMap<String, String>> {
        self.consent_data.as_ref()
    }

    /// Return the expiry time, if any.
    pub fn get_expiry_time(&self) -> Option<DateTime<Utc>> {
        self.expiry_time
    }
}
