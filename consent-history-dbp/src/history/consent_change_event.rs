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

//! Change event model.

use super::ConsentEventType;
use super::ConsentImage;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// One entry in a consent's history: a timestamped change with the consent
/// snapshots from before and after it.
///
/// Produced fresh for every query and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentChangeEvent {
    /// Compound partition key of the history stream. Callers treat this as an
    /// opaque identifier; it is not the bare `consentId` attribute carried
    /// inside the images.
    consent_id: String,
    event_id: String,
    event_time: DateTime<Utc>,
    event_type: ConsentEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_image: Option<ConsentImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_image: Option<ConsentImage>,
}

impl ConsentChangeEvent {
    /// Return a new instance.
    pub fn new(
        consent_id: &str,
        event_id: &str,
        event_time: DateTime<Utc>,
        event_type: ConsentEventType,
        old_image: Option<ConsentImage>,
        new_image: Option<ConsentImage>,
    ) -> Self {
        Self {
            consent_id: consent_id.to_owned(),
            event_id: event_id.to_owned(),
            event_time,
            event_type,
            old_image,
            new_image,
        }
    }

    /// Return the compound key identifying the history stream.
    pub fn get_consent_id(&self) -> &str {
        &self.consent_id
    }

    /// Return the unique event identifier.
    pub fn get_event_id(&self) -> &str {
        &self.event_id
    }

    /// Return the UTC normalized event time.
    pub fn get_event_time(&self) -> DateTime<Utc> {
        self.event_time
    }

    /// Return the kind of change.
    pub fn get_event_type(&self) -> ConsentEventType {
        self.event_type
    }

    /// Return the consent snapshot from before the change.
    pub fn get_old_image(&self) -> Option<&ConsentImage> {
        self.old_image.as_ref()
    }

    /// Return the consent snapshot from after the change.
    pub fn get_new_image(&self) -> Option<&ConsentImage> {
        self.new_image.as_ref()
    }
}
