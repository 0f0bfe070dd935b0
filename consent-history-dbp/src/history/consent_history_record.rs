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

//! Persisted history record model.

use super::StoredConsent;

/// One persisted entry of a consent's append-only change log.
///
/// Backends return these already ordered ascending by event time within one
/// partition; the query engine never re-sorts them.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsentHistoryRecord {
    /// Compound `serviceId|userId|consentId` partition key.
    id: String,
    /// Opaque unique event identifier within the partition.
    event_id: String,
    /// ISO-8601 offset timestamp of when the change happened.
    event_time: String,
    /// Stored string form of the change event type.
    event_type: String,
    /// Consent snapshot before the change, if the consent existed.
    old_image: Option<StoredConsent>,
    /// Consent snapshot after the change, unless the consent was removed.
    new_image: Option<StoredConsent>,
}

impl ConsentHistoryRecord {
    /// Return a new instance.
    pub fn new(
        id: &str,
        event_id: &str,
        event_time: &str,
        event_type: &str,
        old_image: Option<StoredConsent>,
        new_image: Option<StoredConsent>,
    ) -> Self {
        Self {
            id: id.to_owned(),
            event_id: event_id.to_owned(),
            event_time: event_time.to_owned(),
            event_type: event_type.to_owned(),
            old_image,
            new_image,
        }
    }

    /// Return the compound partition key addressing the history stream.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Return the unique event identifier.
    pub fn get_event_id(&self) -> &str {
        &self.event_id
    }

    /// Return the stored event timestamp.
    pub fn get_event_time(&self) -> &str {
        &self.event_time
    }

    /// Return the stored event type.
    pub fn get_event_type(&self) -> &str {
        &self.event_type
    }

    /// Return the stored snapshot from before the change.
    pub fn get_old_image(&self) -> Option<&StoredConsent> {
        self.old_image.as_ref()
    }

    /// Return the stored snapshot from after the change.
    pub fn get_new_image(&self) -> Option<&StoredConsent> {
        self.new_image.as_ref()
    }
}
