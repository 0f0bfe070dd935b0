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

//! Per-consent history group.

use super::ConsentChangeEvent;
use serde::Serialize;
use utoipa::ToSchema;

/// The complete event stream of one consent, as returned by user scoped
/// queries. Constructed per query, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentHistory {
    /// Compound key identifying the consent's history stream.
    consent_id: String,
    /// Change events in the order they were encountered in the scan.
    history: Vec<ConsentChangeEvent>,
}

impl ConsentHistory {
    /// Return a new group seeded with its first observed event.
    pub fn with_first_event(event: ConsentChangeEvent) -> Self {
        Self {
            consent_id: event.get_consent_id().to_owned(),
            history: vec![event],
        }
    }

    /// Append an event, preserving scan order within the group.
    pub fn add_event(&mut self, event: ConsentChangeEvent) {
        self.history.push(event);
    }

    /// Return the compound key identifying the consent's history stream.
    pub fn get_consent_id(&self) -> &str {
        &self.consent_id
    }

    /// Return the ordered change events.
    pub fn get_history(&self) -> &[ConsentChangeEvent] {
        &self.history
    }
}
