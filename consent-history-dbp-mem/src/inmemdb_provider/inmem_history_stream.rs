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

//! Ephemeral in-memory representation of one history stream.

use consent_history_dbp::history::ConsentHistoryRecord;
use crossbeam_skiplist::SkipMap;

/// Ephemeral in-memory representation of one history stream.
///
/// Records are keyed by a provider-wide arrival sequence number, so iteration
/// yields them in the order they were written.
#[derive(Default)]
pub struct InMemHistoryStream {
    records: SkipMap<u64, ConsentHistoryRecord>,
}

impl InMemHistoryStream {
    /// Append a record under its arrival sequence number.
    pub fn append(&self, sequence: u64, record: ConsentHistoryRecord) {
        self.records.insert(sequence, record);
    }

    /// Return a copy of all records in arrival order.
    pub fn records_in_arrival_order(&self) -> Vec<ConsentHistoryRecord> {
        self.records
            .iter()
            .map(|entry| entry.value().to_owned())
            .collect()
    }
}
