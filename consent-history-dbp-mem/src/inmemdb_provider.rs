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

//! Ephemeral in-memory implementation of [DatabaseProvider].

mod inmem_facades;
mod inmem_history_stream;

use self::inmem_facades::InMemProviderFacades;
use self::inmem_history_stream::InMemHistoryStream;
use consent_history_dbp::dbp::DatabaseProvider;
use consent_history_dbp::history::ConsentHistoryRecord;
use crossbeam_skiplist::SkipMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Ephemeral in-memory implementation of [DatabaseProvider].
///
/// Records are held per compound stream key and mirrored into a service-user
/// index, both in arrival order. Arrival order stands in for the
/// ascending-by-event-time order the durable backends guarantee.
pub struct InMemoryDatabaseProvider {
    streams: SkipMap<String, Arc<InMemHistoryStream>>,
    streams_by_service_user: SkipMap<String, Arc<InMemHistoryStream>>,
    arrival_sequence: AtomicU64,
}

impl InMemoryDatabaseProvider {
    /// Return a new instance.
    pub async fn new() -> Arc<Self> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Using in-mem db provider.");
        }
        Arc::new(Self {
            streams: SkipMap::default(),
            streams_by_service_user: SkipMap::default(),
            arrival_sequence: AtomicU64::default(),
        })
    }

    /// Get [DatabaseProvider] instance.
    pub fn as_database_provider(self: &Arc<Self>) -> DatabaseProvider {
        DatabaseProvider::new(Arc::new(InMemProviderFacades::new(self)))
    }

    /// Append a history record, standing in for the external change data
    /// capture writer.
    ///
    /// The record lands in the stream addressed by its own compound key and
    /// in the `serviceId|userId` grouping index.
    pub fn history_record_insert(
        &self,
        service_id: &str,
        user_id: &str,
        record: ConsentHistoryRecord,
    ) {
        let sequence = self.arrival_sequence.fetch_add(1, Ordering::Relaxed);
        Arc::clone(
            self.streams
                .get_or_insert_with(record.get_id().to_owned(), Arc::default)
                .value(),
        )
        .append(sequence, record.to_owned());
        Arc::clone(
            self.streams_by_service_user
                .get_or_insert_with(format!("{service_id}|{user_id}"), Arc::default)
                .value(),
        )
        .append(sequence, record);
    }

    fn records_by_stream_key(&self, stream_key: &str) -> Option<Vec<ConsentHistoryRecord>> {
        self.streams
            .get(stream_key)
            .map(|entry| entry.value().records_in_arrival_order())
    }

    fn records_by_service_user_key(&self, group_key: &str) -> Option<Vec<ConsentHistoryRecord>> {
        self.streams_by_service_user
            .get(group_key)
            .map(|entry| entry.value().records_in_arrival_order())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(stream_key: &str, event_id: &str) -> ConsentHistoryRecord {
        ConsentHistoryRecord::new(
            stream_key,
            event_id,
            "2024-05-01T10:15:30Z",
            "MODIFY",
            None,
            None,
        )
    }

    #[tokio::test]
    async fn unknown_keys_have_no_stream() {
        let provider = InMemoryDatabaseProvider::new().await;
        assert!(provider.records_by_stream_key("s|u|c").is_none());
        assert!(provider.records_by_service_user_key("s|u").is_none());
    }

    #[tokio::test]
    async fn stream_keeps_arrival_order() {
        let provider = InMemoryDatabaseProvider::new().await;
        for event_id in ["e1", "e2", "e3"] {
            provider.history_record_insert("s", "u", record("s|u|c", event_id));
        }
        let records = provider.records_by_stream_key("s|u|c").unwrap();
        assert_eq!(
            records
                .iter()
                .map(ConsentHistoryRecord::get_event_id)
                .collect::<Vec<_>>(),
            ["e1", "e2", "e3"]
        );
    }

    #[tokio::test]
    async fn service_user_index_keeps_cross_stream_interleaving() {
        let provider = InMemoryDatabaseProvider::new().await;
        provider.history_record_insert("s", "u", record("s|u|c1", "c1e1"));
        provider.history_record_insert("s", "u", record("s|u|c2", "c2e1"));
        provider.history_record_insert("s", "u", record("s|u|c1", "c1e2"));
        let records = provider.records_by_service_user_key("s|u").unwrap();
        assert_eq!(
            records
                .iter()
                .map(ConsentHistoryRecord::get_event_id)
                .collect::<Vec<_>>(),
            ["c1e1", "c2e1", "c1e2"]
        );
        // The per-consent stream only sees its own events.
        assert_eq!(provider.records_by_stream_key("s|u|c2").unwrap().len(), 1);
    }
}
