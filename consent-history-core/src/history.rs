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

//! Consent history query engine.

use crate::conf::AppConfig;
use consent_history_dbp::dbp::DatabaseProvider;
use consent_history_dbp::dbp::facades::DatabaseProviderFacades;
use consent_history_dbp::history::ChangeEventMapper;
use consent_history_dbp::history::ConsentChangeEvent;
use consent_history_dbp::history::ConsentHistory;
pub use consent_history_dbp::history::ConsentHistoryError;
pub use consent_history_dbp::history::ConsentHistoryErrorKind;
use consent_history_dbp_dynamo::DynamoDbProvider;
use consent_history_dbp_mem::InMemoryDatabaseProvider;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/** Consent history query engine.

Retrieves the append-only change log of a consent and aggregates user scoped
histories. The engine holds no state between invocations: every call drains
its backend scan completely and builds its result from scratch, so concurrent
calls (including calls for the same key) never interact.
*/
pub struct ConsentHistoryService {
    /// Thread safe boolean used to indicate application readyness.
    health_ready: AtomicBool,
    /// The database provider
    dbp: Arc<DatabaseProvider>,
}

impl ConsentHistoryService {
    /// Return a new instance with a database provider selected from the
    /// application configuration.
    pub async fn new(app_config: &Arc<AppConfig>) -> Arc<Self> {
        let dbp = match app_config.backend.implementation() {
            "dynamodb" => {
                let dynamodb_provider = DynamoDbProvider::new(
                    app_config.backend.table(),
                    app_config.backend.service_user_index(),
                    app_config.backend.endpoint(),
                )
                .await;
                Arc::new(dynamodb_provider.as_database_provider())
            }
            "mem" => {
                let inmem_provider = InMemoryDatabaseProvider::new().await;
                Arc::new(inmem_provider.as_database_provider())
            }
            unknown_provider => panic!("Unkown database provider type '{unknown_provider}'."),
        };
        log::info!("Consent history service dependencies have been created.");
        Self::with_database_provider(dbp)
    }

    /// Return a new instance bound to an existing database provider.
    ///
    /// There is no asynchronous warm-up: the service is ready as soon as the
    /// provider exists.
    pub fn with_database_provider(dbp: Arc<DatabaseProvider>) -> Arc<Self> {
        Arc::new(Self {
            health_ready: AtomicBool::new(true),
            dbp,
        })
    }

    /// Return `true` if the app has started.
    pub fn is_health_started(&self) -> bool {
        self.health_ready.load(Ordering::Relaxed)
    }

    /// Return `true` if the app is ready to recieve requests.
    pub fn is_health_ready(&self) -> bool {
        self.health_ready.load(Ordering::Relaxed)
    }

    /// Return `true` if the app is functioning as expected.
    pub fn is_health_live(&self) -> bool {
        true
    }

    /// Compound partition key addressing one consent's history stream.
    ///
    /// Order sensitive: service, then user, then consent. The separator is
    /// not expected to occur inside identifiers.
    pub fn consent_stream_key(service_id: &str, user_id: &str, consent_id: &str) -> String {
        format!("{service_id}|{user_id}|{consent_id}")
    }

    /// Compound key addressing every history stream of one service user.
    pub fn service_user_key(service_id: &str, user_id: &str) -> String {
        format!("{service_id}|{user_id}")
    }

    /// Retrieve the full ordered change history of a single consent.
    ///
    /// Events are returned in scan order, one per stored record. An absent
    /// partition and an empty drain both mean the history does not exist.
    pub async fn get_consent_history(
        &self,
        service_id: &str,
        user_id: &str,
        consent_id: &str,
    ) -> Result<Vec<ConsentChangeEvent>, ConsentHistoryError> {
        let stream_key = Self::consent_stream_key(service_id, user_id, consent_id);
        let records = self
            .dbp
            .consent_history_facade()
            .history_by_consent(&stream_key)
            .await?
            .unwrap_or_default();
        if records.is_empty() {
            let msg = format!(
                "No consent history found for serviceId: {service_id}, userId: {user_id}, consentId: {consent_id}"
            );
            log::warn!("{msg}");
            return Err(ConsentHistoryErrorKind::NotFound.error_with_msg(msg));
        }
        let events = records
            .iter()
            .map(ChangeEventMapper::to_change_event)
            .collect::<Result<Vec<_>, _>>()?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "get_consent_history({service_id}, {user_id}, {consent_id}) retrieved {} change events.",
                events.len()
            );
        }
        Ok(events)
    }

    /// Retrieve the change histories of every consent a service user has
    /// ever held, grouped per consent stream.
    ///
    /// Each record joins the group addressed by its own stream key. Groups
    /// materialize in first-seen order and events keep scan order within
    /// their group.
    pub async fn get_service_user_history(
        &self,
        service_id: &str,
        user_id: &str,
    ) -> Result<Vec<ConsentHistory>, ConsentHistoryError> {
        let group_key = Self::service_user_key(service_id, user_id);
        let records = self
            .dbp
            .consent_history_facade()
            .history_by_service_user(&group_key)
            .await?
            .unwrap_or_default();
        let mut consent_histories: Vec<ConsentHistory> = Vec::new();
        for record in &records {
            let event = ChangeEventMapper::to_change_event(record)?;
            match consent_histories
                .iter_mut()
                .find(|history| history.get_consent_id() == event.get_consent_id())
            {
                Some(history) => history.add_event(event),
                None => consent_histories.push(ConsentHistory::with_first_event(event)),
            }
        }
        log::info!(
            "get_service_user_history({service_id}, {user_id}) retrieved {} consent histories.",
            consent_histories.len()
        );
        if consent_histories.is_empty() {
            let msg = format!(
                "No consent history found for serviceId: {service_id}, userId: {user_id}"
            );
            log::warn!("{msg}");
            return Err(ConsentHistoryErrorKind::NotFound.error_with_msg(msg));
        }
        Ok(consent_histories)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use consent_history_dbp::history::ConsentEventType;
    use consent_history_dbp::history::ConsentHistoryRecord;
    use consent_history_dbp::history::ConsentImage;
    use consent_history_dbp::history::ConsentStatus;
    use consent_history_dbp::history::StoredConsent;

    const SERVICE_ID: &str = "TestServiceId";
    const USER_ID: &str = "TestUserId";

    pub fn initialize_env_logger() {
        env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init()
            .map_err(|e| {
                log::trace!("Env logger for testing was probably already initialized: {e:?}")
            })
            .ok();
    }

    async fn service_and_provider() -> (Arc<InMemoryDatabaseProvider>, Arc<ConsentHistoryService>) {
        initialize_env_logger();
        let inmem_provider = InMemoryDatabaseProvider::new().await;
        let service = ConsentHistoryService::with_database_provider(Arc::new(
            inmem_provider.as_database_provider(),
        ));
        (inmem_provider, service)
    }

    fn stored_image(consent_id: &str, consent_version: i32) -> StoredConsent {
        StoredConsent::encode(&ConsentImage::new(
            SERVICE_ID,
            USER_ID,
            consent_id,
            consent_version,
            ConsentStatus::Active,
            None,
            None,
            None,
        ))
    }

    fn record(
        consent_id: &str,
        event_id: &str,
        event_time: &str,
        event_type: &str,
        old_image: Option<StoredConsent>,
        new_image: Option<StoredConsent>,
    ) -> ConsentHistoryRecord {
        ConsentHistoryRecord::new(
            &ConsentHistoryService::consent_stream_key(SERVICE_ID, USER_ID, consent_id),
            event_id,
            event_time,
            event_type,
            old_image,
            new_image,
        )
    }

    #[tokio::test]
    async fn consent_history_not_found_on_empty_log() {
        let (_inmem_provider, service) = service_and_provider().await;
        let e = service
            .get_consent_history("S", "U", "C")
            .await
            .unwrap_err();
        assert!(matches!(e.kind(), ConsentHistoryErrorKind::NotFound));
        assert_eq!(
            e.to_string(),
            "No consent history found for serviceId: S, userId: U, consentId: C"
        );
    }

    #[tokio::test]
    async fn service_user_history_not_found_on_empty_log() {
        let (_inmem_provider, service) = service_and_provider().await;
        let e = service.get_service_user_history("S", "U").await.unwrap_err();
        assert!(matches!(e.kind(), ConsentHistoryErrorKind::NotFound));
        assert_eq!(
            e.to_string(),
            "No consent history found for serviceId: S, userId: U"
        );
    }

    #[tokio::test]
    async fn single_insert_event_maps_images() {
        let (inmem_provider, service) = service_and_provider().await;
        inmem_provider.history_record_insert(
            SERVICE_ID,
            USER_ID,
            record(
                "consent1",
                &uuid::Uuid::new_v4().to_string(),
                "2024-05-01T10:00:00Z",
                "INSERT",
                None,
                Some(stored_image("consent1", 1)),
            ),
        );
        let events = service
            .get_consent_history(SERVICE_ID, USER_ID, "consent1")
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.get_event_type(), ConsentEventType::Insert);
        assert!(event.get_old_image().is_none());
        let new_image = event.get_new_image().unwrap();
        assert_eq!(new_image.get_consent_version(), 1);
        assert_eq!(new_image.get_status(), ConsentStatus::Active);
    }

    #[tokio::test]
    async fn consent_history_preserves_scan_order() {
        let (inmem_provider, service) = service_and_provider().await;
        for (event_id, event_time) in [
            ("e1", "2024-05-01T10:00:00Z"),
            ("e2", "2024-05-01T10:01:00Z"),
            ("e3", "2024-05-01T10:02:00Z"),
        ] {
            inmem_provider.history_record_insert(
                SERVICE_ID,
                USER_ID,
                record(
                    "consent1",
                    event_id,
                    event_time,
                    "MODIFY",
                    Some(stored_image("consent1", 1)),
                    Some(stored_image("consent1", 2)),
                ),
            );
        }
        let events = service
            .get_consent_history(SERVICE_ID, USER_ID, "consent1")
            .await
            .unwrap();
        assert_eq!(
            events
                .iter()
                .map(ConsentChangeEvent::get_event_id)
                .collect::<Vec<_>>(),
            ["e1", "e2", "e3"]
        );
    }

    #[tokio::test]
    async fn service_user_history_groups_interleaved_streams_in_first_seen_order() {
        let (inmem_provider, service) = service_and_provider().await;
        for (consent_id, event_id, event_time) in [
            ("consent1", "c1e1", "2024-05-01T10:00:00Z"),
            ("consent2", "c2e1", "2024-05-01T10:01:00Z"),
            ("consent1", "c1e2", "2024-05-01T10:02:00Z"),
        ] {
            inmem_provider.history_record_insert(
                SERVICE_ID,
                USER_ID,
                record(
                    consent_id,
                    event_id,
                    event_time,
                    "MODIFY",
                    Some(stored_image(consent_id, 1)),
                    Some(stored_image(consent_id, 2)),
                ),
            );
        }
        let consent_histories = service
            .get_service_user_history(SERVICE_ID, USER_ID)
            .await
            .unwrap();
        assert_eq!(consent_histories.len(), 2);
        assert_eq!(
            consent_histories[0].get_consent_id(),
            ConsentHistoryService::consent_stream_key(SERVICE_ID, USER_ID, "consent1")
        );
        assert_eq!(
            consent_histories[0]
                .get_history()
                .iter()
                .map(ConsentChangeEvent::get_event_id)
                .collect::<Vec<_>>(),
            ["c1e1", "c1e2"]
        );
        assert_eq!(
            consent_histories[1].get_consent_id(),
            ConsentHistoryService::consent_stream_key(SERVICE_ID, USER_ID, "consent2")
        );
        assert_eq!(
            consent_histories[1]
                .get_history()
                .iter()
                .map(ConsentChangeEvent::get_event_id)
                .collect::<Vec<_>>(),
            ["c2e1"]
        );
        // A pure read: a second pass over the unchanged log is identical.
        let second_pass = service
            .get_service_user_history(SERVICE_ID, USER_ID)
            .await
            .unwrap();
        assert_eq!(second_pass, consent_histories);
    }
}
