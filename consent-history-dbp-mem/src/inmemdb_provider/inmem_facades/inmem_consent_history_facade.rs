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

//! Ephemeral in-memory implementation of [ConsentHistoryFacade].

use crate::InMemoryDatabaseProvider;
use consent_history_dbp::dbp::facades::ConsentHistoryFacade;
use consent_history_dbp::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentHistoryRecord;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [ConsentHistoryFacade].
pub struct InMemConsentHistoryFacade {
    inmem_provider: Arc<InMemoryDatabaseProvider>,
}

impl InMemConsentHistoryFacade {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryDatabaseProvider>) -> Self {
        Self {
            inmem_provider: Arc::clone(inmem_provider),
        }
    }
}

#[async_trait::async_trait]
impl ConsentHistoryFacade for InMemConsentHistoryFacade {
    async fn history_by_consent(
        &self,
        stream_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError> {
        Ok(self.inmem_provider.records_by_stream_key(stream_key))
    }

    async fn history_by_service_user(
        &self,
        group_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError> {
        Ok(self.inmem_provider.records_by_service_user_key(group_key))
    }
}
