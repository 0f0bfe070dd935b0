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

//! DynamoDB implementation of [ConsentHistoryFacade].

use crate::DynamoDbProvider;
use consent_history_dbp::dbp::facades::ConsentHistoryFacade;
use consent_history_dbp::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentHistoryRecord;
use std::sync::Arc;

/// DynamoDB implementation of [ConsentHistoryFacade].
///
/// DynamoDB reports an unknown partition as an empty result set rather than
/// as an absent scan handle, so both operations return `Some` on success and
/// leave the empty-drain handling to the caller.
pub struct DynamoDbConsentHistoryFacade {
    dynamodb_provider: Arc<DynamoDbProvider>,
}

impl DynamoDbConsentHistoryFacade {
    /// Return a new instance.
    pub fn new(dynamodb_provider: &Arc<DynamoDbProvider>) -> Self {
        Self {
            dynamodb_provider: Arc::clone(dynamodb_provider),
        }
    }
}

#[async_trait::async_trait]
impl ConsentHistoryFacade for DynamoDbConsentHistoryFacade {
    async fn history_by_consent(
        &self,
        stream_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError> {
        self.dynamodb_provider
            .query_all_by_key(None, DynamoDbProvider::PARTITION_KEY, stream_key)
            .await
            .map(Some)
    }

    async fn history_by_service_user(
        &self,
        group_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError> {
        self.dynamodb_provider
            .query_all_by_key(
                Some(self.dynamodb_provider.service_user_index()),
                DynamoDbProvider::SERVICE_USER_KEY,
                group_key,
            )
            .await
            .map(Some)
    }
}
