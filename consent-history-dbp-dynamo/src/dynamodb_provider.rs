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

//! DynamoDB implementation of [DatabaseProvider].

mod dynamodb_facades;
mod dynamodb_result_mapper;

use self::dynamodb_facades::DynamoDbProviderFacades;
pub use self::dynamodb_result_mapper::DynamoDbResultMapper;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use consent_history_dbp::dbp::DatabaseProvider;
use consent_history_dbp::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentHistoryErrorKind;
use consent_history_dbp::history::ConsentHistoryRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// DynamoDB [DatabaseProvider] implementation.
pub struct DynamoDbProvider {
    /// DynamoDB client from the ambient AWS configuration.
    client: Client,
    /// Table holding the change data capture records.
    table_name: String,
    /// Global secondary index partitioned by `serviceId|userId`.
    service_user_index: String,
}

impl DynamoDbProvider {
    /// Partition key attribute of the history table.
    pub const PARTITION_KEY: &'static str = "id";
    /// Partition key attribute of the service-user secondary index.
    pub const SERVICE_USER_KEY: &'static str = "serviceUserId";

    /// Return a new instance.
    ///
    /// Credentials and region resolve from the ambient AWS configuration. A
    /// non-empty `endpoint` overrides the endpoint URL for local stacks.
    pub async fn new(table_name: &str, service_user_index: &str, endpoint: &str) -> Arc<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = if endpoint.is_empty() {
            Client::new(&sdk_config)
        } else {
            log::info!("Using DynamoDB endpoint override '{endpoint}'.");
            Client::from_conf(
                aws_sdk_dynamodb::config::Builder::from(&sdk_config)
                    .endpoint_url(endpoint)
                    .build(),
            )
        };
        Arc::new(Self {
            client,
            table_name: table_name.to_owned(),
            service_user_index: service_user_index.to_owned(),
        })
    }

    /// Get [DatabaseProvider] instance.
    pub fn as_database_provider(self: &Arc<Self>) -> DatabaseProvider {
        DatabaseProvider::new(Arc::new(DynamoDbProviderFacades::new(self)))
    }

    /// Query every record whose `key_attribute` equals `key`, draining all
    /// result pages, ascending by sort key.
    ///
    /// `index_name` selects a secondary index instead of the table itself.
    pub(crate) async fn query_all_by_key(
        &self,
        index_name: Option<&str>,
        key_attribute: &str,
        key: &str,
    ) -> Result<Vec<ConsentHistoryRecord>, ConsentHistoryError> {
        let mut records = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .set_index_name(index_name.map(str::to_owned))
                .key_condition_expression("#pk = :pk")
                .expression_attribute_names("#pk", key_attribute)
                .expression_attribute_values(":pk", AttributeValue::S(key.to_owned()))
                // Ascending by event time (oldest events first)
                .scan_index_forward(true)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|e| {
                    ConsentHistoryErrorKind::Infrastructure.error_with_msg(format!(
                        "DynamoDB query on '{}' failed: {e}",
                        self.table_name
                    ))
                })?;
            for item in output.items() {
                records.push(DynamoDbResultMapper::into_history_record(item)?);
            }
            match output.last_evaluated_key() {
                Some(last_evaluated_key) if !last_evaluated_key.is_empty() => {
                    exclusive_start_key = Some(last_evaluated_key.to_owned());
                }
                _ => break,
            }
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Query for '{key_attribute}' = '{key}' drained {} records.",
                records.len()
            );
        }
        Ok(records)
    }

    pub(crate) fn service_user_index(&self) -> &str {
        &self.service_user_index
    }
}
