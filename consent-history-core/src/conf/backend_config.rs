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

//! Parsing of configuration for database backend.

use config::ConfigBuilder;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;

use super::AppConfigDefaults;

/// Configuration for persistence backend.
#[derive(Debug, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend implementation
    implementation: String,
    /// DynamoDB table holding the change data capture records.
    table: String,
    /// DynamoDB global secondary index partitioned by service user.
    serviceuserindex: String,
    /// DynamoDB endpoint URL override for local stacks.
    endpoint: String,
}

impl AppConfigDefaults for BackendConfig {
    /// Provide defaults for this part of the configuration
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> ConfigBuilder<T> {
        config_builder
            .set_default(prefix.to_string() + "." + "implementation", "dynamodb")
            .unwrap()
            .set_default(prefix.to_string() + "." + "table", "ConsentHistory")
            .unwrap()
            .set_default(
                prefix.to_string() + "." + "serviceuserindex",
                "ConsentHistoryByServiceUser",
            )
            .unwrap()
            .set_default(prefix.to_string() + "." + "endpoint", "")
            .unwrap()
    }
}

impl BackendConfig {
    /// Backend implementation variant
    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// DynamoDB table holding the change data capture records.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// DynamoDB global secondary index partitioned by `serviceId|userId`.
    pub fn service_user_index(&self) -> &str {
        &self.serviceuserindex
    }

    /// DynamoDB endpoint URL override. Empty means the ambient AWS
    /// configuration decides.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
