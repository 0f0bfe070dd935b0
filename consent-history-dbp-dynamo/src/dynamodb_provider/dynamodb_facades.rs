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

//! DynamoDB specific database code.

mod dynamodb_consent_history_facade;

pub use self::dynamodb_consent_history_facade::*;
use super::DynamoDbProvider;
use consent_history_dbp::dbp::facades::*;
use std::sync::Arc;

/// DynamoDB specific database code.
pub struct DynamoDbProviderFacades {
    consent_history_facade: DynamoDbConsentHistoryFacade,
}

impl DynamoDbProviderFacades {
    /// Return a new instance.
    pub fn new(dynamodb_provider: &Arc<DynamoDbProvider>) -> Self {
        Self {
            consent_history_facade: DynamoDbConsentHistoryFacade::new(dynamodb_provider),
        }
    }
}

impl DatabaseProviderFacades for DynamoDbProviderFacades {
    fn consent_history_facade(&self) -> &dyn ConsentHistoryFacade {
        &self.consent_history_facade
    }
}
