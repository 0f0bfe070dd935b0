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

//! Database facade for read access to consent history streams.

use crate::history::ConsentHistoryError;
use crate::history::ConsentHistoryRecord;

/// Database facade for read access to consent history streams.
///
/// Implementations return records already ordered ascending by event time
/// within any one partition and drain every backend page before returning.
/// The engine never re-sorts.
#[async_trait::async_trait]
pub trait ConsentHistoryFacade: Send + Sync {
    /// Scan the full change log of a single consent.
    ///
    /// `stream_key` is the compound `serviceId|userId|consentId` partition
    /// key. `None` means the backend has no partition for the key at all,
    /// which callers treat the same as an empty result set.
    async fn history_by_consent(
        &self,
        stream_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError>;

    /// Scan the change logs of every consent ever held by one service user,
    /// via the secondary grouping index.
    ///
    /// `group_key` is the compound `serviceId|userId` key. Records of
    /// different consents arrive interleaved, each consent's sub-sequence
    /// internally ordered ascending by event time.
    async fn history_by_service_user(
        &self,
        group_key: &str,
    ) -> Result<Option<Vec<ConsentHistoryRecord>>, ConsentHistoryError>;
}
