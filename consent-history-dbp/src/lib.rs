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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod dbp;
pub mod history {
    //! Consent history domain objects.

    mod change_event_mapper;
    mod consent_change_event;
    mod consent_event_type;
    mod consent_history;
    mod consent_history_error;
    mod consent_history_record;
    mod consent_image;
    mod consent_status;
    mod event_timestamps;
    mod stored_consent;

    pub use self::change_event_mapper::ChangeEventMapper;
    pub use self::consent_change_event::ConsentChangeEvent;
    pub use self::consent_event_type::ConsentEventType;
    pub use self::consent_history::ConsentHistory;
    pub use self::consent_history_error::ConsentHistoryError;
    pub use self::consent_history_error::ConsentHistoryErrorKind;
    pub use self::consent_history_record::ConsentHistoryRecord;
    pub use self::consent_image::ConsentImage;
    pub use self::consent_status::ConsentStatus;
    pub use self::event_timestamps::parse_event_timestamp;
    pub use self::stored_consent::StoredConsent;
}
