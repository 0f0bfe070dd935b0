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

//! Change event type.

use super::ConsentHistoryError;
use super::ConsentHistoryErrorKind;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kind of change a history record captured. Closed set.
///
/// An INSERT event has no old image and a REMOVE event has no new image.
/// The change data capture producer owns that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentEventType {
    /// The consent came into existence.
    Insert,
    /// An attribute of the consent changed.
    Modify,
    /// The consent was deleted.
    Remove,
}

impl ConsentEventType {
    /// Return the stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Modify => "MODIFY",
            Self::Remove => "REMOVE",
        }
    }
}

impl FromStr for ConsentEventType {
    type Err = ConsentHistoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INSERT" => Ok(Self::Insert),
            "MODIFY" => Ok(Self::Modify),
            "REMOVE" => Ok(Self::Remove),
            other => Err(ConsentHistoryErrorKind::Infrastructure
                .error_with_msg(format!("Unrecognized stored event type '{other}'."))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_all_stored_forms() {
        for event_type in [
            ConsentEventType::Insert,
            ConsentEventType::Modify,
            ConsentEventType::Remove,
        ] {
            assert_eq!(
                ConsentEventType::from_str(event_type.as_str()).unwrap(),
                event_type
            );
        }
    }

    #[test]
    fn rejects_unknown_stored_form() {
        let e = ConsentEventType::from_str("UPSERT").unwrap_err();
        assert!(matches!(e.kind(), ConsentHistoryErrorKind::Infrastructure));
    }
}
