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

//! Validation of required path parameters.

use consent_history_core::history::ConsentHistoryError;
use consent_history_core::history::ConsentHistoryErrorKind;

/// Validation of required path parameters.
pub struct PathParameterParser {}

impl PathParameterParser {
    /// Return the validated value of a required path parameter.
    ///
    /// Route matching never yields an absent segment, so a value that is
    /// blank after trimming is the remaining way for an identifier to be
    /// missing.
    pub fn required(name: &str, value: &str) -> Result<String, ConsentHistoryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(ConsentHistoryErrorKind::BadRequest
                .error_with_msg(format!("Missing required path parameter: {name}")))
        } else {
            Ok(trimmed.to_owned())
        }
    }
}
