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

//! Mapper of app errors to REST API responses.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
pub use consent_history_core::history::ConsentHistoryError;
use consent_history_core::history::ConsentHistoryErrorKind;
use serde::Serialize;
use utoipa::ToSchema;

/// Error response body.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponseContent {
    /// Human readable description of the failure.
    message: String,
}

/// Mapper of app errors to REST API responses.
///
/// The single response-building point of the boundary: every error is logged
/// here before translation and none propagates past it.
pub struct ApiErrorMapper {}

impl ApiErrorMapper {
    /// Return a REST API response from a [ConsentHistoryError].
    pub fn from_consent_history_error<E: AsRef<ConsentHistoryError>>(e: E) -> HttpResponse {
        let e = e.as_ref();
        let status_code = match e.kind() {
            ConsentHistoryErrorKind::NotFound => {
                // HTTP 404
                log::info!("Will respond with not found. msg: {e}");
                StatusCode::NOT_FOUND
            }
            ConsentHistoryErrorKind::BadRequest | ConsentHistoryErrorKind::Unsupported => {
                // HTTP 400
                log::warn!("Will respond with bad request. msg: {e}");
                StatusCode::BAD_REQUEST
            }
            ConsentHistoryErrorKind::Infrastructure => {
                // HTTP 500
                log::warn!("Will respond with internal server error. msg: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        HttpResponse::build(status_code).json(ErrorResponseContent {
            message: e.to_string(),
        })
    }
}
