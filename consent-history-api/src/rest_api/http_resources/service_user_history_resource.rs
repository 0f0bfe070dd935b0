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

//! API resource for retrieving every consent history of a service user.

use crate::rest_api::AppState;
use crate::rest_api::common::ApiErrorMapper;
use crate::rest_api::common::PathParameterParser;
use actix_web::HttpResponse;
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Path;
use consent_history_core::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentHistory;
use serde::Serialize;
use utoipa::ToSchema;

/// Success response body.
#[derive(Serialize, ToSchema)]
pub struct ServiceUserHistoryResponseContent {
    /// Per-consent histories in the order each consent was first observed.
    data: Vec<ConsentHistory>,
}

/// Retrieve the change histories of every consent a service user has ever
/// held, grouped per consent.
#[utoipa::path(
    tag = "consent-history",
    params(
        ("service_id", description = "Service identifier."),
        ("user_id", description = "User identifier."),
    ),
    responses(
        (
            status = 200,
            description = "Return one history per consent, events oldest first.",
            body = ServiceUserHistoryResponseContent,
            content_type = "application/json",
        ),
        (status = 400, description = "Bad request: Missing required path parameter."),
        (status = 404, description = "No history was found for the service user."),
        (status = 500, description = "Internal server error."),
    ),
)]
#[get("/services/{service_id}/users/{user_id}/consents")]
pub async fn consent_histories_by_service_user(
    app_state: Data<AppState>,
    path: Path<(String, String)>,
) -> HttpResponse {
    let (service_id, user_id) = path.into_inner();
    handle(&app_state, &service_id, &user_id)
        .await
        .unwrap_or_else(ApiErrorMapper::from_consent_history_error)
}

async fn handle(
    app_state: &AppState,
    service_id: &str,
    user_id: &str,
) -> Result<HttpResponse, ConsentHistoryError> {
    let service_id = PathParameterParser::required("serviceId", service_id)?;
    let user_id = PathParameterParser::required("userId", user_id)?;
    let data = app_state
        .service
        .get_service_user_history(&service_id, &user_id)
        .await?;
    Ok(HttpResponse::Ok().json(ServiceUserHistoryResponseContent { data }))
}
