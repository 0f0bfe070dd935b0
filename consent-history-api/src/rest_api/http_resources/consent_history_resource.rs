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

//! API resource for retrieving the change history of one consent.

use crate::rest_api::AppState;
use crate::rest_api::common::ApiErrorMapper;
use crate::rest_api::common::PathParameterParser;
use actix_web::HttpResponse;
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Path;
use consent_history_core::history::ConsentHistoryError;
use consent_history_dbp::history::ConsentChangeEvent;
use serde::Serialize;
use utoipa::ToSchema;

/// Success response body.
#[derive(Serialize, ToSchema)]
pub struct ConsentHistoryResponseContent {
    /// Change events in ascending event time order.
    data: Vec<ConsentChangeEvent>,
}

/// Retrieve the ordered change history of one consent.
#[utoipa::path(
    tag = "consent-history",
    params(
        ("service_id", description = "Service identifier."),
        ("user_id", description = "User identifier."),
        (
            "consent_id",
            description = "Consent identifier, specific to the service-user pair."
        ),
    ),
    responses(
        (
            status = 200,
            description = "Return the consent's change events, oldest first.",
            body = ConsentHistoryResponseContent,
            content_type = "application/json",
        ),
        (status = 400, description = "Bad request: Missing required path parameter."),
        (status = 404, description = "No history was found for the consent."),
        (status = 500, description = "Internal server error."),
    ),
)]
#[get("/services/{service_id}/users/{user_id}/consents/{consent_id}")]
pub async fn consent_history_by_service_user_consent(
    app_state: Data<AppState>,
    path: Path<(String, String, String)>,
) -> HttpResponse {
    let (service_id, user_id, consent_id) = path.into_inner();
    handle(&app_state, &service_id, &user_id, &consent_id)
        .await
        .unwrap_or_else(ApiErrorMapper::from_consent_history_error)
}

async fn handle(
    app_state: &AppState,
    service_id: &str,
    user_id: &str,
    consent_id: &str,
) -> Result<HttpResponse, ConsentHistoryError> {
    let service_id = PathParameterParser::required("serviceId", service_id)?;
    let user_id = PathParameterParser::required("userId", user_id)?;
    let consent_id = PathParameterParser::required("consentId", consent_id)?;
    let data = app_state
        .service
        .get_consent_history(&service_id, &user_id, &consent_id)
        .await?;
    Ok(HttpResponse::Ok().json(ConsentHistoryResponseContent { data }))
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::web;
    use consent_history_core::history::ConsentHistoryService;
    use consent_history_dbp::history::ConsentHistoryRecord;
    use consent_history_dbp::history::ConsentImage;
    use consent_history_dbp::history::ConsentStatus;
    use consent_history_dbp::history::StoredConsent;
    use consent_history_dbp_mem::InMemoryDatabaseProvider;
    use std::sync::Arc;

    fn app_state(inmem_provider: &Arc<InMemoryDatabaseProvider>) -> Data<AppState> {
        let service = ConsentHistoryService::with_database_provider(Arc::new(
            inmem_provider.as_database_provider(),
        ));
        Data::new(AppState { service })
    }

    #[actix_web::test]
    async fn unknown_consent_yields_not_found_with_message() {
        let inmem_provider = InMemoryDatabaseProvider::new().await;
        let app = test::init_service(
            App::new().app_data(app_state(&inmem_provider)).service(
                web::scope("/v1/consent-history")
                    .service(consent_history_by_service_user_consent),
            ),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/v1/consent-history/services/S/users/U/consents/C")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(
            body["message"],
            "No consent history found for serviceId: S, userId: U, consentId: C"
        );
    }

    #[actix_web::test]
    async fn blank_path_parameter_yields_bad_request() {
        let inmem_provider = InMemoryDatabaseProvider::new().await;
        let app = test::init_service(
            App::new().app_data(app_state(&inmem_provider)).service(
                web::scope("/v1/consent-history")
                    .service(consent_history_by_service_user_consent),
            ),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/v1/consent-history/services/%20/users/U/consents/C")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "Missing required path parameter: serviceId");
    }

    #[actix_web::test]
    async fn history_is_wrapped_in_a_data_attribute() {
        let inmem_provider = InMemoryDatabaseProvider::new().await;
        let stored_consent = StoredConsent::encode(&ConsentImage::new(
            "S",
            "U",
            "C",
            1,
            ConsentStatus::Active,
            None,
            None,
            None,
        ));
        inmem_provider.history_record_insert(
            "S",
            "U",
            ConsentHistoryRecord::new(
                "S|U|C",
                &uuid::Uuid::new_v4().to_string(),
                "2024-05-01T10:00:00Z",
                "INSERT",
                None,
                Some(stored_consent),
            ),
        );
        let app = test::init_service(
            App::new().app_data(app_state(&inmem_provider)).service(
                web::scope("/v1/consent-history")
                    .service(consent_history_by_service_user_consent),
            ),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/v1/consent-history/services/S/users/U/consents/C")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["consentId"], "S|U|C");
        assert_eq!(data[0]["eventType"], "INSERT");
        assert_eq!(data[0]["newImage"]["status"], "ACTIVE");
        assert!(data[0].get("oldImage").is_none());
    }
}
