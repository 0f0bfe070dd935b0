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

//! REST API server and resources.

mod common {
    //! Common REST API resources and utils.

    mod api_error_mapper;
    mod path_parameters;

    pub use api_error_mapper::*;
    pub use path_parameters::*;
}
mod health_resources;
mod http_resources {
    //! API resources

    pub mod consent_history_resource;
    pub mod service_user_history_resource;
}

use self::common::ApiErrorMapper;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::get;
use actix_web::http::header::ContentType;
use actix_web::web;
use consent_history_core::conf::AppConfig;
use consent_history_core::history::ConsentHistoryErrorKind;
use consent_history_core::history::ConsentHistoryService;
use std::sync::Arc;
use utoipa::OpenApi;

/// Number of parallel requests the can be served for each assigned CPU core.
const WORKERS_PER_CORE: usize = 1024;

/// Shared state between requests.
#[derive(Clone)]
struct AppState {
    service: Arc<ConsentHistoryService>,
}

/// Run HTTP server.
pub async fn run_http_server(
    app_config: &Arc<AppConfig>,
    service: &Arc<ConsentHistoryService>,
) -> Result<(), Box<dyn core::error::Error>> {
    let workers = std::thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1);
    let max_connections = WORKERS_PER_CORE * workers;
    log::info!(
        "API described by http://{}:{}/openapi.json allows {max_connections} concurrent connections.",
        &app_config.api.bind_address(),
        &app_config.api.bind_port(),
    );
    let app_state: AppState = AppState {
        service: Arc::clone(service),
    };
    let app_data = web::Data::<AppState>::new(app_state);

    HttpServer::new(move || {
        let scope = web::scope("/v1/consent-history")
            .service(http_resources::consent_history_resource::consent_history_by_service_user_consent)
            .service(http_resources::service_user_history_resource::consent_histories_by_service_user);
        App::new()
            .app_data(app_data.clone())
            .service(get_openapi)
            .service(web::redirect("/openapi", "/openapi.json"))
            .service(scope)
            .service(health_resources::health)
            .service(health_resources::health_live)
            .service(health_resources::health_ready)
            .service(health_resources::health_started)
            .default_service(web::route().to(unsupported_resource_operation))
    })
    .workers(workers)
    .backlog(u32::try_from(max_connections / 2).unwrap()) // Default is 2048
    .worker_max_blocking_threads(max_connections)
    .max_connections(max_connections)
    .bind_auto_h2c((app_config.api.bind_address(), app_config.api.bind_port()))?
    .disable_signals()
    .shutdown_timeout(5) // Default 30
    .run()
    .await?;
    Ok(())
}

/// Build the error response for a request outside the supported resources.
async fn unsupported_resource_operation(http_request: HttpRequest) -> HttpResponse {
    ApiErrorMapper::from_consent_history_error(
        ConsentHistoryErrorKind::Unsupported.error_with_msg(format!(
            "Unsupported resource operation, received resource '{}' and operation '{}'",
            http_request.path(),
            http_request.method()
        )),
    )
}

/// Serve Open API documentation.
#[get("/openapi.json")]
async fn get_openapi() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(openapi_as_string())
}

/// Get the OpenAPI definition as a pretty JSON String.
pub fn openapi_as_string() -> String {
    #[derive(OpenApi)]
    #[openapi(
        // Use Cargo.toml as source for the "info" section
        paths(
            http_resources::consent_history_resource::consent_history_by_service_user_consent,
            http_resources::service_user_history_resource::consent_histories_by_service_user,
            health_resources::health,
            health_resources::health_live,
            health_resources::health_ready,
            health_resources::health_started,
        )
    )]
    struct ApiDoc;
    ApiDoc::openapi().to_pretty_json().unwrap()
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unrouted_request_is_an_unsupported_resource_operation() {
        let app = test::init_service(
            App::new().default_service(web::route().to(unsupported_resource_operation)),
        )
        .await;
        let request = test::TestRequest::delete()
            .uri("/v1/consent-history/services")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(
            body["message"],
            "Unsupported resource operation, received resource \
             '/v1/consent-history/services' and operation 'DELETE'"
        );
    }
}
