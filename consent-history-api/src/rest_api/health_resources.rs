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

//! Process health resources for platform probes.

use super::AppState;
use actix_web::HttpResponse;
use actix_web::get;
use actix_web::web::Data;

/// Combined health check.
#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "The app is healthy."),
        (status = 503, description = "The app is not healthy."),
    ),
)]
#[get("/health")]
pub async fn health(app_state: Data<AppState>) -> HttpResponse {
    as_health_response(app_state.service.is_health_ready() && app_state.service.is_health_live())
}

/// Liveness health check.
#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "The app is functioning as expected."),
        (status = 503, description = "The app needs to be restarted."),
    ),
)]
#[get("/health/live")]
pub async fn health_live(app_state: Data<AppState>) -> HttpResponse {
    as_health_response(app_state.service.is_health_live())
}

/// Readiness health check.
#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "The app is ready to recieve requests."),
        (status = 503, description = "The app cannot serve requests yet."),
    ),
)]
#[get("/health/ready")]
pub async fn health_ready(app_state: Data<AppState>) -> HttpResponse {
    as_health_response(app_state.service.is_health_ready())
}

/// Startup health check.
#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "The app has started."),
        (status = 503, description = "The app is still starting."),
    ),
)]
#[get("/health/started")]
pub async fn health_started(app_state: Data<AppState>) -> HttpResponse {
    as_health_response(app_state.service.is_health_started())
}

fn as_health_response(healthy: bool) -> HttpResponse {
    if healthy {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::ServiceUnavailable().finish()
    }
}
