use axum::{Extension, Json};
use utoipa::OpenApi;

use crate::{
    model::api::HealthDto,
    server::{
        config::ServiceKind,
        docs::{BookApiDoc, MemberApiDoc, OrderApiDoc},
    },
};

/// Tag for grouping operational endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// Reports the service identity and an "up" status. Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health(Extension(service): Extension<ServiceKind>) -> Json<HealthDto> {
    Json(HealthDto {
        service: service.name().to_string(),
        status: "up".to_string(),
    })
}

/// Plain-text landing response.
pub async fn home(Extension(service): Extension<ServiceKind>) -> String {
    format!("{} is running", service.name())
}

/// Serves the OpenAPI document of the running service.
pub async fn openapi(Extension(service): Extension<ServiceKind>) -> Json<utoipa::openapi::OpenApi> {
    let doc = match service {
        ServiceKind::Books => BookApiDoc::openapi(),
        ServiceKind::Members => MemberApiDoc::openapi(),
        ServiceKind::Orders => OrderApiDoc::openapi(),
    };

    Json(doc)
}
