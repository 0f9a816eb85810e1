//! The paramguard demo router.
//!
//! Exposes one validated endpoint per built-in field, plus health and OpenAPI routes.

use axum::{response::Json, routing::get, Router};
use paramguard_core::{Field, ValidatedParams};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};

use crate::endpoint::EndpointSpec;
use crate::response::MessageBody;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, validate_sha, validate_project, validate_kubernetes_name),
    components(schemas(HealthRes, MessageBody))
)]
pub struct ApiDoc;

/// Builds the demo router.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/sha",
            EndpointSpec::new(["sha"])
                .field(Field::git_sha())
                .post(validate_sha),
        )
        .route(
            "/project",
            EndpointSpec::new(["azkaban_project", "sha"])
                .field(Field::azkaban_project())
                .field(Field::git_sha())
                .post(validate_project),
        )
        .route(
            "/kubernetes",
            EndpointSpec::new(["kubernetes_name", "namespace"])
                .field(Field::kubernetes_name())
                .field(
                    Field::kubernetes_name()
                        .with_name("namespace")
                        .with_default("default"),
                )
                .post(validate_kubernetes_name),
        )
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "paramguard REST API is alive".into(),
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/sha",
    responses(
        (status = 200, description = "SHA accepted", body = MessageBody),
        (status = 400, description = "Parameter error", body = MessageBody)
    )
)]
fn validate_sha(params: ValidatedParams) -> String {
    format!("validated_{}", params.get_str("sha").unwrap_or_default())
}

#[utoipa::path(
    post,
    path = "/project",
    responses(
        (status = 200, description = "Project and SHA accepted", body = MessageBody),
        (status = 400, description = "Parameter error", body = MessageBody)
    )
)]
fn validate_project(params: ValidatedParams) -> String {
    format!(
        "{}@{}",
        params.get_str("azkaban_project").unwrap_or_default(),
        params.get_str("sha").unwrap_or_default()
    )
}

/// `namespace` defaults to `default` when not supplied.
#[utoipa::path(
    post,
    path = "/kubernetes",
    responses(
        (status = 200, description = "Resource name accepted", body = MessageBody),
        (status = 400, description = "Parameter error", body = MessageBody)
    )
)]
fn validate_kubernetes_name(params: ValidatedParams) -> String {
    format!(
        "{}/{}",
        params.get_str("namespace").unwrap_or_default(),
        params.get_str("kubernetes_name").unwrap_or_default()
    )
}
