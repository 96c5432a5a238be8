//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the specification served by Swagger UI in debug
//! builds. It registers the session, render, and health endpoints together
//! with the request and error schemas they reference.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mocksmith API",
        description = "Deterministic mock data rendering with hash-seeded sessions and TTL-cached documents.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::sessions::create_session,
        crate::api::render::render_document,
        crate::api::render::render_once,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        crate::api::error::ApiError,
        crate::api::error::ErrorCode,
        crate::api::sessions::CreateSessionRequest,
        crate::api::sessions::SessionResponse,
        crate::api::render::RenderRequest,
    ))
)]
pub struct ApiDoc;
