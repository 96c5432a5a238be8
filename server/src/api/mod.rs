//! HTTP adapters: endpoints, error envelope, and health probes.

pub mod error;
pub mod health;
pub mod render;
pub mod sessions;

pub use error::{ApiError, ApiResult, ErrorCode};

use actix_web::{Scope, web};

/// Versioned API scope shared by the binary and the integration tests.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(sessions::create_session)
        .service(render::render_document)
        .service(render::render_once)
}
