//! Session registration endpoint.

use actix_web::{HttpResponse, post, web};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ApiResult};
use crate::session::{
    DEFAULT_CONTENT_TYPE, DEFAULT_SESSION_TTL_MINUTES, MAX_SESSION_TTL_MINUTES, SessionId,
};
use crate::store::MockStore;

/// Payload registering a template for later rendering.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSessionRequest {
    /// Template text with generator calls.
    #[schema(example = "{\"name\": \"{{ FullNameChain(0) }}\"}")]
    template: String,
    /// Content type served with rendered documents. Defaults to
    /// `application/json`.
    #[serde(default)]
    content_type: Option<String>,
    /// Session lifetime in minutes, between 1 and 1440. Defaults to 60.
    #[serde(default)]
    ttl_minutes: Option<i64>,
}

/// Response carrying the minted session and its render URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Identifier of the stored template.
    session: SessionId,
    /// Render endpoint pre-filled with the session parameter.
    #[schema(example = "/api/v1/render?session=3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    url: String,
}

impl SessionResponse {
    /// Identifier of the stored template.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Render endpoint pre-filled with the session parameter.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

fn validate(request: &CreateSessionRequest) -> Result<(), ApiError> {
    if request.template.trim().is_empty() {
        return Err(ApiError::invalid_request("template must not be empty"));
    }
    if let Some(content_type) = &request.content_type
        && content_type.trim().is_empty()
    {
        return Err(ApiError::invalid_request("contentType must not be empty"));
    }
    if let Some(ttl) = request.ttl_minutes
        && !(1..=MAX_SESSION_TTL_MINUTES).contains(&ttl)
    {
        return Err(ApiError::invalid_request(format!(
            "ttlMinutes must be between 1 and {MAX_SESSION_TTL_MINUTES}"
        )));
    }
    Ok(())
}

/// Register a template and mint a session for it.
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tags = ["sessions"],
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Invalid template, content type, or lifetime", body = ApiError)
    )
)]
#[post("/sessions")]
pub async fn create_session(
    store: web::Data<MockStore>,
    request: web::Json<CreateSessionRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate(&request)?;

    let content_type = request
        .content_type
        .as_deref()
        .unwrap_or(DEFAULT_CONTENT_TYPE);
    let ttl_minutes = request.ttl_minutes.unwrap_or(DEFAULT_SESSION_TTL_MINUTES);
    let session = store.create_session(
        &request.template,
        content_type,
        TimeDelta::minutes(ttl_minutes),
    );
    info!(%session, ttl_minutes, "session created");

    Ok(HttpResponse::Created().json(SessionResponse {
        session,
        url: format!("/api/v1/render?session={session}"),
    }))
}
