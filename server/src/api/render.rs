//! Render endpoints: cached document retrieval and one-shot rendering.
//!
//! The GET flow is the redirect protocol: a request naming only a session
//! renders a fresh document, caches it under a minted content identifier,
//! and answers 307 with both identifiers in the Location header. Requests
//! naming both serve the cached bytes, or regenerate them deterministically
//! from the content identifier when the cache entry has expired.

use std::sync::Arc;

use actix_web::{HttpResponse, get, http::header, post, web};
use mock_data::ReferenceData;
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{ApiError, ApiResult};
use crate::session::{ContentId, DEFAULT_CONTENT_TYPE, SessionId};
use crate::store::MockStore;

/// Query parameters of the GET render flow.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RenderQuery {
    /// Session naming the stored template.
    session: Option<String>,
    /// Content identifier of a rendered document.
    content: Option<String>,
}

/// Payload of the one-shot POST render flow.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderRequest {
    /// Template text with generator calls.
    template: String,
    /// Content type of the response. Defaults to `application/json`.
    #[serde(default)]
    content_type: Option<String>,
}

fn render_template(
    template: &str,
    content: ContentId,
    data: &Arc<ReferenceData>,
) -> Result<String, ApiError> {
    mock_data::render(template, &content.to_string(), data).map_err(|err| {
        ApiError::invalid_request(format!("template failed to render: {err}"))
    })
}

/// Serve a rendered document for a session.
///
/// Without a `content` parameter this renders, caches, and redirects so the
/// client lands on a stable URL for the document. With one it serves the
/// cache, falling back to deterministic regeneration when the entry has
/// expired, so a content URL keeps returning the same bytes for as long as
/// its session lives.
#[utoipa::path(
    get,
    path = "/api/v1/render",
    tags = ["render"],
    params(RenderQuery),
    responses(
        (status = 200, description = "Rendered document", body = String),
        (status = 307, description = "Redirect to the minted content URL"),
        (status = 400, description = "Missing or malformed parameters, or the template failed to render", body = ApiError),
        (status = 401, description = "Unknown or expired session", body = ApiError)
    )
)]
#[get("/render")]
pub async fn render_document(
    store: web::Data<MockStore>,
    data: web::Data<ReferenceData>,
    query: web::Query<RenderQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let Some(session_raw) = query.session else {
        return Err(ApiError::invalid_request("session parameter is required"));
    };
    let session: SessionId = session_raw.parse()?;
    let Some(template) = store.template(session) else {
        return Err(ApiError::unauthorized("unknown or expired session"));
    };
    let data = data.into_inner();

    let Some(content_raw) = query.content else {
        let content = ContentId::mint();
        let body = render_template(&template, content, &data)?;
        store.store_document(content, &body);
        info!(%session, %content, "document rendered and cached");
        return Ok(HttpResponse::TemporaryRedirect()
            .insert_header((
                header::LOCATION,
                format!("/api/v1/render?session={session}&content={content}"),
            ))
            .finish());
    };

    let content: ContentId = content_raw.parse()?;
    let body = match store.document(content) {
        Some(body) => body,
        None => {
            // Cache miss: the content identifier seeds the renderer, so the
            // regenerated chained values match the evicted document.
            debug!(%session, %content, "regenerating evicted document");
            let fresh = render_template(&template, content, &data)?;
            store.store_document_if_absent(content, &fresh)
        }
    };
    Ok(HttpResponse::Ok()
        .content_type(store.content_type(session))
        .body(body))
}

/// Render a template once without registering a session.
#[utoipa::path(
    post,
    path = "/api/v1/render",
    tags = ["render"],
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Rendered document", body = String),
        (status = 400, description = "Empty template or render failure", body = ApiError)
    )
)]
#[post("/render")]
pub async fn render_once(
    data: web::Data<ReferenceData>,
    request: web::Json<RenderRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    if request.template.trim().is_empty() {
        return Err(ApiError::invalid_request("template must not be empty"));
    }
    let content_type = request
        .content_type
        .as_deref()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned();

    let identifier = ContentId::mint();
    let body = render_template(&request.template, identifier, &data.into_inner())?;
    Ok(HttpResponse::Ok().content_type(content_type).body(body))
}
