//! Server entry-point: wires REST endpoints, the cache sweeper, and OpenAPI docs.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, rt, web};
use chrono::TimeDelta;
use clap::Parser;
use mock_data::ReferenceData;
use mockable::DefaultClock;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use server::ApiDoc;
use server::api;
use server::api::health::{HealthState, live, ready};
use server::config::ServerConfig;
use server::store::MockStore;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::parse();

    let data = match &config.data_dir {
        Some(dir) => ReferenceData::from_dir(dir),
        None => ReferenceData::builtin(),
    }
    .map_err(|e| std::io::Error::other(format!("failed to load reference data: {e}")))?;
    let data = web::Data::new(data);

    let store = web::Data::new(MockStore::with_content_ttl(
        Arc::new(DefaultClock),
        TimeDelta::minutes(config.content_ttl_minutes),
    ));
    let health_state = web::Data::new(HealthState::new());

    spawn_sweeper(store.clone(), config.sweep_interval_secs);

    let server_store = store.clone();
    let server_data = data.clone();
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        // Browsers consume mock payloads cross-origin, so every response
        // carries permissive CORS headers and preflights are answered.
        let mut app = App::new()
            .wrap(Cors::permissive())
            .app_data(server_store.clone())
            .app_data(server_data.clone())
            .app_data(server_health_state.clone())
            .service(api::api_scope())
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }

        app
    })
    .bind((config.bind.as_str(), config.port))?;

    health_state.mark_ready();
    info!(bind = %config.bind, port = config.port, "mocksmith listening");
    server.run().await
}

/// Periodically reclaim expired cache entries.
fn spawn_sweeper(store: web::Data<MockStore>, interval_secs: u64) {
    rt::spawn(async move {
        let mut ticker = rt::time::interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;
            let evicted = store.evict_expired();
            if evicted > 0 {
                debug!(evicted, "cache sweep reclaimed entries");
            }
        }
    });
}
