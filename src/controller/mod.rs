use std::net::SocketAddr;
use anyhow::Context;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod google_places_api;
pub mod health_check;

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: Config,
}

pub async fn serve(app_state: AppState) -> anyhow::Result<()> {
    let port = app_state.config.port;
    let application = application(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("API server listening on port: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

/// Full request-handling stack, separated from the bind/serve loop so
/// tests can mount it on an ephemeral port.
pub fn application(app_state: AppState) -> Router {
    // The site is served from a separate static host, so any origin may
    // read the review feed.
    router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_origin(Any)
                        .allow_headers([CONTENT_TYPE])
                )
        )
        .fallback(page_not_found_handler)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .nest("/api/reviews", google_places_api::router(app_state))
}
