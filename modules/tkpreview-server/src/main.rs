use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use notion_client::NotionClient;

mod components;
mod config;
mod extract;
mod model;
mod pages;
mod resolver;
mod sanitize;

use config::Config;
use resolver::{NotionSource, RecordSource};

pub struct AppState {
    /// Present only when both NOTION_TOKEN and DATABASE_ID are set;
    /// absent, every request answers 500 until the deployment is fixed.
    pub source: Option<Arc<dyn RecordSource>>,
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!").into_response()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("preview=info".parse()?)
                .add_directive("notion_client=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let source: Option<Arc<dyn RecordSource>> = match (&config.notion_token, &config.database_id) {
        (Some(token), Some(database_id)) => Some(Arc::new(NotionSource::new(
            NotionClient::new(token.clone()),
            database_id.clone(),
        ))),
        _ => {
            warn!("NOTION_TOKEN or DATABASE_ID not set; requests will return 500 until configured");
            None
        }
    };

    let state = Arc::new(AppState { source });

    let app = Router::new()
        .route("/", get(pages::preview_page))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // A live preview must never be served stale.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path + status + latency only.
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.host, config.port);
    info!("Preview server running: http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
