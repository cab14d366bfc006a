use std::sync::Arc;

use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

mod catalog;
mod config;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::db::Source;

/// Shared application state. Holds no catalog data: every request re-reads
/// the source.
#[derive(Clone)]
pub struct AppState {
    pub source: Source,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let source = config.source();
    match &source {
        Source::File(path) => {
            info!(path = %path.display(), "Serving catalog document");
            if !path.exists() {
                warn!(
                    path = %path.display(),
                    "Catalog document not found; requests will fail until it exists"
                );
            }
        }
        Source::Inline(_) => info!("Serving catalog document from DATABASE_JSON"),
    }

    let state = AppState {
        source,
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    let base = config
        .base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", addr));
    info!("Listening on http://{} - {}", addr, base);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Response headers applied to every route unless a handler set them already.
/// Same set and values as helmet's defaults.
const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let mut router = Router::new()
        // ── Discovery / health ────────────────────────────────────────────────────────
        .route("/", get(handlers::discovery))
        .route("/health", get(handlers::health))
        .route("/api/v1/index", get(handlers::api_index))

        // ── Catalog ───────────────────────────────────────────────────────────────────
        .route("/api/v1/database", get(handlers::database::get_database))
        .route("/api/v1/product", get(handlers::products::list_products))
        .route(
            "/api/v1/product/by_category/:id_category",
            get(handlers::products::list_by_category),
        )
        .route("/api/v1/product/:id_product", get(handlers::products::get_product))
        .route("/api/v1/category", get(handlers::categories::list_categories))
        .route(
            "/api/v1/category/:id_category",
            get(handlers::categories::get_category),
        );

    // ── Middleware ────────────────────────────────────────────────────────────────
    for &(name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
