//! HTTP server assembly for the roster service.
//!
//! Pairs the JSON API router with liveness endpoints, request tracing, and
//! CORS, and defines the configuration struct loaded once at startup and
//! passed down explicitly — there is no ambient settings global.

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, http::HeaderValue, routing::get};
use roster_api::api_router;
use roster_core::store::RosterStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "defaults::host")]
  pub host: String,
  #[serde(default = "defaults::port")]
  pub port: u16,
  /// Path of the SQLite database file.
  #[serde(default = "defaults::store_path")]
  pub store_path: PathBuf,
  /// Origins allowed by the CORS layer, e.g. `http://localhost:3000`.
  /// Empty disables cross-origin access.
  #[serde(default)]
  pub allowed_origins: Vec<String>,
}

mod defaults {
  use std::path::PathBuf;

  pub fn host() -> String { "0.0.0.0".to_string() }
  pub fn port() -> u16 { 8000 }
  pub fn store_path() -> PathBuf { PathBuf::from("roster.db") }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            defaults::host(),
      port:            defaults::port(),
      store_path:      defaults::store_path(),
      allowed_origins: Vec::new(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: API routes, liveness endpoints,
/// request tracing, and CORS.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: RosterStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    .merge(api_router(store))
    .layer(cors_layer(&config.allowed_origins))
    .layer(TraceLayer::new_for_http())
}

/// `GET /` — service name and version.
async fn root() -> Json<Value> {
  Json(json!({
    "name":    env!("CARGO_PKG_NAME"),
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// `GET /health`
async fn health() -> Json<Value> { Json(json!({ "status": "healthy" })) }

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = allowed_origins
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods(Any)
    .allow_headers(Any)
}
