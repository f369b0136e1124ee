use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use lantern::{LlmProvider, SnapshotRepository};

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{GeminiProvider, PgSnapshotRepository};
use application::{AnalysisService, ProgressionService};
use config::ServerConfig;

/// Application services behind trait objects so any store or provider can back them
pub type AppProgressionService = ProgressionService<dyn SnapshotRepository>;
pub type AppAnalysisService = AnalysisService<dyn LlmProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub progression: Arc<AppProgressionService>,
    pub analysis: Arc<AppAnalysisService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Lantern API is running - the flame is lit".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full HTTP surface; `/api/*` sits behind the bearer check when a key is set
fn build_router(state: AppState, api_key: auth::ApiKey) -> Router {
    let protected_routes = Router::new()
        .merge(routes::analyze::router())
        .merge(routes::monster::router())
        .layer(middleware::from_fn_with_state(
            api_key,
            auth::auth_middleware,
        ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    use anyhow::Context;

    tracing::info!("🏮 Lantern API initializing...");

    let config = ServerConfig::from_secrets(&secrets);

    let api_key: auth::ApiKey = config.api_key.as_deref().map(Arc::from);
    if api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No LANTERN_API_KEY set - authentication disabled");
    }

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let snapshot_repo: Arc<dyn SnapshotRepository> = Arc::new(PgSnapshotRepository::new(pool));
    let progression = ProgressionService::load(snapshot_repo)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to restore progression: {e}"))?;

    tracing::info!("🐉 Progression restored");

    let provider: Option<Arc<dyn LlmProvider>> = match &config.gemini_api_key {
        Some(key) => match GeminiProvider::new(
            key.clone(),
            config.gemini_model.clone(),
            config.gemini_timeout,
        ) {
            Ok(gemini) => {
                tracing::info!("🔮 Values analysis enabled (Gemini {})", config.gemini_model);
                Some(Arc::new(gemini))
            }
            Err(e) => {
                tracing::warn!("⚠️  Failed to build Gemini client: {}", e);
                None
            }
        },
        None => {
            tracing::warn!("⚠️  No GEMINI_API_KEY set - values analysis disabled");
            None
        }
    };

    let state = AppState {
        progression: Arc::new(progression),
        analysis: Arc::new(AnalysisService::new(provider)),
    };

    let router = build_router(state, api_key);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Lantern API ready - the monster awaits");

    Ok(router.into())
}
