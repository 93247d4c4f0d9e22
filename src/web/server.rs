use std::sync::Arc;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::error::QueryError;
use crate::query::{CategoryUsersResponse, QueryEngine, TopUsersResponse, UsersResponse};

/// HTTP front for the query engine
pub struct WebServer {
    engine: Arc<QueryEngine>,
    config: Arc<Config>,
}

#[derive(Clone)]
struct AppState {
    engine: Arc<QueryEngine>,
}

impl WebServer {
    pub fn new(engine: Arc<QueryEngine>, config: Arc<Config>) -> Self {
        Self { engine, config }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let app = build_router(self.engine.clone(), self.config.web.cors);

        let addr = self.config.listen_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("🌐 API listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn build_router(engine: Arc<QueryEngine>, cors: bool) -> Router {
    let state = AppState { engine };

    let app = Router::new()
        .route("/api/users", get(api_users))
        .route("/api/users/category/:category", get(api_users_by_category))
        .route("/api/top-users", get(api_top_users))
        .with_state(state);

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            QueryError::DataUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            QueryError::InvalidCategory { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// The source is read with blocking file I/O, so queries run off the reactor.
async fn run_query<T, F>(engine: Arc<QueryEngine>, f: F) -> Result<T, QueryError>
where
    T: Send + 'static,
    F: FnOnce(&QueryEngine) -> Result<T, QueryError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&engine))
        .await
        .unwrap_or_else(|e| {
            error!("Query task failed: {}", e);
            Err(QueryError::DataUnavailable)
        })
}

/// All users
async fn api_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, QueryError> {
    run_query(state.engine, |e| e.list_all()).await.map(Json)
}

/// Users of one category, by category key
async fn api_users_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryUsersResponse>, QueryError> {
    run_query(state.engine, move |e| e.by_category(&category)).await.map(Json)
}

/// Top 4 per category leaderboard
async fn api_top_users(State(state): State<AppState>) -> Result<Json<TopUsersResponse>, QueryError> {
    run_query(state.engine, |e| e.top_users()).await.map(Json)
}
