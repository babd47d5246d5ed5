// Word Tracker - JSON API
// Read-only endpoints over the word store, shared by the server binary and tests

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::db::{get_all_words, get_categories, get_users, list_words};
use crate::export::{export_filename, generate_csv_content, sort_for_export};
use crate::milestones::get_all_milestones;
use crate::stats::build_report;
use crate::words::{SortField, SortOrder, WordFilter};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub birthdate: Option<NaiveDate>,
}

impl AppState {
    pub fn new(conn: Connection, birthdate: Option<NaiveDate>) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            birthdate,
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, Response> {
        self.db
            .lock()
            .map_err(|_| internal_error("database lock poisoned"))
    }
}

/// API Response wrapper
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

fn internal_error(message: impl std::fmt::Display) -> Response {
    error!("Request failed: {}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(message.to_string())),
    )
        .into_response()
}

/// Query string for the word list; unknown values fall back to defaults
#[derive(Debug, Default, Deserialize)]
pub struct WordListQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
    pub category: Option<String>,
    pub user: Option<String>,
}

fn parse_id(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&id| id != 0)
}

impl From<WordListQuery> for WordFilter {
    fn from(query: WordListQuery) -> Self {
        WordFilter {
            sort: SortField::parse_lenient(query.sort.as_deref()),
            order: SortOrder::parse_lenient(query.order.as_deref()),
            category_id: parse_id(query.category.as_deref()),
            user_id: parse_id(query.user.as_deref()),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/words - Filtered, sorted word list
async fn get_words(State(state): State<AppState>, Query(query): Query<WordListQuery>) -> Response {
    let conn = match state.conn() {
        Ok(conn) => conn,
        Err(resp) => return resp,
    };

    match list_words(&conn, &query.into()) {
        Ok(words) => Json(ApiResponse::ok(words)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/stats - Totals, age, milestones, and monthly breakdown
async fn get_stats(State(state): State<AppState>) -> Response {
    let conn = match state.conn() {
        Ok(conn) => conn,
        Err(resp) => return resp,
    };

    match get_all_words(&conn) {
        Ok(words) => {
            let report = build_report(&words, state.birthdate, Local::now().date_naive());
            Json(ApiResponse::ok(report)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// GET /api/milestones - Reference milestone table
async fn get_milestones() -> impl IntoResponse {
    Json(ApiResponse::ok(get_all_milestones()))
}

/// GET /api/categories
async fn get_category_list(State(state): State<AppState>) -> Response {
    let conn = match state.conn() {
        Ok(conn) => conn,
        Err(resp) => return resp,
    };

    match get_categories(&conn) {
        Ok(categories) => Json(ApiResponse::ok(categories)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/users
async fn get_user_list(State(state): State<AppState>) -> Response {
    let conn = match state.conn() {
        Ok(conn) => conn,
        Err(resp) => return resp,
    };

    match get_users(&conn) {
        Ok(users) => Json(ApiResponse::ok(users)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /export - All words as a CSV attachment, oldest first
async fn export_csv(State(state): State<AppState>) -> Response {
    let conn = match state.conn() {
        Ok(conn) => conn,
        Err(resp) => return resp,
    };

    let mut words = match get_all_words(&conn) {
        Ok(words) => words,
        Err(e) => return internal_error(e),
    };
    sort_for_export(&mut words);

    match generate_csv_content(&words) {
        Ok(body) => {
            let disposition = format!(
                "attachment; filename={}",
                export_filename(Local::now().date_naive())
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/words", get(get_words))
        .route("/stats", get(get_stats))
        .route("/milestones", get(get_milestones))
        .route("/categories", get(get_category_list))
        .route("/users", get(get_user_list));

    Router::new()
        .nest("/api", api_routes)
        .route("/export", get(export_csv))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
