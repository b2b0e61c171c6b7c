use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use contracts::dashboards::d100_progress_board::{BoardCard, BoardQuery, MainProject, ProjectsResponse};

use super::{api_error, ApiResult};
use crate::dashboards::d100_progress_board::service;

/// GET /api/projects — raw project sample from the trial database
pub async fn list_projects() -> ApiResult<serde_json::Value> {
    match service::fetch_trial_projects().await {
        Ok(projects) => Ok(Json(ProjectsResponse::ok(projects))),
        Err(e) => Err(api_error("Failed to fetch projects", e)),
    }
}

/// GET /api/projects/grouped?order=desc&limit=10&exclude_internal=false
pub async fn grouped_projects(Query(query): Query<BoardQuery>) -> ApiResult<MainProject> {
    match service::fetch_grouped_projects(&query).await {
        Ok(projects) => {
            tracing::info!("D100: grouped {} main projects", projects.len());
            Ok(Json(ProjectsResponse::ok(projects)))
        }
        Err(e) => Err(api_error("Failed to fetch grouped projects", e)),
    }
}

/// GET /api/board?order=desc&limit=10
///
/// The grouped projects, fully computed into card view models: one card
/// per main project with per-division status, the BAST date and the PIC
/// roster.
pub async fn board(Query(query): Query<BoardQuery>) -> ApiResult<BoardCard> {
    match service::fetch_grouped_projects(&query).await {
        Ok(projects) => {
            let cards = service::build_board_cards(&projects, Utc::now());
            tracing::info!("D100: built {} board cards", cards.len());
            Ok(Json(ProjectsResponse::ok(cards)))
        }
        Err(e) => Err(api_error("Failed to build board", e)),
    }
}
