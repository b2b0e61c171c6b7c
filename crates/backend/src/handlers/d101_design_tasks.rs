use axum::Json;
use contracts::dashboards::d100_progress_board::ProjectsResponse;
use contracts::dashboards::d101_design_tasks::DesignProject;

use super::{api_error, ApiResult};
use crate::dashboards::d101_design_tasks::service;

/// GET /api/design-tasks — design projects with their current task
pub async fn list_with_current_task() -> ApiResult<DesignProject> {
    match service::fetch_design_projects().await {
        Ok(projects) => {
            tracing::info!("D101: {} design projects", projects.len());
            Ok(Json(ProjectsResponse::ok(projects)))
        }
        Err(e) => Err(api_error("Failed to fetch design tasks", e)),
    }
}
