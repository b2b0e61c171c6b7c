use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::pic::PicAssignments;

use crate::shared::pic;

/// GET /api/pic/:project — person-in-charge roster for a main project
pub async fn get_by_project(Path(project): Path<String>) -> Result<Json<PicAssignments>, StatusCode> {
    match pic::lookup(&project) {
        Some(assignments) => Ok(Json(assignments.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
