pub mod d100_progress_board;
pub mod d101_design_tasks;
pub mod pic;

use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d100_progress_board::ProjectsResponse;

use crate::shared::odoo::error::OdooError;

/// Result shape shared by the read endpoints: the success envelope, or
/// the same envelope carrying the error message plus a mapped status.
pub type ApiResult<T> = Result<Json<ProjectsResponse<T>>, (StatusCode, Json<ProjectsResponse<T>>)>;

/// Log the failure and turn it into the uniform error response.
pub(crate) fn api_error<T>(context: &str, e: OdooError) -> (StatusCode, Json<ProjectsResponse<T>>) {
    tracing::error!("{}: {}", context, e);
    (e.status_code(), Json(ProjectsResponse::error(e.to_string())))
}
