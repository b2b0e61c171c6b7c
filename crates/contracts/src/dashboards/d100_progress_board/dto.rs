use serde::{Deserialize, Serialize};

use crate::enums::division::Division;
use crate::shared::pic::PicAssignments;
use crate::shared::progress::ProgressStatus;

/// Division-specific work stream inside a main project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubProject {
    pub id: i64,
    /// Short code parsed from the project name, e.g. "S1"
    pub code: String,
    pub division: Division,
    /// Reported completion as a fraction in [0, 1]
    pub progress: f64,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

/// Logical project (e.g. one building) grouping one sub-project per
/// division
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainProject {
    pub main_project: String,
    pub sub_projects: Vec<SubProject>,
}

/// Uniform envelope returned by every read endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse<T> {
    pub success: bool,
    pub projects: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ProjectsResponse<T> {
    pub fn ok(projects: Vec<T>) -> Self {
        Self {
            success: true,
            projects,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            projects: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Sort order for the upstream query, by project creation date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Order clause in Odoo's `search_read` syntax
    pub fn odoo_order(&self) -> &'static str {
        match self {
            SortOrder::Asc => "create_date asc",
            SortOrder::Desc => "create_date desc",
        }
    }
}

/// Query parameters of the grouped-projects and board endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub order: SortOrder,
    pub limit: Option<u32>,
    /// Also exclude the company's internal bookkeeping project
    #[serde(default)]
    pub exclude_internal: bool,
}

/// Progress of one division on a board card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionProgress {
    pub division: Division,
    /// Reported completion percentage [0, 100]
    pub progress_pct: f64,
    /// Share of the scheduled window already elapsed [0, 100]
    pub time_pct: u32,
    pub status: ProgressStatus,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

/// One flip-card on the progress board, fully computed server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCard {
    /// 1-based position in the board layout
    pub index: usize,
    pub name: String,
    pub divisions: Vec<DivisionProgress>,
    /// Mean of all sub-project progress fractions, as a percentage
    pub total_progress_pct: f64,
    pub sub_project_count: usize,
    /// Handover date label, sourced from the Interior deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bast_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic: Option<PicAssignments>,
}
