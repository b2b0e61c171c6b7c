use std::collections::HashMap;

use contracts::dashboards::d101_design_tasks::{CurrentTask, DesignProject};
use serde_json::json;

use crate::shared::config;
use crate::shared::odoo::error::OdooError;
use crate::shared::odoo::records::{OdooProjectRecord, OdooTaskRecord};
use crate::shared::odoo::OdooClient;

/// Tag id of the Design division in the production database
const DESIGN_TAG: i64 = 3;
/// Stage id of archived projects
const STAGE_ARCHIVED: i64 = 4;
/// Upper bound on design projects per fetch
const DESIGN_LIMIT: u32 = 100;

/// Fetch design-tagged projects and join each with its current task.
///
/// Two sequential upstream calls: `search_read` for the projects, then
/// one `read` for all their task ids at once. A JSON-RPC error on the
/// task read degrades to projects without tasks instead of failing the
/// whole request; a transport error still fails it.
pub async fn fetch_design_projects() -> Result<Vec<DesignProject>, OdooError> {
    let cfg = config::get();
    let client = OdooClient::for_target(&cfg.odoo, &cfg.odoo.production)?;

    let result = client
        .search_read(
            "project.project",
            json!([
                ["stage_id", "!=", STAGE_ARCHIVED],
                ["name", "!=", "Internal"],
                ["name", "!=", "Padelio"],
                ["tag_ids", "in", [DESIGN_TAG]]
            ]),
            json!({
                "fields": ["id", "name", "tag_ids", "x_progress_project", "task_ids"],
                "limit": DESIGN_LIMIT,
                "order": "create_date asc",
            }),
        )
        .await?;
    let projects: Vec<OdooProjectRecord> = serde_json::from_value(result)?;

    let task_ids: Vec<i64> = projects
        .iter()
        .flat_map(|p| p.task_ids.iter().copied())
        .collect();
    if task_ids.is_empty() {
        return Ok(join_current_tasks(projects, Vec::new()));
    }

    let tasks = match client
        .read(
            "project.task",
            &task_ids,
            &["id", "name", "project_id", "x_studio_persentase"],
        )
        .await
    {
        Ok(result) => serde_json::from_value(result)?,
        Err(OdooError::Protocol { message }) => {
            tracing::error!(
                "Task read rejected upstream, returning projects without tasks: {}",
                message
            );
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    Ok(join_current_tasks(projects, tasks))
}

/// Attach the earliest incomplete task to each project.
///
/// Pure and total: tasks at 100% are dropped, the rest are grouped by
/// their owning project and the lowest task id wins. A project with no
/// matching task gets `None`.
pub fn join_current_tasks(
    projects: Vec<OdooProjectRecord>,
    tasks: Vec<OdooTaskRecord>,
) -> Vec<DesignProject> {
    let mut by_project: HashMap<i64, Vec<OdooTaskRecord>> = HashMap::new();
    for task in tasks {
        if task.percent < 100.0 {
            if let Some(project_id) = task.project_id {
                by_project.entry(project_id).or_default().push(task);
            }
        }
    }

    projects
        .into_iter()
        .map(|project| {
            let current_task = by_project
                .get(&project.id)
                .and_then(|tasks| tasks.iter().min_by_key(|t| t.id))
                .map(|task| CurrentTask {
                    id: task.id,
                    name: task.name.clone().unwrap_or_default(),
                    project_id: project.id,
                    percent: task.percent,
                });

            DesignProject {
                id: project.id,
                name: project.name.unwrap_or_default(),
                tag_ids: project.tag_ids,
                progress: project.progress,
                task_ids: project.task_ids,
                current_task,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, name: &str, task_ids: &[i64]) -> OdooProjectRecord {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "tag_ids": [DESIGN_TAG],
            "x_progress_project": 0.5,
            "task_ids": task_ids,
        }))
        .unwrap()
    }

    fn task(id: i64, project_id: i64, percent: f64) -> OdooTaskRecord {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Task {}", id),
            "project_id": [project_id, "some project"],
            "x_studio_persentase": percent,
        }))
        .unwrap()
    }

    #[test]
    fn test_picks_lowest_id_among_incomplete_tasks() {
        let projects = vec![project(7, "S1 - Main Tower", &[5, 2, 9])];
        let tasks = vec![task(5, 7, 100.0), task(2, 7, 40.0), task(9, 7, 60.0)];

        let joined = join_current_tasks(projects, tasks);
        let current = joined[0].current_task.as_ref().expect("incomplete tasks");
        assert_eq!(current.id, 2);
        assert_eq!(current.percent, 40.0);
        assert_eq!(current.project_id, 7);
    }

    #[test]
    fn test_all_tasks_complete_yields_none() {
        let projects = vec![project(7, "S1 - Main Tower", &[5])];
        let tasks = vec![task(5, 7, 100.0)];
        let joined = join_current_tasks(projects, tasks);
        assert!(joined[0].current_task.is_none());
    }

    #[test]
    fn test_tasks_route_to_their_own_project() {
        let projects = vec![
            project(7, "S1 - Main Tower", &[1, 2]),
            project(8, "S2 - North Wing", &[3]),
        ];
        let tasks = vec![task(1, 7, 10.0), task(2, 7, 20.0), task(3, 8, 30.0)];

        let joined = join_current_tasks(projects, tasks);
        assert_eq!(joined[0].current_task.as_ref().unwrap().id, 1);
        assert_eq!(joined[1].current_task.as_ref().unwrap().id, 3);
    }

    #[test]
    fn test_no_tasks_at_all_is_total() {
        let projects = vec![project(7, "S1 - Main Tower", &[])];
        let joined = join_current_tasks(projects, Vec::new());
        assert_eq!(joined.len(), 1);
        assert!(joined[0].current_task.is_none());
        assert_eq!(joined[0].name, "S1 - Main Tower");
    }

    #[test]
    fn test_task_without_project_reference_is_ignored() {
        let projects = vec![project(7, "S1 - Main Tower", &[4])];
        let orphan: OdooTaskRecord = serde_json::from_value(json!({
            "id": 4,
            "name": "Orphan",
            "project_id": false,
            "x_studio_persentase": 10,
        }))
        .unwrap();
        let joined = join_current_tasks(projects, vec![orphan]);
        assert!(joined[0].current_task.is_none());
    }
}
