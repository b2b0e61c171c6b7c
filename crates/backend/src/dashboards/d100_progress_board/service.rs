use std::collections::HashMap;

use chrono::{DateTime, Utc};
use contracts::dashboards::d100_progress_board::{
    BoardCard, BoardQuery, DivisionProgress, MainProject, SubProject,
};
use contracts::enums::division::Division;
use contracts::shared::progress;
use serde_json::{json, Value};

use crate::shared::config;
use crate::shared::odoo::error::OdooError;
use crate::shared::odoo::records::OdooProjectRecord;
use crate::shared::odoo::OdooClient;
use crate::shared::pic;

/// Separator between the sub-project code and the main project name,
/// e.g. "S1 - Main Tower"
const NAME_SEPARATOR: &str = " - ";
/// Suffix Odoo appends when a project is duplicated in the UI
const COPY_SUFFIX: &str = " (copy)";
/// Stage id of archived projects, excluded from every board query
const STAGE_ARCHIVED: i64 = 4;

/// How many records the trial sample endpoint asks for
const TRIAL_LIMIT: u32 = 5;
/// Default page size for the grouped endpoints
const DEFAULT_LIMIT: u32 = 10;

/// Fetch a small unfiltered project sample from the trial database,
/// passed through as raw records.
///
/// The trial database tracks progress in a studio field of its own, so
/// the field list differs from the production one.
pub async fn fetch_trial_projects() -> Result<Vec<Value>, OdooError> {
    let cfg = config::get();
    let client = OdooClient::for_target(&cfg.odoo, &cfg.odoo.trial)?;

    let result = client
        .search_read(
            "project.project",
            json!([]),
            json!({
                "fields": [
                    "id",
                    "name",
                    "tag_ids",
                    "x_studio_related_field_1ur_1j3g3lopr",
                    "date_start",
                    "date"
                ],
                "limit": TRIAL_LIMIT,
            }),
        )
        .await?;

    Ok(serde_json::from_value(result)?)
}

/// Fetch active projects from the production database and group them
/// into main projects.
pub async fn fetch_grouped_projects(query: &BoardQuery) -> Result<Vec<MainProject>, OdooError> {
    let cfg = config::get();
    let client = OdooClient::for_target(&cfg.odoo, &cfg.odoo.production)?;

    let mut domain = vec![json!(["stage_id", "!=", STAGE_ARCHIVED])];
    if query.exclude_internal {
        domain.push(json!(["name", "!=", "Internal"]));
    }

    let result = client
        .search_read(
            "project.project",
            Value::Array(domain),
            json!({
                "fields": ["id", "name", "tag_ids", "x_progress_project", "date_start", "date"],
                "limit": query.limit.unwrap_or(DEFAULT_LIMIT),
                "order": query.order.odoo_order(),
            }),
        )
        .await?;

    let records: Vec<OdooProjectRecord> = serde_json::from_value(result)?;
    Ok(group_projects(records))
}

/// Group flat project records into main projects keyed by the derived
/// display name.
///
/// First-seen order of names is preserved, as is the order of
/// sub-projects inside each group, so the board renders in the order the
/// upstream returned the records.
pub fn group_projects(records: Vec<OdooProjectRecord>) -> Vec<MainProject> {
    let mut groups: Vec<MainProject> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        let (code, main_name) = derive_names(record.name.as_deref());
        let sub = SubProject {
            id: record.id,
            code,
            division: record
                .tag_ids
                .first()
                .copied()
                .map_or(Division::Unknown, Division::from_tag),
            progress: record.progress,
            start_date: record.start_date,
            deadline: record.deadline,
        };

        match index_by_name.get(&main_name) {
            Some(&i) => groups[i].sub_projects.push(sub),
            None => {
                index_by_name.insert(main_name.clone(), groups.len());
                groups.push(MainProject {
                    main_project: main_name,
                    sub_projects: vec![sub],
                });
            }
        }
    }

    groups
}

/// Split "CODE - Main Name" into the sub-project code and the grouping
/// name.
///
/// Without a separator the code is "Unknown" and the full raw name
/// becomes the grouping name; a record with no usable name at all lands
/// in "Untitled". The " (copy)" suffix Odoo adds on duplication is
/// stripped before grouping so copies join their original.
fn derive_names(raw: Option<&str>) -> (String, String) {
    let raw = raw.unwrap_or("");
    let mut parts = raw.split(NAME_SEPARATOR);
    let first = parts.next().unwrap_or("");
    let second = parts.next();

    let code = match second {
        Some(_) if !first.is_empty() => first.to_string(),
        _ => "Unknown".to_string(),
    };

    let main_name = second
        .map(|name| {
            let name = name.trim();
            let name = name.strip_suffix(COPY_SUFFIX).unwrap_or(name);
            name.trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            if raw.is_empty() {
                "Untitled".to_string()
            } else {
                raw.to_string()
            }
        });

    (code, main_name)
}

/// Build the flip-card view models the board renders, one per main
/// project.
pub fn build_board_cards(projects: &[MainProject], now: DateTime<Utc>) -> Vec<BoardCard> {
    projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let divisions = Division::all()
                .into_iter()
                .map(|division| division_progress(&project.sub_projects, division, now))
                .collect();

            let bast_date = find_by_division(&project.sub_projects, Division::Interior)
                .and_then(|sub| sub.deadline.clone());

            BoardCard {
                index: i + 1,
                name: project.main_project.clone(),
                divisions,
                total_progress_pct: total_progress_pct(&project.sub_projects),
                sub_project_count: project.sub_projects.len(),
                bast_date,
                pic: pic::lookup(&project.main_project).cloned(),
            }
        })
        .collect()
}

fn division_progress(
    subs: &[SubProject],
    division: Division,
    now: DateTime<Utc>,
) -> DivisionProgress {
    let sub = find_by_division(subs, division);
    let progress_pct = sub.map_or(0.0, |s| s.progress * 100.0);
    let start_date = sub.and_then(|s| s.start_date.clone());
    let deadline = sub.and_then(|s| s.deadline.clone());
    let time_pct = progress::time_elapsed_percent(start_date.as_deref(), deadline.as_deref(), now);

    DivisionProgress {
        division,
        progress_pct,
        time_pct,
        status: progress::classify(progress_pct, time_pct as f64),
        start_date,
        deadline,
    }
}

/// First sub-project in the given division
fn find_by_division(subs: &[SubProject], division: Division) -> Option<&SubProject> {
    subs.iter().find(|s| s.division == division)
}

/// Mean progress across all sub-projects, as a percentage
fn total_progress_pct(subs: &[SubProject]) -> f64 {
    if subs.is_empty() {
        return 0.0;
    }
    subs.iter().map(|s| s.progress).sum::<f64>() / subs.len() as f64 * 100.0
}
