use serde::{Deserialize, Serialize};

/// The task a design team is currently working on: the earliest
/// (lowest-id) task that is not yet at 100%
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentTask {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    /// Completion percentage [0, 100]
    pub percent: f64,
}

/// Design-tagged project joined with its current task, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignProject {
    pub id: i64,
    pub name: String,
    pub tag_ids: Vec<i64>,
    /// Reported completion as a fraction in [0, 1]
    pub progress: f64,
    pub task_ids: Vec<i64>,
    pub current_task: Option<CurrentTask>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_task_is_nullable() {
        let project = DesignProject {
            id: 7,
            name: "S1 - Main Tower".into(),
            tag_ids: vec![3],
            progress: 0.4,
            task_ids: vec![],
            current_task: None,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["current_task"], serde_json::Value::Null);
    }
}
