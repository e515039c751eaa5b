//! Project model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project entity as persisted by the document store
///
/// `creator` references exactly one user record; `tasks` is an ordered list
/// of task references. Neither is embedded data, and deleting a project does
/// not cascade into the tasks it tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator: Uuid,
    #[serde(default)]
    pub tasks: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Assemble the record the store would persist from a validated payload.
    ///
    /// `creator` comes from the authenticated session, never from the
    /// user-facing payload. Task references start empty and are attached
    /// once the storage layer resolves them.
    pub fn new(payload: NewProject, creator: Uuid) -> Self {
        let now = Utc::now();

        Project {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            creator,
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Candidate project payload, prior to validation
///
/// Note the drift against the persisted shape: `tasks` is a single text
/// value here, and `creator` is absent entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tasks: Option<String>,
}

/// Validated project creation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub tasks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attaches_creator_and_stamps_timestamps() {
        let creator = Uuid::new_v4();
        let project = Project::new(
            NewProject {
                name: "Rewrite billing".to_string(),
                description: None,
                tasks: None,
            },
            creator,
        );
        assert_eq!(project.creator, creator);
        assert!(project.tasks.is_empty());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_project_serializes_with_store_field_names() {
        let project = Project::new(
            NewProject {
                name: "Rewrite billing".to_string(),
                description: Some("Q3 migration".to_string()),
                tasks: None,
            },
            Uuid::new_v4(),
        );
        let json = serde_json::to_value(&project).expect("Failed to serialize project");
        assert!(json.get("_id").is_some());
        assert!(json.get("creator").is_some());
        assert_eq!(json["tasks"], serde_json::json!([]));
        assert!(json.get("createdAt").is_some());
    }
}
