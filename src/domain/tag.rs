use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of concept a catalog tag stands for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    /// A technology or skill keyword (React, Docker, ...).
    Skill,
    /// A job role phrase (Backend Developer, DevOps Engineer, ...).
    JobRole,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Skill => "skill",
            TagCategory::JobRole => "job_role",
        }
    }
}

impl From<&str> for TagCategory {
    fn from(value: &str) -> Self {
        match value {
            "skill" => TagCategory::Skill,
            _ => TagCategory::JobRole,
        }
    }
}

/// Canonical catalog entry for a skill or job role.
///
/// Tags are unique by name and immutable once created; the first writer of a
/// name wins and later writers receive the existing row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Canonical display name, unique across the catalog.
    pub name: String,
    /// Category assigned when the tag was first created.
    pub category: TagCategory,
    /// Timestamp for when the tag record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new catalog tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Canonical display name of the tag.
    pub name: String,
    /// Category the tag belongs to.
    pub category: TagCategory,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(name: impl Into<String>, category: TagCategory) -> Self {
        let name = name.into().trim().to_string();
        Self { name, category }
    }
}
