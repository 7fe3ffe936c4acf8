//! Activity categories for validated task records.
//!
//! This closed vocabulary is independent of the free-text, per-user
//! `task_categories` table on the schema side; the two are separate concepts
//! and are not mapped onto each other.

use super::{RecordId, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Work,
    Health,
    Personal,
    Learning,
    Exercise,
    Meditation,
    Leisure,
    Social,
    Other,
}

/// Presentation metadata for an activity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: Option<RecordId>,
    pub name: ActivityCategory,
    pub description: Option<String>,
    /// Hex color code, e.g. `#FF6B6B`.
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryRecord {
    pub fn new(name: ActivityCategory) -> Self {
        Self {
            id: None,
            name,
            description: None,
            color: None,
            icon: None,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        // Membership is enforced by the enum type itself.
        Ok(())
    }
}
