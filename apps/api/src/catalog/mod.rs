//! Course catalog — static course records loaded once at startup.
//!
//! The catalog is wrapped in an `Arc` and shared read-only by both front-ends.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod matcher;
pub mod similarity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Reads a JSON array of courses from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read course catalog at {}", path.display()))?;
        let courses: Vec<Course> = serde_json::from_str(&raw)
            .with_context(|| format!("Course catalog at {} is not valid JSON", path.display()))?;

        info!("Loaded {} courses from {}", courses.len(), path.display());
        Ok(Self::from_courses(courses))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
