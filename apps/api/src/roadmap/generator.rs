//! Roadmap Generation — prompt the LLM and pair the result with matched courses.
//!
//! Flow: build prompts → TextGenerator::generate → (fallback on any error)
//!       → find_relevant_courses → Advice.
//!
//! The generation path never fails from the caller's point of view: any
//! `LlmError` is logged and replaced by `ROADMAP_FALLBACK`.

use tracing::{info, warn};

use crate::catalog::matcher::find_relevant_courses;
use crate::catalog::{Course, CourseCatalog};
use crate::llm_client::TextGenerator;
use crate::models::profile::UserProfile;
use crate::roadmap::prompts::{build_user_prompt, ROADMAP_SYSTEM};

/// Returned in place of a roadmap whenever the generation service fails.
pub const ROADMAP_FALLBACK: &str = "Failed to generate roadmap due to an AI error.";
/// Shown instead of a course list when nothing in the catalog matched.
pub const NO_COURSES_FOUND: &str = "No relevant courses found.";

/// Roadmap text plus the catalog courses matching the profile.
#[derive(Debug, Clone)]
pub struct Advice {
    pub roadmap: String,
    pub courses: Vec<Course>,
}

/// Asks the generation service for a learning roadmap.
/// Returns the generated text unmodified, or `ROADMAP_FALLBACK` on failure.
pub async fn generate_learning_roadmap(
    generator: &dyn TextGenerator,
    profile: &UserProfile,
) -> String {
    let prompt = build_user_prompt(profile);

    match generator.generate(ROADMAP_SYSTEM, &prompt).await {
        Ok(roadmap) => roadmap,
        Err(e) => {
            warn!("Roadmap generation failed, returning fallback: {e}");
            ROADMAP_FALLBACK.to_string()
        }
    }
}

/// Runs course matching and roadmap generation for one complete profile.
pub async fn advise(
    catalog: &CourseCatalog,
    generator: &dyn TextGenerator,
    profile: &UserProfile,
) -> Advice {
    let courses: Vec<Course> =
        find_relevant_courses(catalog.courses(), &profile.interest, &profile.goal)
            .into_iter()
            .cloned()
            .collect();
    info!(
        "Matched {} of {} courses for interest={:?} goal={:?}",
        courses.len(),
        catalog.len(),
        profile.interest,
        profile.goal
    );

    let roadmap = generate_learning_roadmap(generator, profile).await;

    Advice { roadmap, courses }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
