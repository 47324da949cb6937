//! Course matching — fuzzy tag lookup against a user's interest and goal.
//!
//! Algorithm:
//! 1. Lowercase interest and goal once.
//! 2. For each course in catalog order, walk its tags:
//!    - partial_ratio(interest, tag) > MATCH_THRESHOLD → include, stop scanning tags
//!    - partial_ratio(goal, tag) > MATCH_THRESHOLD → include, stop scanning tags
//! 3. No scores are returned and no reordering happens.

use crate::catalog::similarity::partial_ratio;
use crate::catalog::Course;

/// Minimum partial-similarity score a tag must strictly exceed.
pub const MATCH_THRESHOLD: u8 = 85;

/// Returns the courses with at least one tag close to `interest` or `goal`.
pub fn find_relevant_courses<'a>(
    courses: &'a [Course],
    interest: &str,
    goal: &str,
) -> Vec<&'a Course> {
    let interest = interest.trim().to_lowercase();
    let goal = goal.trim().to_lowercase();

    courses
        .iter()
        .filter(|course| {
            course.tags.iter().any(|tag| {
                let tag = tag.to_lowercase();
                partial_ratio(&interest, &tag) > MATCH_THRESHOLD
                    || partial_ratio(&goal, &tag) > MATCH_THRESHOLD
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
