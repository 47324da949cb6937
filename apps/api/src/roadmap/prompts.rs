// LLM prompt constants for roadmap generation.

use crate::models::profile::UserProfile;

/// Fixed mentor instruction sent as the system prompt.
pub const ROADMAP_SYSTEM: &str = "You are an AI mentor. \
    Based on the user's age, qualification, and career goal, \
    generate a structured step-by-step learning roadmap including essential skills, \
    technologies, projects, and industry best practices.";

/// Closing instruction appended after the user details.
const ROADMAP_INSTRUCTION: &str = "Generate a structured learning roadmap for this user.\n\
    Provide steps including key subjects, tools, projects, and online resources.\n\
    Give the output in plain text without any formatting.";

/// Builds the data-filled prompt. Profile values are embedded verbatim.
pub fn build_user_prompt(profile: &UserProfile) -> String {
    format!(
        "User Details:\n\
         - Age: {}\n\
         - Qualification: {}\n\
         - Interest: {}\n\
         - Career Goal: {}\n\n\
         {ROADMAP_INSTRUCTION}",
        profile.age, profile.qualification, profile.interest, profile.goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: &str, qualification: &str, interest: &str, goal: &str) -> UserProfile {
        UserProfile {
            age: age.to_string(),
            qualification: qualification.to_string(),
            interest: interest.to_string(),
            goal: goal.to_string(),
        }
    }

    #[test]
    fn test_user_prompt_embeds_every_field() {
        let prompt = build_user_prompt(&profile("20", "BSc", "python", "backend developer"));
        assert!(prompt.starts_with("User Details:\n"));
        assert!(prompt.contains("- Age: 20\n"));
        assert!(prompt.contains("- Qualification: BSc\n"));
        assert!(prompt.contains("- Interest: python\n"));
        assert!(prompt.contains("- Career Goal: backend developer\n"));
        assert!(prompt.ends_with("plain text without any formatting."));
    }

    #[test]
    fn test_braces_in_values_are_not_expanded() {
        let prompt = build_user_prompt(&profile("twenty-ish", "{goal}", "art", "painter"));
        assert!(prompt.contains("- Qualification: {goal}\n"));
        assert!(prompt.contains("- Age: twenty-ish\n"));
    }
}
