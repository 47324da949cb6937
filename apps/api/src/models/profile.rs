use serde::{Deserialize, Serialize};

/// A fully collected user profile, ready for roadmap generation.
///
/// Values are free text; nothing checks that `age` is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: String,
    pub qualification: String,
    pub interest: String,
    pub goal: String,
}
