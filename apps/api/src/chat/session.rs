//! Slot-filling chat session.
//!
//! The profile is collected as a strict linear sequence
//! age → qualification → interest → goal. Each non-greeting message fills the
//! next empty slot verbatim. Filling the goal triggers roadmap generation and
//! resets the draft, so the next message starts a fresh collection.
//! There is no edit path and no per-slot validation.

use std::fmt;

use tracing::{debug, info};

use crate::catalog::CourseCatalog;
use crate::chat::replies::canned_reply;
use crate::llm_client::TextGenerator;
use crate::models::profile::UserProfile;
use crate::roadmap::generator::{advise, Advice, NO_COURSES_FOUND};

pub const OPENING_MESSAGE: &str = "Hello! How can I help you with your learning journey today? \
    To build your roadmap, start by telling me your age.";

// ────────────────────────────────────────────────────────────────────────────
// Slots and draft profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Age,
    Qualification,
    Interest,
    Goal,
}

impl Slot {
    /// Collection order. Fixed.
    pub const ORDER: [Slot; 4] = [Slot::Age, Slot::Qualification, Slot::Interest, Slot::Goal];

    pub fn label(self) -> &'static str {
        match self {
            Slot::Age => "age",
            Slot::Qualification => "qualification",
            Slot::Interest => "interest",
            Slot::Goal => "goal",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened after a value was slotted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    NeedMore(Slot),
    Complete(UserProfile),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    age: Option<String>,
    qualification: Option<String>,
    interest: Option<String>,
    goal: Option<String>,
}

impl ProfileDraft {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Age => self.age.as_deref(),
            Slot::Qualification => self.qualification.as_deref(),
            Slot::Interest => self.interest.as_deref(),
            Slot::Goal => self.goal.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Age => &mut self.age,
            Slot::Qualification => &mut self.qualification,
            Slot::Interest => &mut self.interest,
            Slot::Goal => &mut self.goal,
        }
    }

    pub fn next_missing(&self) -> Option<Slot> {
        Slot::ORDER.into_iter().find(|slot| self.get(*slot).is_none())
    }

    pub fn is_empty(&self) -> bool {
        Slot::ORDER.iter().all(|slot| self.get(*slot).is_none())
    }

    /// Puts `value` into the first empty slot.
    ///
    /// When that completes the draft, the profile is handed back and the draft
    /// is left empty.
    pub fn fill_next(&mut self, value: String) -> FillOutcome {
        if let Some(slot) = self.next_missing() {
            *self.slot_mut(slot) = Some(value);
        }

        match self.next_missing() {
            Some(next) => FillOutcome::NeedMore(next),
            None => {
                let draft = std::mem::take(self);
                FillOutcome::Complete(UserProfile {
                    age: draft.age.unwrap_or_default(),
                    qualification: draft.qualification.unwrap_or_default(),
                    interest: draft.interest.unwrap_or_default(),
                    goal: draft.goal.unwrap_or_default(),
                })
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// One conversation: the draft being collected plus the full transcript.
#[derive(Debug, Clone)]
pub struct ChatSession {
    draft: ProfileDraft,
    transcript: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            draft: ProfileDraft::default(),
            transcript: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: OPENING_MESSAGE.to_string(),
            }],
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Applies one user message and returns the assistant reply.
    /// Both sides of the exchange are appended to the transcript.
    pub async fn handle_message(
        &mut self,
        input: &str,
        catalog: &CourseCatalog,
        generator: &dyn TextGenerator,
    ) -> String {
        self.push(ChatRole::User, input.to_string());
        let reply = self.respond(input, catalog, generator).await;
        self.push(ChatRole::Assistant, reply.clone());
        reply
    }

    async fn respond(
        &mut self,
        input: &str,
        catalog: &CourseCatalog,
        generator: &dyn TextGenerator,
    ) -> String {
        if let Some(reply) = canned_reply(input) {
            debug!("Canned reply; profile not advanced");
            return reply.to_string();
        }

        match self.draft.fill_next(input.to_string()) {
            FillOutcome::NeedMore(next) => format!("Could you provide your {next}?"),
            FillOutcome::Complete(profile) => {
                info!("Profile complete, generating roadmap");
                let advice = advise(catalog, generator, &profile).await;
                format_advice(&advice)
            }
        }
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.transcript.push(ChatMessage { role, content });
    }
}

/// Renders the roadmap followed by the recommended course list.
pub fn format_advice(advice: &Advice) -> String {
    let mut out = format!(
        "Here's your personalized learning roadmap:\n\n{}\n\nRecommended Courses:\n",
        advice.roadmap
    );

    if advice.courses.is_empty() {
        out.push_str(NO_COURSES_FOUND);
    } else {
        for course in &advice.courses {
            out.push_str(&format!("- {}: {}\n", course.name, course.description));
        }
    }

    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
