//! Canned replies for greetings and help questions.
//!
//! A reply fires when every word of its keyword appears consecutively in the
//! message, compared case-insensitively on whole words. Keywords are checked
//! in table order and the first hit wins.

const CANNED_REPLIES: &[(&str, &str)] = &[
    ("hello", "Hello! How can I assist you today?"),
    ("hi", "Hi there! What can I help you with?"),
    ("how are you", "I'm just a chatbot, but I'm here to help you!"),
    (
        "what can you do",
        "I can guide you on learning paths, recommend courses, and generate a career roadmap.",
    ),
];

/// Returns the canned reply for `message`, if it contains a greeting or help keyword.
pub fn canned_reply(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    CANNED_REPLIES.iter().find_map(|(keyword, reply)| {
        let keyword_words: Vec<&str> = keyword.split_whitespace().collect();
        words
            .windows(keyword_words.len())
            .any(|window| window == keyword_words.as_slice())
            .then_some(*reply)
    })
}
