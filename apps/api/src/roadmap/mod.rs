// Roadmap generation: prompt building, LLM call with fixed fallback, course pairing,
// and the JSON endpoint. All LLM calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod prompts;
