//! Client for the external AI completion service.
//!
//! Quizdeck delegates question generation to an OpenAI-compatible
//! chat-completions endpoint. This crate owns the HTTP client, prompt
//! construction, and parsing of the model's JSON reply into typed questions.

pub mod client;
pub mod questions;

pub use client::{CompletionClient, GenAiConfig, GenAiError};
pub use questions::{build_question_prompt, parse_questions, GeneratedQuestion};
