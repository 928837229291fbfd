//! Conversation orchestration: turn lifecycle and prompt assembly.

pub mod context;
pub mod orchestrator;

pub use orchestrator::{ConversationOrchestrator, GenerationParams};
