//! Conversation state management and context-window assembly for Parlor.
//!
//! This crate owns the two components with real invariants: the
//! [`session::SessionStore`] (ordered, bounded, concurrency-safe per-session
//! history) and the [`chat::ConversationOrchestrator`] (turn lifecycle and
//! bounded prompt construction). The completion provider is a "port" defined
//! here as [`llm::CompletionProvider`] and implemented in parlor-infra --
//! this crate never depends on any HTTP or I/O crate.

pub mod chat;
pub mod llm;
pub mod session;
