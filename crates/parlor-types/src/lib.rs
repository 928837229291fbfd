//! Shared domain types for Parlor.
//!
//! This crate contains the types used across the Parlor service: chat turns
//! and responses, completion provider request/response shapes, configuration,
//! and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
