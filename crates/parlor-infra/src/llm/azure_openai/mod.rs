//! Azure OpenAI completion provider.
//!
//! This module provides the [`AzureOpenAiProvider`] which implements the
//! [`CompletionProvider`](parlor_core::llm::CompletionProvider) trait against
//! an Azure OpenAI chat-completions deployment.

pub mod client;
pub mod types;

pub use client::AzureOpenAiProvider;
