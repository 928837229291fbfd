//! CompletionProvider trait definition.
//!
//! This is the core's view of the external completion backend: an ordered
//! list of role/content messages plus generation parameters in, generated
//! text plus a token count out.

use parlor_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parlor-infra (e.g., `AzureOpenAiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "azure_openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// This is the only blocking point in the request path; it must respect
    /// the caller's timeout and may fail with any [`LlmError`] variant.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
