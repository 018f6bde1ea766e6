//! Text model abstraction.

use crate::error::AiResult;
use async_trait::async_trait;

/// A model that turns a prompt into text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Returns the name of the model, for logs.
    fn model_name(&self) -> &str;

    /// Generates a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> AiResult<String>;
}
