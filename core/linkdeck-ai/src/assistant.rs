//! Entry summaries and descriptions with fallback text.

use crate::model::TextModel;
use tracing::{debug, error};

/// Returned by [`Assistant::summarize`] when the model call fails.
pub const SUMMARY_FALLBACK: &str = "无法加载 AI 总结。";

/// Returned by [`Assistant::describe`] when the model call fails.
/// Empty, so the entry falls back to the description placeholder.
pub const DESCRIPTION_FALLBACK: &str = "";

/// Prompt asking for a short analysis of an entry.
#[must_use]
pub fn summary_prompt(title: &str, description: &str) -> String {
    format!(
        "请简要分析并扩充以下资源（{title}：{description}）的优势和适用场景。\n\
         请直接输出三点关键内容，使用中文，总字数在 100 字以内。"
    )
}

/// Prompt asking for a one-line description of a new entry.
#[must_use]
pub fn description_prompt(title: &str, url: &str) -> String {
    format!(
        "我正在添加一个名为 \"{title}\" (URL: {url}) 的资源到我的导航站。\n\
         请为这个资源写一段简洁的中文介绍。\n\
         要求：字数在 50 字以内，语气专业且客观，直接返回内容，不要带引号。"
    )
}

/// Trims whitespace, then removes one quote character from each end.
#[must_use]
pub fn strip_wrapping_quotes(text: &str) -> String {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix(is_quote) {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix(is_quote) {
        s = rest;
    }
    s.to_string()
}

/// Front end for the AI features of the catalog.
pub struct Assistant<M> {
    model: M,
}

impl<M: TextModel> Assistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Summarizes an entry. Never fails: errors yield [`SUMMARY_FALLBACK`].
    pub async fn summarize(&self, title: &str, description: &str) -> String {
        match self.model.generate(&summary_prompt(title, description)).await {
            Ok(text) => {
                debug!("Summary for {:?} from {}", title, self.model.model_name());
                text.trim().to_string()
            }
            Err(e) => {
                error!("AI summary for {:?} failed: {}", title, e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    /// Drafts a description for a new entry. Never fails: errors yield
    /// [`DESCRIPTION_FALLBACK`].
    pub async fn describe(&self, title: &str, url: &str) -> String {
        match self.model.generate(&description_prompt(title, url)).await {
            Ok(text) => strip_wrapping_quotes(&text),
            Err(e) => {
                error!("AI description for {:?} failed: {}", title, e);
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }
}
