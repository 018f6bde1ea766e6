//! AI text generation for linkdeck.
//!
//! Two operations are offered to the front end, both through [`Assistant`]:
//! - `summarize(title, description)`: a short analysis of an entry
//! - `describe(title, url)`: a one-line description for a new entry
//!
//! Both always return a string. Model failures are logged and replaced with
//! fixed fallback text, so callers never handle AI errors.
//!
//! The model itself sits behind the [`TextModel`] trait; [`GeminiClient`]
//! talks to the Gemini `generateContent` REST endpoint.

mod assistant;
mod error;
mod gemini;
mod model;

pub use assistant::{
    description_prompt, strip_wrapping_quotes, summary_prompt, Assistant, DESCRIPTION_FALLBACK,
    SUMMARY_FALLBACK,
};
pub use error::{AiError, AiResult};
pub use gemini::{GeminiClient, GeminiConfig};
pub use model::TextModel;
