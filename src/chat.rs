//! The chat-model seam between the agent and its remote provider.
//!
//! The agent only needs one capability from the outside world: submit prompt
//! text, get response text back. Keeping that behind a trait means the four
//! workflow operations never touch transport or vendor details, and tests can
//! substitute a canned model.

use crate::error::Error;

/// One prior prompt/response pair in the conversation.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub prompt: String,
    pub reply: String,
}

/// Minimal chat-completion capability.
///
/// `transcript` is the ordered history of earlier exchanges, passed through
/// read-only so the provider can condition on it. Implementations decide
/// whether and how to use it; the agent never interprets it.
pub trait ChatModel {
    /// Submit a prompt and return the model's reply text.
    fn submit(&self, prompt: &str, transcript: &[Exchange]) -> Result<String, Error>;
}
