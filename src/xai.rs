//! Blocking chat-completions client for the xAI API.
//!
//! Speaks the OpenAI-style `/v1/chat/completions` shape: the transcript is
//! flattened into alternating user/assistant messages with the new prompt
//! last, and the reply is the first choice's message content. Every failure
//! site maps to [`Error::RemoteCall`]; there is no retry and no distinction
//! between transient and permanent failures.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatModel, Exchange};
use crate::config::AgentConfig;
use crate::error::Error;

/// Chat client bound to one provider endpoint, credential, and model.
pub struct XaiClient {
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

impl XaiClient {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            endpoint: config.endpoint,
            api_key: config.api_key,
            model: config.model,
        }
    }
}

impl ChatModel for XaiClient {
    fn submit(&self, prompt: &str, transcript: &[Exchange]) -> Result<String, Error> {
        let request = ChatRequest {
            model: &self.model,
            messages: build_messages(transcript, prompt),
        };
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );
        tracing::debug!(
            model = %self.model,
            prompt_bytes = prompt.len(),
            history = transcript.len(),
            "submitting chat completion"
        );

        let mut response = ureq::post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(request)
            .map_err(|err| Error::RemoteCall(format!("chat completion request failed: {err}")))?;
        let parsed: ChatResponse = response
            .body_mut()
            .read_json()
            .map_err(|err| Error::RemoteCall(format!("chat completion response did not parse: {err}")))?;
        reply_text(parsed)
    }
}

/// Flatten the transcript into a message array, new prompt last.
fn build_messages<'a>(transcript: &'a [Exchange], prompt: &'a str) -> Vec<Message<'a>> {
    let mut messages = Vec::with_capacity(transcript.len() * 2 + 1);
    for exchange in transcript {
        messages.push(Message {
            role: "user",
            content: &exchange.prompt,
        });
        messages.push(Message {
            role: "assistant",
            content: &exchange.reply,
        });
    }
    messages.push(Message {
        role: "user",
        content: prompt,
    });
    messages
}

fn reply_text(response: ChatResponse) -> Result<String, Error> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| Error::RemoteCall("chat completion response had no choices".to_string()))
}
