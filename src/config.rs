//! Provider configuration for the chat client.
//!
//! Resolution order is explicit argument, then process environment, then
//! default. Only the credential is required; everything else has a usable
//! default.

use std::env;

use crate::error::Error;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "XAI_API_KEY";

/// Environment variable overriding the chat API base URL.
pub const ENDPOINT_VAR: &str = "XAI_API_BASE";

/// Default chat model identifier.
pub const DEFAULT_MODEL: &str = "grok-beta";

/// Default chat API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.x.ai";

/// Resolved provider settings for constructing a chat client.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl AgentConfig {
    /// Resolve settings from explicit arguments and the process environment.
    ///
    /// Fails with [`Error::Configuration`] when no credential is available
    /// from either source.
    pub fn resolve(
        api_key: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self, Error> {
        let api_key = resolve_credential(api_key, env::var(API_KEY_VAR).ok())?;
        let endpoint = endpoint
            .or_else(|| env::var(ENDPOINT_VAR).ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            model,
            endpoint,
        })
    }
}

/// Pick the credential from the explicit argument or the environment.
///
/// Empty strings are treated as absent so `XAI_API_KEY=""` does not slip a
/// blank bearer token into requests.
fn resolve_credential(explicit: Option<String>, from_env: Option<String>) -> Result<String, Error> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| from_env.filter(|key| !key.is_empty()))
        .ok_or_else(|| {
            Error::Configuration(format!(
                "no API key available: pass --api-key or set {API_KEY_VAR}"
            ))
        })
}
