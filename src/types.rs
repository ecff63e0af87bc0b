//! Core Types
//!
//! Identity of the two supported upstream API providers, and the
//! constants tying them to the credential store and the environment.

use std::fmt;

/// Service namespace for entries in the OS credential store.
pub const SERVICE_NAME: &str = "faker-news";

/// An upstream language-model API provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    DashScope,
}

impl Provider {
    /// All supported providers, in credential resolution order.
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::DashScope];

    /// Parse a provider name, case-insensitively.
    pub fn parse(s: &str) -> Option<Provider> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Some(Provider::OpenAi),
            "dashscope" => Some(Provider::DashScope),
            _ => None,
        }
    }

    /// Lowercase key used in the credential store.
    pub fn key_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::DashScope => "dashscope",
        }
    }

    /// Uppercase label for user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI",
            Provider::DashScope => "DASHSCOPE",
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::DashScope => "DASHSCOPE_API_KEY",
        }
    }

    /// Environment variable overriding the API base URL.
    pub fn base_url_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_BASE_URL",
            Provider::DashScope => "DASHSCOPE_BASE_URL",
        }
    }

    /// Default OpenAI-compatible base URL. DashScope is reached through
    /// its compatible-mode endpoint, so both speak the same protocol.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::DashScope => "https://dashscope.aliyuncs.com/compatible-mode/v1",
        }
    }

    /// Default model used for headline generation.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o-mini",
            Provider::DashScope => "qwen-plus",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())
    }
}
