//! News Headline Provider
//!
//! Resolves whichever credential the environment or the keychain makes
//! available, seeds a prompt, and asks the model for one headline.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::credentials::{self, CredentialStore};
use crate::types::Provider;

use super::{ChatClient, HeadlineProvider, NewsError};

const SYSTEM_PROMPT: &str = "You are a headline writer for a satirical newspaper. \
    Respond with exactly one fake news headline and nothing else. \
    No quotes, no commentary.";

const TOPICS: [&str; 10] = [
    "technology",
    "politics",
    "science",
    "local news",
    "business",
    "sports",
    "entertainment",
    "weather",
    "health",
    "space exploration",
];

const TONES: [&str; 6] = [
    "absurd",
    "deadpan",
    "breathless",
    "ominous",
    "triumphant",
    "confused",
];

/// Pick the first provider with a usable key and build its client.
///
/// OpenAI is checked before DashScope. A store read error is logged and
/// treated as a miss.
fn ambient_client(store: &dyn CredentialStore) -> Result<ChatClient, NewsError> {
    for provider in Provider::ALL {
        let key = match credentials::resolve_api_key(store, provider) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("Could not read {} credential: {}", provider, e);
                None
            }
        };

        if let Some(api_key) = key {
            let base_url = std::env::var(provider.base_url_env())
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| provider.default_base_url().to_string());

            return Ok(ChatClient::new(base_url, api_key, provider.default_model()));
        }
    }

    Err(NewsError::MissingCredential)
}

/// Concrete headline provider backed by a chat completion client.
pub struct NewsProvider {
    client: ChatClient,
}

impl NewsProvider {
    /// Bind the provider to an explicit client.
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Build a provider from whichever credential the environment or
    /// the store makes available.
    pub fn from_ambient(store: &dyn CredentialStore) -> Result<Self, NewsError> {
        Ok(Self::new(ambient_client(store)?))
    }

    fn user_prompt() -> String {
        let mut rng = rand::thread_rng();
        let topic = TOPICS.choose(&mut rng).unwrap_or(&TOPICS[0]);
        let tone = TONES.choose(&mut rng).unwrap_or(&TONES[0]);
        format!("Write one {} fake news headline about {}.", tone, topic)
    }
}

#[async_trait]
impl HeadlineProvider for NewsProvider {
    async fn news_headline(&self) -> Result<String, NewsError> {
        self.client
            .complete(SYSTEM_PROMPT, &Self::user_prompt())
            .await
    }
}
