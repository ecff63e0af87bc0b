//! News Generation
//!
//! The fake-news-headline generator the setup wizard configures and
//! verifies. Headlines come from a single chat completion against an
//! OpenAI-compatible API.

pub mod client;
pub mod provider;

pub use client::ChatClient;
pub use provider::NewsProvider;

use async_trait::async_trait;

/// Error from the headline generation path.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("no API key configured; run `faker-news` to set one up")]
    MissingCredential,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("API returned an empty completion")]
    EmptyCompletion,
}

/// One capability: produce a single fake news headline.
#[async_trait]
pub trait HeadlineProvider {
    async fn news_headline(&self) -> Result<String, NewsError>;
}

/// Generator composed with a concrete headline provider.
pub struct Generator {
    provider: Box<dyn HeadlineProvider + Send + Sync>,
}

impl Generator {
    /// Compose a generator with the given provider.
    pub fn with_provider(provider: impl HeadlineProvider + Send + Sync + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Produce one headline.
    pub async fn headline(&self) -> Result<String, NewsError> {
        self.provider.news_headline().await
    }
}
