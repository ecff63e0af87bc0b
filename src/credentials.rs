//! Credential Storage
//!
//! Discovery and storage of API keys. Keys live in the OS keychain
//! (macOS Keychain, Windows Credential Manager, Linux Secret Service)
//! under the `faker-news` service, or arrive through the environment.

use anyhow::{Context, Result};
use keyring::Entry;

use crate::types::{Provider, SERVICE_NAME};

/// Read/write access to stored API keys, one slot per provider.
///
/// A missing entry is a normal negative result, not an error.
pub trait CredentialStore {
    fn get(&self, provider: Provider) -> Result<Option<String>>;
    fn set(&self, provider: Provider, secret: &str) -> Result<()>;
}

/// Credential store backed by the system keychain.
pub struct SystemKeyring;

impl SystemKeyring {
    fn entry(provider: Provider) -> Result<Entry> {
        Entry::new(SERVICE_NAME, provider.key_name()).context("Failed to create keyring entry")
    }
}

impl CredentialStore for SystemKeyring {
    fn get(&self, provider: Provider) -> Result<Option<String>> {
        match Self::entry(provider)?.get_password() {
            Ok(secret) => {
                tracing::debug!("Found {} key in system keyring", provider);
                Ok(Some(secret))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to read keyring entry: {}", e)),
        }
    }

    fn set(&self, provider: Provider, secret: &str) -> Result<()> {
        Self::entry(provider)?
            .set_password(secret)
            .context("Failed to store key in keyring")?;
        tracing::debug!("Stored {} key in system keyring", provider);
        Ok(())
    }
}

/// Read a provider's API key from the environment.
/// Empty and whitespace-only values count as unset.
pub fn env_api_key(provider: Provider) -> Option<String> {
    std::env::var(provider.api_key_env())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve a provider's API key: environment first, then the store.
pub fn resolve_api_key(store: &dyn CredentialStore, provider: Provider) -> Result<Option<String>> {
    if let Some(key) = env_api_key(provider) {
        return Ok(Some(key));
    }
    store.get(provider)
}
