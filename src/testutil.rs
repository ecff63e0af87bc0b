//! Test Utilities
//!
//! Shared fixtures: scoped environment isolation for the API variables,
//! and an in-memory credential store double.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::Result;

use crate::credentials::CredentialStore;
use crate::types::Provider;

/// Environment variables isolated between tests.
pub const ISOLATED_VARS: [&str; 4] = [
    "OPENAI_API_KEY",
    "DASHSCOPE_API_KEY",
    "OPENAI_BASE_URL",
    "DASHSCOPE_BASE_URL",
];

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Scoped save/clear/restore of the API environment variables.
///
/// Takes a process-wide lock so environment-touching tests never
/// interleave, and restores the original values on drop whether or not
/// the test body panicked.
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: Option<MutexGuard<'static, ()>>,
}

impl EnvGuard {
    /// Clear all isolated variables for the duration of the guard.
    pub fn clear_all() -> Self {
        let lock = env_lock().lock().unwrap_or_else(PoisonError::into_inner);
        let mut guard = Self::unlocked();
        guard._lock = Some(lock);
        guard
    }

    /// Guard without taking the lock. Only for use inside a scope that
    /// already holds one.
    fn unlocked() -> Self {
        let saved = ISOLATED_VARS
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect();
        for key in ISOLATED_VARS {
            std::env::remove_var(key);
        }
        Self { saved, _lock: None }
    }

    /// Set one of the isolated variables for the duration of the guard.
    pub fn set(&self, key: &str, value: &str) {
        debug_assert!(ISOLATED_VARS.contains(&key));
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in &self.saved {
            match original {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// In-memory credential store double.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for the fallback path.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// A store pre-seeded with one key.
    pub fn with_key(provider: Provider, secret: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(provider.key_name(), secret.to_string());
        store
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, provider: Provider) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(provider.key_name())
            .cloned())
    }

    fn set(&self, provider: Provider, secret: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("keyring backend unavailable");
        }
        self.entries
            .lock()
            .unwrap()
            .insert(provider.key_name(), secret.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_guard_restores_prior_values_on_drop() {
        let outer = EnvGuard::clear_all();
        outer.set("OPENAI_API_KEY", "pre-existing");

        {
            // Constructed directly so the already-held lock is not
            // re-acquired.
            let _inner = EnvGuard::unlocked();
            assert!(std::env::var("OPENAI_API_KEY").is_err());
        }

        assert_eq!(std::env::var("OPENAI_API_KEY").unwrap(), "pre-existing");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get(Provider::OpenAi).unwrap().is_none());

        store.set(Provider::OpenAi, "sk-test").unwrap();
        assert_eq!(
            store.get(Provider::OpenAi).unwrap().as_deref(),
            Some("sk-test")
        );
        assert!(store.get(Provider::DashScope).unwrap().is_none());
    }

    #[test]
    fn test_failing_store_rejects_writes() {
        let store = MemoryStore::failing();
        assert!(store.set(Provider::OpenAi, "sk-test").is_err());
        assert!(store.get(Provider::OpenAi).unwrap().is_none());
    }
}
