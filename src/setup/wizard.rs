//! Setup Wizard
//!
//! Interactive first-run setup: discover API credentials, optionally
//! capture one into the system keychain, and optionally fire a test
//! headline against the live API.

use anyhow::Result;
use colored::Colorize;

use crate::credentials::{self, CredentialStore, SystemKeyring};
use crate::news::{Generator, NewsProvider};
use crate::types::Provider;

use super::banner::{show_banner, show_completion};
use super::prompts::{
    confirm, print_failure, print_found, print_warning, prompt_provider, prompt_secret,
};

/// Which of the four credential sources responded during discovery.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    pub keyring_openai: bool,
    pub keyring_dashscope: bool,
    pub env_openai: bool,
    pub env_dashscope: bool,
}

impl Discovery {
    /// Probe the store and the environment for all four sources.
    /// A store read error counts as a negative result.
    pub fn probe(store: &dyn CredentialStore) -> Self {
        let in_store = |provider| store.get(provider).ok().flatten().is_some();
        Self {
            keyring_openai: in_store(Provider::OpenAi),
            keyring_dashscope: in_store(Provider::DashScope),
            env_openai: credentials::env_api_key(Provider::OpenAi).is_some(),
            env_dashscope: credentials::env_api_key(Provider::DashScope).is_some(),
        }
    }

    /// True if at least one usable credential exists.
    pub fn any_found(&self) -> bool {
        self.keyring_openai || self.keyring_dashscope || self.env_openai || self.env_dashscope
    }
}

/// Print one confirmation line per positive discovery result.
fn report(discovery: &Discovery) {
    if discovery.keyring_openai {
        print_found("OpenAI API key found in system keyring");
    }
    if discovery.keyring_dashscope {
        print_found("DashScope API key found in system keyring");
    }
    if discovery.env_openai {
        print_found("OPENAI_API_KEY found in environment");
    }
    if discovery.env_dashscope {
        print_found("DASHSCOPE_API_KEY found in environment");
    }
}

/// The `export VAR='your-key'` hint shown when a store write fails.
fn env_fallback_hint(provider: Provider) -> String {
    format!("  export {}='your-key'", provider.api_key_env())
}

/// Offer to capture one credential into the store.
/// Returns true if a key was persisted.
fn capture(store: &dyn CredentialStore) -> Result<bool> {
    println!();
    print_warning("No API key found.");
    println!();
    println!("API keys will be stored securely in your system keyring:");
    println!("  • macOS: Keychain");
    println!("  • Windows: Credential Manager");
    println!("  • Linux: Secret Service (GNOME Keyring/KWallet)");
    println!();

    if !confirm("Would you like to set an API key now?")? {
        return Ok(false);
    }

    let provider = prompt_provider()?;
    let secret = prompt_secret(provider)?;

    match store.set(provider, &secret) {
        Ok(()) => {
            println!();
            print_found(&format!(
                "{} API key saved to system keyring",
                provider.label()
            ));
            println!();
            Ok(true)
        }
        Err(e) => {
            print_failure(&format!("Failed to save to keyring: {}", e));
            println!();
            println!("You can set it via environment variable instead:");
            println!("{}", env_fallback_hint(provider).cyan());
            Ok(false)
        }
    }
}

/// Fire one live headline request and report the outcome.
async fn verify(store: &dyn CredentialStore) {
    println!();
    println!("Generating a test headline...");

    let result = match NewsProvider::from_ambient(store) {
        Ok(provider) => Generator::with_provider(provider).headline().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(headline) => {
            println!();
            println!("{}", "Success! Generated headline:".green().bold());
            println!("{}", format!("  {}", headline).yellow());
            println!();
        }
        Err(e) => {
            print_failure(&format!("Test failed: {}", e));
            println!();
            println!("Please check your API key and try again.");
        }
    }
}

/// Run the interactive setup wizard end to end.
pub async fn run_setup_wizard() -> Result<()> {
    let store = SystemKeyring;
    show_banner();

    println!("Checking for API keys...");
    let discovery = Discovery::probe(&store);
    report(&discovery);
    let mut found = discovery.any_found();

    if !found {
        found = capture(&store)?;
    }

    show_completion();

    if found {
        println!("Quick test:");
        println!("{}", "  faker-news --headline".cyan());
        println!();

        if confirm("Would you like to test it now?")? {
            verify(&store).await;
        }
    }

    println!("For more usage examples, see README.md");
    println!();
    Ok(())
}
