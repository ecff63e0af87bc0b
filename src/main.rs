//! faker-news CLI
//!
//! Entry point. Runs the interactive setup wizard by default, or
//! generates headlines directly with `--headline`.

use anyhow::Result;
use clap::Parser;

use faker_news::credentials::SystemKeyring;
use faker_news::news::{Generator, NewsProvider};
use faker_news::setup::wizard::run_setup_wizard;

/// faker-news -- fake news headlines from a language model
#[derive(Parser, Debug)]
#[command(
    name = "faker-news",
    version,
    about = "Fake news headline generator: setup and quick test"
)]
struct Cli {
    /// Run the interactive setup wizard (the default when no flag is given)
    #[arg(long)]
    setup: bool,

    /// Generate headlines instead of running setup
    #[arg(long)]
    headline: bool,

    /// Number of headlines to generate with --headline
    #[arg(long, default_value_t = 1)]
    count: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    // --setup wins if both flags are given
    if cli.setup || !cli.headline {
        run_setup_wizard().await
    } else {
        generate_headlines(cli.count).await
    }
}

/// Generate `count` headlines and print them, one per line.
async fn generate_headlines(count: u32) -> Result<()> {
    let provider = NewsProvider::from_ambient(&SystemKeyring)?;
    let generator = Generator::with_provider(provider);

    for _ in 0..count {
        let headline = generator.headline().await?;
        println!("{}", headline);
    }
    Ok(())
}
