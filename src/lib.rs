//! faker-news
//!
//! Fake news headline generation backed by a remote language model,
//! plus the interactive setup wizard that configures API credentials.

pub mod types;
pub mod credentials;
pub mod news;
pub mod setup;

#[cfg(test)]
pub mod testutil;
