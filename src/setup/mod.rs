//! Setup Module
//!
//! Interactive setup wizard, terminal prompts, and banner display for
//! first-run API key configuration.

pub mod banner;
pub mod prompts;
pub mod wizard;
