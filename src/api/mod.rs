//! Remote data layer
//!
//! This module handles all interaction with the fitness endpoint:
//! - HTTP client and response parsing
//! - Startup loader threads feeding the UI loop over a channel

pub mod client;
pub mod loader;

pub use client::ApiClient;
pub use loader::{spawn_loaders, DataEvent};
