//! Web front end for the SMS spam classification service.
//!
//! Accepts an SMS text over HTTP, forwards it to a separately hosted
//! classification model, and returns the predicted label:
//!
//! ```text
//! POST /sms  {"sms": "Win a free prize now!"}
//! ─────────────────────────────────────────────
//! 200        {"sms": "Win a free prize now!", "result": "spam"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Classification error types
//! - [`classifier`]: Upstream prediction client
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus instruments
//! - [`utils`]: Utility functions

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::ClassifyError;
