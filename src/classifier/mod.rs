//! Upstream prediction client for the classification model service.

pub mod client;
pub mod types;

pub use client::ClassifierClient;
pub use types::Sms;
