//! Core types for the notification layer.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed identifiers (SubscriberId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Observability and topic-naming configuration

mod config;
mod errors;
mod ids;

pub use config::{Config, ObservabilityConfig, TopicConfig};
pub use errors::{Error, Result};
pub use ids::SubscriberId;
