//! # Docbus Core - Collaborative Document Change Notifications
//!
//! Translates low-level mutation events emitted by a collaboratively-edited
//! tree document (a CRDT engine, external to this crate) into topic-scoped
//! batch notifications on an in-process message bus:
//! - Change descriptors modeling the engine's diff output (keys, deletions, path)
//! - Two stateless translators aggregating descriptors into ordered change maps
//! - Topic bus with fan-out delivery to per-subscription channels
//!
//! ## Architecture
//!
//! ```text
//!   CRDT engine observer callbacks
//!        │  ChangeDescriptor(s)
//!        ▼
//!   ┌─────────────────────────────┐
//!   │ translators                 │
//!   │   children        content   │
//!   └─────────────────────────────┘
//!        │  ChangeMap (ordered, last-write-wins)
//!        ▼
//!   TopicBus ── fan-out ──► subscribers
//! ```
//!
//! The engine side of the boundary is a data contract only: this crate never
//! registers observers and never merges concurrent edits.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod bus;
pub mod document;
pub mod events;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
