//! Event infrastructure — document mutation batch translation.
//!
//! Turns raw engine diff descriptors into topic-scoped change batches so
//! subscribers never have to parse CRDT diff structures themselves.

pub mod translation;

pub use translation::{
    translate_children_event, translate_content_events, CHILDREN_TOPIC, CONTENT_TOPIC,
};
