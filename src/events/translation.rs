//! Event translation — engine mutation batches → topic-scoped change maps.
//!
//! Pure deterministic mapping. Each invocation aggregates one batch of
//! engine-reported changes into a single ordered [`ChangeMap`] and publishes
//! it at most once; an invocation that produces no entries publishes nothing.
//!
//! Translation rules:
//!   children: changed keys keep their reported action; flattened deleted
//!             child ids are appended as `delete`
//!   content:  a nested mutation collapses to `(path[0], update)`; a
//!             root-level mutation contributes its own key/action entries
//!
//! Duplicate keys across sources resolve last-write-wins, with the first
//! occurrence's position retained.

use crate::bus::TopicBus;
use crate::document::{ChangeAction, ChangeDescriptor, ChangeMap};

/// Default topic for structural (child list) changes.
pub const CHILDREN_TOPIC: &str = "children";

/// Default topic for content changes.
pub const CONTENT_TOPIC: &str = "content";

/// Translate one structural change batch and publish it.
///
/// Entries from the descriptor's key map come first, in reported order, then
/// one `delete` entry per flattened deleted child id (deletion order, then
/// content order). Publishes on `children` unless `topic` overrides it.
pub fn translate_children_event(bus: &TopicBus, event: &ChangeDescriptor, topic: Option<&str>) {
    let mut pairs: Vec<(String, ChangeAction)> = event
        .keys
        .iter()
        .map(|(key, action)| (key.clone(), *action))
        .collect();

    for entry in &event.deleted {
        pairs.extend(entry.child_ids().map(|id| (id, ChangeAction::Delete)));
    }

    publish(bus, topic.unwrap_or(CHILDREN_TOPIC), pairs);
}

/// Translate a sequence of content change batches and publish the combined map.
///
/// A descriptor with a non-empty path collapses to a single `update` for the
/// immediate child the change propagated through; depth beyond the first path
/// segment is not distinguishable at this level. A root-level descriptor
/// contributes its own key/action entries in reported order. Publishes on
/// `content` unless `topic` overrides it.
pub fn translate_content_events(bus: &TopicBus, events: &[ChangeDescriptor], topic: Option<&str>) {
    let mut pairs: Vec<(String, ChangeAction)> = Vec::new();

    for event in events {
        match event.nested_child_key() {
            Some(child) => pairs.push((child, ChangeAction::Update)),
            None => pairs.extend(
                event
                    .keys
                    .iter()
                    .map(|(key, action)| (key.clone(), *action)),
            ),
        }
    }

    publish(bus, topic.unwrap_or(CONTENT_TOPIC), pairs);
}

/// Emit iff the aggregated sequence is non-empty.
fn publish(bus: &TopicBus, topic: &str, pairs: Vec<(String, ChangeAction)>) {
    if pairs.is_empty() {
        return;
    }
    let batch: ChangeMap = pairs.into_iter().collect();
    bus.topic(topic).emit(batch);
}
