//! Builders for stored events.

use prereview_core::aggregate::Decider;
use prereview_core::event::DomainEvent;
use prereview_core::repository::StoredEvent;
use uuid::Uuid;

use crate::clock::fixed_now;

/// Wraps a domain event of aggregate `D` in a `StoredEvent` envelope.
///
/// `position` mirrors `resource_version`, which is only meaningful for
/// single-resource histories; use [`stored_history`] for mixed logs.
///
/// # Panics
///
/// Panics if the event cannot be serialized.
#[must_use]
pub fn stored_event<D: Decider>(
    resource_id: Uuid,
    resource_version: i64,
    event: &D::Event,
) -> StoredEvent {
    StoredEvent {
        event_id: Uuid::new_v4(),
        resource_id,
        resource_type: D::RESOURCE_TYPE.to_owned(),
        resource_version,
        position: resource_version,
        event_type: event.event_type().to_owned(),
        payload: event.to_payload().unwrap(),
        occurred_at: fixed_now(),
    }
}

/// Builds an ordered log from `(resource_id, event)` pairs, assigning
/// per-resource versions and global positions in order.
///
/// # Panics
///
/// Panics if an event cannot be serialized.
#[must_use]
pub fn stored_history<D: Decider>(entries: &[(Uuid, D::Event)]) -> Vec<StoredEvent> {
    let mut versions = std::collections::HashMap::<Uuid, i64>::new();
    entries
        .iter()
        .zip(1_i64..)
        .map(|((resource_id, event), position)| {
            let version = versions.entry(*resource_id).or_insert(0);
            *version += 1;
            StoredEvent {
                position,
                ..stored_event::<D>(*resource_id, *version, event)
            }
        })
        .collect()
}
