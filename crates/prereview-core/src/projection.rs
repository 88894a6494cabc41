//! Helpers for read models computed by folding the event log.
//!
//! Whole-log projections read every event of one aggregate kind in global
//! append order, group them by resource and fold each group independently.
//! A resource is either folded over its entire history or left out.

use std::collections::HashMap;

use uuid::Uuid;

use crate::aggregate::Decider;
use crate::error::QueryError;
use crate::event::DomainEvent;
use crate::repository::EventRepository;

/// A decoded event together with its place in the log.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEvent<E> {
    /// The resource the event belongs to.
    pub resource_id: Uuid,
    /// Version within the resource stream.
    pub resource_version: i64,
    /// Global append order.
    pub position: i64,
    /// The domain event.
    pub event: E,
}

/// Loads and decodes every event of `D`'s kind, ordered by global position.
///
/// # Errors
///
/// Returns `QueryError` if loading or decoding fails.
pub async fn load_all_events<D: Decider>(
    repo: &dyn EventRepository,
) -> Result<Vec<ResourceEvent<D::Event>>, QueryError> {
    let stored = repo.get_all_events_of_type(D::RESOURCE_TYPE).await?;
    let events = stored
        .iter()
        .map(|stored| -> Result<_, QueryError> {
            Ok(ResourceEvent {
                resource_id: stored.resource_id,
                resource_version: stored.resource_version,
                position: stored.position,
                event: D::Event::from_stored(stored)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

/// Folds the state of every resource whose first event satisfies
/// `candidate`.
///
/// Results keep the order in which resources first appear in `events`.
pub fn fold_resources<D, F>(
    events: &[ResourceEvent<D::Event>],
    candidate: F,
) -> Vec<(Uuid, D::State)>
where
    D: Decider,
    F: Fn(&D::Event) -> bool,
{
    let mut order: Vec<Uuid> = Vec::new();
    let mut grouped: HashMap<Uuid, Option<Vec<&D::Event>>> = HashMap::new();

    for entry in events {
        let group = grouped.entry(entry.resource_id).or_insert_with(|| {
            order.push(entry.resource_id);
            candidate(&entry.event).then(Vec::new)
        });
        if let Some(group) = group {
            group.push(&entry.event);
        }
    }

    order
        .into_iter()
        .filter_map(|resource_id| {
            let group = grouped.remove(&resource_id).flatten()?;
            Some((resource_id, D::fold(group)))
        })
        .collect()
}
