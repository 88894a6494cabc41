//! PREreview event store backends.
//!
//! Both backends implement `prereview_core::repository::EventRepository`
//! with the same optimistic-concurrency contract: an append succeeds only
//! if the resource is still at the expected version.

pub mod memory_event_repository;
pub mod pg_event_repository;
pub mod schema;
