//! Shared test mocks and utilities for PREreview.

mod clock;
mod events;
mod repository;

pub use clock::{FixedClock, fixed_now};
pub use events::{stored_event, stored_history};
pub use repository::{
    ConflictingEventRepository, EmptyEventRepository, FailingEventRepository,
    RecordingEventRepository,
};
