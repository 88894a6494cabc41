//! Domain model for dataset reviews: pure Decide/Evolve, no I/O.

pub mod aggregates;
pub mod commands;
pub mod decide;
pub mod errors;
pub mod events;
pub mod state;
