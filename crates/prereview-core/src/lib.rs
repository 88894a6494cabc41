//! PREreview Core — event-sourced aggregate framework.
//!
//! This crate defines the traits and types every aggregate builds on:
//! the Decide/Evolve contract, the event envelope and repository seam,
//! the generic command handler, projection helpers and the in-process
//! notification bus. It contains no storage backend.

pub mod aggregate;
pub mod bus;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod projection;
pub mod repository;
pub mod values;
