//! PREreview — Feedback bounded context.
//!
//! Responsible for feedback that authors write on a published PREreview,
//! from the first draft through DOI-backed publication.

pub mod application;
pub mod domain;
