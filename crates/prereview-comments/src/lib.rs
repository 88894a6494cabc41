//! PREreview — Comments bounded context.
//!
//! Comments are short public responses to a published PREreview. Unlike
//! feedback they need a verified email address and a competing-interests
//! declaration, and they are published in two steps: a DOI is assigned
//! first, then the comment goes live.

pub mod application;
pub mod domain;
