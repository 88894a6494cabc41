//! PREreview — Dataset Reviews bounded context.
//!
//! A dataset review is a structured review of a dataset identified by its
//! DOI. Publishing it creates a Zenodo record, then assigns the record's
//! DOI, then makes the review public.

pub mod application;
pub mod domain;
