//! Application services: command handling and read-model queries.

pub mod command_handlers;
pub mod query_handlers;
