//! Social GraphQL API Library
//! Re-exports modules for the binary and integration tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod schema;
pub mod store;
