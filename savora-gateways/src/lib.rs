//! Adapters to external services.

pub mod postgrest;
