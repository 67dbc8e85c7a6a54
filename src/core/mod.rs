//! Configuration and domain models shared across the crate.

pub mod config;
pub mod models;
