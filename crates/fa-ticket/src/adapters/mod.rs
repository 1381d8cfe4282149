//! # Adapters
//!
//! Glue between outside configuration formats and the domain.

pub mod web_config;

pub use web_config::{parse_machine_key, MACHINE_KEY_ATTRIBUTES};
