//! # Integration Tests
//!
//! Flows that cross the crypto and ticket crates.

pub mod end_to_end;
pub mod wire_format;
