//! # Forms-Auth Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks
//! └── src/integration/  # Cross-crate flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fa-tests
//! cargo bench -p fa-tests
//! ```

pub mod integration;
