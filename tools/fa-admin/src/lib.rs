//! FA-Admin: Forms-Auth admin tool
//!
//! Provisions machine keys and issues or inspects protected tickets.
//!
//! ## Commands
//!
//! ```text
//! fa-admin generate-key --validation SHA256     # print a <machineKey .../> element
//! fa-admin issue --name alice --minutes 60      # print a protected ticket (hex)
//! fa-admin open 8F3A...                         # verify, decrypt, print JSON
//! ```
//!
//! The machine key for `issue` and `open` comes from `--web-config FILE`
//! when given, otherwise from the `FA_*` environment variables.

pub mod cli;
pub mod commands;

pub use cli::{Args, Command};
