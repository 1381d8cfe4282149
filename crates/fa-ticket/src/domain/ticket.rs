//! # Ticket Entity
//!
//! Immutable forms-authentication ticket.
//!
//! All timestamps are milliseconds since the Unix epoch. `issue_date <=
//! expiration` is expected but not enforced here; that is the validator's
//! call.

use super::tick::now_millis;
use serde::Serialize;

/// Ticket format revision written by default.
pub const DEFAULT_VERSION: u8 = 2;

/// Forms-authentication ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    version: u8,
    issue_date: i64,
    expiration: i64,
    is_persistent: bool,
    name: String,
    user_data: String,
    cookie_path: String,
}

impl Ticket {
    /// Create a version-2 ticket issued now.
    pub fn new(
        name: impl Into<String>,
        expiration: i64,
        is_persistent: bool,
        user_data: impl Into<String>,
        cookie_path: impl Into<String>,
    ) -> Self {
        Self::builder(name, expiration)
            .persistent(is_persistent)
            .user_data(user_data)
            .cookie_path(cookie_path)
            .build()
    }

    /// Start a builder for a ticket with the required fields.
    pub fn builder(name: impl Into<String>, expiration: i64) -> TicketBuilder {
        TicketBuilder::new(name, expiration)
    }

    /// Format revision.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// When the ticket was issued.
    pub fn issue_date(&self) -> i64 {
        self.issue_date
    }

    /// When the ticket expires.
    pub fn expiration(&self) -> i64 {
        self.expiration
    }

    /// Whether the cookie carrying the ticket outlives the browser session.
    pub fn is_persistent(&self) -> bool {
        self.is_persistent
    }

    /// User name the ticket was issued to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque application payload.
    pub fn user_data(&self) -> &str {
        &self.user_data
    }

    /// Cookie path scope.
    pub fn cookie_path(&self) -> &str {
        &self.cookie_path
    }

    /// True once the system clock is past `expiration`.
    pub fn expired(&self) -> bool {
        self.expired_at(now_millis())
    }

    /// True if `now` (Unix milliseconds) is past `expiration`.
    pub fn expired_at(&self, now: i64) -> bool {
        now > self.expiration
    }
}

/// Builder for [`Ticket`].
///
/// `issue_date` defaults to the time `build()` runs.
#[derive(Clone, Debug)]
pub struct TicketBuilder {
    version: u8,
    issue_date: Option<i64>,
    expiration: i64,
    is_persistent: bool,
    name: String,
    user_data: String,
    cookie_path: String,
}

impl TicketBuilder {
    /// Create a builder with the required fields.
    pub fn new(name: impl Into<String>, expiration: i64) -> Self {
        Self {
            version: DEFAULT_VERSION,
            issue_date: None,
            expiration,
            is_persistent: false,
            name: name.into(),
            user_data: String::new(),
            cookie_path: String::new(),
        }
    }

    /// Override the format revision.
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Supply the issue date instead of reading the clock.
    pub fn issue_date(mut self, issue_date: i64) -> Self {
        self.issue_date = Some(issue_date);
        self
    }

    /// Set the persistence flag.
    pub fn persistent(mut self, is_persistent: bool) -> Self {
        self.is_persistent = is_persistent;
        self
    }

    /// Set the application payload.
    pub fn user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = user_data.into();
        self
    }

    /// Set the cookie path.
    pub fn cookie_path(mut self, cookie_path: impl Into<String>) -> Self {
        self.cookie_path = cookie_path.into();
        self
    }

    /// Build the ticket.
    pub fn build(self) -> Ticket {
        Ticket {
            version: self.version,
            issue_date: self.issue_date.unwrap_or_else(now_millis),
            expiration: self.expiration,
            is_persistent: self.is_persistent,
            name: self.name,
            user_data: self.user_data,
            cookie_path: self.cookie_path,
        }
    }
}
