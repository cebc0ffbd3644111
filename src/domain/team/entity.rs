//! Team entity and URI slug

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team URI - the lowercase, hyphenated slug that uniquely identifies a team.
///
/// Not a full resource locator; just the stable key derived from the
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TeamUri(String);

impl TeamUri {
    /// Derive the URI from a display name: trim, lowercase, spaces to
    /// hyphens. No uniqueness check happens here.
    pub fn from_name(name: &str) -> Self {
        Self(name.trim().to_lowercase().replace(' ', "-"))
    }

    /// Parse a raw URI value as supplied by a caller. URIs are stored
    /// lowercase, so the input is lowercased before lookup.
    pub fn parse(uri: &str) -> Self {
        Self(uri.trim().to_lowercase())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamUri {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TeamUri> for String {
    fn from(uri: TeamUri) -> Self {
        uri.0
    }
}

impl std::fmt::Display for TeamUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// The credential record (password hash + failed-attempt counter) lives
/// on the team itself; the two are never persisted separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique lowercase URI derived from the name
    uri: TeamUri,
    /// Display name
    name: String,
    /// Argon2 password hash
    password_hash: String,
    /// Creation date
    date_created: NaiveDate,
    /// Date of the most recent successful login
    last_login_date: Option<NaiveDate>,
    /// Consecutive failed login attempts; absent means zero
    failed_attempts: Option<u32>,
}

impl Team {
    /// Create a new team. The URI is expected to already be derived from
    /// the trimmed name.
    pub fn new(
        uri: TeamUri,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        date_created: NaiveDate,
    ) -> Self {
        Self {
            uri,
            name: name.into(),
            password_hash: password_hash.into(),
            date_created,
            last_login_date: None,
            failed_attempts: None,
        }
    }

    // Getters

    pub fn uri(&self) -> &TeamUri {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    pub fn last_login_date(&self) -> Option<NaiveDate> {
        self.last_login_date
    }

    pub fn failed_attempts(&self) -> Option<u32> {
        self.failed_attempts
    }

    // Mutators

    /// Record a successful login
    pub fn set_last_login_date(&mut self, date: NaiveDate) {
        self.last_login_date = Some(date);
    }

    /// Overwrite the failed-attempt counter
    pub fn set_failed_attempts(&mut self, attempts: u32) {
        self.failed_attempts = Some(attempts);
    }
}
