//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamUri};
use crate::domain::DomainError;

/// Repository for team identity and login metadata.
///
/// URI uniqueness is enforced by the store: `create` is atomic
/// insert-if-absent and its conflict error is the authoritative
/// duplicate signal, even when two registrations race past the
/// pre-insert lookup.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Look up a team by display name, ignoring case. Callers are
    /// expected to trim the name first.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// Look up a team by its URI
    async fn find_by_uri(&self, uri: &TeamUri) -> Result<Option<Team>, DomainError>;

    /// Insert a new team. Fails with `DuplicateTeam` if the URI is taken.
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Upsert an existing team (login metadata updates)
    async fn save(&self, team: Team) -> Result<Team, DomainError>;

    /// Total number of registered teams
    async fn count(&self) -> Result<usize, DomainError>;
}
