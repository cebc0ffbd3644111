//! In-memory team repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamRepository, TeamUri};
use crate::domain::DomainError;

/// In-memory implementation of `TeamRepository`, keyed by URI.
///
/// The write lock around `create` is what makes insert-if-absent atomic,
/// so concurrent registrations with the same derived URI cannot both
/// pass the uniqueness check.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams
            .values()
            .find(|team| team.name().eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn find_by_uri(&self, uri: &TeamUri) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(uri.as_str()).cloned())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        if teams.contains_key(team.uri().as_str()) {
            return Err(DomainError::duplicate_team(team.uri().as_str()));
        }

        teams.insert(team.uri().as_str().to_string(), team.clone());
        Ok(team)
    }

    async fn save(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;
        teams.insert(team.uri().as_str().to_string(), team.clone());
        Ok(team)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.len())
    }
}
