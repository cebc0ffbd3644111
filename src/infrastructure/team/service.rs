//! Team lifecycle service: registration, lookup, login, CSV export

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::domain::board::{ActionItemRepository, ThoughtRepository};
use crate::domain::column::ColumnTitleRepository;
use crate::domain::team::{validate_team_name, Team, TeamRepository, TeamUri};
use crate::domain::DomainError;
use crate::infrastructure::column::ColumnInitializer;
use crate::infrastructure::csv::CsvFile;
use crate::infrastructure::password::PasswordHasher;

/// Request for registering a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub password: String,
}

/// Request for logging a team in. A missing password fails without ever
/// reaching the hash verifier.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub name: String,
    pub password: Option<String>,
}

/// Team lifecycle service
#[derive(Debug)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    thoughts: Arc<dyn ThoughtRepository>,
    action_items: Arc<dyn ActionItemRepository>,
    columns: Arc<dyn ColumnTitleRepository>,
    column_initializer: ColumnInitializer,
    hasher: Arc<dyn PasswordHasher>,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        thoughts: Arc<dyn ThoughtRepository>,
        action_items: Arc<dyn ActionItemRepository>,
        columns: Arc<dyn ColumnTitleRepository>,
        column_initializer: ColumnInitializer,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            teams,
            thoughts,
            action_items,
            columns,
            column_initializer,
            hasher,
        }
    }

    /// Look up a team by display name, trimmed and case-insensitive
    pub async fn get_team_by_name(&self, name: &str) -> Result<Team, DomainError> {
        self.teams
            .find_by_name_ignore_case(name.trim())
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", name.trim())))
    }

    /// Look up a team by URI (lowercased before lookup)
    pub async fn get_team_by_uri(&self, uri: &str) -> Result<Team, DomainError> {
        let uri = TeamUri::parse(uri);
        self.teams
            .find_by_uri(&uri)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", uri)))
    }

    /// Derive the URI slug for a display name. Pure; performs no
    /// uniqueness check.
    pub fn derive_uri(name: &str) -> TeamUri {
        TeamUri::from_name(name)
    }

    /// Register a new team and create its three default columns.
    ///
    /// On success this performs exactly four writes (one team, three
    /// columns); on a duplicate URI nothing is written beyond the lookup.
    pub async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        validate_team_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password)?;

        let name = request.name.trim();
        let uri = Self::derive_uri(name);

        if let Some(existing) = self.teams.find_by_uri(&uri).await? {
            return Err(DomainError::duplicate_team(existing.uri().as_str()));
        }

        let team = Team::new(uri, name, password_hash, today());

        // The repository create is atomic insert-if-absent; a racing
        // registration surfaces here as DuplicateTeam.
        let team = self.teams.create(team).await?;

        info!(uri = %team.uri(), "Team created");

        self.column_initializer
            .create_default_columns(team.uri())
            .await?;

        Ok(team)
    }

    /// Log a team in.
    ///
    /// A wrong or missing password increments the failed-attempt counter
    /// (absent counts as zero) and fails with `InvalidPassword`. A match
    /// records today's date as the last login and unconditionally resets
    /// the counter to zero.
    pub async fn login(&self, request: LoginRequest) -> Result<Team, DomainError> {
        let mut team = self.get_team_by_name(&request.name).await?;

        let password_matches = match request.password.as_deref() {
            Some(password) => self.hasher.verify(password, team.password_hash()),
            None => false,
        };

        if !password_matches {
            let attempts = team.failed_attempts().unwrap_or(0) + 1;
            team.set_failed_attempts(attempts);

            // Best-effort: a storage failure here must not mask the
            // login failure itself.
            if let Err(error) = self.teams.save(team).await {
                warn!(error = %error, "Failed to persist failed-attempt counter");
            }

            return Err(DomainError::InvalidPassword);
        }

        team.set_last_login_date(today());
        let mut team = self.teams.save(team).await?;

        team.set_failed_attempts(0);
        self.teams.save(team).await
    }

    /// Total number of registered teams
    pub async fn count_teams(&self) -> Result<usize, DomainError> {
        self.teams.count().await
    }

    /// Assemble the CSV export for a team: thoughts not archived onto a
    /// board, unarchived action items, and the team's columns.
    pub async fn build_csv_file_from_team(&self, uri: &str) -> Result<CsvFile, DomainError> {
        let team = self.get_team_by_uri(uri).await?;

        let thoughts = self
            .thoughts
            .find_all_by_team_uri_not_on_board(team.uri())
            .await?;
        let action_items = self
            .action_items
            .find_all_by_team_uri_and_archived(team.uri(), false)
            .await?;
        let columns = self.columns.find_all_by_team_uri(team.uri()).await?;

        Ok(CsvFile::new(
            team.uri().clone(),
            thoughts,
            action_items,
            columns,
        ))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
