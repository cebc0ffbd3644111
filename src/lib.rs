//! Retro Board API
//!
//! Backend for team retrospective boards: teams register with a name
//! and password, log in, collect thoughts in three fixed feedback
//! columns, track action items, and export their board as CSV. An
//! admin-only metrics surface reports aggregate counts.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::board::{ActionItemRepository, FeedbackRepository, ThoughtRepository};
use domain::column::ColumnTitleRepository;
use domain::team::TeamRepository;
use infrastructure::board::{
    InMemoryActionItemRepository, InMemoryFeedbackRepository, InMemoryThoughtRepository,
};
use infrastructure::column::{ColumnInitializer, InMemoryColumnTitleRepository};
use infrastructure::password::{Argon2Hasher, PasswordHasher};
use infrastructure::team::{InMemoryTeamRepository, TeamService};

/// Create the application state with all services wired up
pub fn create_app_state(config: &AppConfig) -> AppState {
    let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::new());
    let thoughts: Arc<dyn ThoughtRepository> = Arc::new(InMemoryThoughtRepository::new());
    let action_items: Arc<dyn ActionItemRepository> = Arc::new(InMemoryActionItemRepository::new());
    let columns: Arc<dyn ColumnTitleRepository> = Arc::new(InMemoryColumnTitleRepository::new());
    let feedback: Arc<dyn FeedbackRepository> = Arc::new(InMemoryFeedbackRepository::new());
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let column_initializer = ColumnInitializer::new(columns.clone());

    let team_service = Arc::new(TeamService::new(
        teams,
        thoughts,
        action_items,
        columns,
        column_initializer,
        hasher,
    ));

    AppState::new(team_service, feedback, config.admin.clone())
}
