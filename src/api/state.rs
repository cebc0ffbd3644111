//! Application state for shared services

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::domain::board::FeedbackRepository;
use crate::infrastructure::team::TeamService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<TeamService>,
    pub feedback_repository: Arc<dyn FeedbackRepository>,
    pub admin: AdminConfig,
}

impl AppState {
    pub fn new(
        team_service: Arc<TeamService>,
        feedback_repository: Arc<dyn FeedbackRepository>,
        admin: AdminConfig,
    ) -> Self {
        Self {
            team_service,
            feedback_repository,
            admin,
        }
    }
}
