//! Domain layer - Core business logic and entities

pub mod board;
pub mod column;
pub mod error;
pub mod team;

pub use board::{
    ActionItem, ActionItemRepository, Feedback, FeedbackRepository, Thought, ThoughtRepository,
};
pub use column::{ColumnTitle, ColumnTitleRepository, Topic};
pub use error::DomainError;
pub use team::{validate_team_name, Team, TeamRepository, TeamUri, TeamValidationError};
