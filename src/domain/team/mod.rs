//! Team domain module
//!
//! A team owns a retrospective board and is identified by a unique
//! lowercase URI derived from its display name. Credentials (password
//! hash, failed-attempt counter) are attributes of the team.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamUri};
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError, MAX_TEAM_NAME_LENGTH};
