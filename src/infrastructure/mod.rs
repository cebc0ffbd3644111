//! Infrastructure layer - services, storage adapters, and cross-cutting
//! concerns

pub mod board;
pub mod column;
pub mod csv;
pub mod logging;
pub mod password;
pub mod team;

pub use board::{
    InMemoryActionItemRepository, InMemoryFeedbackRepository, InMemoryThoughtRepository,
};
pub use column::{ColumnInitializer, InMemoryColumnTitleRepository};
pub use csv::CsvFile;
pub use password::{Argon2Hasher, PasswordHasher};
pub use team::{CreateTeamRequest, InMemoryTeamRepository, LoginRequest, TeamService};
