//! Team infrastructure: lifecycle service and storage

mod repository;
mod service;

pub use repository::InMemoryTeamRepository;
pub use service::{CreateTeamRequest, LoginRequest, TeamService};
