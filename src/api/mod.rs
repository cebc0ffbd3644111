//! HTTP API layer

pub mod health;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod team;
pub mod types;

pub use router::create_router;
pub use state::AppState;
