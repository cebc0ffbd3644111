//! Request middleware and extractors

mod admin_auth;

pub use admin_auth::RequireAdmin;
