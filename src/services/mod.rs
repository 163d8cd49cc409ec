//! Business logic services layer

pub mod auth_service;
pub mod chirp_service;

pub use auth_service::AuthService;
pub use chirp_service::ChirpService;
