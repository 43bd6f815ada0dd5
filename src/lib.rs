//! Stadnina: REST backend for a stud farm's horse registry.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{AvailabilityFilter, Horse, HorseInput};
pub use routes::{app, common_routes, common_routes_with_ready, cors_layer, horse_routes};
pub use service::HorseService;
pub use state::AppState;
pub use store::{ensure_database_exists, HorseStore, MemoryHorseStore, PgHorseStore};
