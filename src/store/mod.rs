//! Horse persistence. `PgHorseStore` backs the server; `MemoryHorseStore` is used without a database.

mod memory;
mod postgres;

pub use memory::MemoryHorseStore;
pub use postgres::{ensure_database_exists, PgHorseStore, HORSES_TABLE};

use crate::error::AppError;
use crate::model::{AvailabilityFilter, Horse, HorseInput};
use async_trait::async_trait;

#[async_trait]
pub trait HorseStore: Send + Sync {
    /// All horses matching the filter, ordered by id.
    async fn list(&self, filter: AvailabilityFilter) -> Result<Vec<Horse>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Horse>, AppError>;

    /// Insert a new horse; the store assigns the id.
    async fn insert(&self, input: &HorseInput) -> Result<Horse, AppError>;

    /// Overwrite the mutable fields. Returns None when no row has this id.
    async fn update(&self, id: i32, age: i32, available_for_riding: bool) -> Result<Option<Horse>, AppError>;

    /// Returns false when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
