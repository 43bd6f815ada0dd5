//! HTTP handlers for horse CRUD.

pub mod horse;
pub use horse::*;
