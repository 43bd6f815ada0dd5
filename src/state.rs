//! Shared application state for all routes.

use crate::store::HorseStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HorseStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HorseStore>) -> Self {
        AppState { store }
    }
}
