//! Horse CRUD routes under /konie.

use crate::handlers::horse::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn horse_routes(state: AppState) -> Router {
    Router::new()
        .route("/konie", get(list).post(create))
        .route("/konie/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
