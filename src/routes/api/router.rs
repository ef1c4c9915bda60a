use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{board_elements, boards};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(boards::router(state.clone()))
        .merge(board_elements::router(state))
}
