use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{api, views};

pub fn router(state: Arc<AppState>) -> Router {
    let views = views::router(&state.config.web);
    Router::new().merge(api::router(state)).merge(views)
}
