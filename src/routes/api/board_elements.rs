use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use super::{
    params::{CreateElementParams, DeleteElementParams, IdParams, parse_id},
    schemas::{ElementData, ElementView},
};
use crate::{
    response::{ApiResult, JsonApiResponse},
    services::{ElementService, ServiceContext},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/kanban/board_elements",
            post(create_element).delete(delete_element_by_query),
        )
        .route("/kanban/board_elements/advance", post(advance_element))
        .route(
            "/kanban/board_elements/{id}",
            get(get_element).delete(delete_element),
        )
        .with_state(state)
}

async fn create_element(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateElementParams>,
) -> ApiResult<ElementData> {
    let new_element = params.validate()?;
    let service = element_service_from_state(state.as_ref());
    let element = service
        .create_element(
            new_element.board_id,
            &new_element.description,
            new_element.category,
        )
        .await?;
    JsonApiResponse::created(ElementData {
        board_element: element.into(),
    })
}

async fn delete_element_by_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteElementParams>,
) -> ApiResult<()> {
    let element_id = params.validate()?;
    let service = element_service_from_state(state.as_ref());
    service.delete_element(element_id).await?;
    JsonApiResponse::success()
}

async fn get_element(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<ElementData> {
    let element_id = parse_id("id", &id)?;
    let service = element_service_from_state(state.as_ref());
    let element = service.require_element(element_id).await?;
    JsonApiResponse::ok(ElementData {
        board_element: ElementView::from(element),
    })
}

async fn delete_element(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let element_id = parse_id("id", &id)?;
    let service = element_service_from_state(state.as_ref());
    service.delete_element(element_id).await?;
    JsonApiResponse::success()
}

async fn advance_element(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> ApiResult<()> {
    let element_id = params.validate()?;
    let service = element_service_from_state(state.as_ref());
    service.advance(element_id).await?;
    JsonApiResponse::success()
}

fn element_service_from_state(state: &AppState) -> ElementService {
    ServiceContext::from_state(state).element()
}
