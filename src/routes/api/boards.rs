use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};

use super::{
    params::{CreateBoardParams, IdParams, parse_id},
    schemas::{BoardData, BoardDetailView, BoardSummaryView, BoardView, BoardsData},
};
use crate::{
    response::{ApiResult, JsonApiResponse},
    services::{BoardService, ServiceContext},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/kanban/boards",
            get(list_boards).post(create_board).delete(delete_board),
        )
        .route("/kanban/boards/{id}", get(get_board))
        .with_state(state)
}

async fn list_boards(State(state): State<Arc<AppState>>) -> ApiResult<BoardsData> {
    let service = board_service_from_state(state.as_ref());
    let boards = service
        .list_with_counts()
        .await?
        .into_iter()
        .map(|(board, counts)| BoardSummaryView::project(board, counts))
        .collect();
    JsonApiResponse::ok(BoardsData { boards })
}

async fn create_board(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateBoardParams>,
) -> ApiResult<BoardData<BoardView>> {
    let title = params.validate()?;
    let service = board_service_from_state(state.as_ref());
    let (board, elements) = service.create_board(&title).await?;
    JsonApiResponse::created(BoardData {
        board: BoardView::project(board, elements),
    })
}

async fn delete_board(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> ApiResult<()> {
    let board_id = params.validate()?;
    let service = board_service_from_state(state.as_ref());
    service.delete_board(board_id).await?;
    JsonApiResponse::success()
}

async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<BoardData<BoardDetailView>> {
    let board_id = parse_id("id", &id)?;
    let service = board_service_from_state(state.as_ref());
    let (board, grouped) = service.board_with_elements(board_id).await?;
    JsonApiResponse::ok(BoardData {
        board: BoardDetailView::project(board, grouped),
    })
}

fn board_service_from_state(state: &AppState) -> BoardService {
    ServiceContext::from_state(state).board()
}
