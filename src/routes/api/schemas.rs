use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::{
    db::entities::{board, element},
    services::{GroupedElements, StatusCounts},
};

/// Flat element view shared by every endpoint that returns elements.
#[derive(Debug, Clone, Serialize)]
pub struct ElementView {
    pub id: i32,
    pub board_id: i32,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<element::Model> for ElementView {
    fn from(model: element::Model) -> Self {
        Self {
            id: model.id,
            board_id: model.board_id,
            description: model.description,
            category: model.category,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Board with its raw element list, returned on create.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub board_elements: Vec<ElementView>,
}

impl BoardView {
    pub fn project(board: board::Model, elements: Vec<element::Model>) -> Self {
        Self {
            id: board.id,
            title: board.title,
            created_at: board.created_at,
            updated_at: board.updated_at,
            board_elements: elements.into_iter().map(ElementView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSummaryView {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub todo_count: u64,
    pub inprogress_count: u64,
    pub done_count: u64,
}

impl BoardSummaryView {
    pub fn project(board: board::Model, counts: StatusCounts) -> Self {
        Self {
            id: board.id,
            title: board.title,
            created_at: board.created_at,
            updated_at: board.updated_at,
            todo_count: counts.todo,
            inprogress_count: counts.in_progress,
            done_count: counts.done,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardDetailView {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub todo: Vec<ElementView>,
    pub inprogress: Vec<ElementView>,
    pub done: Vec<ElementView>,
}

impl BoardDetailView {
    pub fn project(board: board::Model, grouped: GroupedElements) -> Self {
        let views = |elements: Vec<element::Model>| -> Vec<ElementView> {
            elements.into_iter().map(ElementView::from).collect()
        };
        Self {
            id: board.id,
            title: board.title,
            created_at: board.created_at,
            updated_at: board.updated_at,
            todo: views(grouped.todo),
            inprogress: views(grouped.in_progress),
            done: views(grouped.done),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardsData {
    pub boards: Vec<BoardSummaryView>,
}

#[derive(Debug, Serialize)]
pub struct BoardData<T: Serialize> {
    pub board: T,
}

#[derive(Debug, Serialize)]
pub struct ElementData {
    pub board_element: ElementView,
}
