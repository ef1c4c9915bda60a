use crate::{
    db::dao::{BoardDao, DaoBase, ElementDao},
    db::entities::{board, element},
    error::AppError,
    workflow::Category,
};

/// Number of elements per workflow stage on one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: u64,
    pub in_progress: u64,
    pub done: u64,
}

impl StatusCounts {
    fn slot(&mut self, category: Category) -> &mut u64 {
        match category {
            Category::Todo => &mut self.todo,
            Category::InProgress => &mut self.in_progress,
            Category::Done => &mut self.done,
        }
    }
}

/// A board's elements split by workflow stage. Rows whose stored category is
/// not a known token appear in none of the lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedElements {
    pub todo: Vec<element::Model>,
    pub in_progress: Vec<element::Model>,
    pub done: Vec<element::Model>,
}

impl GroupedElements {
    fn slot(&mut self, category: Category) -> &mut Vec<element::Model> {
        match category {
            Category::Todo => &mut self.todo,
            Category::InProgress => &mut self.in_progress,
            Category::Done => &mut self.done,
        }
    }
}

#[derive(Clone)]
pub struct BoardService {
    board_dao: BoardDao,
    element_dao: ElementDao,
}

impl BoardService {
    pub fn new(board_dao: BoardDao, element_dao: ElementDao) -> Self {
        Self {
            board_dao,
            element_dao,
        }
    }

    /// Every board with its per-stage counts, one filtered count per stage.
    pub async fn list_with_counts(&self) -> Result<Vec<(board::Model, StatusCounts)>, AppError> {
        let boards = self.board_dao.list_boards().await?;
        let mut summaries = Vec::with_capacity(boards.len());
        for board in boards {
            let counts = self.status_counts(board.id).await?;
            summaries.push((board, counts));
        }
        Ok(summaries)
    }

    pub async fn status_counts(&self, board_id: i32) -> Result<StatusCounts, AppError> {
        let mut counts = StatusCounts::default();
        for category in Category::ALL {
            *counts.slot(category) = self
                .element_dao
                .count_by_category(board_id, category)
                .await?;
        }
        Ok(counts)
    }

    /// Inserts a board and returns it with its (empty) element list.
    pub async fn create_board(
        &self,
        title: &str,
    ) -> Result<(board::Model, Vec<element::Model>), AppError> {
        let board = self.board_dao.create_board(title).await?;
        let elements = self.element_dao.list_by_board(board.id).await?;
        tracing::info!(board_id = board.id, "board created");
        Ok((board, elements))
    }

    pub async fn require_board(&self, board_id: i64) -> Result<board::Model, AppError> {
        Ok(self.board_dao.find_by_id(board_id).await?)
    }

    pub async fn board_with_elements(
        &self,
        board_id: i64,
    ) -> Result<(board::Model, GroupedElements), AppError> {
        let board = self.require_board(board_id).await?;
        let mut grouped = GroupedElements::default();
        for category in Category::ALL {
            *grouped.slot(category) = self
                .element_dao
                .list_by_category(board.id, category)
                .await?;
        }
        Ok((board, grouped))
    }

    /// Deletes the board and its elements. Unknown ids are a silent no-op.
    pub async fn delete_board(&self, board_id: i64) -> Result<(), AppError> {
        let removed = self.board_dao.delete_with_elements(board_id).await?;
        if removed == 0 {
            tracing::debug!(board_id, "delete matched no board");
        } else {
            tracing::info!(board_id, "board deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::{db::entities::board, services::ServiceContext};

    #[tokio::test]
    async fn missing_board_is_reported_before_elements_are_queried() {
        // a second query would fail against the empty mock
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<board::Model>::new()])
            .into_connection();
        let service = ServiceContext::new(&db).board();

        let err = service
            .board_with_elements(404)
            .await
            .expect_err("board should be missing");
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.message(), "board 404 not found");
    }
}
