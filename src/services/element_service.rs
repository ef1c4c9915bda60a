use crate::{
    db::dao::{BoardDao, DaoBase, ElementDao},
    db::entities::element,
    error::AppError,
    workflow::Category,
};

/// Result of one advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { to: Category },
    /// Already `done`, or the stored token is not a known stage.
    Unchanged,
}

#[derive(Clone)]
pub struct ElementService {
    element_dao: ElementDao,
    board_dao: BoardDao,
}

impl ElementService {
    pub fn new(element_dao: ElementDao, board_dao: BoardDao) -> Self {
        Self {
            element_dao,
            board_dao,
        }
    }

    pub async fn create_element(
        &self,
        board_id: i64,
        description: &str,
        category: Category,
    ) -> Result<element::Model, AppError> {
        let board = self.board_dao.find_by_id(board_id).await?;
        let element = self
            .element_dao
            .create_element(board.id, description, category)
            .await?;
        tracing::info!(
            element_id = element.id,
            board_id = board.id,
            category = %category,
            "element created"
        );
        Ok(element)
    }

    pub async fn require_element(&self, element_id: i64) -> Result<element::Model, AppError> {
        Ok(self.element_dao.find_by_id(element_id).await?)
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete_element(&self, element_id: i64) -> Result<(), AppError> {
        let removed = self.element_dao.delete(element_id).await?;
        tracing::debug!(element_id, removed, "element delete");
        Ok(())
    }

    /// Moves the element one stage forward. No write happens when the element
    /// is already terminal.
    pub async fn advance(&self, element_id: i64) -> Result<AdvanceOutcome, AppError> {
        let element = self.require_element(element_id).await?;
        let Some(next) = Category::advance_stored(&element.category) else {
            tracing::debug!(
                element_id,
                category = %element.category,
                "advance left element unchanged"
            );
            return Ok(AdvanceOutcome::Unchanged);
        };

        self.element_dao.set_category(i64::from(element.id), next).await?;
        tracing::info!(
            element_id,
            from = %element.category,
            to = %next,
            "element advanced"
        );
        Ok(AdvanceOutcome::Advanced { to: next })
    }
}
