use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, Set, TransactionTrait,
};

use super::{DaoBase, DaoLayerError, DaoResult, row_key};
use crate::db::entities::prelude::{Board, Element};
use crate::db::entities::{board, element};

#[derive(Clone)]
pub struct BoardDao {
    db: DatabaseConnection,
}

impl DaoBase for BoardDao {
    type Entity = Board;
    const LABEL: &'static str = "board";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl BoardDao {
    pub async fn create_board(&self, title: &str) -> DaoResult<board::Model> {
        let model = board::ActiveModel {
            title: Set(title.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_boards(&self) -> DaoResult<Vec<board::Model>> {
        self.find_all(Some((board::Column::Id, Order::Asc)), |query| query)
            .await
    }

    /// Removes the board and every element that references it in one
    /// transaction. Returns the number of board rows deleted (0 or 1).
    pub async fn delete_with_elements(&self, id: i64) -> DaoResult<u64> {
        let Some(id) = row_key(id) else {
            return Ok(0);
        };
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let elements = Element::delete_many()
            .filter(element::Column::BoardId.eq(id))
            .exec(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        let boards = Board::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(DaoLayerError::Db)?;

        txn.commit().await.map_err(DaoLayerError::Db)?;

        tracing::debug!(
            board_id = id,
            elements_removed = elements.rows_affected,
            "board deleted with elements"
        );
        Ok(boards.rows_affected)
    }
}
