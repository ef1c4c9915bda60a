use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, Order, QueryFilter, Set, SqlErr};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::element;
use crate::db::entities::prelude::Element;
use crate::workflow::Category;

#[derive(Clone)]
pub struct ElementDao {
    db: DatabaseConnection,
}

impl DaoBase for ElementDao {
    type Entity = Element;
    const LABEL: &'static str = "element";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ElementDao {
    /// Inserts an element. A board that vanished before the insert surfaces as
    /// a missing board rather than a database error.
    pub async fn create_element(
        &self,
        board_id: i32,
        description: &str,
        category: Category,
    ) -> DaoResult<element::Model> {
        let model = element::ActiveModel {
            board_id: Set(board_id),
            description: Set(description.to_string()),
            category: Set(category.as_str().to_string()),
            ..Default::default()
        };
        self.create(model).await.map_err(|err| match err {
            DaoLayerError::Db(db_err) if is_foreign_key_violation(&db_err) => {
                DaoLayerError::NotFound {
                    entity: "board",
                    id: i64::from(board_id),
                }
            }
            other => other,
        })
    }

    pub async fn list_by_board(&self, board_id: i32) -> DaoResult<Vec<element::Model>> {
        self.find_all(Some((element::Column::Id, Order::Asc)), |query| {
            query.filter(element::Column::BoardId.eq(board_id))
        })
        .await
    }

    pub async fn list_by_category(
        &self,
        board_id: i32,
        category: Category,
    ) -> DaoResult<Vec<element::Model>> {
        self.find_all(Some((element::Column::Id, Order::Asc)), |query| {
            query
                .filter(element::Column::BoardId.eq(board_id))
                .filter(element::Column::Category.eq(category.as_str()))
        })
        .await
    }

    pub async fn count_by_category(&self, board_id: i32, category: Category) -> DaoResult<u64> {
        self.count(|query| {
            query
                .filter(element::Column::BoardId.eq(board_id))
                .filter(element::Column::Category.eq(category.as_str()))
        })
        .await
    }

    pub async fn set_category(&self, id: i64, category: Category) -> DaoResult<element::Model> {
        self.update(id, move |active| {
            active.category = Set(category.as_str().to_string());
        })
        .await
    }
}

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
