use sea_orm::DatabaseConnection;

use super::{BoardDao, DaoBase, ElementDao};

/// Hands out DAOs bound to one shared connection pool.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn board(&self) -> BoardDao {
        DaoBase::new(&self.db)
    }

    pub fn element(&self) -> ElementDao {
        DaoBase::new(&self.db)
    }
}
