use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{board_service::BoardService, element_service::ElementService},
    state::AppState,
};

/// Per-request entry point to the service layer.
#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn board(&self) -> BoardService {
        BoardService::new(self.daos.board(), self.daos.element())
    }

    pub fn element(&self) -> ElementService {
        ElementService::new(self.daos.element(), self.daos.board())
    }
}
