pub mod base;
pub mod base_traits;
pub mod board_dao;
mod context;
pub mod element_dao;
pub mod error;

pub use base::{DaoBase, row_key};
pub use base_traits::{HasCreatedAtColumn, TimestampedActiveModel};
pub use board_dao::BoardDao;
pub use context::DaoContext;
pub use element_dao::ElementDao;
pub use error::{DaoLayerError, DaoResult};
