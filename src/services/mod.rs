pub mod board_service;
pub mod context;
pub mod element_service;

pub use board_service::{BoardService, GroupedElements, StatusCounts};
pub use context::ServiceContext;
pub use element_service::{AdvanceOutcome, ElementService};
