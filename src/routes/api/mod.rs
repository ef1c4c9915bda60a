pub mod board_elements;
pub mod boards;
pub mod params;
mod router;
pub mod schemas;

pub use router::router;
