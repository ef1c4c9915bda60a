pub mod api;
mod entry;
pub mod views;

pub use entry::router;
