#[allow(unused_imports)]
pub mod prelude {
    pub use super::board::Entity as Board;
    pub use super::element::Entity as Element;
}

pub mod board;
pub mod element;
