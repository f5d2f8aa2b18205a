//! Доменная модель пасьянса: карты, колоды, стопки, перемещаемые элементы, геометрия.

pub mod card;
pub mod container;
pub mod deck;
pub mod element;
pub mod layout;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use container::*;
pub use deck::*;
pub use element::*;
pub use layout::*;
