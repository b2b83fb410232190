//! Доменная модель баккара: карты, колода, руки, ставки, суммы в TURTLE, конфиг стола.

pub mod bet;
pub mod card;
pub mod deck;
pub mod hand;
pub mod table;
pub mod turtle;

/// Идентификатор раунда (он же id записи истории).
pub type RoundId = u64;
/// Идентификатор игровой сессии (для деривации seed).
pub type SessionId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bet::*;
pub use card::*;
pub use deck::{build, shuffle, Deck, DECK_SIZE};
pub use hand::*;
pub use table::*;
pub use turtle::*;
