//! Оценка рук баккара.
//!
//! Основные функции:
//!   `point_value(card) -> u8`
//!   `hand_total(cards) -> u8` - сумма очков по модулю 10
//!   `compare_totals(player, banker) -> Winner`

pub mod evaluator;

pub use evaluator::{compare_totals, hand_total, is_natural_total, point_value, NATURAL_MIN};
