use core::cmp::Ordering;

use crate::domain::card::Card;
use crate::domain::hand::Winner;

/// Минимальная сумма «натуральной» руки (8 или 9 на двух картах).
pub const NATURAL_MIN: u8 = 8;

/// Очки одной карты: ранг, если он не больше 9, иначе 0. Туз = 1.
pub fn point_value(card: &Card) -> u8 {
    card.point_value()
}

/// Сумма очков руки по модулю 10. Всегда в диапазоне 0..=9.
///
/// Порядок карт не важен, функция тотальна (пустая рука = 0).
pub fn hand_total(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| u32::from(point_value(c))).sum();
    (sum % 10) as u8
}

/// Натуральная ли сумма двух карт.
pub fn is_natural_total(total: u8) -> bool {
    total >= NATURAL_MIN
}

/// Больший итог выигрывает, равные итоги - ничья.
pub fn compare_totals(player_total: u8, banker_total: u8) -> Winner {
    match player_total.cmp(&banker_total) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Banker,
        Ordering::Equal => Winner::Tie,
    }
}
