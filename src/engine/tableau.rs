//! Правила третьей карты (стандартная таблица пунто банко).
//!
//! Решение банкира записано декларативно: упорядоченный список строк
//! `(диапазон сумм банкира, решение если Player стоял, маска p3 если Player брал)`.
//! Первая подходящая строка побеждает.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::eval::is_natural_total;

/// Player берёт третью карту на сумме 0..=5.
pub const PLAYER_DRAW_MAX: u8 = 5;

/// Кто берёт третью карту.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawDecision {
    pub player_draws: bool,
    pub banker_draws: bool,
}

/// Набор очков третьей карты игрока (биты 0..=9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct P3Mask(u16);

impl P3Mask {
    const ANY: P3Mask = P3Mask(0b11_1111_1111);
    const NONE: P3Mask = P3Mask(0);

    const fn range(lo: u8, hi: u8) -> P3Mask {
        let mut bits = 0u16;
        let mut v = lo;
        while v <= hi {
            bits |= 1 << v;
            v += 1;
        }
        P3Mask(bits)
    }

    const fn without(self, v: u8) -> P3Mask {
        P3Mask(self.0 & !(1 << v))
    }

    const fn contains(self, v: u8) -> bool {
        v <= 9 && self.0 & (1 << v) != 0
    }
}

/// Строка таблицы банкира.
struct BankerRow {
    banker: RangeInclusive<u8>,
    /// Берёт ли банкир, если Player стоял.
    on_player_stand: bool,
    /// При каких очках третьей карты игрока банкир берёт.
    on_player_third: P3Mask,
}

const fn row(banker: RangeInclusive<u8>, on_player_stand: bool, on_player_third: P3Mask) -> BankerRow {
    BankerRow {
        banker,
        on_player_stand,
        on_player_third,
    }
}

const BANKER_TABLEAU: [BankerRow; 6] = [
    row(0..=2, true, P3Mask::ANY),
    row(3..=3, true, P3Mask::ANY.without(8)),
    row(4..=4, true, P3Mask::range(2, 7)),
    row(5..=5, true, P3Mask::range(4, 7)),
    row(6..=6, false, P3Mask::range(6, 7)),
    row(7..=9, false, P3Mask::NONE),
];

/// Есть ли натуральная рука у одной из сторон.
pub fn is_natural(player_total: u8, banker_total: u8) -> bool {
    is_natural_total(player_total) || is_natural_total(banker_total)
}

/// Берёт ли Player третью карту (по начальным суммам).
pub fn player_draws(player_total: u8, banker_total: u8) -> bool {
    !is_natural(player_total, banker_total) && player_total <= PLAYER_DRAW_MAX
}

/// Берёт ли Banker третью карту.
///
/// `player_third` - очки третьей карты игрока, `None` если Player стоял.
pub fn banker_draws(player_total: u8, banker_total: u8, player_third: Option<u8>) -> bool {
    if is_natural(player_total, banker_total) {
        return false;
    }
    BANKER_TABLEAU
        .iter()
        .find(|r| r.banker.contains(&banker_total))
        .map(|r| match player_third {
            None => r.on_player_stand,
            Some(p3) => r.on_player_third.contains(p3),
        })
        .unwrap_or(false)
}

/// Полное решение по начальным суммам и третьей карте игрока.
///
/// Если `player_third` задан, а Player по таблице не берёт, карта игнорируется:
/// банкир решает как при стоящем игроке.
pub fn decide(player_total: u8, banker_total: u8, player_third: Option<u8>) -> DrawDecision {
    let player = player_draws(player_total, banker_total);
    let p3 = if player { player_third } else { None };
    DrawDecision {
        player_draws: player,
        banker_draws: banker_draws(player_total, banker_total, p3),
    }
}
