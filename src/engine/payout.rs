//! Выплаты по ставке.
//!
//! Выплата включает возврат ставки:
//!   Player 1:1 → 2.00x, Banker 1:1 минус 5% комиссии → 1.95x, Tie 8:1 → 9.00x.
//! Считаем в сотых TURTLE, дробные сотые отбрасываем (1 TURTLE на банкира → 1.95).

use crate::domain::bet::{Bet, BetType};
use crate::domain::hand::Winner;
use crate::domain::turtle::Turtle;

/// Множитель выплаты в процентах от суммы ставки.
pub const fn payout_percent(bet_type: BetType) -> u64 {
    match bet_type {
        BetType::Player => 200,
        BetType::Banker => 195,
        BetType::Tie => 900,
    }
}

/// Сколько вернуть игроку. 0, если ставка проиграла.
pub fn payout(bet: &Bet, winner: Winner) -> Turtle {
    if !bet.bet_type.wins_on(winner) {
        return Turtle::ZERO;
    }
    bet.amount.mul_percent(payout_percent(bet.bet_type))
}

/// Изменение баланса (в сотых): `payout - amount` при выигрыше, иначе `-amount`.
///
/// Ставка не списывается заранее, поэтому весь результат раунда - одна дельта.
pub fn balance_delta(bet: &Bet, winner: Winner) -> i64 {
    let paid = payout(bet, winner);
    if paid.is_zero() {
        -bet.amount.signed_cents()
    } else {
        paid.signed_cents() - bet.amount.signed_cents()
    }
}
