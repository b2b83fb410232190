use crate::domain::bet::{Bet, BetLimits};
use crate::domain::turtle::Turtle;
use crate::engine::errors::BetRejection;

/// Проверка ставки при постановке: лимиты стола и текущий баланс.
pub fn validate_bet(bet: &Bet, limits: &BetLimits, balance: Turtle) -> Result<(), BetRejection> {
    let amount = bet.amount;

    if amount < limits.min {
        return Err(BetRejection::BelowMinimum {
            amount,
            min: limits.min,
        });
    }
    if amount > limits.max {
        return Err(BetRejection::AboveMaximum {
            amount,
            max: limits.max,
        });
    }
    if amount > balance {
        return Err(BetRejection::ExceedsBalance { amount, balance });
    }
    Ok(())
}

/// Может ли игрок вообще поставить минимальную ставку.
pub fn ensure_can_afford_minimum(limits: &BetLimits, balance: Turtle) -> Result<(), BetRejection> {
    if balance < limits.min {
        return Err(BetRejection::InsufficientBalance {
            balance,
            min: limits.min,
        });
    }
    Ok(())
}

/// Зажать сумму в `[min, min(max, balance)]`.
///
/// Вызывать только после `ensure_can_afford_minimum`, иначе верхняя граница меньше нижней.
pub fn clamp_amount(amount: Turtle, limits: &BetLimits, balance: Turtle) -> Turtle {
    let cap = limits.cap_for(balance);
    amount.min(cap).max(limits.min)
}
