use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::turtle::Turtle;
use crate::engine::game_loop::GamePhase;
use crate::engine::round::RoundStep;

/// Почему ставка отклонена.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetRejection {
    #[error("ставка {amount} меньше минимальной {min}")]
    BelowMinimum { amount: Turtle, min: Turtle },

    #[error("ставка {amount} больше максимальной {max}")]
    AboveMaximum { amount: Turtle, max: Turtle },

    #[error("ставка {amount} превышает баланс {balance}")]
    ExceedsBalance { amount: Turtle, balance: Turtle },

    #[error("баланс {balance} меньше минимальной ставки {min}")]
    InsufficientBalance { balance: Turtle, min: Turtle },
}

/// Ошибки движка баккара.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимая ставка: {0}")]
    InvalidBet(#[from] BetRejection),

    #[error("Действие `{action}` недопустимо в фазе {phase:?}")]
    IllegalTransition {
        phase: GamePhase,
        action: &'static str,
    },

    #[error("Колода исчерпана: нужно {needed}, осталось {remaining}")]
    DeckExhausted { needed: usize, remaining: usize },

    #[error("Шаг раунда вне очереди: ожидался {expected:?}, сейчас {actual:?}")]
    RoundOutOfOrder {
        expected: RoundStep,
        actual: RoundStep,
    },
}
