//! Движок баккара: правила третьей карты, розыгрыш раунда, выплаты, фазы игры.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `place_bet` / `adjust_bet` / `clear_bet` - ставка в фазе betting
//!   - `deal_initial` - раздать по две карты
//!   - `resolve_third_cards` - добор по таблице
//!   - `finalize` - выплата, запись в историю
//!   - `start_new_round` - вернуться в betting

pub mod errors;
pub mod game_loop;
pub mod history;
pub mod payout;
pub mod round;
pub mod round_log;
pub mod tableau;
pub mod validation;

pub use errors::{BetRejection, EngineError};
pub use game_loop::{GamePhase, GameSession};
pub use history::{BetResult, GameHistory, HistoryEntry};
pub use payout::{balance_delta, payout, payout_percent};
pub use round::{resolve_round, RoundEngine, RoundOutcome, RoundStep};
pub use round_log::{RoundEvent, RoundEventKind, RoundLog};
pub use tableau::{banker_draws, decide, player_draws, DrawDecision};

/// Источник случайности для движка.
///
/// Единственное требование: `pick_index(upper)` возвращает равномерно
/// распределённый индекс из `0..=upper`. На нём строится тасовка Фишера–Йейтса.
pub trait RandomSource {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize {
        (**self).pick_index(upper_inclusive)
    }
}
