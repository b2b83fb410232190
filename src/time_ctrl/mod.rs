// src/time_ctrl/mod.rs
//! Контроль темпа раскрытия раунда.
//!
//! Движок синхронный и без таймеров. Здесь собираем:
//! - правила (`RevealPacing`);
//! - таймер следующего шага (`RevealClock`);
//! - фасад `RevealController`, который по прошедшему времени зовёт шаги `GameSession`.

pub mod clock;
pub mod time_rules;

pub use clock::{ClockState, RevealClock};
pub use time_rules::RevealPacing;

use tracing::debug;

use crate::engine::{EngineError, GameSession, RandomSource};
use crate::state::TableSnapshot;
use crate::wallet::WalletProvider;

/// Внешний планировщик раунда.
#[derive(Clone, Debug)]
pub struct RevealController {
    pub pacing: RevealPacing,
    pub clock: RevealClock,
}

impl RevealController {
    pub fn new(pacing: RevealPacing) -> Self {
        Self {
            pacing,
            clock: RevealClock::new(),
        }
    }

    /// Начать раунд: раздача сразу, следующий шаг по таймеру.
    pub fn deal<W: WalletProvider, R: RandomSource>(
        &mut self,
        session: &mut GameSession<W>,
        rng: &mut R,
    ) -> Result<Option<TableSnapshot>, EngineError> {
        let snapshot = session.deal_initial(rng)?;
        if snapshot.is_some() {
            self.rearm(session);
        }
        Ok(snapshot)
    }

    /// Сколько ещё ждать до следующего шага.
    pub fn next_delay_ms(&self) -> Option<u64> {
        self.clock.remaining_ms()
    }

    /// "Протекание" времени: если шаг наступил, выполняем его и планируем следующий.
    ///
    /// Возвращаем снэпшот после шага или `None`, если шаг ещё не наступил.
    pub fn on_time_passed<W: WalletProvider, R: RandomSource>(
        &mut self,
        session: &mut GameSession<W>,
        delta_ms: u64,
        rng: &mut R,
    ) -> Result<Option<TableSnapshot>, EngineError> {
        match self.clock.elapse(delta_ms) {
            ClockState::Idle | ClockState::Pending { .. } => Ok(None),
            ClockState::Due => {
                let snapshot = session.advance(rng)?;
                self.rearm(session);
                Ok(snapshot)
            }
        }
    }

    fn rearm<W: WalletProvider>(&mut self, session: &GameSession<W>) {
        match self.pacing.step_delay(session.phase()) {
            Some(delay_ms) => {
                debug!(phase = ?session.phase(), delay_ms, "next reveal step scheduled");
                self.clock.schedule(delay_ms);
            }
            None => self.clock.clear(),
        }
    }
}
