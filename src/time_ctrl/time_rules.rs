// src/time_ctrl/time_rules.rs
//! Конфигурация темпа раскрытия раунда.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретной сессии.

use serde::{Deserialize, Serialize};

use crate::domain::hand::Side;
use crate::engine::GamePhase;

/// Паузы между шагами раунда и анимацией карт (миллисекунды).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RevealPacing {
    /// Интервал между картами одной руки.
    pub card_interval_ms: u64,
    /// Сдвиг карт банкира относительно карт игрока.
    pub banker_offset_ms: u64,
    /// Пауза между первой раздачей и доборами.
    pub after_initial_deal_ms: u64,
    /// Пауза между доборами и объявлением победителя.
    pub after_third_cards_ms: u64,
}

impl RevealPacing {
    pub const fn new(
        card_interval_ms: u64,
        banker_offset_ms: u64,
        after_initial_deal_ms: u64,
        after_third_cards_ms: u64,
    ) -> Self {
        Self {
            card_interval_ms,
            banker_offset_ms,
            after_initial_deal_ms,
            after_third_cards_ms,
        }
    }

    /// Стандартный темп: карты каждые 1.2 сек, банкир со сдвигом 0.6 сек.
    pub const fn standard() -> Self {
        Self::new(1200, 600, 2400, 1200)
    }

    /// Без пауз (тесты, `--fast`).
    pub const fn instant() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Задержка анимации `index`-й карты руки `side` от начала раскрытия.
    pub fn card_reveal_delay(&self, side: Side, index: usize) -> u64 {
        let base = self.card_interval_ms.saturating_mul(index as u64);
        match side {
            Side::Player => base,
            Side::Banker => base.saturating_add(self.banker_offset_ms),
        }
    }

    /// Сколько ждать в фазе `phase` перед следующим шагом движка.
    /// `None` - фаза не продвигается по таймеру (ставки, итог раунда).
    pub fn step_delay(&self, phase: GamePhase) -> Option<u64> {
        match phase {
            GamePhase::Dealing => Some(self.after_initial_deal_ms),
            GamePhase::Revealing => Some(self.after_third_cards_ms),
            GamePhase::Betting | GamePhase::Finished => None,
        }
    }
}

impl Default for RevealPacing {
    fn default() -> Self {
        Self::standard()
    }
}
