use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::hand::Winner;
use crate::domain::turtle::Turtle;
use crate::domain::RoundId;

/// Тип события в раунде.
///
/// Порядок событий задаёт порядок показа: начальные руки, третья карта игрока,
/// третья карта банкира, победитель.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Новый раунд начался (ставка зафиксирована).
    RoundStarted { round_id: RoundId, bet: Bet },

    /// Розданы по две карты.
    InitialDeal {
        player: Vec<Card>,
        banker: Vec<Card>,
        player_total: u8,
        banker_total: u8,
    },

    /// Player взял третью карту.
    PlayerThirdCard { card: Card, player_total: u8 },

    /// Banker взял третью карту.
    BankerThirdCard { card: Card, banker_total: u8 },

    /// Объявлен победитель.
    WinnerDeclared {
        winner: Winner,
        player_total: u8,
        banker_total: u8,
    },

    /// Баланс обновлён.
    Settled {
        round_id: RoundId,
        payout: Turtle,
        delta: i64,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Журнал текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundLog {
    pub events: Vec<RoundEvent>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// События, начиная с номера `from` (для догоняющего показа).
    pub fn since(&self, from: u32) -> &[RoundEvent] {
        let start = (from as usize).min(self.events.len());
        &self.events[start..]
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
