use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::turtle::Turtle;
use crate::domain::RoundId;

/// Исход ставки для истории.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BetResult {
    Win,
    Lose,
}

/// Запись истории о завершённом раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: RoundId,
    pub bet: Bet,
    pub result: BetResult,
    pub payout: Turtle,
    /// Unix-время в миллисекундах.
    pub timestamp_ms: u64,
}

/// История сессии. Только добавление: записи не меняются и не удаляются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Сумма всех выплат минус сумма всех ставок (в сотых).
    pub fn net_result(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.payout.signed_cents() - e.bet.amount.signed_cents())
            .sum()
    }
}
