use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetType};
use crate::domain::turtle::Turtle;
use crate::domain::RoundId;
use crate::engine::{BetResult, GamePhase, HistoryEntry, RoundEvent};
use crate::state::TableSnapshot;

/// DTO стола: снэпшот рук плюс состояние ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table: TableSnapshot,
    pub bet: Option<Bet>,
    pub balance: Turtle,
    /// Можно ли сейчас нажать "Deal".
    pub can_deal: bool,
    pub round_id: Option<RoundId>,
}

/// DTO одного сыгранного раунда (для истории).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItemDto {
    pub round_id: RoundId,
    pub bet_type: BetType,
    pub amount: Turtle,
    pub result: BetResult,
    pub payout: Turtle,
    pub timestamp_ms: u64,
}

impl From<&HistoryEntry> for HistoryItemDto {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            round_id: entry.id,
            bet_type: entry.bet.bet_type,
            amount: entry.bet.amount,
            result: entry.result,
            payout: entry.payout,
            timestamp_ms: entry.timestamp_ms,
        }
    }
}

/// DTO кошелька.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletViewDto {
    pub balance: Turtle,
    /// Итог сессии в сотых TURTLE (может быть отрицательным).
    pub session_net: i64,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Текущая ставка после изменения.
    Bet(Bet),
    /// Ставка снята.
    BetCleared(Bet),
    /// Новый снэпшот стола после шага раунда.
    Table(TableSnapshot),
    /// Команда недопустима в текущей фазе (или без ставки) и ничего не изменила.
    Ignored { phase: GamePhase },
}

/// Ответ на запрос.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    History(Vec<HistoryItemDto>),
    Wallet(WalletViewDto),
    Events(Vec<RoundEvent>),
}
