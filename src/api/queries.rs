use serde::{Deserialize, Serialize};

use crate::engine::GameSession;
use crate::wallet::WalletProvider;

use super::dto::{HistoryItemDto, QueryResponse, TableViewDto, WalletViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable,

    /// История сыгранных раундов сессии.
    GetHistory,

    /// Баланс и итог сессии.
    GetWallet,

    /// События текущего раунда, начиная с номера `since`.
    GetEvents { since: u32 },
}

pub fn handle_query<W: WalletProvider>(session: &GameSession<W>, query: Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(session)),
        Query::GetHistory => QueryResponse::History(
            session
                .history()
                .entries()
                .iter()
                .map(HistoryItemDto::from)
                .collect(),
        ),
        Query::GetWallet => QueryResponse::Wallet(WalletViewDto {
            balance: session.balance(),
            session_net: session.history().net_result(),
        }),
        Query::GetEvents { since } => QueryResponse::Events(session.log().since(since).to_vec()),
    }
}

/// Сформировать DTO стола на основе сессии.
pub fn build_table_view<W: WalletProvider>(session: &GameSession<W>) -> TableViewDto {
    TableViewDto {
        table: session.snapshot(),
        bet: session.bet().copied(),
        balance: session.balance(),
        can_deal: session.can_deal(),
        round_id: session.round_id(),
    }
}
