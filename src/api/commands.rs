use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetType};
use crate::domain::turtle::Turtle;
use crate::engine::{GameSession, RandomSource};
use crate::state::TableSnapshot;
use crate::wallet::WalletProvider;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда от фронта. Всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Поставить ставку целиком (строгая проверка).
    PlaceBet { bet_type: BetType, amount: Turtle },

    /// Выбрать тип ставки, сохранив сумму.
    SelectBetType { bet_type: BetType },

    /// Кнопки "+" / "−": изменить сумму на целое число TURTLE.
    AdjustBet { delta_whole: i64 },

    /// Кнопка "Max".
    MaxBet,

    /// Снять ставку.
    ClearBet,

    /// Начать раунд (betting → dealing).
    Deal,

    /// Доборы третьих карт (dealing → revealing).
    ResolveThirdCards,

    /// Объявить итог и рассчитать ставку (revealing → finished).
    Finalize,

    /// Новый раунд (finished → betting).
    StartNewRound,
}

/// Применить команду к сессии.
///
/// Недопустимая в текущей фазе команда не ошибка: отвечаем `Ignored`.
pub fn handle_command<W, R>(
    session: &mut GameSession<W>,
    command: Command,
    rng: &mut R,
) -> Result<CommandResponse, ApiError>
where
    W: WalletProvider,
    R: RandomSource,
{
    let response = match command {
        Command::PlaceBet { bet_type, amount } => {
            bet_response(session.place_bet(Bet::new(bet_type, amount))?)
        }
        Command::SelectBetType { bet_type } => bet_response(session.select_bet_type(bet_type)?),
        Command::AdjustBet { delta_whole } => bet_response(session.adjust_bet(delta_whole)?),
        Command::MaxBet => bet_response(session.max_bet()?),
        Command::ClearBet => session.clear_bet().map(CommandResponse::BetCleared),
        Command::Deal => table_response(session.deal_initial(rng)?),
        Command::ResolveThirdCards => table_response(session.resolve_third_cards()?),
        Command::Finalize => table_response(session.finalize()?),
        Command::StartNewRound => table_response(session.start_new_round()),
    };

    Ok(response.unwrap_or(CommandResponse::Ignored {
        phase: session.phase(),
    }))
}

/// Разобрать команду из JSON и применить.
pub fn handle_command_json<W, R>(
    session: &mut GameSession<W>,
    json: &str,
    rng: &mut R,
) -> Result<CommandResponse, ApiError>
where
    W: WalletProvider,
    R: RandomSource,
{
    let command: Command = serde_json::from_str(json)?;
    handle_command(session, command, rng)
}

fn bet_response(bet: Option<Bet>) -> Option<CommandResponse> {
    bet.map(CommandResponse::Bet)
}

fn table_response(snapshot: Option<TableSnapshot>) -> Option<CommandResponse> {
    snapshot.map(CommandResponse::Table)
}
