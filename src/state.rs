use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, Winner};
use crate::engine::game_loop::GamePhase;

/// Снэпшот стола для слоя отображения.
///
/// Отдаётся после каждого перехода. В фазе dealing руки неполные (по две карты),
/// `winner` заполнен только в фазе finished.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub player_hand: Vec<Card>,
    pub banker_hand: Vec<Card>,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Option<Winner>,
    pub phase: GamePhase,
}

impl TableSnapshot {
    pub fn new(player: &Hand, banker: &Hand, winner: Option<Winner>, phase: GamePhase) -> Self {
        Self {
            player_hand: player.cards().to_vec(),
            banker_hand: banker.cards().to_vec(),
            player_total: player.total(),
            banker_total: banker.total(),
            winner,
            phase,
        }
    }

    /// Пустой стол в фазе betting.
    pub fn empty() -> Self {
        Self::new(&Hand::new(), &Hand::new(), None, GamePhase::Betting)
    }

    /// JSON для фронта.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
