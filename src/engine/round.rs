use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, Winner};
use crate::engine::errors::EngineError;
use crate::engine::tableau::{decide, is_natural};
use crate::eval::compare_totals;

/// Сколько карт нужно на начальную раздачу.
pub const INITIAL_DEAL_CARDS: usize = 4;

/// Итог раунда. Создаётся один раз, после всех доборов, и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub player_hand: Hand,
    pub banker_hand: Hand,
}

impl RoundOutcome {
    pub fn player_total(&self) -> u8 {
        self.player_hand.total()
    }

    pub fn banker_total(&self) -> u8 {
        self.banker_hand.total()
    }
}

/// Третьи карты, взятые в раунде.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThirdCards {
    pub player: Option<Card>,
    pub banker: Option<Card>,
}

/// Где сейчас находится розыгрыш.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStep {
    /// Колода готова, карт ещё нет.
    Ready,
    /// Розданы по две карты.
    InitialDealt,
    /// Доборы разрешены, итог известен.
    Resolved,
}

/// Пошаговый розыгрыш одного раунда поверх одноразовой колоды.
///
/// Шаги строго по порядку: `deal_initial` → `draw_third_cards` → `outcome`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundEngine {
    deck: Deck,
    player: Hand,
    banker: Hand,
    step: RoundStep,
    outcome: Option<RoundOutcome>,
}

impl RoundEngine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            banker: Hand::new(),
            step: RoundStep::Ready,
            outcome: None,
        }
    }

    pub fn step(&self) -> RoundStep {
        self.step
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn banker_hand(&self) -> &Hand {
        &self.banker
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Итог, если раунд уже разрешён.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Позиции 0 и 2 - Player, 1 и 3 - Banker. Курсор после раздачи = 4.
    pub fn deal_initial(&mut self) -> Result<(), EngineError> {
        if self.step != RoundStep::Ready {
            return Err(EngineError::RoundOutOfOrder {
                expected: RoundStep::Ready,
                actual: self.step,
            });
        }
        self.deck.ensure_remaining(INITIAL_DEAL_CARDS)?;

        let p1 = self.deck.draw()?;
        let b1 = self.deck.draw()?;
        let p2 = self.deck.draw()?;
        let b2 = self.deck.draw()?;

        self.player = Hand::from_pair(p1, p2);
        self.banker = Hand::from_pair(b1, b2);
        self.step = RoundStep::InitialDealt;

        debug!(
            player = %self.player,
            banker = %self.banker,
            player_total = self.player.total(),
            banker_total = self.banker.total(),
            "initial deal"
        );
        Ok(())
    }

    /// Доборы по таблице: сначала Player, затем Banker (его правило зависит от карты игрока).
    ///
    /// Оба решения принимаются по начальным суммам до того, как взята хоть одна карта.
    /// Если карт не хватает, возвращается `DeckExhausted`, а руки и курсор не меняются.
    pub fn draw_third_cards(&mut self) -> Result<ThirdCards, EngineError> {
        if self.step != RoundStep::InitialDealt {
            return Err(EngineError::RoundOutOfOrder {
                expected: RoundStep::InitialDealt,
                actual: self.step,
            });
        }

        let player_total = self.player.total();
        let banker_total = self.banker.total();
        let mut drawn = ThirdCards::default();

        if is_natural(player_total, banker_total) {
            debug!(player_total, banker_total, "natural, no draws");
        } else {
            // Карта игрока ещё в колоде: смотрим её очки, не снимая.
            let player_card = self.deck.peek();
            let p3 = player_card.map(|c| c.point_value());
            let decision = decide(player_total, banker_total, p3);

            let needed = usize::from(decision.player_draws) + usize::from(decision.banker_draws);
            self.deck.ensure_remaining(needed)?;

            if decision.player_draws {
                let card = self.deck.draw()?;
                self.player.push_third(card);
                drawn.player = Some(card);
            }
            if decision.banker_draws {
                let card = self.deck.draw()?;
                self.banker.push_third(card);
                drawn.banker = Some(card);
            }

            debug!(
                player_third = ?drawn.player,
                banker_third = ?drawn.banker,
                "third cards resolved"
            );
        }

        self.outcome = Some(RoundOutcome {
            winner: compare_totals(self.player.total(), self.banker.total()),
            player_hand: self.player.clone(),
            banker_hand: self.banker.clone(),
        });
        self.step = RoundStep::Resolved;
        Ok(drawn)
    }

    /// Забрать итог, поглотив движок.
    pub fn into_outcome(self) -> Option<RoundOutcome> {
        self.outcome
    }
}

/// Разыграть раунд целиком: раздача, доборы, определение победителя.
pub fn resolve_round(deck: Deck) -> Result<RoundOutcome, EngineError> {
    let mut engine = RoundEngine::new(deck);
    engine.deal_initial()?;
    engine.draw_third_cards()?;
    engine.into_outcome().ok_or(EngineError::RoundOutOfOrder {
        expected: RoundStep::Resolved,
        actual: RoundStep::InitialDealt,
    })
}
