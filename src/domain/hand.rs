use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::hand_total;

/// Максимум карт в руке: две начальные плюс третья.
pub const MAX_HAND_SIZE: usize = 3;

/// Сторона стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Banker,
}

/// Итог раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::Player => "player",
            Winner::Banker => "banker",
            Winner::Tie => "tie",
        };
        write!(f, "{s}")
    }
}

/// Рука Player или Banker: 2 или 3 карты.
///
/// Карты только добавляются в конец, не удаляются и не переставляются.
/// Сумма очков не хранится, а каждый раз считается по картам.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_HAND_SIZE),
        }
    }

    /// Начальная рука из двух карт.
    pub fn from_pair(first: Card, second: Card) -> Self {
        let mut cards = Vec::with_capacity(MAX_HAND_SIZE);
        cards.push(first);
        cards.push(second);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Сумма очков по модулю 10.
    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Третья карта, если она была взята.
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    /// Добавить третью карту. Рука растёт не больше чем на одну карту.
    pub(crate) fn push_third(&mut self, card: Card) {
        debug_assert_eq!(self.cards.len(), 2, "третья карта добавляется к паре");
        self.cards.push(card);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", cards.join(" "))
    }
}
