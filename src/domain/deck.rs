use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода на один раунд.
///
/// Карты выдаются по индексу `cursor`, который только растёт:
/// уже сданная карта никогда не читается повторно. Колода одноразовая,
/// на каждый раунд строится новая.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Стандартная 52-карточная колода без перемешивания, порядок:
    /// Hearts A..K, Diamonds A..K, Clubs A..K, Spades A..K.
    pub fn standard_52() -> Self {
        Deck::from_cards(build())
    }

    /// Свежая перемешанная колода.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        Deck::from_cards(shuffle(&build(), rng))
    }

    /// Колода в заданном порядке (подготовленные сценарии, реплей).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Все карты колоды в порядке сдачи (включая уже сданные).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Позиция следующей карты.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Сколько карт ещё не сдано.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Следующая карта без сдвига курсора.
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.cursor).copied()
    }

    /// Взять следующую несданную карту.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(EngineError::DeckExhausted {
                needed: 1,
                remaining: 0,
            })?;
        self.cursor += 1;
        Ok(card)
    }

    /// Проверить, что в колоде осталось хотя бы `needed` карт.
    pub fn ensure_remaining(&self, needed: usize) -> Result<(), EngineError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(EngineError::DeckExhausted { needed, remaining });
        }
        Ok(())
    }
}

/// Все 52 сочетания (масть, ранг) в детерминированном порядке.
pub fn build() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Fisher–Yates: для `i` от последнего индекса до 1 меняем `i`
/// с равномерно выбранным индексом из `0..=i`.
///
/// Вход не трогаем, возвращаем новую перестановку.
pub fn shuffle<T: Clone, R: RandomSource>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.pick_index(i);
        debug_assert!(j <= i, "RandomSource вернул индекс вне диапазона");
        out.swap(i, j.min(i));
    }
    out
}
