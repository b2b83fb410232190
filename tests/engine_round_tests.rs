//! Розыгрыш раунда на подготовленных колодах.

use baccarat_engine::domain::card::Card;
use baccarat_engine::domain::deck::Deck;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::engine::{resolve_round, EngineError, RoundEngine, RoundStep};
use baccarat_engine::infra::DeterministicRng;

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| s.parse().expect("valid card")).collect()
}

fn stacked(list: &[&str]) -> Deck {
    Deck::from_cards(cards(list))
}

// ---------------------------------------------------------------------
// Раздача
// ---------------------------------------------------------------------

#[test]
fn initial_deal_is_interleaved() {
    let mut round = RoundEngine::new(stacked(&["As", "2h", "9d", "3c", "4s", "Kd"]));
    round.deal_initial().unwrap();

    assert_eq!(round.player_hand().cards(), cards(&["As", "9d"]).as_slice());
    assert_eq!(round.banker_hand().cards(), cards(&["2h", "3c"]).as_slice());
    assert_eq!(round.player_hand().total(), 0);
    assert_eq!(round.banker_hand().total(), 5);
    assert_eq!(round.deck().cursor(), 4);
    assert_eq!(round.step(), RoundStep::InitialDealt);
}

/// Player 0 берёт 4, банкир 5 при p3 = 4 тоже берёт.
#[test]
fn player_zero_draws_and_banker_five_draws_on_four() {
    let mut round = RoundEngine::new(stacked(&["As", "2h", "9d", "3c", "4s", "Kd"]));
    round.deal_initial().unwrap();
    let drawn = round.draw_third_cards().unwrap();

    assert_eq!(drawn.player, Some("4s".parse().unwrap()));
    assert_eq!(drawn.banker, Some("Kd".parse().unwrap()));
    assert_eq!(round.deck().cursor(), 6);

    let outcome = round.outcome().cloned().unwrap();
    assert_eq!(outcome.player_total(), 4);
    assert_eq!(outcome.banker_total(), 5);
    assert_eq!(outcome.winner, Winner::Banker);
}

/// Тот же расклад, но p3 = 2: банкир 5 стоит.
#[test]
fn banker_five_stands_on_two() {
    let outcome = resolve_round(stacked(&["As", "2h", "9d", "3c", "2s", "Kd"])).unwrap();

    assert_eq!(outcome.player_hand.len(), 3);
    assert_eq!(outcome.banker_hand.len(), 2);
    assert_eq!(outcome.player_total(), 2);
    assert_eq!(outcome.banker_total(), 5);
    assert_eq!(outcome.winner, Winner::Banker);
}

/// Натуральная 8 у игрока: никто не берёт.
#[test]
fn player_natural_eight_stops_draws() {
    let outcome = resolve_round(stacked(&["5h", "2c", "3d", "Ks", "9s", "9h"])).unwrap();

    assert_eq!(outcome.player_hand.len(), 2);
    assert_eq!(outcome.banker_hand.len(), 2);
    assert_eq!(outcome.player_total(), 8);
    assert_eq!(outcome.banker_total(), 2);
    assert_eq!(outcome.winner, Winner::Player);
}

#[test]
fn equal_naturals_tie() {
    let outcome = resolve_round(stacked(&["4h", "3c", "4d", "5s"])).unwrap();
    assert_eq!(outcome.player_total(), 8);
    assert_eq!(outcome.banker_total(), 8);
    assert_eq!(outcome.winner, Winner::Tie);
}

/// Player стоит на 6, банкир с 3 берёт как при стоящем игроке.
#[test]
fn player_stands_banker_draws_to_tie() {
    let outcome = resolve_round(stacked(&["6h", "Ac", "Kd", "2s", "3h"])).unwrap();

    assert_eq!(outcome.player_hand.len(), 2);
    assert_eq!(outcome.banker_hand.len(), 3);
    assert_eq!(outcome.player_total(), 6);
    assert_eq!(outcome.banker_total(), 6);
    assert_eq!(outcome.winner, Winner::Tie);
}

// ---------------------------------------------------------------------
// Ошибки
// ---------------------------------------------------------------------

#[test]
fn short_deck_cannot_deal() {
    let err = resolve_round(stacked(&["As", "2h", "9d"])).unwrap_err();
    assert_eq!(
        err,
        EngineError::DeckExhausted {
            needed: 4,
            remaining: 3
        }
    );
}

#[test]
fn short_deck_fails_on_third_card() {
    let mut round = RoundEngine::new(stacked(&["As", "2h", "9d", "3c"]));
    round.deal_initial().unwrap();
    assert!(matches!(
        round.draw_third_cards(),
        Err(EngineError::DeckExhausted { .. })
    ));
    assert!(round.outcome().is_none());
}

/// Player берёт 9, банкир 3 при p3 = 9 тоже должен брать, но карта одна.
#[test]
fn missing_banker_card_leaves_hands_untouched() {
    let mut round = RoundEngine::new(stacked(&["As", "Ah", "9d", "2c", "9s"]));
    round.deal_initial().unwrap();

    for _ in 0..2 {
        assert_eq!(
            round.draw_third_cards(),
            Err(EngineError::DeckExhausted {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(round.player_hand().cards(), cards(&["As", "9d"]).as_slice());
        assert_eq!(round.banker_hand().cards(), cards(&["Ah", "2c"]).as_slice());
        assert_eq!(round.deck().cursor(), 4);
        assert_eq!(round.step(), RoundStep::InitialDealt);
        assert!(round.outcome().is_none());
    }
}

/// Player стоит, банкиру нужна карта, а колода кончилась.
#[test]
fn missing_banker_card_when_player_stands() {
    let mut round = RoundEngine::new(stacked(&["6h", "Ac", "Kd", "2s"]));
    round.deal_initial().unwrap();

    assert_eq!(
        round.draw_third_cards(),
        Err(EngineError::DeckExhausted {
            needed: 1,
            remaining: 0
        })
    );
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.banker_hand().len(), 2);
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut round = RoundEngine::new(Deck::standard_52());
    assert!(matches!(
        round.draw_third_cards(),
        Err(EngineError::RoundOutOfOrder {
            expected: RoundStep::InitialDealt,
            actual: RoundStep::Ready
        })
    ));

    round.deal_initial().unwrap();
    assert!(matches!(
        round.deal_initial(),
        Err(EngineError::RoundOutOfOrder { .. })
    ));

    round.draw_third_cards().unwrap();
    assert_eq!(round.step(), RoundStep::Resolved);
    assert!(round.draw_third_cards().is_err());
}

// ---------------------------------------------------------------------
// Свойства на случайных колодах
// ---------------------------------------------------------------------

#[test]
fn random_rounds_respect_hand_sizes_and_totals() {
    let mut rng = DeterministicRng::from_u64(2024);

    for _ in 0..500 {
        let outcome = resolve_round(Deck::shuffled(&mut rng)).unwrap();

        let p = outcome.player_hand.len();
        let b = outcome.banker_hand.len();
        assert!((2..=3).contains(&p));
        assert!((2..=3).contains(&b));
        assert!(outcome.player_total() <= 9);
        assert!(outcome.banker_total() <= 9);

        let expected = match outcome.player_total().cmp(&outcome.banker_total()) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Banker,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        assert_eq!(outcome.winner, expected);
    }
}
