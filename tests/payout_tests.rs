//! Выплаты и дельты баланса.

use baccarat_engine::domain::bet::{Bet, BetType};
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::turtle::Turtle;
use baccarat_engine::engine::{balance_delta, payout, payout_percent};

fn bet(bet_type: BetType, whole: u64) -> Bet {
    Bet::new(bet_type, Turtle::whole(whole))
}

#[test]
fn tie_five_pays_forty_five() {
    let b = bet(BetType::Tie, 5);
    assert_eq!(payout(&b, Winner::Tie), Turtle::whole(45));
    assert_eq!(balance_delta(&b, Winner::Tie), 4000);
}

#[test]
fn banker_one_pays_one_ninety_five() {
    let b = bet(BetType::Banker, 1);
    assert_eq!(payout(&b, Winner::Banker), Turtle::from_cents(195));
    assert_eq!(balance_delta(&b, Winner::Banker), 95);
}

#[test]
fn player_pays_double() {
    let b = bet(BetType::Player, 10);
    assert_eq!(payout(&b, Winner::Player), Turtle::whole(20));
    assert_eq!(balance_delta(&b, Winner::Player), 1000);
}

/// Проигрыш: выплата 0 и дельта = -ставка, на всех несовпадающих исходах.
#[test]
fn mismatched_winner_pays_nothing() {
    let winners = [Winner::Player, Winner::Banker, Winner::Tie];

    for bet_type in BetType::ALL {
        for winner in winners {
            let b = bet(bet_type, 3);
            if bet_type.wins_on(winner) {
                assert_eq!(
                    payout(&b, winner),
                    b.amount.mul_percent(payout_percent(bet_type))
                );
            } else {
                assert_eq!(payout(&b, winner), Turtle::ZERO);
                assert_eq!(balance_delta(&b, winner), -300);
            }
        }
    }
}

#[test]
fn fractional_banker_payout_truncates() {
    // 0.03 * 1.95 = 0.0585 → 0.05
    let b = Bet::new(BetType::Banker, Turtle::from_cents(3));
    assert_eq!(payout(&b, Winner::Banker), Turtle::from_cents(5));
    assert_eq!(balance_delta(&b, Winner::Banker), 2);
}
