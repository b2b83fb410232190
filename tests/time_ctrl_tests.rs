//! Темп раскрытия: таймер шагов и контроллер поверх сессии.

use baccarat_engine::domain::bet::{Bet, BetType};
use baccarat_engine::domain::hand::Side;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::domain::turtle::Turtle;
use baccarat_engine::engine::{GamePhase, GameSession};
use baccarat_engine::infra::DeterministicRng;
use baccarat_engine::time_ctrl::{ClockState, RevealClock, RevealController, RevealPacing};
use baccarat_engine::wallet::MockWallet;

fn ready_session() -> GameSession<MockWallet> {
    let mut s = GameSession::new(
        TableConfig::default(),
        MockWallet::with_balance("0xtime", Turtle::whole(100)),
    )
    .unwrap();
    s.place_bet(Bet::new(BetType::Player, Turtle::whole(2)))
        .unwrap();
    s
}

#[test]
fn card_delays_match_table_animation() {
    let pacing = RevealPacing::standard();

    assert_eq!(pacing.card_reveal_delay(Side::Player, 0), 0);
    assert_eq!(pacing.card_reveal_delay(Side::Player, 1), 1200);
    assert_eq!(pacing.card_reveal_delay(Side::Player, 2), 2400);
    assert_eq!(pacing.card_reveal_delay(Side::Banker, 0), 600);
    assert_eq!(pacing.card_reveal_delay(Side::Banker, 1), 1800);
    assert_eq!(pacing.card_reveal_delay(Side::Banker, 2), 3000);
}

#[test]
fn step_delays_only_for_timed_phases() {
    let pacing = RevealPacing::standard();
    assert_eq!(pacing.step_delay(GamePhase::Betting), None);
    assert_eq!(pacing.step_delay(GamePhase::Dealing), Some(2400));
    assert_eq!(pacing.step_delay(GamePhase::Revealing), Some(1200));
    assert_eq!(pacing.step_delay(GamePhase::Finished), None);

    assert_eq!(RevealPacing::default(), RevealPacing::standard());
}

#[test]
fn clock_counts_down_to_due() {
    let mut clock = RevealClock::new();
    assert_eq!(clock.elapse(100), ClockState::Idle);

    clock.schedule(1000);
    assert!(clock.is_armed());
    assert_eq!(clock.elapse(400), ClockState::Pending { remaining_ms: 600 });
    assert_eq!(clock.elapse(599), ClockState::Pending { remaining_ms: 1 });
    assert_eq!(clock.elapse(1), ClockState::Due);
    assert!(!clock.is_armed());
    assert_eq!(clock.elapse(1), ClockState::Idle);

    clock.schedule(0);
    assert_eq!(clock.elapse(0), ClockState::Due);
}

#[test]
fn controller_walks_round_on_time() {
    let mut session = ready_session();
    let mut controller = RevealController::new(RevealPacing::standard());
    let mut rng = DeterministicRng::from_u64(5);

    // До раздачи таймер молчит.
    assert_eq!(controller.on_time_passed(&mut session, 10_000, &mut rng).unwrap(), None);
    assert_eq!(session.phase(), GamePhase::Betting);

    let dealt = controller.deal(&mut session, &mut rng).unwrap().unwrap();
    assert_eq!(dealt.phase, GamePhase::Dealing);
    assert_eq!(controller.next_delay_ms(), Some(2400));

    assert_eq!(controller.on_time_passed(&mut session, 2000, &mut rng).unwrap(), None);
    assert_eq!(session.phase(), GamePhase::Dealing);

    let revealed = controller
        .on_time_passed(&mut session, 400, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(revealed.phase, GamePhase::Revealing);
    assert_eq!(controller.next_delay_ms(), Some(1200));

    let finished = controller
        .on_time_passed(&mut session, 1200, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(finished.phase, GamePhase::Finished);
    assert!(finished.winner.is_some());
    assert_eq!(controller.next_delay_ms(), None);
    assert_eq!(session.history().len(), 1);

    // После finished таймер больше ничего не делает.
    assert_eq!(controller.on_time_passed(&mut session, 10_000, &mut rng).unwrap(), None);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn controller_deal_without_bet_does_not_arm() {
    let mut session = GameSession::new(
        TableConfig::default(),
        MockWallet::with_balance("0xtime", Turtle::whole(100)),
    )
    .unwrap();
    let mut controller = RevealController::new(RevealPacing::instant());
    let mut rng = DeterministicRng::from_u64(5);

    assert_eq!(controller.deal(&mut session, &mut rng).unwrap(), None);
    assert_eq!(controller.next_delay_ms(), None);
}

#[test]
fn instant_pacing_finishes_in_two_ticks() {
    let mut session = ready_session();
    let mut controller = RevealController::new(RevealPacing::instant());
    let mut rng = DeterministicRng::from_u64(8);

    controller.deal(&mut session, &mut rng).unwrap();
    assert_eq!(controller.next_delay_ms(), Some(0));
    controller.on_time_passed(&mut session, 0, &mut rng).unwrap();
    controller.on_time_passed(&mut session, 0, &mut rng).unwrap();
    assert_eq!(session.phase(), GamePhase::Finished);
}

/// Планировщик на tokio-таймере (как в dev-CLI), время на паузе.
#[tokio::test(start_paused = true)]
async fn controller_with_tokio_sleep() {
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    let mut session = ready_session();
    let mut controller = RevealController::new(RevealPacing::standard());
    let mut rng = DeterministicRng::from_u64(11);

    let start = Instant::now();
    controller.deal(&mut session, &mut rng).unwrap();

    let mut phases = Vec::new();
    while let Some(delay_ms) = controller.next_delay_ms() {
        sleep(Duration::from_millis(delay_ms)).await;
        if let Some(snapshot) = controller
            .on_time_passed(&mut session, delay_ms, &mut rng)
            .unwrap()
        {
            phases.push(snapshot.phase);
        }
    }

    assert_eq!(phases, vec![GamePhase::Revealing, GamePhase::Finished]);
    assert!(start.elapsed() >= Duration::from_millis(3600));
}
