// src/bin/baccarat_dev_cli.rs
//! Dev-CLI: несколько раундов баккара против мок-кошелька с паузами раскрытия.
//!
//! Usage:
//!   cargo run --bin baccarat_dev_cli -- --rounds 5 --bet-type banker --amount 2
//!   cargo run --bin baccarat_dev_cli -- --seed 42 --fast --config table.yaml

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::sleep;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use baccarat_engine::domain::bet::{Bet, BetType};
use baccarat_engine::domain::card::Card;
use baccarat_engine::domain::hand::Side;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::domain::turtle::{format_delta, Turtle};
use baccarat_engine::engine::{GamePhase, GameSession, RandomSource};
use baccarat_engine::infra::{IdGenerator, RngSeed, SystemRng};
use baccarat_engine::state::TableSnapshot;
use baccarat_engine::time_ctrl::{RevealController, RevealPacing};
use baccarat_engine::wallet::{MockWallet, WalletProvider};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play baccarat rounds against a mock wallet")]
struct Args {
    /// Сколько раундов сыграть.
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// player | banker | tie
    #[arg(long, default_value = "banker")]
    bet_type: BetType,

    /// Сумма ставки в TURTLE (например, 2 или 1.50).
    #[arg(long, default_value = "1")]
    amount: Turtle,

    /// Базовый seed: раунды воспроизводимы, коммитмент печатается до раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// YAML-конфиг стола.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Без пауз между шагами.
    #[arg(long)]
    fast: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config(args.config.as_deref())?;
    let pacing = if args.fast {
        RevealPacing::instant()
    } else {
        config.reveal.clone()
    };

    let ids = IdGenerator::new();
    let session_id = ids.next_session_id();
    let base_seed = args.seed.map(RngSeed::from_u64);

    let mut system_rng = SystemRng;
    let mut wallet = MockWallet::new();
    wallet.connect(&config.wallet, &mut system_rng);
    println!(
        "[CLI] Кошелёк {} подключён, баланс {}",
        wallet.address().unwrap_or("-"),
        wallet.current_balance()
    );

    let mut controller = RevealController::new(pacing);
    let mut session = GameSession::new(config, wallet).context("invalid table config")?;

    for round in 1..=u64::from(args.rounds) {
        if session.phase() == GamePhase::Finished {
            session.start_new_round();
        }

        println!();
        println!("================ ROUND {round} =================");

        if let Err(err) = session.place_bet(Bet::new(args.bet_type, args.amount)) {
            warn!(%err, "stopping: bet rejected");
            break;
        }

        match base_seed.as_ref().map(|s| s.derive(session_id, round)) {
            Some(seed) => {
                let commitment = seed.commitment(args.bet_type);
                println!("[CLI] commitment: {}", hex::encode(commitment));

                play_paced(&mut controller, &mut session, &mut seed.to_rng()).await?;

                println!(
                    "[CLI] seed: {} (verified: {})",
                    seed.to_hex(),
                    seed.verify_commitment(args.bet_type, &commitment)
                );
            }
            None => play_paced(&mut controller, &mut session, &mut system_rng).await?,
        }

        println!("[CLI] Баланс: {}", session.balance());
    }

    println!();
    println!("================ HISTORY =================");
    for entry in session.history().entries() {
        println!(
            "#{} {} {} -> {:?}, payout {}",
            entry.id, entry.bet.bet_type, entry.bet.amount, entry.result, entry.payout
        );
    }
    println!(
        "Итог сессии: {}",
        format_delta(session.history().net_result())
    );

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<TableConfig> {
    let Some(path) = path else {
        return Ok(TableConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    TableConfig::from_yaml_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))
}

/// Один раунд: раздача сразу, дальше шаги по таймеру контроллера.
async fn play_paced<W, R>(
    controller: &mut RevealController,
    session: &mut GameSession<W>,
    rng: &mut R,
) -> Result<()>
where
    W: WalletProvider,
    R: RandomSource,
{
    let Some(snapshot) = controller.deal(session, rng)? else {
        println!("[CLI] Раздача невозможна в фазе {:?}", session.phase());
        return Ok(());
    };
    print_snapshot(&snapshot, &controller.pacing);

    while let Some(delay_ms) = controller.next_delay_ms() {
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
        if let Some(snapshot) = controller.on_time_passed(session, delay_ms, rng)? {
            print_snapshot(&snapshot, &controller.pacing);
        }
    }
    Ok(())
}

fn print_snapshot(snapshot: &TableSnapshot, pacing: &RevealPacing) {
    println!("--- {:?} ---", snapshot.phase);
    println!(
        "  Player {} = {}",
        format_cards(&snapshot.player_hand, Side::Player, pacing),
        snapshot.player_total
    );
    println!(
        "  Banker {} = {}",
        format_cards(&snapshot.banker_hand, Side::Banker, pacing),
        snapshot.banker_total
    );
    if let Some(winner) = snapshot.winner {
        println!("  Winner: {winner}");
    }
}

fn format_cards(cards: &[Card], side: Side, pacing: &RevealPacing) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c}@{}ms", pacing.card_reveal_delay(side, i)))
        .collect::<Vec<_>>()
        .join(" ")
}
