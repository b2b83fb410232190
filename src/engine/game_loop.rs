use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::bet::{Bet, BetType};
use crate::domain::deck::Deck;
use crate::domain::table::{ConfigError, TableConfig};
use crate::domain::turtle::Turtle;
use crate::domain::RoundId;
use crate::engine::errors::{BetRejection, EngineError};
use crate::engine::history::{BetResult, GameHistory, HistoryEntry};
use crate::engine::payout::{balance_delta, payout};
use crate::engine::round::{RoundEngine, RoundOutcome};
use crate::engine::round_log::{RoundEventKind, RoundLog};
use crate::engine::validation::{clamp_amount, ensure_can_afford_minimum, validate_bet};
use crate::engine::RandomSource;
use crate::infra::ids::{unix_millis, IdGenerator};
use crate::state::TableSnapshot;
use crate::wallet::WalletProvider;

/// Фаза раунда. В каждый момент активна ровно одна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Ставку можно ставить, менять и снимать.
    Betting,
    /// Розданы по две карты.
    Dealing,
    /// Доборы сделаны, итог известен движку, но ещё не объявлен.
    Revealing,
    /// Итог объявлен, баланс обновлён, запись в истории.
    Finished,
}

/// Игровая сессия одного игрока: единственный владелец изменяемого состояния.
///
/// Переходы: `betting → dealing → revealing → finished → betting`.
/// Недопустимый переход ничего не меняет и возвращает `Ok(None)`.
/// Таймингов внутри нет: когда звать следующий шаг, решает внешний планировщик
/// (см. `time_ctrl::RevealController`).
pub struct GameSession<W: WalletProvider> {
    config: TableConfig,
    wallet: W,
    phase: GamePhase,
    bet: Option<Bet>,
    round_id: Option<RoundId>,
    round: Option<RoundEngine>,
    outcome: Option<RoundOutcome>,
    log: RoundLog,
    history: GameHistory,
    ids: IdGenerator,
}

impl<W: WalletProvider> GameSession<W> {
    /// Новая сессия в фазе betting. Конфиг проверяется до создания.
    pub fn new(config: TableConfig, wallet: W) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            wallet,
            phase: GamePhase::Betting,
            bet: None,
            round_id: None,
            round: None,
            outcome: None,
            log: RoundLog::new(),
            history: GameHistory::new(),
            ids: IdGenerator::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn bet(&self) -> Option<&Bet> {
        self.bet.as_ref()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Доступ к кошельку вне раунда (подключение/отключение мока).
    pub fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    pub fn balance(&self) -> Turtle {
        self.wallet.current_balance()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn log(&self) -> &RoundLog {
        &self.log
    }

    pub fn round_id(&self) -> Option<RoundId> {
        self.round_id
    }

    /// Итог раунда, как только он разрешён (с фазы revealing).
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    // ---------------------------------------------------------------------
    // Ставка (только в фазе betting)
    // ---------------------------------------------------------------------

    /// Поставить ставку целиком. Неверная сумма → `InvalidBet`, состояние не меняется.
    pub fn place_bet(&mut self, bet: Bet) -> Result<Option<Bet>, EngineError> {
        if !self.in_phase(GamePhase::Betting, "place_bet") {
            return Ok(None);
        }
        let balance = self.balance();
        if let Err(rejection) = validate_bet(&bet, &self.config.bet_limits, balance) {
            warn!(%rejection, "bet rejected");
            return Err(rejection.into());
        }
        self.bet = Some(bet);
        Ok(self.bet)
    }

    /// Выбрать тип ставки, сохранив сумму (или взяв минимальную, если ставки ещё нет).
    pub fn select_bet_type(&mut self, bet_type: BetType) -> Result<Option<Bet>, EngineError> {
        if !self.in_phase(GamePhase::Betting, "select_bet_type") {
            return Ok(None);
        }
        let limits = self.config.bet_limits;
        let balance = self.balance();
        ensure_can_afford_minimum(&limits, balance).map_err(|r| self.reject(r))?;

        let amount = self.bet.map(|b| b.amount).unwrap_or(limits.min);
        self.bet = Some(Bet::new(bet_type, clamp_amount(amount, &limits, balance)));
        Ok(self.bet)
    }

    /// Изменить сумму на `delta_whole` целых TURTLE с зажатием в лимиты и баланс.
    /// Без ставки ничего не делает.
    pub fn adjust_bet(&mut self, delta_whole: i64) -> Result<Option<Bet>, EngineError> {
        if !self.in_phase(GamePhase::Betting, "adjust_bet") {
            return Ok(None);
        }
        let Some(current) = self.bet else {
            return Ok(None);
        };
        let limits = self.config.bet_limits;
        let balance = self.balance();
        ensure_can_afford_minimum(&limits, balance).map_err(|r| self.reject(r))?;

        let step = Turtle::whole(delta_whole.unsigned_abs());
        let raw = if delta_whole >= 0 {
            current.amount + step
        } else {
            current.amount - step
        };
        self.bet = Some(Bet::new(current.bet_type, clamp_amount(raw, &limits, balance)));
        Ok(self.bet)
    }

    /// Сумма = min(максимальная ставка, баланс).
    pub fn max_bet(&mut self) -> Result<Option<Bet>, EngineError> {
        if !self.in_phase(GamePhase::Betting, "max_bet") {
            return Ok(None);
        }
        let Some(current) = self.bet else {
            return Ok(None);
        };
        let limits = self.config.bet_limits;
        let balance = self.balance();
        ensure_can_afford_minimum(&limits, balance).map_err(|r| self.reject(r))?;

        self.bet = Some(Bet::new(current.bet_type, limits.cap_for(balance)));
        Ok(self.bet)
    }

    /// Снять ставку. Возвращает снятую ставку.
    pub fn clear_bet(&mut self) -> Option<Bet> {
        if !self.in_phase(GamePhase::Betting, "clear_bet") {
            return None;
        }
        self.bet.take()
    }

    /// Можно ли начинать раздачу: фаза betting, ставка есть и всё ещё проходит по балансу.
    pub fn can_deal(&self) -> bool {
        self.phase == GamePhase::Betting
            && self
                .bet
                .map(|b| validate_bet(&b, &self.config.bet_limits, self.balance()).is_ok())
                .unwrap_or(false)
    }

    // ---------------------------------------------------------------------
    // Шаги раунда
    // ---------------------------------------------------------------------

    /// betting → dealing на свежей перемешанной колоде.
    pub fn deal_initial<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<TableSnapshot>, EngineError> {
        if !self.ready_to_deal() {
            return Ok(None);
        }
        self.start_round(Deck::shuffled(rng))
    }

    /// betting → dealing на заданной колоде (реплей, подготовленные сценарии).
    pub fn deal_initial_with_deck(
        &mut self,
        deck: Deck,
    ) -> Result<Option<TableSnapshot>, EngineError> {
        if !self.ready_to_deal() {
            return Ok(None);
        }
        self.start_round(deck)
    }

    /// dealing → revealing: доборы третьих карт по таблице.
    pub fn resolve_third_cards(&mut self) -> Result<Option<TableSnapshot>, EngineError> {
        if !self.in_phase(GamePhase::Dealing, "resolve_third_cards") {
            return Ok(None);
        }
        let Some(round) = self.round.as_mut() else {
            debug!("no active round in dealing phase");
            return Ok(None);
        };

        let drawn = round.draw_third_cards()?;
        if let Some(card) = drawn.player {
            self.log.push(RoundEventKind::PlayerThirdCard {
                card,
                player_total: round.player_hand().total(),
            });
        }
        if let Some(card) = drawn.banker {
            self.log.push(RoundEventKind::BankerThirdCard {
                card,
                banker_total: round.banker_hand().total(),
            });
        }

        self.outcome = round.outcome().cloned();
        self.phase = GamePhase::Revealing;
        Ok(Some(self.snapshot()))
    }

    /// revealing → finished: объявить победителя, один раз применить дельту баланса,
    /// дописать историю.
    pub fn finalize(&mut self) -> Result<Option<TableSnapshot>, EngineError> {
        if !self.in_phase(GamePhase::Revealing, "finalize") {
            return Ok(None);
        }
        let (Some(outcome), Some(bet), Some(round_id)) =
            (self.outcome.as_ref(), self.bet, self.round_id)
        else {
            debug!("revealing phase without outcome or bet");
            return Ok(None);
        };

        let winner = outcome.winner;
        let paid = payout(&bet, winner);
        let delta = balance_delta(&bet, winner);

        self.log.push(RoundEventKind::WinnerDeclared {
            winner,
            player_total: outcome.player_total(),
            banker_total: outcome.banker_total(),
        });

        let new_balance = self.wallet.apply_balance_delta(delta);

        self.history.push(HistoryEntry {
            id: round_id,
            bet,
            result: if paid.is_zero() {
                BetResult::Lose
            } else {
                BetResult::Win
            },
            payout: paid,
            timestamp_ms: unix_millis(),
        });
        self.log.push(RoundEventKind::Settled {
            round_id,
            payout: paid,
            delta,
        });

        info!(
            round_id,
            %winner,
            bet_type = %bet.bet_type,
            amount = %bet.amount,
            payout = %paid,
            balance = %new_balance,
            "round settled"
        );

        self.bet = None;
        self.phase = GamePhase::Finished;
        Ok(Some(self.snapshot()))
    }

    /// finished → betting: пустые руки, ставки нет.
    pub fn start_new_round(&mut self) -> Option<TableSnapshot> {
        if !self.in_phase(GamePhase::Finished, "start_new_round") {
            return None;
        }
        self.bet = None;
        self.round = None;
        self.round_id = None;
        self.outcome = None;
        self.log.clear();
        self.phase = GamePhase::Betting;
        Some(self.snapshot())
    }

    /// Следующий шаг по текущей фазе. В фазе finished ничего не делает.
    pub fn advance<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<TableSnapshot>, EngineError> {
        match self.phase {
            GamePhase::Betting => self.deal_initial(rng),
            GamePhase::Dealing => self.resolve_third_cards(),
            GamePhase::Revealing => self.finalize(),
            GamePhase::Finished => Ok(None),
        }
    }

    /// Сыграть раунд целиком без пауз. `None`, если раздача сейчас невозможна.
    pub fn play_round<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<RoundOutcome>, EngineError> {
        if self.deal_initial(rng)?.is_none() {
            return Ok(None);
        }
        self.resolve_third_cards()?;
        self.finalize()?;
        Ok(self.outcome.clone())
    }

    /// Снэпшот для слоя отображения.
    pub fn snapshot(&self) -> TableSnapshot {
        let (player_hand, banker_hand) = match self.round.as_ref() {
            Some(round) => (round.player_hand().clone(), round.banker_hand().clone()),
            None => Default::default(),
        };
        let winner = match self.phase {
            GamePhase::Finished => self.outcome.as_ref().map(|o| o.winner),
            _ => None,
        };
        TableSnapshot::new(&player_hand, &banker_hand, winner, self.phase)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn in_phase(&self, expected: GamePhase, action: &'static str) -> bool {
        if self.phase == expected {
            return true;
        }
        debug!(
            "{}",
            EngineError::IllegalTransition {
                phase: self.phase,
                action,
            }
        );
        false
    }

    fn ready_to_deal(&self) -> bool {
        if !self.in_phase(GamePhase::Betting, "deal") {
            return false;
        }
        if !self.can_deal() {
            debug!(bet = ?self.bet, "deal ignored: no valid bet");
            return false;
        }
        true
    }

    fn reject(&self, rejection: BetRejection) -> EngineError {
        warn!(%rejection, "bet rejected");
        rejection.into()
    }

    fn start_round(&mut self, deck: Deck) -> Result<Option<TableSnapshot>, EngineError> {
        let Some(bet) = self.bet else {
            return Ok(None);
        };

        let mut round = RoundEngine::new(deck);
        round.deal_initial()?;

        let round_id = self.ids.next_round_id();
        self.log.clear();
        self.log.push(RoundEventKind::RoundStarted { round_id, bet });
        self.log.push(RoundEventKind::InitialDeal {
            player: round.player_hand().cards().to_vec(),
            banker: round.banker_hand().cards().to_vec(),
            player_total: round.player_hand().total(),
            banker_total: round.banker_hand().total(),
        });

        self.round = Some(round);
        self.round_id = Some(round_id);
        self.outcome = None;
        self.phase = GamePhase::Dealing;
        Ok(Some(self.snapshot()))
    }
}
