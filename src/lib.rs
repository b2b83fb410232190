//! Движок баккара: раунд, фазы игры и мок-кошелёк.
//!
//! Слои:
//! - `domain` - карты, колода, руки, ставки, деньги (TURTLE), конфиг стола;
//! - `eval` - очки руки и сравнение итогов;
//! - `engine` - таблица доборов, раунд, выплаты, сессия с фазами;
//! - `wallet` - провайдер баланса и мок-кошелёк;
//! - `time_ctrl` - темп раскрытия раунда (внешний планировщик шагов);
//! - `api` - команды/запросы для фронта;
//! - `infra` - RNG, seed с коммитментом, ID.

pub mod infra;
pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod state;
pub mod time_ctrl;
pub mod wallet;

pub use api::{handle_command, handle_query, Command, CommandResponse, Query, QueryResponse};
pub use engine::{GamePhase, GameSession};
pub use state::TableSnapshot;
