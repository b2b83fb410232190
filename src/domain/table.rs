use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::bet::BetLimits;
use crate::domain::turtle::Turtle;
use crate::time_ctrl::RevealPacing;

/// Конфиг стола: лимиты ставок, темп открытия карт, стартовый баланс мок-кошелька.
///
/// Все поля имеют значения по умолчанию, так что YAML может задавать
/// только то, что нужно переопределить.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub bet_limits: BetLimits,
    pub reveal: RevealPacing,
    pub wallet: WalletConfig,
}

/// Диапазон стартового баланса мок-кошелька (целые TURTLE).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalletConfig {
    pub min_start: u64,
    pub max_start: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            min_start: 50,
            max_start: 150,
        }
    }
}

/// Ошибки конфигурации.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Минимальная ставка должна быть больше нуля")]
    ZeroMinimumBet,

    #[error("Минимальная ставка {min} больше максимальной {max}")]
    InvertedBetLimits { min: Turtle, max: Turtle },

    #[error("Диапазон стартового баланса пуст: {min}..={max}")]
    InvertedWalletRange { min: u64, max: u64 },

    #[error("Не удалось разобрать YAML: {0}")]
    Parse(String),
}

impl TableConfig {
    /// Разобрать конфиг из YAML и проверить его.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig =
            serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let BetLimits { min, max } = self.bet_limits;
        if min.is_zero() {
            return Err(ConfigError::ZeroMinimumBet);
        }
        if min > max {
            return Err(ConfigError::InvertedBetLimits { min, max });
        }
        if self.wallet.min_start > self.wallet.max_start {
            return Err(ConfigError::InvertedWalletRange {
                min: self.wallet.min_start,
                max: self.wallet.max_start,
            });
        }
        Ok(())
    }
}
