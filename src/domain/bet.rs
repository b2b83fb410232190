use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Winner;
use crate::domain::turtle::Turtle;

/// На что ставит игрок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    Player,
    Banker,
    Tie,
}

impl BetType {
    pub const ALL: [BetType; 3] = [BetType::Player, BetType::Banker, BetType::Tie];

    /// Совпадает ли ставка с итогом раунда.
    pub fn wins_on(self, winner: Winner) -> bool {
        matches!(
            (self, winner),
            (BetType::Player, Winner::Player)
                | (BetType::Banker, Winner::Banker)
                | (BetType::Tie, Winner::Tie)
        )
    }

    /// Текстовая метка (используется и в хэше коммитмента).
    pub const fn label(self) -> &'static str {
        match self {
            BetType::Player => "player",
            BetType::Banker => "banker",
            BetType::Tie => "tie",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "player" | "p" => Ok(BetType::Player),
            "banker" | "b" => Ok(BetType::Banker),
            "tie" | "t" => Ok(BetType::Tie),
            other => Err(format!("Invalid bet type: {other}")),
        }
    }
}

/// Ставка на раунд. Во время раунда не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bet {
    pub bet_type: BetType,
    pub amount: Turtle,
}

impl Bet {
    pub const fn new(bet_type: BetType, amount: Turtle) -> Self {
        Self { bet_type, amount }
    }
}

/// Лимиты ставки стола. В конфиге суммы задаются в сотых TURTLE.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLimits {
    pub min: Turtle,
    pub max: Turtle,
}

impl BetLimits {
    pub const fn new(min: Turtle, max: Turtle) -> Self {
        Self { min, max }
    }

    /// Верхняя граница ставки с учётом баланса.
    pub fn cap_for(&self, balance: Turtle) -> Turtle {
        self.max.min(balance)
    }

    pub fn contains(&self, amount: Turtle) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl Default for BetLimits {
    /// 1..=10 TURTLE.
    fn default() -> Self {
        Self {
            min: Turtle::whole(1),
            max: Turtle::whole(10),
        }
    }
}
