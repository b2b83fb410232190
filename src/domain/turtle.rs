use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Сколько минимальных единиц в одном TURTLE.
pub const CENTS_PER_TURTLE: u64 = 100;

/// Сумма в TURTLE с точностью до сотых.
///
/// Внутри хранятся сотые доли (fixed point), чтобы выплата банкиру 1.95x
/// считалась без плавающей точки.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Turtle(pub u64);

impl Turtle {
    pub const ZERO: Turtle = Turtle(0);

    /// Целое количество TURTLE.
    pub const fn whole(amount: u64) -> Self {
        Turtle(amount.saturating_mul(CENTS_PER_TURTLE))
    }

    /// Из сотых долей.
    pub const fn from_cents(cents: u64) -> Self {
        Turtle(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Turtle) -> Turtle {
        Turtle(self.0.saturating_sub(other.0))
    }

    /// Применить знаковую дельту (в сотых). Баланс не уходит ниже нуля.
    pub fn apply_delta(self, delta: i64) -> Turtle {
        if delta >= 0 {
            Turtle(self.0.saturating_add(delta.unsigned_abs()))
        } else {
            Turtle(self.0.saturating_sub(delta.unsigned_abs()))
        }
    }

    /// Знаковое значение в сотых (для дельт баланса).
    pub fn signed_cents(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    /// Умножение на процент с отбрасыванием дробной части сотых.
    pub fn mul_percent(self, percent: u64) -> Turtle {
        let cents = u128::from(self.0) * u128::from(percent) / 100;
        Turtle(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl Add for Turtle {
    type Output = Turtle;

    fn add(self, rhs: Turtle) -> Self::Output {
        Turtle(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Turtle {
    fn add_assign(&mut self, rhs: Turtle) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Turtle {
    type Output = Turtle;

    fn sub(self, rhs: Turtle) -> Self::Output {
        Turtle(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Turtle {
    fn sub_assign(&mut self, rhs: Turtle) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Turtle {
    /// `12.34`, `1.95`, `10.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_TURTLE,
            self.0 % CENTS_PER_TURTLE
        )
    }
}

/// Форматирует знаковую дельту в сотых: `+40.00`, `-5.00`.
pub fn format_delta(delta: i64) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    format!("{sign}{}", Turtle(delta.unsigned_abs()))
}

/// Парсинг "5", "1.95", "0.5".
impl FromStr for Turtle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err("Empty amount".into());
        }
        if frac.len() > 2 {
            return Err(format!("Too many decimal places: {s}"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("Invalid amount: {s}"))?
        };
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| format!("Invalid amount: {s}"))? * 10,
            _ => frac.parse().map_err(|_| format!("Invalid amount: {s}"))?,
        };

        whole
            .checked_mul(CENTS_PER_TURTLE)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Turtle)
            .ok_or_else(|| format!("Amount overflow: {s}"))
    }
}
