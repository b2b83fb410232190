//! Граница с кошельком.
//!
//! Движок читает баланс и ровно один раз за завершённый раунд применяет дельту.
//! Реальная интеграция с расширением браузера живёт снаружи, здесь только
//! трейт и мок для локального запуска и тестов.

pub mod mock;

pub use mock::MockWallet;

use crate::domain::turtle::Turtle;

/// Внешний кошелёк.
pub trait WalletProvider {
    /// Текущий баланс.
    fn current_balance(&self) -> Turtle;

    /// Применить знаковую дельту (в сотых TURTLE). Возвращает новый баланс.
    fn apply_balance_delta(&mut self, delta: i64) -> Turtle;
}

impl<W: WalletProvider + ?Sized> WalletProvider for Box<W> {
    fn current_balance(&self) -> Turtle {
        (**self).current_balance()
    }

    fn apply_balance_delta(&mut self, delta: i64) -> Turtle {
        (**self).apply_balance_delta(delta)
    }
}
