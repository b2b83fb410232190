use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::table::WalletConfig;
use crate::domain::turtle::Turtle;
use crate::engine::RandomSource;

use super::WalletProvider;

/// 20 байт адреса = 40 hex-символов.
const ADDRESS_BYTES: usize = 20;

/// Мок-кошелёк: случайный адрес и стартовый баланс при подключении.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockWallet {
    connected: bool,
    balance: Turtle,
    address: Option<String>,
}

impl MockWallet {
    /// Отключённый кошелёк с нулевым балансом.
    pub fn new() -> Self {
        Self::default()
    }

    /// Подключённый кошелёк с заданным балансом (для тестов и CLI).
    pub fn with_balance(address: impl Into<String>, balance: Turtle) -> Self {
        Self {
            connected: true,
            balance,
            address: Some(address.into()),
        }
    }

    /// Подключить: адрес `0x` + 40 hex-символов, целый баланс из диапазона конфига.
    pub fn connect<R: RandomSource>(&mut self, config: &WalletConfig, rng: &mut R) {
        let raw: Vec<u8> = (0..ADDRESS_BYTES)
            .map(|_| rng.pick_index(usize::from(u8::MAX)) as u8)
            .collect();
        let address = format!("0x{}", hex::encode(raw));

        let span = config.max_start.saturating_sub(config.min_start);
        let extra = rng.pick_index(usize::try_from(span).unwrap_or(usize::MAX)) as u64;
        let balance = Turtle::whole(config.min_start.saturating_add(extra));

        info!(%address, %balance, "mock wallet connected");

        self.connected = true;
        self.balance = balance;
        self.address = Some(address);
    }

    /// Отключить: баланс и адрес сбрасываются.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.balance = Turtle::ZERO;
        self.address = None;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl WalletProvider for MockWallet {
    fn current_balance(&self) -> Turtle {
        if self.connected {
            self.balance
        } else {
            Turtle::ZERO
        }
    }

    fn apply_balance_delta(&mut self, delta: i64) -> Turtle {
        self.balance = self.balance.apply_delta(delta);
        self.current_balance()
    }
}
