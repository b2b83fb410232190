//! Мок-кошелёк.

use baccarat_engine::domain::table::WalletConfig;
use baccarat_engine::domain::turtle::Turtle;
use baccarat_engine::infra::DeterministicRng;
use baccarat_engine::wallet::{MockWallet, WalletProvider};

#[test]
fn connect_assigns_hex_address_and_balance_in_range() {
    let config = WalletConfig::default();

    for seed in 0..50u64 {
        let mut rng = DeterministicRng::from_u64(seed);
        let mut wallet = MockWallet::new();
        wallet.connect(&config, &mut rng);

        assert!(wallet.is_connected());
        let address = wallet.address().unwrap();
        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));

        let balance = wallet.current_balance();
        assert!(balance >= Turtle::whole(50) && balance <= Turtle::whole(150));
        assert_eq!(balance.cents() % 100, 0);
    }
}

#[test]
fn fixed_range_gives_exact_balance() {
    let config = WalletConfig {
        min_start: 7,
        max_start: 7,
    };
    let mut wallet = MockWallet::new();
    wallet.connect(&config, &mut DeterministicRng::from_u64(1));
    assert_eq!(wallet.current_balance(), Turtle::whole(7));
}

#[test]
fn disconnect_zeroes_balance() {
    let mut wallet = MockWallet::with_balance("0xabc", Turtle::whole(10));
    assert_eq!(wallet.current_balance(), Turtle::whole(10));

    wallet.disconnect();
    assert!(!wallet.is_connected());
    assert_eq!(wallet.address(), None);
    assert_eq!(wallet.current_balance(), Turtle::ZERO);
}

#[test]
fn balance_never_goes_negative() {
    let mut wallet = MockWallet::with_balance("0xabc", Turtle::whole(3));

    assert_eq!(wallet.apply_balance_delta(4000), Turtle::whole(43));
    assert_eq!(wallet.apply_balance_delta(-5000), Turtle::ZERO);
    assert_eq!(wallet.current_balance(), Turtle::ZERO);
}

#[test]
fn boxed_wallet_is_a_provider() {
    let mut boxed: Box<MockWallet> = Box::new(MockWallet::with_balance("0x1", Turtle::whole(2)));
    boxed.apply_balance_delta(100);
    assert_eq!(WalletProvider::current_balance(&boxed), Turtle::whole(3));
}
