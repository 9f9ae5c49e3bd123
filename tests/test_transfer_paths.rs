mod common;

use common::setup;
use pointstrip::domain::values::currency::{Currency, Wallet};

#[test]
fn test_covering_path_first_then_fastest() {
    let pt = setup();
    let graph = pt.transfer_graph();

    let mut wallet = Wallet::new();
    wallet.insert(Currency::Mr, 100_000);
    wallet.insert(Currency::Chase, 20_000);
    wallet.insert(Currency::Citi, 0);

    let paths = graph.build_transfer_paths("Singapore Airlines", &wallet, 70_000);
    assert_eq!(paths.len(), 2);
    // MR covers the award but transfers slower than Chase.
    assert_eq!(paths[0].currency, Currency::Mr);
    assert!(paths[0].covers(70_000));
    assert_eq!(paths[1].currency, Currency::Chase);
    assert!(paths[0].transfer_time_minutes > paths[1].transfer_time_minutes);
    assert!(paths.iter().all(|p| p.program == "Singapore KrisFlyer"));
}

#[test]
fn test_unknown_airline_has_no_paths() {
    let pt = setup();
    let mut wallet = Wallet::new();
    wallet.insert(Currency::Mr, 100_000);

    assert!(pt.transfer_graph().build_transfer_paths("Nonexistent Air", &wallet, 1).is_empty());
    assert!(pt.transfer_graph().build_transfer_paths("", &wallet, 1).is_empty());
}
