// tests/pair_identifier_test.rs
use shapeshift_io_rs::{CoinPair, ShapeShiftError, build_pair_identifier};

#[test]
fn test_pair_identifier_joins_symbols() {
    for (coin1, coin2) in [("btc", "ltc"), ("BTC", "ETH"), ("xmr", "zec")] {
        let identifier = build_pair_identifier(Some(coin1), Some(coin2)).unwrap();
        assert_eq!(identifier, format!("{}_{}", coin1, coin2));
    }
}

#[test]
fn test_pair_identifier_empty_without_coins() {
    assert_eq!(build_pair_identifier(None, None).unwrap(), "");
    assert_eq!(CoinPair::new(None, None).unwrap(), CoinPair::Any);
}

#[test]
fn test_pair_identifier_requires_both_coins() {
    let err = build_pair_identifier(Some("btc"), None).unwrap_err();
    assert!(matches!(err, ShapeShiftError::InvalidArgument(_)));
    assert!(err.to_string().contains("both coins or neither"));

    let err = build_pair_identifier(None, Some("ltc")).unwrap_err();
    assert!(matches!(err, ShapeShiftError::InvalidArgument(_)));
}

#[test]
fn test_pair_identifier_rejects_empty_or_nested_symbols() {
    assert!(build_pair_identifier(Some(""), Some("ltc")).is_err());
    assert!(build_pair_identifier(Some("btc"), Some("l/tc")).is_err());
    assert!(build_pair_identifier(Some(".."), Some("ltc")).is_err());
    assert!(build_pair_identifier(Some("btc"), Some(".")).is_err());
}
