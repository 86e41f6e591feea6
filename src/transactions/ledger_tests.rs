#[cfg(test)]
mod tests {
    use crate::transactions::{LedgerState, TransactionError};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_sell_withdraw_scenario() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(1000)).unwrap();

        ledger.apply_buy("AAA", 10, dec!(50)).unwrap();
        assert_eq!(ledger.cash(), dec!(500));
        assert_eq!(ledger.shares_of("AAA"), 10);

        ledger.apply_sell("AAA", 4, dec!(60)).unwrap();
        assert_eq!(ledger.cash(), dec!(740));
        assert_eq!(ledger.shares_of("AAA"), 6);

        let err = ledger.apply_withdraw(dec!(800)).unwrap_err();
        assert!(matches!(err, TransactionError::InsufficientFunds { .. }));
        assert_eq!(ledger.cash(), dec!(740));
        assert_eq!(ledger.shares_of("AAA"), 6);
    }

    #[test]
    fn test_buy_without_funds_fails_and_leaves_state_unchanged() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(100)).unwrap();

        let err = ledger.apply_buy("AAA", 3, dec!(50)).unwrap_err();
        assert!(matches!(err, TransactionError::InsufficientFunds { .. }));
        assert_eq!(ledger.cash(), dec!(100));
        assert_eq!(ledger.shares_of("AAA"), 0);
    }

    #[test]
    fn test_sell_more_than_held_is_rejected_not_clamped() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(1000)).unwrap();
        ledger.apply_buy("AAA", 5, dec!(10)).unwrap();

        let err = ledger.apply_sell("AAA", 6, dec!(10)).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::InsufficientShares {
                requested: 6,
                held: 5,
                ..
            }
        ));
        assert_eq!(ledger.cash(), dec!(950));
        assert_eq!(ledger.shares_of("AAA"), 5);
    }

    #[test]
    fn test_sell_unknown_symbol_fails_unknown_position() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(1000)).unwrap();

        let err = ledger.apply_sell("ZZZ", 1, dec!(10)).unwrap_err();
        assert!(matches!(err, TransactionError::UnknownPosition(_)));
    }

    #[test]
    fn test_selling_entire_position_removes_the_entry() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(100)).unwrap();
        ledger.apply_buy("AAA", 4, dec!(10)).unwrap();
        ledger.apply_sell("AAA", 4, dec!(10)).unwrap();

        assert_eq!(ledger.shares_of("AAA"), 0);
        assert!(ledger.held_symbols().is_empty());
        assert!(ledger.snapshot("p1").positions.is_empty());
    }

    #[test]
    fn test_zero_quantities_are_invalid() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(100)).unwrap();

        assert!(matches!(
            ledger.apply_buy("AAA", 0, dec!(10)).unwrap_err(),
            TransactionError::InvalidQuantity(_)
        ));
        assert!(matches!(
            ledger.apply_deposit(Decimal::ZERO).unwrap_err(),
            TransactionError::InvalidQuantity(_)
        ));
        assert!(matches!(
            ledger.apply_withdraw(dec!(-5)).unwrap_err(),
            TransactionError::InvalidQuantity(_)
        ));
    }

    #[test]
    fn test_buy_with_overflowing_order_value_is_rejected() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(100)).unwrap();

        let err = ledger
            .apply_buy("AAA", u64::MAX, dec!(10000000000))
            .unwrap_err();
        assert!(matches!(err, TransactionError::InvalidQuantity(_)));
        assert_eq!(ledger.cash(), dec!(100));
        assert_eq!(ledger.shares_of("AAA"), 0);
    }

    #[test]
    fn test_sell_with_overflowing_proceeds_is_rejected() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(dec!(20000000000000000000)).unwrap();
        ledger.apply_buy("AAA", u64::MAX, dec!(1)).unwrap();

        let err = ledger
            .apply_sell("AAA", u64::MAX, dec!(10000000000))
            .unwrap_err();
        assert!(matches!(err, TransactionError::InvalidQuantity(_)));
        assert_eq!(ledger.shares_of("AAA"), u64::MAX);
    }

    #[test]
    fn test_deposit_overflowing_cash_balance_is_rejected() {
        let mut ledger = LedgerState::new();
        ledger.apply_deposit(Decimal::MAX).unwrap();

        let err = ledger.apply_deposit(dec!(1)).unwrap_err();
        assert!(matches!(err, TransactionError::InvalidQuantity(_)));
        assert_eq!(ledger.cash(), Decimal::MAX);
    }

    proptest! {
        /// Over any buy/sell sequence on one symbol, the final share count
        /// equals net shares bought minus sold and never goes negative.
        #[test]
        fn prop_share_count_is_net_of_accepted_buys_and_sells(
            ops in proptest::collection::vec((any::<bool>(), 1u64..20), 0..40)
        ) {
            let mut ledger = LedgerState::new();
            ledger.apply_deposit(dec!(1000000)).unwrap();
            let price = dec!(1);

            let mut expected: u64 = 0;
            for (is_buy, shares) in ops {
                if is_buy {
                    ledger.apply_buy("AAA", shares, price).unwrap();
                    expected += shares;
                } else {
                    let result = ledger.apply_sell("AAA", shares, price);
                    if shares <= expected && expected > 0 {
                        result.unwrap();
                        expected -= shares;
                    } else {
                        result.unwrap_err();
                    }
                }
                prop_assert_eq!(ledger.shares_of("AAA"), expected);
            }
        }
    }
}
