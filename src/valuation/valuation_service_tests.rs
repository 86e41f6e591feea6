#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::market_data::{
        DataSource, InMemoryQuoteRepository, MarketDataProviderTrait, MarketDataService,
        MarketDataServiceTrait, NewQuote, Quote,
    };
    use crate::transactions::{
        PortfolioSnapshot, PositionView, Transaction, TransactionRequest,
        TransactionServiceTrait,
    };
    use crate::valuation::{
        value_snapshot, ValuationError, ValuationService, ValuationServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn quote(symbol: &str, close: Decimal) -> Quote {
        Quote {
            id: format!("{}-q", symbol),
            symbol: symbol.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: dec!(100),
            data_source: DataSource::Manual,
            created_at: Utc::now(),
        }
    }

    fn snapshot(cash: Decimal, positions: Vec<(&str, u64)>) -> PortfolioSnapshot {
        PortfolioSnapshot {
            portfolio_id: "p1".to_string(),
            cash,
            positions: positions
                .into_iter()
                .map(|(symbol, shares)| PositionView {
                    symbol: symbol.to_string(),
                    shares,
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_value_is_cash_plus_positions_at_latest_close() {
        let snapshot = snapshot(dec!(500), vec![("AAA", 10), ("BBB", 2)]);
        let quotes = HashMap::from([
            ("AAA".to_string(), quote("AAA", dec!(50))),
            ("BBB".to_string(), quote("BBB", dec!(30))),
        ]);

        let valuation = value_snapshot(&snapshot, &quotes).unwrap();
        assert_eq!(valuation.cash, dec!(500));
        assert_eq!(valuation.total_value, dec!(1060));

        let aaa = valuation
            .positions
            .iter()
            .find(|p| p.symbol == "AAA")
            .unwrap();
        assert_eq!(aaa.market_value, dec!(500));
        assert_eq!(aaa.price, dec!(50));
    }

    #[test]
    fn test_missing_price_propagates_instead_of_valuing_zero() {
        let snapshot = snapshot(dec!(100), vec![("AAA", 1), ("GHOST", 1)]);
        let quotes = HashMap::from([("AAA".to_string(), quote("AAA", dec!(10)))]);

        let err = value_snapshot(&snapshot, &quotes).unwrap_err();
        assert!(matches!(err, ValuationError::PriceUnavailable(ref s) if s == "GHOST"));
    }

    #[test]
    fn test_cash_only_portfolio_values_to_cash() {
        let snapshot = snapshot(dec!(250), vec![]);
        let valuation = value_snapshot(&snapshot, &HashMap::new()).unwrap();
        assert_eq!(valuation.total_value, dec!(250));
        assert!(valuation.positions.is_empty());
    }

    // --- Service wiring ---

    struct NoFeedProvider;

    #[async_trait]
    impl MarketDataProviderTrait for NoFeedProvider {
        async fn fetch_history(
            &self,
            _symbol: &str,
            _since: Option<DateTime<Utc>>,
        ) -> Result<Vec<NewQuote>> {
            Ok(Vec::new())
        }
    }

    struct FixedSnapshots {
        snapshot: PortfolioSnapshot,
    }

    #[async_trait]
    impl TransactionServiceTrait for FixedSnapshots {
        async fn execute_transaction(
            &self,
            _portfolio_id: &str,
            _request: TransactionRequest,
        ) -> Result<PortfolioSnapshot> {
            Err(Error::Unexpected("not used in this test".to_string()))
        }

        fn get_snapshot(&self, _portfolio_id: &str) -> Result<PortfolioSnapshot> {
            Ok(self.snapshot.clone())
        }

        fn get_transactions(&self, _portfolio_id: &str) -> Result<Vec<Transaction>> {
            Ok(Vec::new())
        }
    }

    fn valuation_service(
        snapshot: PortfolioSnapshot,
    ) -> (ValuationService, Arc<MarketDataService>) {
        let market_data = Arc::new(MarketDataService::new(
            Arc::new(InMemoryQuoteRepository::new()),
            Arc::new(NoFeedProvider),
        ));
        let service = ValuationService::new(
            Arc::new(FixedSnapshots { snapshot }),
            market_data.clone(),
        );
        (service, market_data)
    }

    #[test]
    fn test_get_valuation_values_snapshot_at_latest_quotes() {
        let (service, market_data) = valuation_service(snapshot(dec!(500), vec![("AAA", 10)]));
        market_data
            .add_quote(NewQuote {
                symbol: "AAA".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                open: dec!(50),
                high: dec!(50),
                low: dec!(50),
                close: dec!(50),
                volume: dec!(100),
            })
            .unwrap();

        let valuation = service.get_valuation("p1").unwrap();
        assert_eq!(valuation.total_value, dec!(1000));
        assert_eq!(valuation.positions[0].market_value, dec!(500));
    }

    #[test]
    fn test_get_valuation_fails_when_a_held_symbol_has_no_quote() {
        let (service, _market_data) = valuation_service(snapshot(dec!(100), vec![("GHOST", 1)]));

        let err = service.get_valuation("p1").unwrap_err();
        assert!(matches!(
            err,
            Error::Valuation(ValuationError::PriceUnavailable(ref s)) if s == "GHOST"
        ));
    }
}
