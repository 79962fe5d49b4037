//! Tests for the CurrencyService contract against a mock repository.

#[cfg(test)]
mod tests {
    use crate::currencies::{
        Currency, CurrencyError, CurrencyRepositoryTrait, CurrencyService, CurrencyServiceTrait,
        NewCurrency,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockCurrencyRepository {
        currencies: Arc<Mutex<Vec<Currency>>>,
        // When set, insert_currency fails with a unique violation even if
        // the pre-check saw no duplicate, simulating a lost insert race.
        force_unique_violation: Mutex<bool>,
    }

    #[async_trait]
    impl CurrencyRepositoryTrait for MockCurrencyRepository {
        fn load_currencies(&self) -> Result<Vec<Currency>> {
            Ok(self.currencies.lock().unwrap().clone())
        }

        fn find_by_code(&self, code: &str) -> Result<Option<Currency>> {
            Ok(self
                .currencies
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.code == code)
                .cloned())
        }

        fn find_by_id(&self, currency_id: i32) -> Result<Option<Currency>> {
            Ok(self
                .currencies
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == currency_id)
                .cloned())
        }

        async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
            if *self.force_unique_violation.lock().unwrap() {
                return Err(Error::Database(DatabaseError::UniqueViolation(
                    "currency.code".into(),
                )));
            }
            let mut currencies = self.currencies.lock().unwrap();
            let currency = Currency {
                id: currencies.len() as i32 + 1,
                code: new_currency.code,
                name: new_currency.name,
                sign: new_currency.sign,
            };
            currencies.push(currency.clone());
            Ok(currency)
        }
    }

    fn usd() -> NewCurrency {
        NewCurrency {
            name: "US Dollar".into(),
            code: "USD".into(),
            sign: "$".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_get_finds_by_code() {
        let repository = Arc::new(MockCurrencyRepository::default());
        let service = CurrencyService::new(repository);

        let created = service.create_currency(usd()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get_currency("USD").unwrap();
        assert_eq!(fetched, created);
        assert_eq!(service.get_currencies().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_code_conflicts_and_keeps_existing_record() {
        let repository = Arc::new(MockCurrencyRepository::default());
        let service = CurrencyService::new(repository);

        let original = service.create_currency(usd()).await.unwrap();
        let duplicate = service
            .create_currency(NewCurrency {
                name: "Other Dollar".into(),
                code: "USD".into(),
                sign: "D".into(),
            })
            .await;

        assert!(matches!(
            duplicate,
            Err(Error::Currency(CurrencyError::AlreadyExists(_)))
        ));
        assert_eq!(service.get_currency("USD").unwrap(), original);
    }

    #[tokio::test]
    async fn lost_insert_race_surfaces_as_conflict() {
        let repository = Arc::new(MockCurrencyRepository::default());
        *repository.force_unique_violation.lock().unwrap() = true;
        let service = CurrencyService::new(repository);

        let result = service.create_currency(usd()).await;
        assert!(matches!(
            result,
            Err(Error::Currency(CurrencyError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let repository = Arc::new(MockCurrencyRepository::default());
        let service = CurrencyService::new(repository);

        let result = service.get_currency("EUR");
        assert!(matches!(
            result,
            Err(Error::Currency(CurrencyError::NotFound(_)))
        ));
    }
}
