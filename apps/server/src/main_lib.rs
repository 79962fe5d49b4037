use std::sync::Arc;

use crate::config::Config;
use ratehub_core::currencies::{CurrencyService, CurrencyServiceTrait};
use ratehub_core::fx::{FxService, FxServiceTrait};
use ratehub_storage_sqlite::currencies::CurrencyRepository;
use ratehub_storage_sqlite::fx::FxRepository;
use ratehub_storage_sqlite::db;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
    pub fx_service: Arc<dyn FxServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("RH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let currency_repository = Arc::new(CurrencyRepository::new(pool.clone()));
    let fx_repository = Arc::new(FxRepository::new(pool));

    let currency_service = Arc::new(CurrencyService::new(currency_repository.clone()));
    let fx_service = Arc::new(FxService::new(fx_repository, currency_repository));

    Ok(Arc::new(AppState {
        currency_service,
        fx_service,
    }))
}
