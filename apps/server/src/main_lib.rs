use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use navfolio_core::{
    portfolio::summary::{PortfolioSummaryService, PortfolioSummaryServiceTrait},
    statements::{StatementImportService, StatementImportServiceTrait},
};
use navfolio_storage_sqlite::{
    db::{self, write_actor},
    holdings::HoldingRepository,
    transactions::TransactionRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub summary_service: Arc<dyn PortfolioSummaryServiceTrait>,
    pub import_service: Arc<dyn StatementImportServiceTrait>,
    pub db_path: String,
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("NF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // `log` records from the library crates are bridged by tracing-subscriber's
    // default tracing-log feature.
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
    let writer = write_actor::spawn_writer((*pool).clone());

    let holding_repo = Arc::new(HoldingRepository::new(pool.clone(), writer.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));

    let summary_service: Arc<dyn PortfolioSummaryServiceTrait> =
        Arc::new(PortfolioSummaryService::new(
            holding_repo.clone(),
            transaction_repo.clone(),
            config.cost_basis,
        ));
    tracing::info!(
        "Lot matching prices overshoot with the {} policy",
        config.cost_basis.adjustment_nav
    );

    let import_service: Arc<dyn StatementImportServiceTrait> =
        Arc::new(StatementImportService::new(holding_repo, transaction_repo));

    let auth_manager = config
        .auth
        .as_ref()
        .map(AuthManager::new)
        .transpose()?
        .map(Arc::new);
    if auth_manager.is_none() {
        tracing::warn!("NF_AUTH_PASSWORD_HASH is not set; the API is unauthenticated");
    }

    Ok(Arc::new(AppState {
        summary_service,
        import_service,
        db_path,
        auth: auth_manager,
    }))
}
