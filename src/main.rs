//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run UI.
//! No business logic here.

use conception_date::adapters::random::StdRngSource;
use conception_date::adapters::ui::tui::TuiInputPort;
use conception_date::ports::{InputPort, RandomSource};
use conception_date::shared::config::AppConfig;
use conception_date::usecases::EstimationService;
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    cfg.validate().map_err(|e| anyhow::anyhow!("{}", e))?;
    let (min_year, max_year) = cfg.year_range();
    info!(
        min_year,
        max_year,
        loading_delay_ms = cfg.loading_delay_ms_or_default(),
        seeded = cfg.seed.is_some(),
        "configuration loaded"
    );

    conception_date::adapters::ui::init_ui(cfg.show_banner_or_default());

    // --- Random source (seeded when CONCEPTION_SEED is set) ---
    let rng: Arc<dyn RandomSource> = Arc::new(StdRngSource::from_seed_opt(cfg.seed));

    // --- Services ---
    let estimator = Arc::new(EstimationService::new(rng));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&estimator),
        cfg.year_range(),
        Duration::from_millis(cfg.loading_delay_ms_or_default()),
    ));

    // --- Run (menu -> edit / calendar / calculate) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
