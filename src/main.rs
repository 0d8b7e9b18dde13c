//! Command-line entry point: runs one refresh cycle against the
//! configured AQI service and prints the map overview as text: the
//! summary counters followed by one line per monitored city.

use aqmon_service::cities::CITY_REGISTRY;
use aqmon_service::config::ServiceConfig;
use aqmon_service::ingest::aqi::HttpMetricSource;
use aqmon_service::logging;
use aqmon_service::severity::SEVERITY_SCALE;
use aqmon_service::view::{Dashboard, ViewPhase};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = ServiceConfig::load()?;
    tracing::info!(api = %config.api_base_url, "starting air-quality overview");

    let source = HttpMetricSource::new(&config.api_base_url, config.request_timeout())?;
    let dashboard = Dashboard::new(source, CITY_REGISTRY.to_vec());

    dashboard.refresh().await;

    let model = dashboard.render_model();
    if model.phase == ViewPhase::Failed {
        eprintln!(
            "Refresh failed: {}",
            model.error.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }

    let c = &model.counters;
    println!("Cities monitored: {}", c.total);
    println!(
        "  good: {}  fair: {}  moderate: {}  poor: {}  critical: {}  unknown: {}",
        c.good, c.fair, c.moderate, c.poor, c.critical, c.unknown
    );

    print!("AQI scale:");
    for severity in SEVERITY_SCALE {
        print!("  {} ({})", severity.label(), severity.rank());
    }
    println!();
    println!();

    for spot in &model.markers {
        let code = spot
            .aqi_code
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let pm25 = spot
            .pollutants
            .pm2_5
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<18} {:<9} aqi={:<3} pm2.5={:<7} {}",
            spot.name,
            spot.severity.label(),
            code,
            pm25,
            spot.top_action().unwrap_or("")
        );
    }

    Ok(())
}
