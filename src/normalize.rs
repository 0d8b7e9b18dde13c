//! Normalizes per-city fetch outcomes into render-ready hotspots.
//!
//! The partial-failure policy lives here: a failed query degrades to an
//! unknown-category hotspot with the city's identity and position
//! intact, it is never dropped from the batch. This is also the one
//! place where absent recommendation lists default to empty.

use crate::cities::City;
use crate::fetch::FetchOutcome;
use crate::ingest::aqi::AdviceBlock;
use crate::model::{Advice, Hotspot, Pollutants};
use crate::severity::Severity;

/// Maps one settled outcome onto exactly one hotspot.
pub fn normalize(city: &City, outcome: FetchOutcome) -> Hotspot {
    match outcome {
        FetchOutcome::Success(report) => Hotspot {
            id: city.id,
            name: city.name.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
            severity: Severity::from_code(report.data.aqi),
            aqi_code: report.data.aqi,
            pollutants: Pollutants {
                pm2_5: report.data.pm2_5,
                pm10: report.data.pm10,
                o3: report.data.o3,
                no2: report.data.no2,
                so2: report.data.so2,
                co: report.data.co,
            },
            advice: report.recommendations.map(flatten_advice).unwrap_or_default(),
            success: true,
        },
        FetchOutcome::Failure(_) => Hotspot {
            id: city.id,
            name: city.name.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
            severity: Severity::from_code(None),
            aqi_code: None,
            pollutants: Pollutants::default(),
            advice: Advice::default(),
            success: false,
        },
    }
}

/// Normalizes a whole batch, pairing outcomes with their cities by
/// position. Both slices come from the same `fetch_all` call, so the
/// lengths always match.
pub fn normalize_batch(cities: &[City], outcomes: Vec<FetchOutcome>) -> Vec<Hotspot> {
    debug_assert_eq!(cities.len(), outcomes.len());
    cities
        .iter()
        .zip(outcomes)
        .map(|(city, outcome)| normalize(city, outcome))
        .collect()
}

fn flatten_advice(block: AdviceBlock) -> Advice {
    Advice {
        summary: block.summary.unwrap_or_default(),
        actions: block.actions.unwrap_or_default(),
        avoid: block.avoid.unwrap_or_default(),
        at_risk: block.at_risk.unwrap_or_default(),
        alerts: block.alerts.unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
