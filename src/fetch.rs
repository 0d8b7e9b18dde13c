//! Concurrent per-city fan-out against the AQI service.
//!
//! One independent query per registry entry, all in flight at once on
//! the cooperative runtime. A failing query is caught at its own
//! location and becomes a failure outcome; it never propagates to or
//! cancels a sibling. The call resolves only once every outcome has
//! settled (the join barrier), so callers always see a whole batch.
//!
//! Fan-out width equals the registry size. At tens of cities no worker
//! pool is needed; a bounded pool with a queue would slot in here if the
//! registry grew to hundreds, keeping the same per-item isolation and
//! join-barrier contract.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::cities::City;
use crate::ingest::aqi::{AqiResponse, MetricSource};
use crate::model::{RegistryError, SourceError};

/// Settled result of one city's query.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(AqiResponse),
    Failure(SourceError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// Queries the AQI service for every city concurrently and joins the
/// outcomes into one batch, in registry order.
///
/// Never fails for any combination of per-city outcomes; the only `Err`
/// is a batch-setup fault in the registry itself, checked up front. An
/// empty registry is valid and resolves immediately with an empty batch.
pub async fn fetch_all<S: MetricSource>(
    source: &S,
    cities: &[City],
) -> Result<Vec<FetchOutcome>, RegistryError> {
    validate_registry(cities)?;

    let queries = cities.iter().map(|city| async move {
        match source.fetch(city.latitude, city.longitude).await {
            Ok(report) => {
                debug!(city = city.name, "city query succeeded");
                FetchOutcome::Success(report)
            }
            Err(err) => {
                warn!(
                    city = city.name,
                    error = %err,
                    "city query failed; will render as unknown"
                );
                FetchOutcome::Failure(err)
            }
        }
    });

    // join_all preserves input order regardless of settle order.
    Ok(join_all(queries).await)
}

/// Rejects registries the orchestration cannot meaningfully run over:
/// out-of-range coordinates, blank names, duplicate ids.
fn validate_registry(cities: &[City]) -> Result<(), RegistryError> {
    let mut seen = std::collections::HashSet::new();
    for city in cities {
        if city.name.trim().is_empty() {
            return Err(RegistryError::BlankName { id: city.id });
        }
        if !(-90.0..=90.0).contains(&city.latitude)
            || !(-180.0..=180.0).contains(&city.longitude)
        {
            return Err(RegistryError::CoordinateOutOfRange {
                name: city.name.to_string(),
                latitude: city.latitude,
                longitude: city.longitude,
            });
        }
        if !seen.insert(city.id) {
            return Err(RegistryError::DuplicateId { id: city.id });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::aqi::AqiData;
    use async_trait::async_trait;

    fn city(id: u32, name: &'static str) -> City {
        City {
            id,
            name,
            latitude: 10.0 + id as f64,
            longitude: 20.0 + id as f64,
        }
    }

    fn report(code: i64) -> AqiResponse {
        AqiResponse {
            data: AqiData {
                aqi: Some(code),
                pm2_5: Some(code as f64 * 10.0),
                pm10: None,
                o3: None,
                no2: None,
                so2: None,
                co: None,
            },
            recommendations: None,
        }
    }

    /// Succeeds with a code derived from the latitude unless the
    /// latitude appears in the failure set.
    struct ScriptedSource {
        failing_latitudes: Vec<f64>,
    }

    #[async_trait(?Send)]
    impl MetricSource for ScriptedSource {
        async fn fetch(&self, latitude: f64, _longitude: f64) -> Result<AqiResponse, SourceError> {
            if self.failing_latitudes.contains(&latitude) {
                Err(SourceError::Http(503))
            } else {
                Ok(report((latitude as i64 % 5) + 1))
            }
        }
    }

    #[tokio::test]
    async fn test_batch_length_equals_input_length_despite_failures() {
        let cities: Vec<City> = (1u32..=5).map(|i| city(i, "City")).collect();
        let source = ScriptedSource {
            // Fail three of the five.
            failing_latitudes: vec![11.0, 13.0, 15.0],
        };
        let batch = fetch_all(&source, &cities).await.expect("no setup error");
        assert_eq!(batch.len(), cities.len());
        assert_eq!(batch.iter().filter(|o| !o.is_success()).count(), 3);
    }

    #[tokio::test]
    async fn test_output_preserves_input_order() {
        let cities = vec![city(1, "First"), city(2, "Second"), city(3, "Third")];
        let source = ScriptedSource {
            failing_latitudes: vec![12.0],
        };
        let batch = fetch_all(&source, &cities).await.expect("no setup error");
        assert!(batch[0].is_success());
        assert!(!batch[1].is_success(), "second city's failure stays in slot 1");
        assert!(batch[2].is_success());
    }

    #[tokio::test]
    async fn test_empty_registry_resolves_immediately_with_empty_batch() {
        let source = ScriptedSource {
            failing_latitudes: vec![],
        };
        let batch = fetch_all(&source, &[]).await.expect("empty is not an error");
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_all_failures_is_still_a_complete_batch() {
        let cities = vec![city(1, "A"), city(2, "B")];
        let source = ScriptedSource {
            failing_latitudes: vec![11.0, 12.0],
        };
        let batch = fetch_all(&source, &cities).await.expect("no setup error");
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|o| !o.is_success()));
    }

    #[tokio::test]
    async fn test_out_of_range_coordinate_is_a_batch_level_error() {
        let bad = City {
            id: 1,
            name: "Nowhere",
            latitude: 123.0,
            longitude: 0.0,
        };
        let source = ScriptedSource {
            failing_latitudes: vec![],
        };
        let err = fetch_all(&source, &[bad]).await.unwrap_err();
        assert!(matches!(err, RegistryError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn test_validate_registry_rejects_duplicates_and_blank_names() {
        let dup = vec![city(7, "A"), city(7, "B")];
        assert_eq!(
            validate_registry(&dup),
            Err(RegistryError::DuplicateId { id: 7 })
        );

        let blank = vec![city(1, "  ")];
        assert_eq!(
            validate_registry(&blank),
            Err(RegistryError::BlankName { id: 1 })
        );

        assert_eq!(validate_registry(&[]), Ok(()));
    }
}
