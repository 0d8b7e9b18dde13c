//! Core data types for the air-quality monitoring service.
//!
//! This module defines the shared domain model imported by all other
//! modules, plus the error taxonomy. It contains no I/O.

use serde::Serialize;
use thiserror::Error;

use crate::severity::Severity;

// ---------------------------------------------------------------------------
// Measurement types
// ---------------------------------------------------------------------------

/// Named pollutant concentrations reported by the AQI service for one
/// location, in the service's implicit units (µg/m³ except CO).
///
/// Every field is optional: the service omits pollutants it has no data
/// for, and a failed query yields a `Pollutants` with every field absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pollutants {
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
}

/// Health guidance attached to a successful sample.
///
/// Lists are always present and ordered; an absent list in the wire
/// payload becomes an empty one during normalization, so downstream code
/// never has to distinguish "missing" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Advice {
    pub summary: String,
    pub actions: Vec<String>,
    pub avoid: Vec<String>,
    pub at_risk: Vec<String>,
    pub alerts: Vec<String>,
}

// ---------------------------------------------------------------------------
// Hotspot
// ---------------------------------------------------------------------------

/// The render-ready record for one monitored city.
///
/// Exactly one `Hotspot` exists per registry entry in every completed
/// batch, no matter how many underlying queries failed. A failed query
/// keeps the city's identity and position but carries
/// `Severity::Unknown`, empty measurements, and `success = false`:
/// the city degrades to a neutral marker instead of disappearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: Severity,
    /// Raw severity code as returned by the service, kept for display.
    /// `None` when the query failed or the payload carried no code.
    pub aqi_code: Option<i64>,
    pub pollutants: Pollutants,
    pub advice: Advice,
    pub success: bool,
}

impl Hotspot {
    /// First suggested action, for the marker popup.
    pub fn top_action(&self) -> Option<&str> {
        self.advice.actions.first().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// User position
// ---------------------------------------------------------------------------

/// A single device-geolocation fix. No history is kept; a new locate
/// request replaces the previous fix only on success.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserPosition {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while querying the AQI service for one city.
///
/// All variants are recovered locally: the orchestrator converts them
/// into failure outcomes and the city renders as an unknown marker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// Non-2xx HTTP response from the AQI API.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// Connection, DNS, or other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body could not be deserialized.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Batch-setup failures. These are the only errors that surface to the
/// view as a retryable failure state; per-city errors never do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("city '{name}' has out-of-range coordinates ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("city id {id} has a blank display name")]
    BlankName { id: u32 },
    #[error("duplicate city id {id} in registry")]
    DuplicateId { id: u32 },
}

/// Device-geolocation failures. Surfaced as a transient user notice;
/// never clears a previously acquired fix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("Location access denied")]
    Denied,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}
