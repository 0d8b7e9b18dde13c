//! Ingest layer for the external AQI service.
//!
//! Submodules:
//! - `aqi`: wire schema, the `MetricSource` collaborator trait, and the
//!   HTTP-backed implementation.

pub mod aqi;
