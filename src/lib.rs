//! Multi-city air-quality aggregation core for the environmental
//! dashboard's map overview.
//!
//! The pipeline: the static [`cities::CITY_REGISTRY`] feeds
//! [`fetch::fetch_all`], which fans one query per city out to the AQI
//! service and joins all outcomes into an ordered batch;
//! [`normalize::normalize_batch`] turns every outcome, success or
//! failure, into exactly one [`model::Hotspot`];
//! [`view::ViewState`] applies batches atomically, derives the summary
//! counters, and hands the renderer a filtered [`view::RenderModel`].
//! A failed city query degrades to an unknown marker; it never
//! disappears from the map and never fails the batch.

pub mod cities;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod ingest;
pub mod locate;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod severity;
pub mod view;
