//! # scout-report
//!
//! The opportunity scoring and synthesis pipeline: takes a resolved scope,
//! raw search hits, and raw weather data, and deterministically produces
//! scored, ranked, explainable opportunity cards, a market digest, peer
//! benchmarks, an advisor recommendation set, and an ops plan — composed
//! into one internally-consistent report artifact.
//!
//! Every stage degrades instead of failing: missing profiles resolve to
//! `"Unknown"`, unavailable providers yield flagged fallback cards, and
//! malformed hits are dropped individually. The worst case is a fully
//! populated artifact with empty cards and an explanatory advisor summary.

pub mod advisor;
pub mod card;
pub mod digest;
pub mod finance;
pub mod ops;
pub mod orchestrate;
pub mod rates;
pub mod report;
pub mod scope;
pub mod scoring;
pub mod sources;
pub mod weather_badge;

mod fmt;

pub use rates::ConversionRateTable;
pub use report::run_report;
