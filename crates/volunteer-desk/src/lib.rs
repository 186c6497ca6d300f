//! Client-side core for the volunteer registration pipeline.
//!
//! The pipeline data lives behind an externally owned HTTP collection API; this
//! crate mirrors it through the [`workflows::registration::CollectionStore`] seam
//! and layers the operator workflow on top: listing the three pipeline
//! collections, resolving a record to its current stage, and advancing records
//! through new → waiting → mailing → done.

pub mod config;
pub mod error;
pub mod gateway;
pub mod telemetry;
pub mod workflows;
