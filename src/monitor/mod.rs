//! Upstream monitoring layer
//!
//! This module turns a list of packages into a categorized report by
//! querying an upstream release index and comparing versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Runner    │────▶│  Resolver   │────▶│   Source    │
//! │ (fan-out)   │     │ (aliases)   │     │  (Anitya)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Classifier  │────▶│   Report    │
//! │ (compare)   │     │ (grouping)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`runner`]: Concurrent check loop with the interval filter
//! - [`resolver`]: Ordered candidate-name fallback per package
//! - [`source`]: Upstream lookup trait and its error type
//! - [`release_monitoring`]: release-monitoring.org client
//! - [`classifier`]: Maps comparisons onto report categories
//! - [`compare`]: Segment-wise version comparison
//! - [`report`]: Fixed-category result aggregation

pub mod classifier;
pub mod compare;
pub mod release_monitoring;
pub mod report;
pub mod resolver;
pub mod runner;
pub mod source;
