//! District commute planner.
//!
//! Recommends multi-modal commutes across a small district: a static
//! transit graph with a metric-parameterized pathfinder and variant
//! expansion, plus a throttled geocoding gateway with local fallback for
//! place search, reverse lookup, and live directions.

pub mod debounce;
pub mod domain;
pub mod geocoding;
pub mod graph;
pub mod planner;
pub mod web;
