//! volatility-core: sector risk scoring for the market volatility demo.
//!
//! Flow: `RiskEngine::evaluate` scores one sector, `report` scores every
//! canonical sector once, `dataset` scores them once per day over a
//! trailing window and writes the CSV export.

pub mod clock;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod report;
pub mod rng;
pub mod sector;
