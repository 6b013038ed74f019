//! Rules engine behind the Impact OS case-management service.
//!
//! `assessment` turns intake signals into a skill triad, an offer, a stipend
//! decision and KPI targets. `currency` is the append-only ledger backing the
//! gamification layer.

pub mod assessment;
pub mod config;
pub mod currency;
pub mod error;
pub mod telemetry;
