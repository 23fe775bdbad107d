//! Air quality severity scoring and alerting for the Delhi pollution
//! dashboard.
//!
//! The core is `scoring::calculate_pollution_score`, which classifies an
//! O3 / NO2 concentration pair against fixed CPCB breakpoints. The other
//! modules are the pure pieces of the dashboard built on top of it:
//! selecting critical regions, drafting alert text, validating alert
//! submissions, and cooldown tracking.

pub mod alert;
pub mod breakpoints;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod sites;

pub use model::{CoarseCategory, Pollutant, ScoreResult, SubIndexCategory};
pub use scoring::calculate_pollution_score;
