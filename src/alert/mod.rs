//! Alert drafting, validation, and cooldown.
//!
//! - `draft` turns a scored critical region into human-readable alert text.
//! - `request` validates a draft plus chosen recipients before dispatch.
//! - `cooldown` decides which regions were alerted too recently to alert again.
//!
//! Delivery itself (queueing, notification channels) lives outside this crate.

pub mod cooldown;
pub mod draft;
pub mod request;

pub use draft::{AlertDraft, AlertSeverity, draft_alert};
pub use request::{AlertRequest, AlertStatus};
