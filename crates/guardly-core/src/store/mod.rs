// ── Reactive dashboard store ──
//
// Per-field watch channels with push-based change notification.

mod dashboard_store;
mod field;

pub use dashboard_store::{DashboardChange, DashboardStore};
