//! Derived metrics and view composition for the book catalog.
//!
//! Everything in this crate is pure: functions take an already-fetched
//! record list and produce aggregates or view-ready models, with no I/O
//! and no shared state.

pub mod metrics;
pub mod view;

pub use view::{DashboardModel, LandingModel};
