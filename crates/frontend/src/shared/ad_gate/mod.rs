//! Timed ad shown before a program's download link is revealed.

pub mod state;
pub mod widget;

pub use state::{AdGate, GateStep, AD_COUNTDOWN_SECS};
pub use widget::AdGateModal;
