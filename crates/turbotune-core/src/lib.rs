//! # TurboTune Core Library
//!
//! Core functionality for the TurboTune boost-pressure modeling tools.

#![warn(missing_docs)]

//!
//! This library provides:
//! - Tuning configuration with JSON load/save and validation
//! - Boost-pressure calculation from engine speed and load
//! - Torque control valve state classification
//! - Power-gain estimation and report formatting
//!
//! ## Example
//!
//! ```rust
//! use turbotune_core::config::BoostTuning;
//! use turbotune_core::controller::{ActuatorState, BoostController};
//!
//! let controller = BoostController::new(BoostTuning::default()).expect("stock tuning is valid");
//! let report = controller.run_cycle(4000.0, 60.0);
//! assert!((report.boost_bar - 1.08).abs() < 1e-9);
//! assert_eq!(report.actuator, ActuatorState::Holding);
//! ```

pub mod config;
pub mod controller;
pub mod report;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{BoostTuning, TuningError};
    pub use crate::controller::{ActuatorState, BoostController};
    pub use crate::report::BoostReport;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
