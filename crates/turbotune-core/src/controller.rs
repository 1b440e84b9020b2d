//! Boost controller
//!
//! Computes commanded boost pressure from engine speed and load, classifies
//! the torque control valve response, and estimates the resulting power
//! gain. Every operation is a pure function over the tuning captured at
//! construction, so a controller can be shared freely between threads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{BoostTuning, TuningError};
use crate::report::BoostReport;

/// Power gain per bar of boost in the linear estimation model
const HP_PER_BAR: f64 = 100.0;

/// Torque control valve response to a boost-pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActuatorState {
    /// Boost above the maximum, the valve opens to bleed pressure
    Opening,
    /// Boost below the minimum, the valve closes to build pressure
    Closing,
    /// Boost inside the operating band, the valve holds position
    Holding,
}

impl ActuatorState {
    /// The fixed operator-facing message for this state
    pub fn message(&self) -> &'static str {
        match self {
            ActuatorState::Opening => "Torque control valve is opening to reduce boost pressure.",
            ActuatorState::Closing => "Torque control valve is closing to increase boost pressure.",
            ActuatorState::Holding => {
                "Boost pressure is optimal. Torque control valve is maintaining position."
            }
        }
    }
}

impl fmt::Display for ActuatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Stateless boost controller built from an immutable tuning
#[derive(Debug, Clone)]
pub struct BoostController {
    tuning: BoostTuning,
}

impl BoostController {
    /// Create a controller from the given tuning
    ///
    /// Fails if the tuning does not validate.
    pub fn new(tuning: BoostTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self { tuning })
    }

    /// The tuning this controller was built with
    pub fn tuning(&self) -> &BoostTuning {
        &self.tuning
    }

    /// Calculate the commanded boost pressure for an engine speed (RPM)
    /// and load (%)
    ///
    /// Readings outside [0, max] are clamped before use, so any input,
    /// however extreme, yields a boost inside the tuning's boost band.
    /// A NaN reading counts as zero; infinities saturate through the
    /// clamp. The result is always finite.
    pub fn calculate_boost(&self, engine_speed: f64, engine_load: f64) -> f64 {
        let t = &self.tuning;

        let speed = clamp_reading(engine_speed, t.max_engine_speed);
        let load = clamp_reading(engine_load, t.max_engine_load);
        if speed != engine_speed || load != engine_load {
            tracing::debug!(engine_speed, engine_load, "reading out of range, clamped");
        }

        // Higher engine speed and load = more boost
        let base_boost = (speed / t.max_engine_speed) * (load / t.max_engine_load) * t.max_boost;

        let effective_boost = base_boost * t.turbo_efficiency * t.throttle_sensitivity;

        effective_boost.clamp(t.min_boost, t.max_boost)
    }

    /// Classify the torque control valve response for a boost pressure
    ///
    /// Applies the raw thresholds with no clamping, so boost values that
    /// bypass [`calculate_boost`] (an external sensor, a replayed log)
    /// classify the same way: above `max_boost` the valve opens, below
    /// `min_boost` it closes, otherwise it holds. Both boundaries fall in
    /// the holding band; NaN compares false against both thresholds and
    /// holds.
    pub fn actuator_state(&self, boost_pressure: f64) -> ActuatorState {
        if boost_pressure > self.tuning.max_boost {
            ActuatorState::Opening
        } else if boost_pressure < self.tuning.min_boost {
            ActuatorState::Closing
        } else {
            ActuatorState::Holding
        }
    }

    /// Estimate the power gain (hp) for a boost pressure
    ///
    /// Simple linear model, 100 hp per bar, no clamping.
    pub fn estimate_power(&self, boost_pressure: f64) -> f64 {
        boost_pressure * HP_PER_BAR
    }

    /// Run one full control cycle
    ///
    /// Computes the boost for the given readings, classifies the valve
    /// response for it, and estimates the power gain.
    pub fn run_cycle(&self, engine_speed: f64, engine_load: f64) -> BoostReport {
        let boost_bar = self.calculate_boost(engine_speed, engine_load);
        let actuator = self.actuator_state(boost_bar);
        let power_hp = self.estimate_power(boost_bar);
        BoostReport {
            boost_bar,
            actuator,
            power_hp,
        }
    }
}

/// Clamp a raw sensor reading into [0, max], treating NaN as no reading
fn clamp_reading(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
