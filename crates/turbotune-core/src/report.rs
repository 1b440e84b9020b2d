//! Control-cycle report
//!
//! The three values a control cycle surfaces to the operator, plus the
//! fixed-format text rendering the CLI prints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::controller::ActuatorState;
use crate::units;

/// Outcome of one boost control cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostReport {
    /// Commanded boost pressure (bar)
    pub boost_bar: f64,

    /// Torque control valve response
    pub actuator: ActuatorState,

    /// Estimated power gain (hp)
    pub power_hp: f64,
}

impl BoostReport {
    /// Boost pressure converted to PSI
    pub fn boost_psi(&self) -> f64 {
        units::bar_to_psi(self.boost_bar)
    }

    /// Power gain converted to kilowatts
    pub fn power_kw(&self) -> f64 {
        units::hp_to_kw(self.power_hp)
    }
}

impl fmt::Display for BoostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.actuator.message())?;
        writeln!(f, "Turbo Boost Pressure: {:.2} bar", self.boost_bar)?;
        write!(f, "Estimated Power Increase: {:.1} hp", self.power_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_fixed_lines() {
        let report = BoostReport {
            boost_bar: 1.08,
            actuator: ActuatorState::Holding,
            power_hp: 108.0,
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Boost pressure is optimal. Torque control valve is maintaining position."
        );
        assert_eq!(lines[1], "Turbo Boost Pressure: 1.08 bar");
        assert_eq!(lines[2], "Estimated Power Increase: 108.0 hp");
    }

    #[test]
    fn test_unit_accessors() {
        let report = BoostReport {
            boost_bar: 1.0,
            actuator: ActuatorState::Holding,
            power_hp: 100.0,
        };
        assert!((report.boost_psi() - 14.504).abs() < 0.01);
        assert!((report.power_kw() - 74.57).abs() < 0.01);
    }

    #[test]
    fn test_json_round_trip() {
        let report = BoostReport {
            boost_bar: 0.5,
            actuator: ActuatorState::Closing,
            power_hp: 50.0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: BoostReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actuator, ActuatorState::Closing);
        assert_eq!(back.boost_bar, 0.5);
    }
}
