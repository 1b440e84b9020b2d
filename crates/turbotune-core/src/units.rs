//! Unit Conversion Functions
//!
//! Display-unit conversions for boost reporting:
//! - Pressure: bar ↔ PSI
//! - Power: hp ↔ kW

/// Convert bar to PSI
pub fn bar_to_psi(bar: f64) -> f64 {
    bar * 14.503773773020923
}

/// Convert PSI to bar
pub fn psi_to_bar(psi: f64) -> f64 {
    psi / 14.503773773020923
}

/// Convert mechanical horsepower to kilowatts
pub fn hp_to_kw(hp: f64) -> f64 {
    hp * 0.7456998715822702
}

/// Convert kilowatts to mechanical horsepower
pub fn kw_to_hp(kw: f64) -> f64 {
    kw / 0.7456998715822702
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_psi_conversion() {
        assert!((bar_to_psi(1.0) - 14.504).abs() < 0.01);
        assert!((psi_to_bar(14.504) - 1.0).abs() < 0.01);
        assert!((bar_to_psi(1.01325) - 14.696).abs() < 0.01); // Atmospheric pressure
    }

    #[test]
    fn test_hp_kw_conversion() {
        assert!((hp_to_kw(100.0) - 74.57).abs() < 0.01);
        assert!((kw_to_hp(74.57) - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(bar_to_psi(0.0), 0.0);
        assert_eq!(hp_to_kw(0.0), 0.0);
    }
}
