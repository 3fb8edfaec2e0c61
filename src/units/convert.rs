use crate::units::types::ImperialHeight;

pub const CENTIMETERS_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Rounds like JavaScript's `Math.round`: halves go toward positive infinity,
/// so -2.5 becomes -2 rather than -3.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Split a centimeter height into whole feet and rounded inches.
///
/// The remainder is rounded on its own, so a height just under a foot
/// boundary shows up as "5 ft 12 in" instead of carrying into the feet.
pub fn centimeters_to_feet_inches(centimeters: f64) -> ImperialHeight {
    let total_inches = centimeters / CENTIMETERS_PER_INCH;
    ImperialHeight {
        feet: (total_inches / INCHES_PER_FOOT).floor(),
        inches: round_half_up(total_inches % INCHES_PER_FOOT),
    }
}

pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms * POUNDS_PER_KILOGRAM
}

pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds / POUNDS_PER_KILOGRAM
}

impl ImperialHeight {
    pub fn to_centimeters(&self) -> f64 {
        (self.feet * INCHES_PER_FOOT + self.inches) * CENTIMETERS_PER_INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(10.866), 11.0);
        assert_eq!(round_half_up(10.5), 11.0);
        assert_eq!(round_half_up(10.49), 10.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_height_conversion() {
        let height = centimeters_to_feet_inches(180.0);
        assert_eq!(height.feet, 5.0);
        assert_eq!(height.inches, 11.0);

        let height = centimeters_to_feet_inches(175.0);
        assert_eq!(height.feet, 5.0);
        assert_eq!(height.inches, 9.0);
    }

    #[test]
    fn test_height_on_foot_boundary() {
        // 60.96 cm is exactly 24 in
        let height = centimeters_to_feet_inches(60.96);
        assert_eq!(height.feet, 2.0);
        assert_eq!(height.inches, 0.0);

        let height = centimeters_to_feet_inches(182.88);
        assert_eq!(height.feet, 6.0);
        assert_eq!(height.inches, 0.0);
    }

    #[test]
    fn test_remainder_rounds_up_to_twelve() {
        // 182.8 cm = 71.97 in: the remainder rounds to 12 without carrying
        let height = centimeters_to_feet_inches(182.8);
        assert_eq!(height.feet, 5.0);
        assert_eq!(height.inches, 12.0);
    }

    #[test]
    fn test_nan_propagates() {
        let height = centimeters_to_feet_inches(f64::NAN);
        assert!(height.feet.is_nan());
        assert!(height.inches.is_nan());
        assert!(kilograms_to_pounds(f64::NAN).is_nan());
    }

    #[test]
    fn test_weight_conversion() {
        assert!((kilograms_to_pounds(80.0) - 176.3696).abs() < 1e-9);
        assert!((pounds_to_kilograms(176.3696) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_to_centimeters() {
        let height = ImperialHeight {
            feet: 2.0,
            inches: 0.0,
        };
        assert!((height.to_centimeters() - 60.96).abs() < 1e-9);
    }
}
