use serde::{Deserialize, Serialize};
use std::fmt;

/// Which unit system a page is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Feet/inches and pounds
    Imperial,
}

impl UnitSystem {
    pub fn opposite(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Label shown on the control while this system is displayed
    pub fn control_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Toggle to Imperial Units",
            UnitSystem::Imperial => "Toggle to Metric Units",
        }
    }

    /// Suffix shown next to the height value. Imperial height carries its
    /// units inline ("5 ft 11 in"), so the label stays empty.
    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "",
        }
    }

    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

/// A height split into whole feet and rounded inches.
///
/// Both parts stay `f64` so NaN input survives to the display as "NaN".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImperialHeight {
    pub feet: f64,
    pub inches: f64,
}
