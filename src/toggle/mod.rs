// Metric/imperial toggle for a measurement card
// The state lives in `UnitToggle`; all page access goes through `DisplayPort`.


use crate::config::{ToggleConfig, ValidationMode};
use crate::display::{DisplayPort, Field};
use crate::units::{
    centimeters_to_feet_inches, format_imperial_height, format_number, kilograms_to_pounds,
    parse_float, parse_strict, to_fixed, UnitError, UnitSystem,
};
use serde::Serialize;
use std::fmt;

/// Decimal places shown for imperial weight
const POUND_DECIMALS: usize = 2;

#[derive(Debug, Clone)]
pub enum ToggleError {
    /// A required element is not on the page
    MissingElement(Field),
    /// A measurement element has no original-value attribute (strict only)
    MissingOriginal(Field),
    /// Text that could not be read as a number (strict only)
    InvalidMeasurement(UnitError),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::MissingElement(field) => write!(f, "Missing element: {}", field),
            ToggleError::MissingOriginal(field) => write!(
                f,
                "Missing original value: {} has no {} attribute",
                field,
                field.original_attribute().unwrap_or("original")
            ),
            ToggleError::InvalidMeasurement(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ToggleError {}

impl From<UnitError> for ToggleError {
    fn from(e: UnitError) -> Self {
        ToggleError::InvalidMeasurement(e)
    }
}

/// Which unit system is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub is_imperial: bool,
}

impl DisplayState {
    pub fn system(&self) -> UnitSystem {
        if self.is_imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }
}

/// Switches a page between metric and imperial display
#[derive(Debug, Clone, Default)]
pub struct UnitToggle {
    state: DisplayState,
    validation: ValidationMode,
}

impl UnitToggle {
    /// A lenient toggle for a page that starts out metric
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ToggleConfig) -> Self {
        Self {
            state: DisplayState::default(),
            validation: config.validation,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn is_imperial(&self) -> bool {
        self.state.is_imperial
    }

    pub fn system(&self) -> UnitSystem {
        self.state.system()
    }

    /// Convert the displayed measurements to the other unit system.
    ///
    /// Metric values are read from the displayed text. Going back to metric
    /// uses the original-value attributes instead of the imperial text.
    /// Returns the system now on display. On error neither the page nor the
    /// state has been changed.
    pub fn toggle_units<P: DisplayPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<UnitSystem, ToggleError> {
        if let Some(missing) = Field::ALL.into_iter().find(|&f| !port.contains(f)) {
            return Err(ToggleError::MissingElement(missing));
        }

        let target = self.system().opposite();
        let (height, weight) = match target {
            UnitSystem::Imperial => self.imperial_text(port)?,
            UnitSystem::Metric => self.metric_text(port)?,
        };

        port.set_height(&height);
        port.set_weight(&weight);
        port.set_height_unit(target.height_unit());
        port.set_weight_unit(target.weight_unit());
        port.set_control_label(target.control_label());

        self.state.is_imperial = !self.state.is_imperial;
        log::debug!("Switched to {} units: {} / {}", target, height, weight);

        Ok(target)
    }

    fn imperial_text<P: DisplayPort + ?Sized>(
        &self,
        port: &P,
    ) -> Result<(String, String), ToggleError> {
        let centimeters = self.parse(Field::Height, port.text(Field::Height))?;
        let kilograms = self.parse(Field::Weight, port.text(Field::Weight))?;

        let height = format_imperial_height(&centimeters_to_feet_inches(centimeters));
        let weight = to_fixed(kilograms_to_pounds(kilograms), POUND_DECIMALS);
        Ok((height, weight))
    }

    fn metric_text<P: DisplayPort + ?Sized>(
        &self,
        port: &P,
    ) -> Result<(String, String), ToggleError> {
        let centimeters = self.parse_original(Field::Height, port.original(Field::Height))?;
        let kilograms = self.parse_original(Field::Weight, port.original(Field::Weight))?;
        Ok((format_number(centimeters), format_number(kilograms)))
    }

    fn parse_original(&self, field: Field, original: Option<String>) -> Result<f64, ToggleError> {
        match (original, self.validation) {
            (Some(text), _) => self.parse(field, Some(text)),
            (None, ValidationMode::Strict) => Err(ToggleError::MissingOriginal(field)),
            // A missing attribute reads as no number at all
            (None, ValidationMode::Lenient) => Ok(f64::NAN),
        }
    }

    fn parse(&self, field: Field, text: Option<String>) -> Result<f64, ToggleError> {
        let text = text.ok_or(ToggleError::MissingElement(field))?;
        match self.validation {
            ValidationMode::Lenient => Ok(parse_float(&text)),
            ValidationMode::Strict => Ok(parse_strict(&field.to_string(), &text)?),
        }
    }
}
