use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Text that should hold a number does not (strict validation only)
    InvalidMeasurement { field: String, text: String },
    /// Text that does not follow the "<feet> ft <inches> in" layout
    InvalidImperialHeight(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidMeasurement { field, text } => {
                write!(f, "Invalid measurement for {}: '{}'", field, text)
            }
            UnitError::InvalidImperialHeight(text) => {
                write!(f, "Invalid imperial height: '{}'", text)
            }
        }
    }
}

impl std::error::Error for UnitError {}
