// Metric/imperial conversion for body measurements
// Parsing and formatting follow browser number semantics so the displayed
// text matches what a page script would render.

pub mod convert;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use convert::{
    centimeters_to_feet_inches, kilograms_to_pounds, pounds_to_kilograms, round_half_up,
};
pub use error::UnitError;
pub use formatter::{format_imperial_height, format_number, to_fixed};
pub use parser::{parse_float, parse_imperial_height, parse_strict};
pub use types::{ImperialHeight, UnitSystem};
