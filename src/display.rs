use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The page elements a toggle reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Height,
    Weight,
    HeightUnit,
    WeightUnit,
    Control,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Height,
        Field::Weight,
        Field::HeightUnit,
        Field::WeightUnit,
        Field::Control,
    ];

    /// Attribute holding the canonical metric value, for measurement fields
    pub fn original_attribute(self) -> Option<&'static str> {
        match self {
            Field::Height => Some("data-original-height"),
            Field::Weight => Some("data-original-weight"),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Height => "height",
            Field::Weight => "weight",
            Field::HeightUnit => "height unit",
            Field::WeightUnit => "weight unit",
            Field::Control => "toggle control",
        };
        write!(f, "{}", name)
    }
}

/// Rendering surface for a measurement card.
///
/// A port answers `None` for elements it does not have; the toggle checks
/// every element it needs before writing anything.
pub trait DisplayPort {
    /// Visible text of `field`, or `None` if the element is missing
    fn text(&self, field: Field) -> Option<String>;

    /// Original metric value stored on a measurement element
    fn original(&self, field: Field) -> Option<String>;

    fn set_text(&mut self, field: Field, text: &str);

    fn contains(&self, field: Field) -> bool {
        self.text(field).is_some()
    }

    fn set_height(&mut self, text: &str) {
        self.set_text(Field::Height, text);
    }

    fn set_weight(&mut self, text: &str) {
        self.set_text(Field::Weight, text);
    }

    fn set_height_unit(&mut self, text: &str) {
        self.set_text(Field::HeightUnit, text);
    }

    fn set_weight_unit(&mut self, text: &str) {
        self.set_text(Field::WeightUnit, text);
    }

    fn set_control_label(&mut self, text: &str) {
        self.set_text(Field::Control, text);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct MemoryElement {
    text: String,
    original: Option<String>,
}

/// In-memory page used by the CLI and by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    elements: HashMap<Field, MemoryElement>,
}

impl MemoryDisplay {
    /// A page with no elements at all
    pub fn new() -> Self {
        Self::default()
    }

    /// A metric page showing `height` and `weight`, with the same values
    /// stored as the originals
    pub fn metric_page(height: &str, weight: &str) -> Self {
        let mut display = Self::new();
        display.insert(Field::Height, height);
        display.insert(Field::Weight, weight);
        display.insert(Field::HeightUnit, "cm");
        display.insert(Field::WeightUnit, "kg");
        display.insert(Field::Control, "Toggle to Imperial Units");
        display.set_original(Field::Height, height);
        display.set_original(Field::Weight, weight);
        display
    }

    pub fn insert(&mut self, field: Field, text: &str) {
        self.elements.entry(field).or_default().text = text.to_string();
    }

    pub fn remove(&mut self, field: Field) {
        self.elements.remove(&field);
    }

    /// Set the original-value attribute. Ignored if the element is missing.
    pub fn set_original(&mut self, field: Field, value: &str) {
        if let Some(element) = self.elements.get_mut(&field) {
            element.original = Some(value.to_string());
        }
    }

    pub fn clear_original(&mut self, field: Field) {
        if let Some(element) = self.elements.get_mut(&field) {
            element.original = None;
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let text = |field| self.text(field).unwrap_or_default();
        DisplaySnapshot {
            height: text(Field::Height),
            height_unit: text(Field::HeightUnit),
            weight: text(Field::Weight),
            weight_unit: text(Field::WeightUnit),
            control: text(Field::Control),
        }
    }
}

impl DisplayPort for MemoryDisplay {
    fn text(&self, field: Field) -> Option<String> {
        self.elements.get(&field).map(|e| e.text.clone())
    }

    fn original(&self, field: Field) -> Option<String> {
        self.elements.get(&field).and_then(|e| e.original.clone())
    }

    fn set_text(&mut self, field: Field, text: &str) {
        if let Some(element) = self.elements.get_mut(&field) {
            element.text = text.to_string();
        }
    }

    fn contains(&self, field: Field) -> bool {
        self.elements.contains_key(&field)
    }
}

/// Visible text of every element at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySnapshot {
    pub height: String,
    pub height_unit: String,
    pub weight: String,
    pub weight_unit: String,
    pub control: String,
}

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Height: {} {}", self.height, self.height_unit)?;
        writeln!(f, "Weight: {} {}", self.weight, self.weight_unit)?;
        write!(f, "Control: {}", self.control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_page_layout() {
        let display = MemoryDisplay::metric_page("180", "80");
        for field in Field::ALL {
            assert!(display.contains(field), "missing {}", field);
        }
        assert_eq!(display.original(Field::Height).as_deref(), Some("180"));
        assert_eq!(display.original(Field::Weight).as_deref(), Some("80"));
        assert_eq!(display.original(Field::Control), None);

        let snapshot = display.snapshot();
        assert_eq!(snapshot.height_unit, "cm");
        assert_eq!(snapshot.weight_unit, "kg");
        assert_eq!(snapshot.control, "Toggle to Imperial Units");
    }

    #[test]
    fn test_port_setters_write_through() {
        let mut display = MemoryDisplay::metric_page("180", "80");
        display.set_height("5 ft 11 in");
        display.set_weight_unit("lb");
        display.set_control_label("Toggle to Metric Units");

        assert_eq!(display.text(Field::Height).as_deref(), Some("5 ft 11 in"));
        assert_eq!(display.text(Field::WeightUnit).as_deref(), Some("lb"));
        assert_eq!(
            display.text(Field::Control).as_deref(),
            Some("Toggle to Metric Units")
        );
        // Originals are untouched by text writes
        assert_eq!(display.original(Field::Height).as_deref(), Some("180"));
    }

    #[test]
    fn test_missing_element() {
        let mut display = MemoryDisplay::metric_page("180", "80");
        display.remove(Field::Control);
        assert!(!display.contains(Field::Control));
        assert_eq!(display.text(Field::Control), None);

        // Writing to a missing element does not create it
        display.set_control_label("Toggle to Metric Units");
        assert!(!display.contains(Field::Control));
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = MemoryDisplay::metric_page("180", "80").snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["height"], "180");
        assert_eq!(json["weight_unit"], "kg");
    }

    #[test]
    fn test_field_attributes() {
        assert_eq!(
            Field::Height.original_attribute(),
            Some("data-original-height")
        );
        assert_eq!(
            Field::Weight.original_attribute(),
            Some("data-original-weight")
        );
        assert_eq!(Field::WeightUnit.original_attribute(), None);
    }
}
