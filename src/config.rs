use crate::display::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToggleConfig {
    // How displayed and original values are parsed
    #[serde(default)]
    pub validation: ValidationMode,

    // Element ids on the host page
    #[serde(default)]
    pub elements: ElementIds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Take the leading number and let unparseable text become NaN
    #[default]
    Lenient,
    /// Reject anything that is not a complete finite number
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElementIds {
    pub height: String,
    pub weight: String,
    pub height_unit: String,
    pub weight_unit: String,
    pub control: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            height: "height".to_string(),
            weight: "weight".to_string(),
            height_unit: "height-unit".to_string(),
            weight_unit: "weight-unit".to_string(),
            control: "toggleButton".to_string(),
        }
    }
}

impl ElementIds {
    pub fn id(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::HeightUnit => &self.height_unit,
            Field::WeightUnit => &self.weight_unit,
            Field::Control => &self.control,
        }
    }
}

impl ToggleConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: ToggleConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }
}
