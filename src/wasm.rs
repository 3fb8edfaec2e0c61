// WebAssembly bindings for the measurement card toggle
use crate::config::{ElementIds, ToggleConfig};
use crate::display::{DisplayPort, Field};
use crate::toggle::UnitToggle;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Page elements looked up by id on every access, so markup swapped in by
/// the host page is picked up
struct DomDisplay {
    document: web_sys::Document,
    ids: ElementIds,
}

impl DomDisplay {
    fn from_window(ids: ElementIds) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        Ok(Self { document, ids })
    }

    fn element(&self, field: Field) -> Option<web_sys::Element> {
        self.document.get_element_by_id(self.ids.id(field))
    }
}

/// Rendered text of an element (`innerText`), so hidden children and markup
/// line breaks read the way the user sees them. Non-HTML elements such as SVG
/// text have no rendered text and fall back to `textContent`.
fn rendered_text(element: &web_sys::Element) -> String {
    match element.dyn_ref::<web_sys::HtmlElement>() {
        Some(html) => html.inner_text(),
        None => element.text_content().unwrap_or_default(),
    }
}

impl DisplayPort for DomDisplay {
    fn text(&self, field: Field) -> Option<String> {
        self.element(field).map(|e| rendered_text(&e))
    }

    fn original(&self, field: Field) -> Option<String> {
        let attribute = field.original_attribute()?;
        self.element(field)?.get_attribute(attribute)
    }

    fn set_text(&mut self, field: Field, text: &str) {
        if let Some(element) = self.element(field) {
            match element.dyn_ref::<web_sys::HtmlElement>() {
                Some(html) => html.set_inner_text(text),
                None => element.set_text_content(Some(text)),
            }
        }
    }

    fn contains(&self, field: Field) -> bool {
        self.element(field).is_some()
    }
}

#[wasm_bindgen]
pub struct UnitToggleWasm {
    toggle: UnitToggle,
    config: ToggleConfig,
}

impl Default for UnitToggleWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitToggleWasm {
    /// Toggle for a page that starts in metric, using the default element ids
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = ToggleConfig::empty();
        Self {
            toggle: UnitToggle::with_config(&config),
            config,
        }
    }

    /// Build from TOML config text (element ids, validation mode)
    #[wasm_bindgen]
    pub fn with_config(config_toml: &str) -> Result<UnitToggleWasm, JsValue> {
        let config = ToggleConfig::load_from_str(config_toml)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            toggle: UnitToggle::with_config(&config),
            config,
        })
    }

    /// Click handler for the toggle control.
    /// Returns true if the page now shows imperial units.
    #[wasm_bindgen]
    pub fn toggle_units(&mut self) -> Result<bool, JsValue> {
        let mut display = DomDisplay::from_window(self.config.elements.clone())?;

        match self.toggle.toggle_units(&mut display) {
            Ok(_) => Ok(self.toggle.is_imperial()),
            Err(e) => {
                let message = format!("Unit toggle failed: {}", e);
                log::warn!("{}", message);
                web_sys::console::warn_1(&JsValue::from_str(&message));
                Err(JsValue::from_str(&message))
            }
        }
    }

    #[wasm_bindgen]
    pub fn is_imperial(&self) -> bool {
        self.toggle.is_imperial()
    }

    /// Current text of every element as a plain object
    /// ({height, height_unit, weight, weight_unit, control, is_imperial})
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let display = DomDisplay::from_window(self.config.elements.clone())?;
        let object = js_sys::Object::new();

        let entries = [
            ("height", Field::Height),
            ("height_unit", Field::HeightUnit),
            ("weight", Field::Weight),
            ("weight_unit", Field::WeightUnit),
            ("control", Field::Control),
        ];
        for (key, field) in entries {
            let value = match display.text(field) {
                Some(text) => JsValue::from_str(&text),
                None => JsValue::NULL,
            };
            js_sys::Reflect::set(&object, &JsValue::from_str(key), &value)?;
        }
        js_sys::Reflect::set(
            &object,
            &JsValue::from_str("is_imperial"),
            &JsValue::from_bool(self.toggle.is_imperial()),
        )?;

        Ok(object.into())
    }
}
