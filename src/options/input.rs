use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Device-specific zoom input parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct InputOptions {
    /// Zoom delta produced per scroll-wheel line.
    #[schemars(title = "Scroll Sensitivity", range(min = 0.01, max = 5.0), extend("step" = 0.01))]
    pub scroll_sensitivity: f32,
    /// Swap scroll direction.
    #[schemars(title = "Invert Scroll")]
    pub invert_scroll: bool,
    /// Zoom delta per second while a zoom key is held.
    #[schemars(title = "Keyboard Zoom Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub keyboard_zoom_speed: f32,
    /// Key that lowers the camera (winit `KeyCode` debug string).
    #[schemars(skip)]
    pub zoom_in_key: String,
    /// Key that raises the camera (winit `KeyCode` debug string).
    #[schemars(skip)]
    pub zoom_out_key: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            scroll_sensitivity: 1.0,
            invert_scroll: false,
            keyboard_zoom_speed: 2.0,
            zoom_in_key: "PageUp".to_owned(),
            zoom_out_key: "PageDown".to_owned(),
        }
    }
}
