//! Decorative third-party effects: the animated globe background, the
//! scroll reveal animations and the icon replacement.
//!
//! These are presentation-only, so a library that failed to load is logged
//! and skipped rather than treated as a startup failure.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::bindings;
use crate::error::Error;


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobeConfig {
    /// Selector of the element the background renders into.
    pub el: String,
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    pub color: u32,
    pub background_color: u32,
    pub size: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            el: "#vanta-bg".to_owned(),
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            color: 0x00ffff,
            background_color: 0x000000,
            size: 0.8,
        }
    }
}

impl GlobeConfig {
    fn to_js(&self) -> JsValue {
        let obj = bindings::new_object();

        bindings::set_property(&obj, "el", &JsValue::from_str(&self.el));
        bindings::set_property(&obj, "mouseControls", &JsValue::from_bool(self.mouse_controls));
        bindings::set_property(&obj, "touchControls", &JsValue::from_bool(self.touch_controls));
        bindings::set_property(&obj, "gyroControls", &JsValue::from_bool(self.gyro_controls));
        bindings::set_property(&obj, "minHeight", &JsValue::from_f64(self.min_height));
        bindings::set_property(&obj, "minWidth", &JsValue::from_f64(self.min_width));
        bindings::set_property(&obj, "scale", &JsValue::from_f64(self.scale));
        bindings::set_property(&obj, "scaleMobile", &JsValue::from_f64(self.scale_mobile));
        bindings::set_property(&obj, "color", &JsValue::from_f64(self.color.into()));
        bindings::set_property(&obj, "backgroundColor", &JsValue::from_f64(self.background_color.into()));
        bindings::set_property(&obj, "size", &JsValue::from_f64(self.size));

        obj
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseInBack => "ease-in-back",
            Easing::EaseOutBack => "ease-out-back",
            Easing::EaseInOutBack => "ease-in-out-back",
        }
    }
}


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Animation duration in milliseconds.
    pub duration: u32,
    pub easing: Easing,
    /// Animate each element only the first time it scrolls into view.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: Easing::EaseInOut,
            once: true,
        }
    }
}

impl RevealConfig {
    fn to_js(&self) -> JsValue {
        let obj = bindings::new_object();

        bindings::set_property(&obj, "duration", &JsValue::from_f64(self.duration.into()));
        bindings::set_property(&obj, "easing", &JsValue::from_str(self.easing.as_str()));
        bindings::set_property(&obj, "once", &JsValue::from_bool(self.once));

        obj
    }
}


fn warn_on_failure(library: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!(library, error = %Error::from_js(e), "decorative effect failed to initialize");
    }
}

pub fn init_globe(config: &GlobeConfig) {
    if bindings::query_selector(&config.el).is_none() {
        tracing::debug!(selector = %config.el, "no background anchor on this page");
        return;
    }

    warn_on_failure("VANTA.GLOBE", bindings::vanta_globe(&config.to_js()).map(|_| ()));
}

pub fn init_reveal(config: &RevealConfig) {
    warn_on_failure("AOS", bindings::aos_init(&config.to_js()));
}

pub fn replace_icons() {
    warn_on_failure("feather", bindings::feather_replace());
}
