// Tunables for the snowfall, exposed to JS as plain fields

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnowConfig {
    pub count: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_fall_speed: f64,
    pub max_fall_speed: f64,
    // Drift is drawn from [-|max_drift|, |max_drift|). Inverted min/max
    // pairs are swapped when flakes are created.
    pub max_drift: f64,
    // Where a flake reappears after falling past the bottom edge
    pub wrap_y: f64,
    // RRGGBBAA
    pub color: u32,
}

#[wasm_bindgen]
impl SnowConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SnowConfig {
        SnowConfig {
            count: SnowConfig::COUNT,
            min_radius: SnowConfig::MIN_RADIUS,
            max_radius: SnowConfig::MAX_RADIUS,
            min_fall_speed: SnowConfig::MIN_FALL_SPEED,
            max_fall_speed: SnowConfig::MAX_FALL_SPEED,
            max_drift: SnowConfig::MAX_DRIFT,
            wrap_y: SnowConfig::WRAP_Y,
            color: SnowConfig::COLOR,
        }
    }
}

impl SnowConfig {
    pub const COUNT: u32 = 150;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 2.0;
    pub const MIN_FALL_SPEED: f64 = 0.5;
    pub const MAX_FALL_SPEED: f64 = 1.5;
    pub const MAX_DRIFT: f64 = 0.25;
    pub const WRAP_Y: f64 = -10.0;
    pub const COLOR: u32 = 0xffff_ffff;

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_radius(mut self, min: f64, max: f64) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    pub fn with_fall_speed(mut self, min: f64, max: f64) -> Self {
        self.min_fall_speed = min;
        self.max_fall_speed = max;
        self
    }

    pub fn with_max_drift(mut self, max_drift: f64) -> Self {
        self.max_drift = max_drift;
        self
    }

    pub fn with_wrap_y(mut self, wrap_y: f64) -> Self {
        self.wrap_y = wrap_y;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }
}

impl Default for SnowConfig {
    fn default() -> Self {
        SnowConfig::new()
    }
}
