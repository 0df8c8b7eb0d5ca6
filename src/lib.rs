#[macro_use]
mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod scene;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use animation::SnowAnimation;
pub use color::Color;
pub use config::SnowConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use scene::SnowScene;
pub use surface::{CanvasSurface, RenderSurface};

// Use `wee_alloc` as the global allocator when the feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Id of the full-window canvas the site's pages render the snow into
pub const DEFAULT_CANVAS_ID: &str = "snow-container";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

#[wasm_bindgen]
pub fn default_canvas_id() -> String {
    DEFAULT_CANVAS_ID.to_owned()
}
