mod engine;
mod engine_config;
mod theme;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use theme::{Theme, ThemeObserver, ThemeStore};
