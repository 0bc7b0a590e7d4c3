use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Size of the main chart band.
    pub viewport: Viewport,
    /// Height of the range-selector control below the chart; its width
    /// equals the viewport width.
    #[serde(default = "default_selector_height")]
    pub selector_height: u32,
    /// Debounce delay for vertical (grid/rescale) redraws.
    #[serde(default = "default_redraw_delay_ms")]
    pub redraw_delay_ms: u64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            selector_height: default_selector_height(),
            redraw_delay_ms: default_redraw_delay_ms(),
        }
    }

    #[must_use]
    pub fn with_selector_height(mut self, selector_height: u32) -> Self {
        self.selector_height = selector_height;
        self
    }

    #[must_use]
    pub fn with_redraw_delay_ms(mut self, redraw_delay_ms: u64) -> Self {
        self.redraw_delay_ms = redraw_delay_ms;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.selector_height == 0 {
            return Err(ChartError::InvalidData(
                "selector height must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_selector_height() -> u32 {
    60
}

fn default_redraw_delay_ms() -> u64 {
    100
}
