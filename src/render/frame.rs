use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Draw order is rects, then lines, then texts, each in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    /// Appends another frame's primitives shifted by `(dx, dy)`.
    ///
    /// Used to composite the range-selector scene below the main chart band.
    pub fn append_offset(&mut self, other: &RenderFrame, dx: f64, dy: f64) {
        for rect in &other.rects {
            self.rects.push(RectPrimitive {
                x: rect.x + dx,
                y: rect.y + dy,
                ..*rect
            });
        }
        for line in &other.lines {
            self.lines.push(LinePrimitive {
                x1: line.x1 + dx,
                y1: line.y1 + dy,
                x2: line.x2 + dx,
                y2: line.y2 + dy,
                ..*line
            });
        }
        for text in &other.texts {
            let mut text = text.clone();
            text.x += dx;
            text.y += dy;
            self.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
