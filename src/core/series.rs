use crate::render::Color;

/// One named line over the chart's shared x axis.
///
/// The value count always equals the x-axis count of the owning [`Chart`];
/// this is checked at construction time and never changes afterwards.
///
/// [`Chart`]: crate::core::Chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: String,
    name: String,
    color: Color,
    values: Vec<f64>,
    visible: bool,
}

impl Series {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: Color,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            values,
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable legend label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Hidden series contribute neither geometry nor extrema.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
