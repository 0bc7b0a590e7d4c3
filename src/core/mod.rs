pub mod chart;
pub mod labels;
pub mod scale;
pub mod series;
pub mod types;
pub mod window;

pub use chart::{Chart, DerivedScales};
pub use labels::{AxisLabel, LabelPlan, TARGET_LABEL_COUNT, ZOOM_LEVELS};
pub use series::Series;
pub use types::Viewport;
pub use window::{MIN_WINDOW, Window};
