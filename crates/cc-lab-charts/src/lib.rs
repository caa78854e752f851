pub mod render;
pub mod series;

pub use render::{grouped_bar_chart, line_chart, scatter_chart};
pub use series::{BarGroup, ScatterPoint, XySeries};
