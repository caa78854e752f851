/// One labeled polyline for [`crate::line_chart`].
#[derive(Debug, Clone)]
pub struct XySeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl XySeries {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }
}

/// One labeled value-per-category row for [`crate::grouped_bar_chart`].
#[derive(Debug, Clone)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<f64>,
}

impl BarGroup {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// One annotated point for [`crate::scatter_chart`].
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}
