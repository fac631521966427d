use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point sample of summed phytoplankton carbon (mg C/m3) at one model
/// node, optionally dated for time-range filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplePoint {
    pub lon: f64,
    pub lat: f64,
    pub total_p: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Per-cell mean of the samples falling inside that cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellAverage {
    #[serde(rename = "Polygon_ID")]
    pub cell_id: u32,
    #[serde(rename = "Average_P")]
    pub average: f64,
}
