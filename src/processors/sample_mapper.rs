use std::collections::BTreeMap;

use geo::Point;
use tracing::{info, warn};

use crate::error::{ProcessingError, Result};
use crate::geometry::CellIndex;
use crate::models::{CellAverage, GridCell, SamplePoint};

/// Averages point samples into the grid cell containing each sample,
/// one mean per cell that received at least one sample.
pub struct SampleMapper;

impl SampleMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_cells(
        &self,
        cells: &[GridCell],
        samples: &[SamplePoint],
    ) -> Result<Vec<CellAverage>> {
        if cells.is_empty() {
            return Err(ProcessingError::Config(
                "Grid contains no cells to map samples onto".to_string(),
            ));
        }

        let index = CellIndex::new(cells);
        // BTreeMap keeps the output ordered by cell id
        let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
        let mut outside = 0usize;

        for sample in samples {
            match index.locate(Point::new(sample.lon, sample.lat)) {
                Some(cell) => {
                    let entry = sums.entry(cell.cell_id).or_insert((0.0, 0));
                    entry.0 += sample.total_p;
                    entry.1 += 1;
                }
                None => outside += 1,
            }
        }

        if sums.is_empty() {
            return Err(ProcessingError::MissingData(
                "Every sample fell outside the grid; nothing to average".to_string(),
            ));
        }
        if outside > 0 {
            warn!(outside, "samples outside every grid cell were dropped");
        }
        info!(
            cells_with_samples = sums.len(),
            assigned = samples.len() - outside,
            "sample mapping complete"
        );

        Ok(sums
            .into_iter()
            .map(|(cell_id, (sum, count))| CellAverage {
                cell_id,
                average: sum / count as f64,
            })
            .collect())
    }
}

impl Default for SampleMapper {
    fn default() -> Self {
        Self::new()
    }
}
