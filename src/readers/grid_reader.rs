use std::path::Path;

use shapefile::dbase::FieldValue;
use shapefile::{Reader, Shape};
use tracing::{info, warn};

use crate::error::{ProcessingError, Result};
use crate::geometry::convert::polygon_to_geo;
use crate::models::GridCell;
use crate::utils::constants::CELL_ID_FIELD;

/// Read a grid shapefile into cells.
///
/// Cell identifiers come from the `cell_id` attribute when the file
/// carries one; otherwise they fall back to ordinal position, which
/// must then match the numbering the metric tables were built against.
pub fn read_grid(path: &Path) -> Result<Vec<GridCell>> {
    let mut reader = Reader::from_path(path)?;
    let mut cells = Vec::with_capacity(reader.shape_count()?);
    let mut missing_attribute = false;

    for (position, result) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = result?;
        let geometry = match shape {
            Shape::Polygon(polygon) => polygon_to_geo(&polygon),
            Shape::NullShape => continue,
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Expected grid polygons in {}, found {:?}",
                    path.display(),
                    other.shapetype()
                )))
            }
        };

        let cell_id = match record.get(CELL_ID_FIELD) {
            Some(FieldValue::Numeric(Some(id))) => *id as u32,
            _ => {
                missing_attribute = true;
                position as u32
            }
        };
        cells.push(GridCell::new(cell_id, geometry));
    }

    if cells.is_empty() {
        return Err(ProcessingError::Config(format!(
            "Grid {} contains no cells",
            path.display()
        )));
    }
    if missing_attribute {
        warn!(
            "grid {} has no '{}' attribute; falling back to ordinal cell ids",
            path.display(),
            CELL_ID_FIELD
        );
    }
    info!(cells = cells.len(), "read grid from {}", path.display());

    Ok(cells)
}
