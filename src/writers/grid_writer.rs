use std::fs;
use std::path::Path;

use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::geometry::convert::geo_to_polygon;
use crate::models::GridCell;
use crate::utils::constants::CELL_ID_FIELD;

/// Write grid cells to a shapefile, persisting each cell's id as a
/// `cell_id` dBase attribute so downstream joins do not depend on
/// record order.
pub fn write_grid(cells: &[GridCell], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let field = FieldName::try_from(CELL_ID_FIELD).map_err(|e| {
        ProcessingError::InvalidFormat(format!(
            "Invalid dBase field name '{}': {:?}",
            CELL_ID_FIELD, e
        ))
    })?;
    let table = TableWriterBuilder::new().add_numeric_field(field, 10, 0);
    let mut writer = shapefile::Writer::from_path(path, table)?;

    for cell in cells {
        let mut record = Record::default();
        record.insert(
            CELL_ID_FIELD.to_string(),
            FieldValue::Numeric(Some(f64::from(cell.cell_id))),
        );
        writer.write_shape_and_record(&geo_to_polygon(&cell.geometry), &record)?;
    }

    info!(cells = cells.len(), "Shapefile saved: {}", path.display());
    Ok(())
}
