use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::{CellCentroid, GridCell};

/// Write serializable rows to a CSV file, creating parent directories.
/// Headers come from the row type's field names.
pub fn write_rows<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(rows = rows.len(), "CSV saved: {}", path.display());
    Ok(())
}

/// Write the release-locations CSV: one centroid per grid cell.
pub fn write_centroids(cells: &[GridCell], path: &Path) -> Result<()> {
    let rows = cells
        .iter()
        .map(|cell| {
            let centroid = cell.centroid().ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "Cell {} has no centroid (empty geometry)",
                    cell.cell_id
                ))
            })?;
            Ok(CellCentroid {
                cell_id: cell.cell_id,
                centroid_lat: centroid.y(),
                centroid_lon: centroid.x(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_rows(&rows, path)
}
