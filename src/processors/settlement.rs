use geo::Point;
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::geometry::CellIndex;
use crate::models::{GridCell, ParticleAssignment, ParticleTrack};
use crate::utils::constants::OUTSIDE_GRID_LABEL;

/// Assigns each particle's release and settlement endpoints to the grid
/// cell containing them. Endpoints outside every cell get the
/// "outside grid domain" sentinel rather than an empty field.
pub struct SettlementAssigner;

impl SettlementAssigner {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(
        &self,
        cells: &[GridCell],
        tracks: &[ParticleTrack],
    ) -> Result<Vec<ParticleAssignment>> {
        if cells.is_empty() {
            return Err(ProcessingError::Config(
                "Grid contains no cells to assign particles to".to_string(),
            ));
        }

        let index = CellIndex::new(cells);
        let label = |lon: f64, lat: f64| {
            index
                .locate(Point::new(lon, lat))
                .map(|cell| cell.cell_id.to_string())
                .unwrap_or_else(|| OUTSIDE_GRID_LABEL.to_string())
        };

        let assignments: Vec<ParticleAssignment> = tracks
            .iter()
            .map(|track| ParticleAssignment {
                particle_id: track.particle_id,
                release_poly: label(track.release_lon, track.release_lat),
                settlement_poly: label(track.settlement_lon, track.settlement_lat),
            })
            .collect();

        let settled = assignments
            .iter()
            .filter(|a| a.settlement_poly != OUTSIDE_GRID_LABEL)
            .count();
        info!(
            particles = assignments.len(),
            settled,
            lost = assignments.len() - settled,
            "settlement assignment complete"
        );
        Ok(assignments)
    }
}

impl Default for SettlementAssigner {
    fn default() -> Self {
        Self::new()
    }
}
