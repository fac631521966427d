use std::path::Path;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::ParticleTrack;
use crate::utils::constants::PARTICLE_COLUMNS;

/// Read particle release/settlement endpoints from CSV. Endpoint
/// extraction from the tracking model's output is an upstream step;
/// this file carries one row per particle.
pub fn read_particle_tracks(path: &Path) -> Result<Vec<ParticleTrack>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for column in PARTICLE_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(ProcessingError::MissingColumn {
                file: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut tracks = Vec::new();
    for result in reader.deserialize::<ParticleTrack>() {
        tracks.push(result?);
    }
    if tracks.is_empty() {
        return Err(ProcessingError::MissingData(format!(
            "{} contains no particle tracks",
            path.display()
        )));
    }

    debug!(particles = tracks.len(), "read tracks from {}", path.display());
    Ok(tracks)
}
