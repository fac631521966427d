use std::path::Path;

use geo::{BooleanOps, Contains, MultiPolygon};
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::readers::shapefile_reader::read_polygons;

/// The authoritative ocean/land boundary for a grid run.
///
/// The mask polygons are unioned once at load time and the result is
/// passed immutably to every clipping step; the union is never
/// recomputed per cell.
#[derive(Debug, Clone)]
pub struct LandMask {
    region: Option<MultiPolygon<f64>>,
}

impl LandMask {
    /// No land anywhere: every lattice rectangle survives unclipped.
    pub fn empty() -> Self {
        Self { region: None }
    }

    /// Union a set of land polygons into one region.
    pub fn from_polygons(polygons: Vec<MultiPolygon<f64>>) -> Self {
        let region = polygons.into_iter().reduce(|a, b| a.union(&b));
        Self { region }
    }

    /// Load and union a land-mask shapefile (e.g. a GEBCO land mask).
    pub fn from_shapefile(path: &Path) -> Result<Self> {
        let polygons = read_polygons(path)?;
        if polygons.is_empty() {
            return Err(ProcessingError::Config(format!(
                "Land mask {} contains no polygons",
                path.display()
            )));
        }
        let count = polygons.len();
        let mask = Self::from_polygons(polygons);
        info!(polygons = count, "unioned land mask from {}", path.display());
        Ok(mask)
    }

    /// True if the geometry lies entirely within the land region.
    pub fn covers(&self, geometry: &MultiPolygon<f64>) -> bool {
        match &self.region {
            Some(land) => land.contains(geometry),
            None => false,
        }
    }

    /// Subtract the land region from the geometry. An empty result means
    /// the geometry was fully on land.
    pub fn clip(&self, geometry: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        match &self.region {
            Some(land) => geometry.difference(land),
            None => geometry.clone(),
        }
    }

    pub fn region(&self) -> Option<&MultiPolygon<f64>> {
        self.region.as_ref()
    }
}
