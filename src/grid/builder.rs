use geo::{Area, Coord, MultiPolygon, Rect};
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::grid::LandMask;
use crate::models::{BoundingBox, GridCell};
use crate::utils::coordinates::{cell_ground_width_km, km_to_degrees};
use crate::utils::progress::ProgressReporter;

/// Tiles a bounding box into an ocean-only grid.
///
/// Lattice rectangles are generated row-major (latitude outer,
/// longitude inner) with half-open stepping per axis; surviving cells
/// are numbered in generation order and that id is persisted with the
/// grid, so downstream joins do not depend on iteration order.
pub struct GridBuilder {
    bounds: BoundingBox,
    cell_size_deg: f64,
}

impl GridBuilder {
    pub fn new(bounds: BoundingBox, cell_size_km: f64) -> Result<Self> {
        let cell_size_deg = km_to_degrees(cell_size_km)?;
        info!(
            cell_size_km,
            cell_size_deg,
            true_width_km = cell_ground_width_km(bounds.mid_lat(), cell_size_deg),
            "cell size uses the equatorial approximation; cells narrow at higher latitude"
        );
        Ok(Self {
            bounds,
            cell_size_deg,
        })
    }

    pub fn cell_size_deg(&self) -> f64 {
        self.cell_size_deg
    }

    /// Number of lattice rectangles before land removal.
    pub fn lattice_size(&self) -> usize {
        self.axis_origins(self.bounds.min_lat, self.bounds.max_lat).len()
            * self.axis_origins(self.bounds.min_lon, self.bounds.max_lon).len()
    }

    /// Generate the ocean-only cells: drop rectangles fully on land,
    /// clip partially-overlapping ones against the unioned mask, and
    /// drop anything left empty.
    pub fn build(
        &self,
        mask: &LandMask,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<GridCell>> {
        let lat_origins = self.axis_origins(self.bounds.min_lat, self.bounds.max_lat);
        let lon_origins = self.axis_origins(self.bounds.min_lon, self.bounds.max_lon);

        if lat_origins.is_empty() || lon_origins.is_empty() {
            return Err(ProcessingError::Config(format!(
                "Bounding box ({}, {}) x ({}, {}) with cell size {:.4} deg yields an empty lattice",
                self.bounds.min_lat,
                self.bounds.max_lat,
                self.bounds.min_lon,
                self.bounds.max_lon,
                self.cell_size_deg
            )));
        }

        let lattice = lat_origins.len() * lon_origins.len();
        let mut cells = Vec::with_capacity(lattice);
        let mut next_id = 0u32;
        let mut dropped = 0usize;
        let mut clipped = 0usize;

        for &lat in &lat_origins {
            for &lon in &lon_origins {
                if let Some(reporter) = progress {
                    reporter.increment(1);
                }

                let rect = Rect::new(
                    Coord { x: lon, y: lat },
                    Coord {
                        x: lon + self.cell_size_deg,
                        y: lat + self.cell_size_deg,
                    },
                );
                let rectangle = MultiPolygon(vec![rect.to_polygon()]);

                if mask.covers(&rectangle) {
                    dropped += 1;
                    continue;
                }

                let geometry = mask.clip(&rectangle);
                if geometry.0.is_empty() {
                    dropped += 1;
                    continue;
                }
                if geometry.unsigned_area() < rectangle.unsigned_area() - 1e-12 {
                    clipped += 1;
                }

                cells.push(GridCell::new(next_id, geometry));
                next_id += 1;
            }
        }

        if cells.is_empty() {
            return Err(ProcessingError::MissingData(
                "Every lattice cell fell on land; no ocean cells to write".to_string(),
            ));
        }

        info!(
            lattice,
            ocean_cells = cells.len(),
            dropped,
            clipped,
            "grid generation complete"
        );
        Ok(cells)
    }

    /// Half-open stepping: origins start at `min` and stop before `max`,
    /// matching the lattice semantics of a half-open range. The
    /// tolerance keeps accumulated float error from emitting a sliver
    /// cell when the box is an exact multiple of the cell size.
    fn axis_origins(&self, min: f64, max: f64) -> Vec<f64> {
        let limit = max - self.cell_size_deg * 1e-9;
        let mut origins = Vec::new();
        let mut step = 0u32;
        loop {
            let origin = min + f64::from(step) * self.cell_size_deg;
            if origin >= limit {
                break;
            }
            origins.push(origin);
            step += 1;
        }
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Intersects, Rect};

    fn land(min: (f64, f64), max: (f64, f64)) -> MultiPolygon<f64> {
        let r = Rect::new(
            Coord {
                x: min.0,
                y: min.1,
            },
            Coord {
                x: max.0,
                y: max.1,
            },
        );
        MultiPolygon(vec![r.to_polygon()])
    }

    fn build(bounds: BoundingBox, cell_size_km: f64, mask: &LandMask) -> Vec<GridCell> {
        GridBuilder::new(bounds, cell_size_km)
            .unwrap()
            .build(mask, None)
            .unwrap()
    }

    #[test]
    fn test_open_water_box_yields_four_full_cells() {
        // 0.2 x 0.2 degree box at 11.1 km (0.1 deg) cells, no land
        let bounds = BoundingBox::new(50.0, 50.2, -2.0, -1.8).unwrap();
        let cells = build(bounds, 11.1, &LandMask::empty());

        assert_eq!(cells.len(), 4);
        for cell in &cells {
            assert!((cell.area() - 0.01).abs() < 1e-9);
        }
        // Row-major ids: first row south, west to east
        let c0 = cells[0].centroid().unwrap();
        let c1 = cells[1].centroid().unwrap();
        assert!((c0.y() - 50.05).abs() < 1e-9);
        assert!((c0.x() - -1.95).abs() < 1e-9);
        assert!((c1.x() - -1.85).abs() < 1e-9);
    }

    #[test]
    fn test_ids_are_sequential_generation_order() {
        let bounds = BoundingBox::new(0.0, 0.3, 0.0, 0.3).unwrap();
        let cells = build(bounds, 11.1, &LandMask::empty());

        assert_eq!(cells.len(), 9);
        let ids: Vec<u32> = cells.iter().map(|c| c.cell_id).collect();
        assert_eq!(ids, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_cell_fully_on_land_is_dropped() {
        let bounds = BoundingBox::new(0.0, 0.2, 0.0, 0.2).unwrap();
        // Land covers the south-west cell entirely
        let mask = LandMask::from_polygons(vec![land((-0.05, -0.05), (0.1, 0.1))]);
        let cells = build(bounds, 11.1, &mask);

        assert_eq!(cells.len(), 3);
        // Survivors are renumbered sequentially
        let ids: Vec<u32> = cells.iter().map(|c| c.cell_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_coastal_cell_is_clipped_not_dropped() {
        let bounds = BoundingBox::new(0.0, 0.1, 0.0, 0.1).unwrap();
        // Land covers the west half of the single cell
        let mask = LandMask::from_polygons(vec![land((-1.0, -1.0), (0.05, 1.0))]);
        let cells = build(bounds, 11.1, &mask);

        assert_eq!(cells.len(), 1);
        assert!((cells[0].area() - 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_ocean_only_invariant() {
        let bounds = BoundingBox::new(0.0, 0.3, 0.0, 0.3).unwrap();
        let mask = LandMask::from_polygons(vec![land((0.05, 0.05), (0.22, 0.22))]);
        let cells = build(bounds, 11.1, &mask);

        let region = mask.region().unwrap();
        for cell in &cells {
            use geo::BooleanOps;
            let overlap = cell.geometry.intersection(region);
            assert!(overlap.unsigned_area() < 1e-9, "cell {} overlaps land", cell.cell_id);
        }
    }

    #[test]
    fn test_area_round_trip() {
        let bounds = BoundingBox::new(0.0, 0.3, 0.0, 0.3).unwrap();
        let mask_region = land((0.05, 0.05), (0.22, 0.22));
        let mask = LandMask::from_polygons(vec![mask_region.clone()]);
        let cells = build(bounds, 11.1, &mask);

        let total: f64 = cells.iter().map(|c| c.area()).sum();
        let lattice_area = 0.3 * 0.3;
        let land_area = mask_region.unsigned_area();
        assert!((total - (lattice_area - land_area)).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_cell_covers_box_with_one_cell() {
        // Half-open stepping keeps the origin even when the cell
        // extends past the box, matching the lattice range semantics.
        let bounds = BoundingBox::new(0.0, 0.1, 0.0, 0.1).unwrap();
        let cells = build(bounds, 111.0, &LandMask::empty());

        assert_eq!(cells.len(), 1);
        assert!(cells[0]
            .geometry
            .intersects(&geo::Point::new(0.05, 0.05)));
    }

    #[test]
    fn test_all_land_is_an_error() {
        let bounds = BoundingBox::new(0.0, 0.1, 0.0, 0.1).unwrap();
        let mask = LandMask::from_polygons(vec![land((-1.0, -1.0), (1.0, 1.0))]);
        let result = GridBuilder::new(bounds, 11.1).unwrap().build(&mask, None);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_cell_size_is_an_error() {
        let bounds = BoundingBox::new(0.0, 0.1, 0.0, 0.1).unwrap();
        assert!(GridBuilder::new(bounds, 0.0).is_err());
        assert!(GridBuilder::new(bounds, -5.0).is_err());
    }

    #[test]
    fn test_lattice_size() {
        let bounds = BoundingBox::new(0.0, 0.3, 0.0, 0.2).unwrap();
        let builder = GridBuilder::new(bounds, 11.1).unwrap();
        assert_eq!(builder.lattice_size(), 6);
    }
}
