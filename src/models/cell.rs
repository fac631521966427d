use geo::{Area, Centroid, MultiPolygon, Point};
use serde::Serialize;

/// One ocean grid cell: either a full lattice rectangle or the
/// land-subtracted remainder of one. The id is assigned in generation
/// order and persisted alongside the geometry, so joins against metric
/// tables never depend on iteration order.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub cell_id: u32,
    pub geometry: MultiPolygon<f64>,
}

impl GridCell {
    pub fn new(cell_id: u32, geometry: MultiPolygon<f64>) -> Self {
        Self { cell_id, geometry }
    }

    pub fn centroid(&self) -> Option<Point<f64>> {
        self.geometry.centroid()
    }

    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }
}

/// One row of the centroids CSV written next to the grid shapefile.
#[derive(Debug, Clone, Serialize)]
pub struct CellCentroid {
    pub cell_id: u32,
    pub centroid_lat: f64,
    pub centroid_lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Rect};

    #[test]
    fn test_centroid_and_area_of_rectangle() {
        let rect = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 1.0 });
        let cell = GridCell::new(0, MultiPolygon(vec![rect.to_polygon()]));

        let centroid = cell.centroid().unwrap();
        assert!((centroid.x() - 1.0).abs() < 1e-12);
        assert!((centroid.y() - 0.5).abs() < 1e-12);
        assert!((cell.area() - 2.0).abs() < 1e-12);
    }
}
