use geo::{BoundingRect, Intersects, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::models::GridCell;

/// Bounding box of one grid cell in the R-tree, keyed back by index.
#[derive(Debug, Clone)]
struct CellEnvelope {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for CellEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Spatial index over grid cells for point-in-cell lookup. Candidates
/// come from the R-tree; the exact test runs on the clipped geometry,
/// so coastline-following cells are handled correctly.
pub struct CellIndex<'a> {
    cells: &'a [GridCell],
    rtree: RTree<CellEnvelope>,
}

impl<'a> CellIndex<'a> {
    pub fn new(cells: &'a [GridCell]) -> Self {
        let envelopes = cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                cell.geometry
                    .bounding_rect()
                    .map(|bbox| CellEnvelope { idx, bbox })
            })
            .collect();
        Self {
            cells,
            rtree: RTree::bulk_load(envelopes),
        }
    }

    /// Find the cell whose geometry the point falls on, if any.
    /// Points on a cell boundary count as inside.
    pub fn locate(&self, point: Point<f64>) -> Option<&'a GridCell> {
        let query = AABB::from_point([point.x(), point.y()]);
        self.rtree
            .locate_in_envelope_intersecting(&query)
            .map(|envelope| &self.cells[envelope.idx])
            .find(|cell| cell.geometry.intersects(&point))
    }
}
