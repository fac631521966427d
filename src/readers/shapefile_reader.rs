use std::path::Path;

use geo::{MultiPolygon, Point};
use shapefile::{Reader, Shape};

use crate::error::{ProcessingError, Result};
use crate::geometry::convert::polygon_to_geo;

/// Read every polygon in a shapefile, ignoring attribute records.
pub fn read_polygons(path: &Path) -> Result<Vec<MultiPolygon<f64>>> {
    let mut reader = Reader::from_path(path)?;
    let mut polygons = Vec::with_capacity(reader.shape_count()?);

    for result in reader.iter_shapes_and_records() {
        let (shape, _record) = result?;
        match shape {
            Shape::Polygon(polygon) => polygons.push(polygon_to_geo(&polygon)),
            Shape::NullShape => continue,
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Expected polygons in {}, found {:?}",
                    path.display(),
                    other.shapetype()
                )))
            }
        }
    }

    Ok(polygons)
}

/// Read point geometries (e.g. structure locations) from a shapefile.
pub fn read_points(path: &Path) -> Result<Vec<Point<f64>>> {
    let mut reader = Reader::from_path(path)?;
    let mut points = Vec::with_capacity(reader.shape_count()?);

    for result in reader.iter_shapes_and_records() {
        let (shape, _record) = result?;
        match shape {
            Shape::Point(p) => points.push(Point::new(p.x, p.y)),
            Shape::PointM(p) => points.push(Point::new(p.x, p.y)),
            Shape::PointZ(p) => points.push(Point::new(p.x, p.y)),
            Shape::Multipoint(mp) => {
                points.extend(mp.points().iter().map(|p| Point::new(p.x, p.y)))
            }
            Shape::NullShape => continue,
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Expected points in {}, found {:?}",
                    path.display(),
                    other.shapetype()
                )))
            }
        }
    }

    Ok(points)
}
