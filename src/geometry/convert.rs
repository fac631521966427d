use shapefile as shp;

/// Close a ring so the first and last coordinates coincide, as geo
/// LineStrings require.
fn close_ring(coords: &mut Vec<geo::Coord<f64>>) {
    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(first);
        }
    }
}

/// Signed area of a closed coordinate ring (negative for clockwise,
/// which is the shapefile convention for exterior rings).
fn ring_area(coords: &[geo::Coord<f64>]) -> f64 {
    let mut area = 0.0;
    for pair in coords.windows(2) {
        area += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
    }
    area / 2.0
}

/// Convert a shapefile polygon to a geo MultiPolygon.
///
/// Shapefiles store rings flat, exterior first followed by its holes;
/// orientation (CW exterior, CCW hole) distinguishes the two.
pub fn polygon_to_geo(polygon: &shp::Polygon) -> geo::MultiPolygon<f64> {
    let mut parts: Vec<geo::Polygon<f64>> = Vec::new();
    let mut exterior: Option<geo::LineString<f64>> = None;
    let mut holes: Vec<geo::LineString<f64>> = Vec::new();

    for ring in polygon.rings() {
        let mut coords: Vec<geo::Coord<f64>> = ring
            .points()
            .iter()
            .map(|p| geo::Coord { x: p.x, y: p.y })
            .collect();
        close_ring(&mut coords);
        let is_exterior = ring_area(&coords) < 0.0;
        let ring = geo::LineString(coords);

        if is_exterior {
            if let Some(ext) = exterior.take() {
                parts.push(geo::Polygon::new(ext, std::mem::take(&mut holes)));
            }
            exterior = Some(ring);
        } else {
            holes.push(ring);
        }
    }
    if let Some(ext) = exterior {
        parts.push(geo::Polygon::new(ext, holes));
    }

    geo::MultiPolygon(parts)
}

/// Convert a geo MultiPolygon to a shapefile polygon, restoring the
/// shapefile ring conventions (closed rings, CW exteriors, CCW holes).
pub fn geo_to_polygon(multi: &geo::MultiPolygon<f64>) -> shp::Polygon {
    fn ring_points(ring: &geo::LineString<f64>) -> Vec<shp::Point> {
        let mut points: Vec<shp::Point> = ring
            .points()
            .map(|p| shp::Point { x: p.x(), y: p.y() })
            .collect();
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first.x != last.x || first.y != last.y {
                points.push(first);
            }
        }
        points
    }

    fn signed_area(points: &[shp::Point]) -> f64 {
        let mut area = 0.0;
        for pair in points.windows(2) {
            area += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
        }
        area / 2.0
    }

    let mut rings: Vec<shp::PolygonRing<shp::Point>> = Vec::new();
    for part in &multi.0 {
        let mut exterior = ring_points(part.exterior());
        if signed_area(&exterior) > 0.0 {
            exterior.reverse();
        }
        rings.push(shp::PolygonRing::Outer(exterior));

        for hole in part.interiors() {
            let mut interior = ring_points(hole);
            if signed_area(&interior) < 0.0 {
                interior.reverse();
            }
            rings.push(shp::PolygonRing::Inner(interior));
        }
    }

    shp::Polygon::with_rings(rings)
}
