use geo::{Intersects, Point};
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::{AnalysisRow, GridCell, MetricTables};
use crate::processors::scoring;

/// Joins the metric tables and the structure-presence flag onto the
/// grid cells and derives the normalized, z-scored, and composite
/// columns. One output row per cell, in grid order.
pub struct MetricsAggregator;

impl MetricsAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(
        &self,
        cells: &[GridCell],
        structures: &[Point<f64>],
        tables: &MetricTables,
    ) -> Result<Vec<AnalysisRow>> {
        if cells.is_empty() {
            return Err(ProcessingError::Config(
                "Grid contains no cells to aggregate".to_string(),
            ));
        }
        let matched = cells.iter().filter(|c| tables.has_any(c.cell_id)).count();
        if matched == 0 {
            return Err(ProcessingError::MissingData(
                "No metric table keys overlap the grid cell ids; \
                 check that the tables were built against this grid"
                    .to_string(),
            ));
        }

        let mut rows: Vec<AnalysisRow> = cells
            .iter()
            .map(|cell| {
                // Any structure geometry intersecting the cell counts;
                // touching the boundary is enough.
                let contains_structure = structures
                    .iter()
                    .any(|point| cell.geometry.intersects(point));

                let mut row = AnalysisRow::new(cell.cell_id, contains_structure);
                row.out = tables.out_degree.get(cell.cell_id);
                row.in_degree = tables.in_degree.get(cell.cell_id);
                row.node_betw = tables.betweenness.get(cell.cell_id);
                row.food_av = tables.food_availability.get(cell.cell_id);
                row.sr = tables.self_recruitment.get(cell.cell_id);
                row.community = tables.community.get(cell.cell_id).map(|v| v as i64);
                row
            })
            .collect();

        self.derive_scores(&mut rows);

        info!(
            cells = rows.len(),
            with_metrics = matched,
            with_structures = rows.iter().filter(|r| r.contains_structure).count(),
            "aggregation complete"
        );
        Ok(rows)
    }

    /// Fill in norm_*, z_*, z_sum, and standard_z_sum from the raw
    /// metric columns.
    fn derive_scores(&self, rows: &mut [AnalysisRow]) {
        let raw: [Vec<Option<f64>>; 4] = [
            rows.iter().map(|r| r.out).collect(),
            rows.iter().map(|r| r.in_degree).collect(),
            rows.iter().map(|r| r.node_betw).collect(),
            rows.iter().map(|r| r.food_av).collect(),
        ];

        let normalized: Vec<Vec<Option<f64>>> = raw
            .iter()
            .map(|column| scoring::min_max_normalize(column))
            .collect();
        let z: Vec<Vec<Option<f64>>> = normalized
            .iter()
            .map(|column| scoring::z_scores(column))
            .collect();
        let z_sum = scoring::strict_row_sum(&z);
        let standard = scoring::rescale_symmetric(&z_sum);

        for (i, row) in rows.iter_mut().enumerate() {
            row.norm_out = normalized[0][i];
            row.norm_in = normalized[1][i];
            row.norm_node_betw = normalized[2][i];
            row.norm_food_av = normalized[3][i];
            row.z_out = z[0][i];
            row.z_in = z[1][i];
            row.z_node_betw = z[2][i];
            row.z_food_av = z[3][i];
            row.z_sum = z_sum[i];
            row.standard_z_sum = standard[i];
        }
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricTable;
    use geo::{Coord, MultiPolygon, Rect};

    fn cell(id: u32, min: (f64, f64), max: (f64, f64)) -> GridCell {
        let rect = Rect::new(
            Coord {
                x: min.0,
                y: min.1,
            },
            Coord {
                x: max.0,
                y: max.1,
            },
        );
        GridCell::new(id, MultiPolygon(vec![rect.to_polygon()]))
    }

    fn table(name: &str, entries: &[(u32, f64)]) -> MetricTable {
        let mut t = MetricTable::new(name);
        for &(node, value) in entries {
            t.values.insert(node, value);
        }
        t
    }

    fn tables(entries: &[(u32, f64)]) -> MetricTables {
        MetricTables {
            in_degree: table("in", entries),
            out_degree: table("out", entries),
            betweenness: table("node_betw", entries),
            food_availability: table("food_av", entries),
            self_recruitment: table("sr", entries),
            community: table("community", entries),
        }
    }

    fn three_cells() -> Vec<GridCell> {
        vec![
            cell(0, (0.0, 0.0), (1.0, 1.0)),
            cell(1, (1.0, 0.0), (2.0, 1.0)),
            cell(2, (2.0, 0.0), (3.0, 1.0)),
        ]
    }

    #[test]
    fn test_structure_flag_intersects() {
        let cells = three_cells();
        // One interior point, one touching a boundary between cells
        let structures = vec![Point::new(0.5, 0.5), Point::new(2.0, 0.5)];
        let rows = MetricsAggregator::new()
            .aggregate(&cells, &structures, &tables(&[(0, 1.0), (1, 2.0), (2, 3.0)]))
            .unwrap();

        assert!(rows[0].contains_structure);
        assert!(rows[1].contains_structure); // boundary touch counts
        assert!(rows[2].contains_structure);
    }

    #[test]
    fn test_missing_metric_row_stays_missing() {
        let cells = three_cells();
        let rows = MetricsAggregator::new()
            .aggregate(&cells, &[], &tables(&[(0, 1.0), (2, 3.0)]))
            .unwrap();

        assert_eq!(rows[1].out, None);
        assert_eq!(rows[1].norm_out, None);
        assert_eq!(rows[1].z_out, None);
        assert_eq!(rows[1].z_sum, None);
        assert_eq!(rows[1].standard_z_sum, None);

        // Other cells' normalization is unaffected by the gap
        assert_eq!(rows[0].norm_out, Some(0.0));
        assert_eq!(rows[2].norm_out, Some(1.0));
    }

    #[test]
    fn test_strict_z_sum_policy() {
        let cells = three_cells();
        let mut metric_tables = tables(&[(0, 1.0), (1, 2.0), (2, 3.0)]);
        // Knock out one of the four scored metrics for cell 1
        metric_tables.food_availability.values.remove(&1);

        let rows = MetricsAggregator::new()
            .aggregate(&cells, &[], &metric_tables)
            .unwrap();

        assert!(rows[1].z_out.is_some());
        assert_eq!(rows[1].z_food_av, None);
        assert_eq!(rows[1].z_sum, None, "partial sums must not be emitted");
        // sr and community do not take part in scoring
        assert!(rows[1].sr.is_some());
    }

    #[test]
    fn test_standard_z_sum_bounds() {
        let cells = three_cells();
        let rows = MetricsAggregator::new()
            .aggregate(&cells, &[], &tables(&[(0, 1.0), (1, 2.0), (2, 3.0)]))
            .unwrap();

        for row in &rows {
            let value = row.standard_z_sum.unwrap();
            assert!((-1.0..=1.0).contains(&value));
        }
        // Symmetric inputs: the middle cell sits at the midpoint
        assert!((rows[1].standard_z_sum.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlapping_keys_is_an_error() {
        let cells = three_cells();
        let result =
            MetricsAggregator::new().aggregate(&cells, &[], &tables(&[(100, 1.0)]));

        assert!(matches!(result, Err(ProcessingError::MissingData(_))));
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        let result = MetricsAggregator::new().aggregate(&[], &[], &tables(&[(0, 1.0)]));
        assert!(matches!(result, Err(ProcessingError::Config(_))));
    }
}
