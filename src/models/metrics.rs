use std::collections::HashMap;

use serde::Serialize;

/// A per-node metric table read from CSV, keyed by the "Node" column.
#[derive(Debug, Clone, Default)]
pub struct MetricTable {
    /// Output column name in the analysis CSV (e.g. "In_Degree" becomes "in")
    pub name: String,
    pub values: HashMap<u32, f64>,
}

impl MetricTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: HashMap::new(),
        }
    }

    pub fn get(&self, cell_id: u32) -> Option<f64> {
        self.values.get(&cell_id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The six metric tables joined onto the grid.
#[derive(Debug, Clone)]
pub struct MetricTables {
    pub in_degree: MetricTable,
    pub out_degree: MetricTable,
    pub betweenness: MetricTable,
    pub food_availability: MetricTable,
    pub self_recruitment: MetricTable,
    pub community: MetricTable,
}

impl MetricTables {
    /// True if any table carries a value for the given cell.
    pub fn has_any(&self, cell_id: u32) -> bool {
        self.in_degree.get(cell_id).is_some()
            || self.out_degree.get(cell_id).is_some()
            || self.betweenness.get(cell_id).is_some()
            || self.food_availability.get(cell_id).is_some()
            || self.self_recruitment.get(cell_id).is_some()
            || self.community.get(cell_id).is_some()
    }
}

/// Final joined and derived record per grid cell. Missing metrics stay
/// missing (empty CSV fields), never zero-filled, so normalization over
/// the remaining cells is unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRow {
    #[serde(rename = "Cell ID")]
    pub cell_id: u32,
    pub contains_structure: bool,

    pub out: Option<f64>,
    #[serde(rename = "in")]
    pub in_degree: Option<f64>,
    pub node_betw: Option<f64>,
    pub food_av: Option<f64>,
    pub sr: Option<f64>,
    pub community: Option<i64>,

    pub norm_out: Option<f64>,
    pub norm_in: Option<f64>,
    pub norm_node_betw: Option<f64>,
    pub norm_food_av: Option<f64>,

    pub z_out: Option<f64>,
    pub z_in: Option<f64>,
    pub z_node_betw: Option<f64>,
    pub z_food_av: Option<f64>,

    pub z_sum: Option<f64>,
    pub standard_z_sum: Option<f64>,
}

impl AnalysisRow {
    /// A row with every metric missing; raw and derived columns are
    /// filled in by the aggregator.
    pub fn new(cell_id: u32, contains_structure: bool) -> Self {
        Self {
            cell_id,
            contains_structure,
            out: None,
            in_degree: None,
            node_betw: None,
            food_av: None,
            sr: None,
            community: None,
            norm_out: None,
            norm_in: None,
            norm_node_betw: None,
            norm_food_av: None,
            z_out: None,
            z_in: None,
            z_node_betw: None,
            z_food_av: None,
            z_sum: None,
            standard_z_sum: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_table_lookup() {
        let mut table = MetricTable::new("in");
        table.values.insert(3, 0.25);

        assert_eq!(table.get(3), Some(0.25));
        assert_eq!(table.get(4), None);
        assert_eq!(table.len(), 1);
    }
}
