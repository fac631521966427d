use std::path::Path;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::MetricTable;
use crate::utils::constants::NODE_COLUMN;

/// Reads per-node metric tables: CSV files with a "Node" join-key
/// column and a single value column (its header name varies by file,
/// e.g. In_Degree, Betweenness, Food_Availability).
pub struct MetricReader {
    key_column: String,
}

impl MetricReader {
    pub fn new() -> Self {
        Self {
            key_column: NODE_COLUMN.to_string(),
        }
    }

    pub fn with_key_column(key_column: &str) -> Self {
        Self {
            key_column: key_column.to_string(),
        }
    }

    /// Read one metric table. `output_name` is the column name the
    /// metric takes in the analysis output (e.g. "In_Degree" -> "in").
    /// A file without the join-key column is a configuration error;
    /// rows with an empty value field are skipped so the metric stays
    /// missing for that node.
    pub fn read_table(&self, path: &Path, output_name: &str) -> Result<MetricTable> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let key_idx = headers
            .iter()
            .position(|h| h.trim() == self.key_column)
            .ok_or_else(|| ProcessingError::MissingColumn {
                file: path.display().to_string(),
                column: self.key_column.clone(),
            })?;
        let value_idx = headers
            .iter()
            .position(|h| h.trim() != self.key_column && !h.trim().is_empty())
            .ok_or_else(|| ProcessingError::MissingColumn {
                file: path.display().to_string(),
                column: "<metric value>".to_string(),
            })?;

        let mut table = MetricTable::new(output_name);
        for result in reader.records() {
            let record = result?;
            let key = record.get(key_idx).unwrap_or("").trim();
            if key.is_empty() {
                continue;
            }
            let node: u32 = key.parse().map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "Invalid node id '{}' in {}",
                    key,
                    path.display()
                ))
            })?;

            let raw = record.get(value_idx).unwrap_or("").trim();
            if raw.is_empty() {
                continue; // missing stays missing
            }
            let value: f64 = raw.parse().map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "Invalid value '{}' for node {} in {}",
                    raw,
                    node,
                    path.display()
                ))
            })?;
            table.values.insert(node, value);
        }

        debug!(
            rows = table.len(),
            column = output_name,
            "read metric table {}",
            path.display()
        );
        Ok(table)
    }
}

impl Default for MetricReader {
    fn default() -> Self {
        Self::new()
    }
}
