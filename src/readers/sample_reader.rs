use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::SamplePoint;
use crate::utils::constants::SAMPLE_COLUMNS;

/// Inclusive date-range filter for sample rows. With no bounds set,
/// every row passes; with a bound set, undated rows are excluded
/// because they cannot be placed inside the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SampleFilter {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn accepts(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match date {
            None => false,
            Some(d) => {
                self.start.map_or(true, |start| d >= start)
                    && self.end.map_or(true, |end| d <= end)
            }
        }
    }
}

/// Read point samples, applying the date filter. An empty result is a
/// configuration error: either the file had no samples or the time
/// range matched none.
pub fn read_samples(path: &Path, filter: &SampleFilter) -> Result<Vec<SamplePoint>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for column in SAMPLE_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(ProcessingError::MissingColumn {
                file: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut samples = Vec::new();
    let mut total = 0usize;
    for result in reader.deserialize::<SamplePoint>() {
        let sample = result?;
        total += 1;
        if filter.accepts(sample.date) {
            samples.push(sample);
        }
    }

    if samples.is_empty() {
        return Err(ProcessingError::MissingData(if total == 0 {
            format!("{} contains no samples", path.display())
        } else {
            "No data found within the specified time range".to_string()
        }));
    }

    debug!(
        kept = samples.len(),
        total,
        "read samples from {}",
        path.display()
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_read_all_samples() {
        let file = write_csv("lon,lat,total_p\n-2.0,50.0,10.5\n-2.1,50.1,8.0\n");
        let samples = read_samples(file.path(), &SampleFilter::default()).unwrap();

        assert_eq!(samples.len(), 2);
        assert!((samples[0].total_p - 10.5).abs() < 1e-12);
        assert!(samples[0].date.is_none());
    }

    #[test]
    fn test_date_filter_inclusive() {
        let file = write_csv(
            "lon,lat,total_p,date\n\
             -2.0,50.0,1.0,2024-01-01\n\
             -2.0,50.0,2.0,2024-01-05\n\
             -2.0,50.0,3.0,2024-01-10\n",
        );
        let filter = SampleFilter::new(Some(date("2024-01-05")), Some(date("2024-01-10")));
        let samples = read_samples(file.path(), &filter).unwrap();

        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_empty_time_range_is_an_error() {
        let file = write_csv("lon,lat,total_p,date\n-2.0,50.0,1.0,2024-01-01\n");
        let filter = SampleFilter::new(Some(date("2025-01-01")), None);
        let result = read_samples(file.path(), &filter);

        assert!(matches!(result, Err(ProcessingError::MissingData(_))));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_csv("lon,lat\n-2.0,50.0\n");
        assert!(matches!(
            read_samples(file.path(), &SampleFilter::default()),
            Err(ProcessingError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_undated_rows_excluded_by_filter() {
        let filter = SampleFilter::new(Some(date("2024-01-01")), None);
        assert!(!filter.accepts(None));
        assert!(filter.accepts(Some(date("2024-06-01"))));
    }
}
