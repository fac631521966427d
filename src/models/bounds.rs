use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};

/// Geographic region to tile, in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct BoundingBox {
    #[validate(range(min = -90.0, max = 90.0))]
    pub min_lat: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub max_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub min_lon: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self> {
        let bounds = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bounds.validate()?;

        if min_lat >= max_lat {
            return Err(ProcessingError::Config(format!(
                "Degenerate bounding box: min_lat {} must be less than max_lat {}",
                min_lat, max_lat
            )));
        }
        if min_lon >= max_lon {
            return Err(ProcessingError::Config(format!(
                "Degenerate bounding box: min_lon {} must be less than max_lon {}",
                min_lon, max_lon
            )));
        }

        Ok(bounds)
    }

    pub fn lat_extent(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_extent(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn mid_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }
}
