pub mod bounds;
pub mod cell;
pub mod metrics;
pub mod particle;
pub mod sample;

pub use bounds::BoundingBox;
pub use cell::{CellCentroid, GridCell};
pub use metrics::{AnalysisRow, MetricTable, MetricTables};
pub use particle::{ParticleAssignment, ParticleTrack};
pub use sample::{CellAverage, SamplePoint};
