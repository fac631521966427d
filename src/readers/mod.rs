pub mod grid_reader;
pub mod metric_reader;
pub mod particle_reader;
pub mod sample_reader;
pub mod shapefile_reader;

pub use grid_reader::read_grid;
pub use metric_reader::MetricReader;
pub use particle_reader::read_particle_tracks;
pub use sample_reader::{read_samples, SampleFilter};
pub use shapefile_reader::{read_points, read_polygons};
