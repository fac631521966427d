pub mod csv_writer;
pub mod grid_writer;

pub use csv_writer::{write_centroids, write_rows};
pub use grid_writer::write_grid;
