pub mod constants;
pub mod coordinates;
pub mod progress;

pub use coordinates::{cell_ground_width_km, haversine_distance, km_to_degrees};
