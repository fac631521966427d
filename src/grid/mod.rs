pub mod builder;
pub mod land_mask;

pub use builder::GridBuilder;
pub use land_mask::LandMask;
