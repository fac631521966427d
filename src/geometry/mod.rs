pub mod convert;
pub mod index;

pub use index::CellIndex;
