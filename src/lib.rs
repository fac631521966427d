pub mod cli;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
