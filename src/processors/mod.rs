pub mod aggregator;
pub mod sample_mapper;
pub mod scoring;
pub mod settlement;

pub use aggregator::MetricsAggregator;
pub use sample_mapper::SampleMapper;
pub use settlement::SettlementAssigner;
