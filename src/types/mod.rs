pub mod candidate;
pub mod config;
pub mod criteria;
pub mod metrics;
pub mod report;
pub mod scoring;
