pub mod history;
pub mod metrics;
