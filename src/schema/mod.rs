pub mod config;
pub mod phonotactics;
