pub mod attendance;
pub mod calculator;
pub mod config;
pub mod del;
pub mod details;
pub mod log;
pub mod membership;
pub mod payment;
pub mod plan;
pub mod registry;
