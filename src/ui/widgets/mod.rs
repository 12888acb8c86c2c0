pub mod current;
pub mod daily;
pub mod hourly;
pub mod metrics;
pub mod search;
pub mod status;
