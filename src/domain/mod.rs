pub mod projection;
pub mod weather;
