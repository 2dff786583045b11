// Data models
pub mod stats;
pub mod trending;
