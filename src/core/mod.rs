pub mod classifier;
pub mod model;
pub mod stats;
