pub mod classifier;
pub mod ratio;
