pub mod core;
pub mod engine;
pub mod events;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod status;
pub mod stores;
pub mod utils;
