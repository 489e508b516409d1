pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{engine::LoaderEngine, pipeline::ColladaPipeline};
pub use adapters::RerunSink;
pub use config::LoaderConfig;
pub use utils::error::{LoaderError, Result};
