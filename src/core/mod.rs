pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{MeshRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, MeshSink, Pipeline};
pub use crate::utils::error::Result;
