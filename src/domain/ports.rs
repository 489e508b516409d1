use crate::domain::model::{MeshRecord, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn filepath(&self) -> &Path;
    fn entity_path_prefix(&self) -> Option<&str>;
    fn static_logging(&self) -> bool;
}

/// Destination for transformed meshes. Production logs to a Rerun recording
/// stream; tests capture the records in memory.
pub trait MeshSink {
    fn log_mesh(&self, record: &MeshRecord, static_logging: bool) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<mesh_loader::Scene>;
    fn transform(&self, scene: mesh_loader::Scene) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<usize>;
}
