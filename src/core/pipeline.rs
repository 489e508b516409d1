use crate::core::{ConfigProvider, MeshRecord, MeshSink, Pipeline, TransformResult};
use crate::utils::error::{LoaderError, Result};

pub struct ColladaPipeline<S: MeshSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: MeshSink, C: ConfigProvider> ColladaPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

/// Diffuse colors come out of the parser as floats in `0.0..=1.0`.
fn albedo_from_diffuse(diffuse: [f32; 4]) -> [u8; 4] {
    diffuse.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Materials are parallel to meshes. A mesh beyond the material list, or a
/// material without a diffuse color, yields no albedo.
fn albedo_at(diffuse_colors: &[Option<[f32; 4]>], index: usize) -> Option<[u8; 4]> {
    diffuse_colors.get(index).copied().flatten().map(albedo_from_diffuse)
}

fn base_entity_path(config: &impl ConfigProvider) -> String {
    match config.entity_path_prefix() {
        Some(prefix) => prefix.to_string(),
        None => rerun::EntityPath::from_file_path(config.filepath()).to_string(),
    }
}

/// Multi-mesh scenes get one child path per mesh so records do not overwrite
/// each other; single-mesh scenes log at the base path itself.
fn mesh_entity_path(base: &str, index: usize, mesh_count: usize) -> String {
    if mesh_count > 1 {
        format!("{}/mesh_{}", base, index)
    } else {
        base.to_string()
    }
}

impl<S: MeshSink, C: ConfigProvider> Pipeline for ColladaPipeline<S, C> {
    fn extract(&self) -> Result<mesh_loader::Scene> {
        let path = self.config.filepath();
        tracing::debug!("Parsing COLLADA file: {}", path.display());

        let loader = mesh_loader::Loader::default();
        loader
            .load_collada(path)
            .map_err(|source| LoaderError::MeshParseError {
                path: path.display().to_string(),
                source,
            })
    }

    fn transform(&self, scene: mesh_loader::Scene) -> Result<TransformResult> {
        let base = base_entity_path(&self.config);
        let mesh_count = scene.meshes.len();
        let diffuse_colors: Vec<Option<[f32; 4]>> = scene
            .materials
            .iter()
            .map(|material| material.color.diffuse)
            .collect();

        let mut meshes = Vec::with_capacity(mesh_count);
        let mut vertex_total = 0;
        let mut triangle_total = 0;

        for (index, mesh) in scene.meshes.iter().enumerate() {
            let normals = if mesh.normals.is_empty() {
                None
            } else {
                Some(mesh.normals.clone())
            };

            let albedo = albedo_at(&diffuse_colors, index);

            vertex_total += mesh.vertices.len();
            triangle_total += mesh.faces.len();

            meshes.push(MeshRecord {
                entity_path: mesh_entity_path(&base, index, mesh_count),
                vertices: mesh.vertices.clone(),
                normals,
                triangles: mesh.faces.clone(),
                albedo,
            });
        }

        Ok(TransformResult {
            meshes,
            vertex_total,
            triangle_total,
        })
    }

    fn load(&self, result: TransformResult) -> Result<usize> {
        let static_logging = self.config.static_logging();

        for record in &result.meshes {
            tracing::debug!(
                "Logging {} vertices to '{}'",
                record.vertices.len(),
                record.entity_path
            );
            self.sink.log_mesh(record, static_logging)?;
        }

        Ok(result.meshes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockSink {
        logged: Arc<Mutex<Vec<(MeshRecord, bool)>>>,
    }

    impl MockSink {
        fn logged(&self) -> Vec<(MeshRecord, bool)> {
            self.logged.lock().unwrap().clone()
        }
    }

    impl MeshSink for MockSink {
        fn log_mesh(&self, record: &MeshRecord, static_logging: bool) -> Result<()> {
            self.logged
                .lock()
                .unwrap()
                .push((record.clone(), static_logging));
            Ok(())
        }
    }

    struct MockConfig {
        filepath: PathBuf,
        entity_path_prefix: Option<String>,
        static_logging: bool,
    }

    impl MockConfig {
        fn new(filepath: &str) -> Self {
            Self {
                filepath: PathBuf::from(filepath),
                entity_path_prefix: None,
                static_logging: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn filepath(&self) -> &Path {
            &self.filepath
        }

        fn entity_path_prefix(&self) -> Option<&str> {
            self.entity_path_prefix.as_deref()
        }

        fn static_logging(&self) -> bool {
            self.static_logging
        }
    }

    fn record(entity_path: &str) -> MeshRecord {
        MeshRecord {
            entity_path: entity_path.to_string(),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: None,
            triangles: vec![[0, 1, 2]],
            albedo: None,
        }
    }

    #[test]
    fn test_albedo_from_diffuse_scales_unit_floats() {
        assert_eq!(albedo_from_diffuse([1.0, 0.5, 0.0, 1.0]), [255, 128, 0, 255]);
        assert_eq!(albedo_from_diffuse([0.0, 0.0, 0.0, 0.0]), [0, 0, 0, 0]);
        // Out-of-range values are clamped rather than wrapped.
        assert_eq!(albedo_from_diffuse([2.0, -1.0, 1.0, 1.0]), [255, 0, 255, 255]);
    }

    #[test]
    fn test_albedo_at_requires_a_diffuse_material_at_the_mesh_index() {
        let colors = [Some([1.0, 0.5, 0.0, 1.0]), None];

        assert_eq!(albedo_at(&colors, 0), Some([255, 128, 0, 255]));
        // Material present but without a diffuse color.
        assert_eq!(albedo_at(&colors, 1), None);
        // Material list shorter than the mesh list.
        assert_eq!(albedo_at(&colors, 2), None);
        assert_eq!(albedo_at(&[], 0), None);
    }

    #[test]
    fn test_base_entity_path_prefers_prefix() {
        let mut config = MockConfig::new("assets/model.dae");
        config.entity_path_prefix = Some("world/assets".to_string());

        assert_eq!(base_entity_path(&config), "world/assets");
    }

    #[test]
    fn test_base_entity_path_derives_from_file_path() {
        let config = MockConfig::new("assets/model.dae");
        let base = base_entity_path(&config);

        assert!(base.ends_with("model.dae"), "got '{}'", base);
        assert!(base.contains("assets"), "got '{}'", base);
    }

    #[test]
    fn test_mesh_entity_path_indexes_only_multi_mesh_scenes() {
        assert_eq!(mesh_entity_path("scene", 0, 1), "scene");
        assert_eq!(mesh_entity_path("scene", 0, 3), "scene/mesh_0");
        assert_eq!(mesh_entity_path("scene", 2, 3), "scene/mesh_2");
    }

    #[test]
    fn test_load_forwards_records_and_static_flag() {
        let sink = MockSink::default();
        let mut config = MockConfig::new("assets/model.dae");
        config.static_logging = true;
        let pipeline = ColladaPipeline::new(sink.clone(), config);

        let result = TransformResult {
            meshes: vec![record("scene/mesh_0"), record("scene/mesh_1")],
            vertex_total: 6,
            triangle_total: 2,
        };

        let logged_count = pipeline.load(result).unwrap();

        assert_eq!(logged_count, 2);
        let logged = sink.logged();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].0.entity_path, "scene/mesh_0");
        assert!(logged[0].1);
        assert_eq!(logged[1].0.entity_path, "scene/mesh_1");
        assert!(logged[1].1);
    }

    #[test]
    fn test_load_with_empty_scene_logs_nothing() {
        let sink = MockSink::default();
        let config = MockConfig::new("assets/model.dae");
        let pipeline = ColladaPipeline::new(sink.clone(), config);

        let result = TransformResult {
            meshes: vec![],
            vertex_total: 0,
            triangle_total: 0,
        };

        assert_eq!(pipeline.load(result).unwrap(), 0);
        assert!(sink.logged().is_empty());
    }

    #[test]
    fn test_extract_missing_file_is_a_parse_error() {
        let sink = MockSink::default();
        let config = MockConfig::new("does/not/exist.dae");
        let pipeline = ColladaPipeline::new(sink, config);

        let err = pipeline.extract().unwrap_err();
        assert!(matches!(err, LoaderError::MeshParseError { .. }));
    }
}
