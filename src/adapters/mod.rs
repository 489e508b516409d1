use crate::config::LoaderConfig;
use crate::core::{MeshRecord, MeshSink};
use crate::utils::error::Result;

/// Logs meshes to a Rerun recording stream.
pub struct RerunSink {
    rec: rerun::RecordingStream,
}

impl RerunSink {
    /// Opens a recording stream over stdout, which is how external
    /// data-loaders hand their output to the viewer.
    pub fn stdout(config: &LoaderConfig) -> Result<Self> {
        let mut builder = rerun::RecordingStreamBuilder::new(config.effective_application_id());

        if let Some(recording_id) = config.effective_recording_id() {
            builder = builder.recording_id(recording_id);
        }

        Ok(Self {
            rec: builder.stdout()?,
        })
    }
}

fn to_mesh3d(record: &MeshRecord) -> rerun::Mesh3D {
    let mut mesh = rerun::Mesh3D::new(&record.vertices);

    if !record.triangles.is_empty() {
        mesh = mesh.with_triangle_indices(record.triangles.iter().copied());
    }

    if let Some(normals) = &record.normals {
        mesh = mesh.with_vertex_normals(normals);
    }

    if let Some([r, g, b, a]) = record.albedo {
        mesh = mesh.with_albedo_factor(rerun::Rgba32::from_unmultiplied_rgba(r, g, b, a));
    }

    mesh
}

impl MeshSink for RerunSink {
    fn log_mesh(&self, record: &MeshRecord, static_logging: bool) -> Result<()> {
        let entity_path = rerun::EntityPath::parse_forgiving(&record.entity_path);
        let mesh = to_mesh3d(record);

        if static_logging {
            self.rec.log_static(entity_path, &mesh)?;
        } else {
            self.rec.log(entity_path, &mesh)?;
        }

        Ok(())
    }
}
