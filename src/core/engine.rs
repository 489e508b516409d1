use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct LoaderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LoaderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract -> transform -> load and returns the number of logged
    /// records. Progress goes to stderr via tracing; stdout belongs to the
    /// recording stream.
    pub fn run(&self) -> Result<usize> {
        tracing::info!("Extracting mesh data...");
        let scene = self.pipeline.extract()?;
        tracing::info!("Parsed {} mesh(es)", scene.meshes.len());

        let result = self.pipeline.transform(scene)?;
        tracing::info!(
            "Prepared {} record(s): {} vertices, {} triangles",
            result.meshes.len(),
            result.vertex_total,
            result.triangle_total
        );

        let logged = self.pipeline.load(result)?;
        tracing::info!("Logged {} record(s)", logged);

        Ok(logged)
    }
}
