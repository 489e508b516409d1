/// A single mesh, decoupled from both the parser's and the SDK's types so the
/// transform stage can be tested against plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRecord {
    pub entity_path: String,
    pub vertices: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub triangles: Vec<[u32; 3]>,
    /// Unmultiplied RGBA, from the material's diffuse color.
    pub albedo: Option<[u8; 4]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub meshes: Vec<MeshRecord>,
    pub vertex_total: usize,
    pub triangle_total: usize,
}
