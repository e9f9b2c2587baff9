use app_core::MeshData;
use wgpu::util::DeviceExt;

/// GPU copy of one object's mesh: a shared vertex buffer with triangle
/// indices for the filled pass and edge indices for the wireframe pass.
pub(crate) struct GpuMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) triangles: wgpu::Buffer,
    pub(crate) triangle_index_count: u32,
    pub(crate) edges: wgpu::Buffer,
    pub(crate) edge_index_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let edge_indices = mesh.edge_indices();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vertices")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_triangles")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edges = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_edges")),
            contents: bytemuck::cast_slice(&edge_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            triangles,
            triangle_index_count: mesh.indices.len() as u32,
            edges,
            edge_index_count: edge_indices.len() as u32,
        }
    }
}
