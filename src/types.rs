use glam::Mat4;

use crate::math::{normal_matrix, Rgb};

/// Maximum number of lights the scene shader iterates over
pub const MAX_LIGHTS: usize = 8;

/// Mesh vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-instance data for GPU, one entry per drawn copy of a mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    /// rgb + emissive intensity
    pub color: [f32; 4],
    /// x = gloss, yzw unused
    pub params: [f32; 4],
}

impl InstanceRaw {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 10] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4, 8 => Float32x4, 9 => Float32x4,
        10 => Float32x4, 11 => Float32x4
    ];

    pub fn new(model: Mat4, color: Rgb, emissive: f32, gloss: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: normal_matrix(&model).to_cols_array_2d(),
            color: [color.r, color.g, color.b, emissive],
            params: [gloss, 0.0, 0.0, 0.0],
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn emissive(&self) -> f32 {
        self.color[3]
    }

    pub fn is_finite(&self) -> bool {
        self.model_matrix().is_finite()
            && self.color.iter().all(|c| c.is_finite())
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Light entry inside the globals uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    /// xyz = position (point) or direction the light travels (directional), w = 1 for point
    pub position: [f32; 4],
    /// rgb + intensity
    pub color: [f32; 4],
    /// x = range for point lights
    pub params: [f32; 4],
}

/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye, w = elapsed time
    pub camera_position: [f32; 4],
    /// rgb + intensity
    pub ambient: [f32; 4],
    /// rgb + enabled flag
    pub fog_color: [f32; 4],
    /// x = near, y = far
    pub fog_range: [f32; 4],
    pub light_count: u32,
    pub _pad: [u32; 3],
    pub lights: [LightRaw; MAX_LIGHTS],
}

impl Default for GlobalsUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_position: [0.0; 4],
            ambient: [1.0, 1.0, 1.0, 0.3],
            fog_color: [0.0; 4],
            fog_range: [0.0; 4],
            light_count: 0,
            _pad: [0; 3],
            lights: [LightRaw::default(); MAX_LIGHTS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn instance_layout_matches_struct_size() {
        // 10 vec4 attributes
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 10 * 16);
    }

    #[test]
    fn globals_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<GlobalsUniform>() % 16, 0);
    }

    #[test]
    fn instance_round_trips_model() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let raw = InstanceRaw::new(model, Rgb::WHITE, 0.5, 0.2);
        assert_eq!(raw.model_matrix(), model);
        assert_eq!(raw.emissive(), 0.5);
        assert!(raw.is_finite());
    }
}
