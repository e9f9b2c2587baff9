mod helpers;
mod mesh;
mod targets;

use app_core::{AppState, Light, PARTICLE_SIZE};
use glam::{Mat4, Vec3};
use mesh::GpuMesh;
use targets::DepthTarget;
use web_sys as web;
use wgpu::util::DeviceExt;

const MAX_POINT_LIGHTS: usize = 2;

// Two triangles as a strip, centered on the particle.
const QUAD_CORNERS: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5], [0.5, 0.5]];

/// Per-frame uniforms; field order matches `Frame` in scene.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog_color: [f32; 4],
    fog_params: [f32; 4],
    ambient: [f32; 4],
    point_pos: [[f32; 4]; MAX_POINT_LIGHTS],
    point_color: [[f32; 4]; MAX_POINT_LIGHTS],
    dir_light: [f32; 4],
    dir_color: [f32; 4],
    particle_tint: [f32; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
}

/// Per-object uniforms; matches `Obj` in scene.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    pbr: [f32; 4],
}

impl FrameUniforms {
    fn from_state(state: &AppState) -> Self {
        let cam = &state.camera;
        let env = &state.environment;
        let (right, up) = cam.billboard_axes();
        let mut u = Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            fog_color: helpers::linear_rgba(env.fog_color, 1.0),
            fog_params: [env.fog_near, env.fog_far, 0.0, 0.0],
            ambient: [0.0; 4],
            point_pos: [[0.0, 0.0, 0.0, 1.0]; MAX_POINT_LIGHTS],
            point_color: [[0.0; 4]; MAX_POINT_LIGHTS],
            dir_light: [0.0, 1.0, 0.0, 0.0],
            dir_color: [0.0; 4],
            particle_tint: helpers::linear_rgba(state.particles.tint, PARTICLE_SIZE),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
        };
        let mut points = 0;
        for light in &state.lights {
            match *light {
                Light::Ambient { color, intensity } => {
                    u.ambient = (helpers::linear_rgb(color) * intensity).extend(1.0).to_array();
                }
                Light::Point {
                    color,
                    intensity,
                    position,
                    range,
                    ..
                } => {
                    if points == MAX_POINT_LIGHTS {
                        log::warn!("[render] ignoring point light beyond {MAX_POINT_LIGHTS}");
                        continue;
                    }
                    u.point_pos[points] = position.extend(range).to_array();
                    u.point_color[points] =
                        (helpers::linear_rgb(color) * intensity).extend(1.0).to_array();
                    points += 1;
                }
                Light::Directional {
                    color,
                    intensity,
                    position,
                } => {
                    // aims at the origin
                    u.dir_light = position.try_normalize().unwrap_or(Vec3::Y).extend(0.0).to_array();
                    u.dir_color = (helpers::linear_rgb(color) * intensity).extend(1.0).to_array();
                }
            }
        }
        u
    }
}

impl ObjectUniforms {
    fn from_object(obj: &app_core::SceneObject) -> Self {
        let model: Mat4 = obj.transform.matrix();
        let m = &obj.material;
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: helpers::linear_rgba(m.color, 1.0),
            emissive: (helpers::linear_rgb(m.emissive) * m.emissive_intensity)
                .extend(1.0)
                .to_array(),
            pbr: [m.metalness, m.roughness, 0.0, 0.0],
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth: DepthTarget,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,

    object_bgl: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    object_stride: u64,
    object_capacity: usize,
    object_staging: Vec<u8>,

    fill_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,

    meshes: Vec<GpuMesh>,
    quad_buffer: wgpu::Buffer,
    particle_buffer: wgpu::Buffer,
    particle_capacity: usize,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, state: &AppState) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::SCENE_WGSL.into()),
        });

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<FrameUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ObjectUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let object_stride = helpers::align_up(
            std::mem::size_of::<ObjectUniforms>() as u64,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let object_capacity = state.objects.len().max(1);
        let (object_buffer, object_bind_group) =
            create_object_binding(&device, &object_bgl, object_stride, object_capacity);

        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let particle_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&frame_bgl],
            push_constant_ranges: &[],
        });
        let fill_pipeline = helpers::make_mesh_pipeline(
            &device,
            "fill_pipeline",
            &mesh_layout,
            &shader,
            "fs_mesh",
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let wire_pipeline = helpers::make_mesh_pipeline(
            &device,
            "wire_pipeline",
            &mesh_layout,
            &shader,
            "fs_wire",
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        let particle_pipeline =
            helpers::make_particle_pipeline(&device, &particle_layout, &shader, format);

        let meshes = state
            .objects
            .iter()
            .map(|o| GpuMesh::upload(&device, &o.name, &o.mesh))
            .collect();

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_quad"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let particle_capacity = state.particles.len().max(1);
        let particle_buffer = create_particle_buffer(&device, particle_capacity);

        log::info!(
            "[gpu] surface {}x{} format={:?} meshes={} particles={}",
            width,
            height,
            format,
            state.objects.len(),
            state.particles.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            frame_buffer,
            frame_bind_group,
            object_bgl,
            object_buffer,
            object_bind_group,
            object_stride,
            object_capacity,
            object_staging: Vec::new(),
            fill_pipeline,
            wire_pipeline,
            particle_pipeline,
            meshes,
            quad_buffer,
            particle_buffer,
            particle_capacity,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn write_uniforms(&mut self, state: &AppState) {
        let frame = FrameUniforms::from_state(state);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        if state.objects.len() > self.object_capacity {
            self.object_capacity = state.objects.len();
            (self.object_buffer, self.object_bind_group) = create_object_binding(
                &self.device,
                &self.object_bgl,
                self.object_stride,
                self.object_capacity,
            );
        }
        let stride = self.object_stride as usize;
        self.object_staging.clear();
        self.object_staging.resize(stride * state.objects.len(), 0);
        for (i, obj) in state.objects.iter().enumerate() {
            let u = ObjectUniforms::from_object(obj);
            let bytes = bytemuck::bytes_of(&u);
            self.object_staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        if !self.object_staging.is_empty() {
            self.queue
                .write_buffer(&self.object_buffer, 0, &self.object_staging);
        }

        if state.particles.len() > self.particle_capacity {
            self.particle_capacity = state.particles.len();
            self.particle_buffer = create_particle_buffer(&self.device, self.particle_capacity);
        }
        if !state.particles.is_empty() {
            self.queue.write_buffer(
                &self.particle_buffer,
                0,
                bytemuck::cast_slice(&state.particles.positions),
            );
        }
    }

    pub fn render(&mut self, state: &AppState) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(state);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(helpers::clear_color(
                            state.environment.background,
                        )),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);

            for (i, (obj, mesh)) in state.objects.iter().zip(&self.meshes).enumerate() {
                let offset = (i as u64 * self.object_stride) as u32;
                rpass.set_bind_group(1, &self.object_bind_group, &[offset]);
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                if obj.material.wireframe {
                    rpass.set_pipeline(&self.wire_pipeline);
                    rpass.set_index_buffer(mesh.edges.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.edge_index_count, 0, 0..1);
                } else {
                    rpass.set_pipeline(&self.fill_pipeline);
                    rpass.set_index_buffer(mesh.triangles.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.triangle_index_count, 0, 0..1);
                }
            }

            // Particles last so their blending sees the opaque depth.
            let count = state.particles.len().min(self.particle_capacity) as u32;
            if count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_bind_group(0, &self.frame_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.particle_buffer.slice(..));
                rpass.draw(0..QUAD_CORNERS.len() as u32, 0..count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_object_binding(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("object_uniforms"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("object_bg"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniforms>() as u64),
            }),
        }],
    });
    (buffer, bind_group)
}

fn create_particle_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particle_centers"),
        size: (capacity * std::mem::size_of::<Vec3>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
