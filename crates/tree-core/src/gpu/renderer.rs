use super::helpers::{create_depth_texture, DEPTH_FORMAT};
use super::SCENE_WGSL;
use crate::constants::*;
use crate::mesh::{self, Mesh, Vertex};
use crate::particle::{GroupKind, ParticleGroup};
use crate::scene::{Ambient, Lighting, Material, Scene};
use crate::state::Camera;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct LightRaw {
    position: [f32; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    fog_color: [f32; 4],
    fog_range: [f32; 4],
    lights: [LightRaw; 3],
}

impl Uniforms {
    /// `root` places the lights alongside the decorations.
    pub fn new(camera: &Camera, lighting: &Lighting, elapsed: f32, root: Mat4) -> Self {
        let rgb4 = |c: [f32; 3], w: f32| [c[0], c[1], c[2], w];
        let lights = lighting.points.map(|p| LightRaw {
            position: root.transform_point3(p.position).extend(p.range).to_array(),
            color: rgb4(p.color, p.intensity),
        });
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(elapsed).to_array(),
            ambient: rgb4(lighting.ambient_color, lighting.ambient_intensity),
            fog_color: rgb4(lighting.fog_color, 1.0),
            fog_range: [lighting.fog_near, lighting.fog_far, 0.0, 0.0],
            lights,
        }
    }
}

/// Per-instance data; must match `VsIn` locations 2..=8 in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// rgb = emissive * intensity, w = 1.0 for unlit instances
    pub emissive: [f32; 4],
    /// x = metalness, y = roughness, z = 1.0 skips fog
    pub material: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4
    ];

    pub fn lit(model: Mat4, color: [f32; 3], material: &Material) -> Self {
        let e = material.emissive;
        let k = material.emissive_intensity;
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            emissive: [e[0] * k, e[1] * k, e[2] * k, 0.0],
            material: [material.metalness, material.roughness, 0.0, 0.0],
        }
    }

    pub fn unlit(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            emissive: [0.0, 0.0, 0.0, 1.0],
            material: [0.0; 4],
        }
    }

    /// Unlit and outside the fog, for the distant starfield.
    pub fn sky(model: Mat4, color: [f32; 3]) -> Self {
        let mut raw = Self::unlit(model, color);
        raw.material[2] = 1.0;
        raw
    }

    pub fn is_fogged(&self) -> bool {
        self.material[2] < 0.5
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Fill `out` with one instance per particle, in world space.
pub fn pack_group(group: &ParticleGroup, root: Mat4, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let parent = root * group.container_matrix();
    let material = Material::for_group(group.kind());
    out.extend(
        group
            .transforms()
            .iter()
            .zip(group.colors())
            .map(|(transform, color)| InstanceRaw::lit(parent * *transform, *color, &material)),
    );
}

fn pack_starfield(ambient: &Ambient, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let color = [0.8, 0.8, 0.85];
    out.extend(ambient.stars.iter().map(|p| {
        InstanceRaw::sky(
            Mat4::from_scale_rotation_translation(
                Vec3::splat(STARFIELD_SCALE),
                glam::Quat::IDENTITY,
                *p,
            ),
            color,
        )
    }));
}

fn pack_sparkles(ambient: &Ambient, root: Mat4, elapsed: f32, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let rose = hex_rgb(GOLD_ROSE);
    // opaque pipeline; fold the opacity into the colour
    let color = rose.map(|c| c * SPARKLE_OPACITY);
    out.extend(ambient.sparkles.iter().map(|s| {
        let p = Ambient::sparkle_position(s, elapsed);
        InstanceRaw::unlit(
            root * Mat4::from_translation(p) * Mat4::from_scale(Vec3::splat(SPARKLE_SCALE)),
            color,
        )
    }));
}

fn pack_ground(ambient: &Ambient, root: Mat4, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let material = Material {
        emissive: [0.0; 3],
        emissive_intensity: 0.0,
        metalness: 0.8,
        roughness: 0.4,
    };
    out.push(InstanceRaw::lit(
        root * Mat4::from_translation(Vec3::new(0.0, ambient.ground_y, 0.0)),
        hex_rgb(BG_END),
        &material,
    ));
}

struct MeshBuffer {
    vertices: wgpu::Buffer,
    vertex_count: u32,
}

impl MeshBuffer {
    fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertices,
            vertex_count: mesh.vertex_count(),
        }
    }
}

/// One instanced draw: a mesh plus a growable instance buffer.
struct Batch {
    label: &'static str,
    mesh: usize,
    instances: Option<wgpu::Buffer>,
    capacity: usize,
    count: u32,
}

impl Batch {
    fn new(label: &'static str, mesh: usize) -> Self {
        Self {
            label,
            mesh,
            instances: None,
            capacity: 0,
            count: 0,
        }
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[InstanceRaw]) {
        self.count = data.len() as u32;
        if data.is_empty() {
            return;
        }
        if self.instances.is_none() || data.len() > self.capacity {
            log::debug!("[gpu] {} instance buffer: {} slots", self.label, data.len());
            self.instances = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: std::mem::size_of_val(data) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = data.len();
        }
        if let Some(buffer) = &self.instances {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
        }
    }
}

// Mesh slots
const MESH_LEAF: usize = 0;
const MESH_SPHERE: usize = 1;
const MESH_CUBE: usize = 2;
const MESH_STAR: usize = 3;
const MESH_PLANE: usize = 4;
const MESH_MOTE: usize = 5;

// Batch slots; the first four follow `GroupKind` order
const BATCH_GROUND: usize = 4;
const BATCH_STARFIELD: usize = 5;
const BATCH_SPARKLES: usize = 6;

fn mesh_for(kind: GroupKind) -> usize {
    match kind {
        GroupKind::Leaves => MESH_LEAF,
        GroupKind::Ornaments => MESH_SPHERE,
        GroupKind::Gifts => MESH_CUBE,
        GroupKind::Star => MESH_STAR,
    }
}

pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    meshes: Vec<MeshBuffer>,
    batches: Vec<Batch>,
    scratch: Vec<InstanceRaw>,
    statics_uploaded: bool,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: mesh vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBS,
            },
            // slot 1: per-instance data
            InstanceRaw::layout(),
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // leaves and the ground are thin; shade both sides
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let meshes = vec![
            MeshBuffer::new(device, "leaf_vb", &mesh::leaf()),
            MeshBuffer::new(device, "sphere_vb", &mesh::sphere(0.5, 16, 12)),
            MeshBuffer::new(device, "cube_vb", &mesh::cube(1.0)),
            MeshBuffer::new(device, "star_vb", &mesh::star()),
            MeshBuffer::new(device, "ground_vb", &mesh::plane(GROUND_SIZE)),
            MeshBuffer::new(device, "mote_vb", &mesh::octahedron(1.0)),
        ];
        let mut batches: Vec<Batch> = GroupKind::ALL
            .iter()
            .map(|kind| Batch::new(kind.name(), mesh_for(*kind)))
            .collect();
        batches.push(Batch::new("ground", MESH_PLANE));
        batches.push(Batch::new("starfield", MESH_MOTE));
        batches.push(Batch::new("sparkles", MESH_MOTE));

        let (_, depth_view) = create_depth_texture(device, width, height);
        log::info!("[gpu] scene renderer ready ({width}x{height}, {color_format:?})");
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            depth_view,
            meshes,
            batches,
            scratch: Vec::new(),
            statics_uploaded: false,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (_, depth_view) = create_depth_texture(device, width, height);
        self.depth_view = depth_view;
    }

    /// Upload this frame's instances and draw the whole scene into `target`.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        scene: &Scene,
        camera: &Camera,
    ) {
        let root = scene.root_matrix();
        let uniforms = Uniforms::new(camera, scene.lighting(), scene.elapsed(), root);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        for group in scene.groups() {
            pack_group(group, root, &mut self.scratch);
            self.batches[group.kind() as usize].upload(device, queue, &self.scratch);
        }
        if !self.statics_uploaded {
            pack_ground(scene.ambient(), root, &mut self.scratch);
            self.batches[BATCH_GROUND].upload(device, queue, &self.scratch);
            pack_starfield(scene.ambient(), &mut self.scratch);
            self.batches[BATCH_STARFIELD].upload(device, queue, &self.scratch);
            self.statics_uploaded = true;
        }
        pack_sparkles(scene.ambient(), root, scene.elapsed(), &mut self.scratch);
        self.batches[BATCH_SPARKLES].upload(device, queue, &self.scratch);

        let c = scene.lighting().clear_color;
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: c[0] as f64,
                            g: c[1] as f64,
                            b: c[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            for batch in &self.batches {
                let Some(instances) = &batch.instances else {
                    continue;
                };
                if batch.count == 0 {
                    continue;
                }
                let mesh = &self.meshes[batch.mesh];
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                rpass.set_vertex_buffer(1, instances.slice(..));
                rpass.draw(0..mesh.vertex_count, 0..batch.count);
            }
        }
        queue.submit(Some(encoder.finish()));
    }
}
