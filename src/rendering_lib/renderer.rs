// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use log::debug;
use wgpu::util::DeviceExt;

use super::tessellate::MeshBuilder;
use super::vertex::Vertex;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenDimensionsUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

impl ScreenDimensionsUniform {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            _padding1: 0.0,
            _padding2: 0.0,
        }
    }
}

/// Mosaic geometry resident on the GPU.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    screen_uniform_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
    mesh: Option<GpuMesh>,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        initial_screen_width: f32,
        initial_screen_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mosaic Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_uniform_data =
            ScreenDimensionsUniform::new(initial_screen_width, initial_screen_height);
        let screen_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Dimensions Uniform Buffer"),
            contents: bytemuck::bytes_of(&screen_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("screen_dimensions_bind_group_layout"),
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_uniform_buffer.as_entire_binding(),
            }],
            label: Some("screen_dimensions_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Mosaic Pipeline Layout"),
                bind_group_layouts: &[&screen_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mosaic Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // strips keep their parent's winding, which may be either
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Self {
            render_pipeline,
            screen_uniform_buffer,
            screen_bind_group,
            mesh: None,
            clear_color: wgpu::Color::BLACK,
        }
    }

    pub fn resize(&mut self, queue: &wgpu::Queue, screen_width: f32, screen_height: f32) {
        let screen_uniform_data = ScreenDimensionsUniform::new(screen_width, screen_height);
        queue.write_buffer(&self.screen_uniform_buffer, 0, bytemuck::bytes_of(&screen_uniform_data));
    }

    /// Replaces the resident mosaic. Draw order inside the mesh is paint order.
    pub fn upload(&mut self, device: &wgpu::Device, mesh: &MeshBuilder) {
        let background = mesh.background();
        self.clear_color = wgpu::Color {
            r: f64::from(background.r),
            g: f64::from(background.g),
            b: f64::from(background.b),
            a: f64::from(background.a),
        };

        if mesh.is_empty() {
            self.mesh = None;
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mosaic Vertex Buffer"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mosaic Index Buffer"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });
        debug!(
            "uploaded mosaic mesh: {} vertices, {} indices",
            mesh.vertices().len(),
            mesh.indices().len()
        );

        self.mesh = Some(GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices().len() as u32,
        });
    }

    pub fn render_mosaic(&self, encoder: &mut wgpu::CommandEncoder, output_view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Mosaic Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if let Some(mesh) = &self.mesh {
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
