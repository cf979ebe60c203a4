// src/app.rs

use log::{error, info};
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    window::Window,
};

use stained_glass::{
    Canvas, DrawList, MosaicGenerator, MosaicParams, MosaicSummary, RandomPalette, SeededRandom,
};

use crate::rendering_lib::renderer::Renderer;
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::rendering_lib::tessellate::MeshBuilder;
use crate::ui::build_ui;

/// What the overlay shows about the last paint cycle.
#[derive(Debug, Default)]
pub struct PaintStatus {
    pub seed: u64,
    pub summary: Option<MosaicSummary>,
    pub last_error: Option<String>,
}

pub struct MosaicApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    generator: MosaicGenerator<RandomPalette>,
    status: PaintStatus,
    next_seed: Option<u64>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl MosaicApp {
    /// `seed` pins the first mosaic; later ones draw fresh seeds.
    pub async fn new(window: std::sync::Arc<Window>, seed: Option<u64>) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone()).unwrap();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap();
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    label: None,
                },
                None,
            )
            .await
            .unwrap();

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb()).unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(
            &device, config.format, WGSL_SHADER_SOURCE,
            config.width as f32, config.height as f32,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        let mut app = Self {
            surface, device, queue, config, size,
            renderer,
            generator: MosaicGenerator::new(MosaicParams::default(), RandomPalette::default()),
            status: PaintStatus::default(),
            next_seed: seed,
            egui_ctx, egui_state, egui_renderer,
        };
        app.repaint();
        app
    }

    /// Reconfigures a lost or outdated surface without repainting.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// A new canvas size means a new mosaic.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 && new_size != self.size {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.reconfigure();
            self.renderer.resize(&self.queue, new_size.width as f32, new_size.height as f32);
            self.repaint();
        }
    }

    /// Runs a full paint cycle. A failed cycle keeps the previous mosaic on
    /// screen.
    pub fn repaint(&mut self) {
        let mut rng = match self.next_seed.take() {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        let canvas = Canvas::new(self.config.width, self.config.height);
        let mut list = DrawList::new();

        match self.generator.paint(canvas, &mut rng, &mut list) {
            Ok(summary) => {
                let mesh = MeshBuilder::from_draw_list(&list);
                self.renderer.upload(&self.device, &mesh);
                info!("seed {} -> {} draw commands", rng.seed(), list.len());
                self.status = PaintStatus {
                    seed: rng.seed(),
                    summary: Some(summary),
                    last_error: None,
                };
            }
            Err(e) => {
                error!("paint cycle with seed {} aborted: {e}", rng.seed());
                self.status.last_error = Some(e.to_string());
            }
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render_mosaic(&mut encoder, &view);

        let raw_input = self.egui_state.take_egui_input(window);
        let mut regenerate = false;
        let status = &self.status;
        let full_output = self.egui_ctx.run(raw_input, |ctx| { regenerate = build_ui(ctx, status); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();

        if regenerate {
            self.repaint();
            window.request_redraw();
        }
        Ok(())
    }

    /// Returns true when the window needs a redraw.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        if response.consumed {
            return true;
        }
        match event {
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                self.repaint();
                true
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(*physical_size);
                true
            }
            _ => response.repaint,
        }
    }
}
