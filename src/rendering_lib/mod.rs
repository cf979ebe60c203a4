// src/rendering_lib/mod.rs

pub mod renderer;
pub mod shader;
pub mod tessellate;
pub mod vertex;

pub use renderer::Renderer;
pub use shader::WGSL_SHADER_SOURCE;
pub use tessellate::MeshBuilder;
pub use vertex::Vertex;
