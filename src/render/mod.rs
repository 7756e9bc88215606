//! The rasterization core: frame buffer, triangle rasterizer, and fragment
//! shading.

pub mod framebuffer;
pub mod rasterizer;
pub mod shader;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{Rasterizer, Triangle};
pub use shader::{FragmentShader, PhongShader};
