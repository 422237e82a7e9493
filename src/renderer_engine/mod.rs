pub mod r#trait;
pub use r#trait::{RendererEngine, Surface};

pub mod canvas;
pub use canvas::PixelCanvas;

pub mod overlay;

pub mod shader;

pub mod gl_renderer;
pub use gl_renderer::GlRenderer;
