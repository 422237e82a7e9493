use anyhow::Result;
use log::{info, warn};

use crate::firework_engine::types::Vec2;
use crate::renderer_engine::canvas::PixelCanvas;
use crate::renderer_engine::shader::compile_program;
use crate::renderer_engine::RendererEngine;

const BLIT_VERT: &str = include_str!("shaders/blit.vert");
const BLIT_FRAG: &str = include_str!("shaders/blit.frag");

/// Zoom appliqué au fond pour que la parallaxe ne découvre pas les bords.
const BACKGROUND_SCALE: f32 = 1.1;

/// Présente le framebuffer CPU à l'écran : fond (image optionnelle avec
/// parallaxe) puis canvas des feux d'artifice composé en additif.
pub struct GlRenderer {
    program: u32,
    vao: u32,
    fireworks_tex: u32,
    fireworks_tex_size: (i32, i32),
    background_tex: Option<u32>,
    window_size: (i32, i32),

    // Uniform locations
    u_tex: i32,
    u_uv_offset: i32,
    u_uv_scale: i32,
}

impl GlRenderer {
    /// À n'appeler qu'une fois le contexte OpenGL courant.
    pub fn new(width: i32, height: i32, background_path: Option<&str>) -> Result<Self> {
        let program = unsafe { compile_program(BLIT_VERT, BLIT_FRAG)? };

        let (u_tex, u_uv_offset, u_uv_scale) = unsafe {
            (
                uniform_location(program, "u_tex"),
                uniform_location(program, "u_uv_offset"),
                uniform_location(program, "u_uv_scale"),
            )
        };

        let mut vao = 0;
        let fireworks_tex;
        unsafe {
            // VAO vide : le triangle plein écran est généré par gl_VertexID.
            gl::GenVertexArrays(1, &mut vao);
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            fireworks_tex = create_texture();
        }

        let background_tex = background_path.and_then(|path| match load_background(path) {
            Ok(tex) => {
                info!("🖼️ Background layer loaded from '{}'", path);
                Some(tex)
            }
            Err(e) => {
                // Dégradation silencieuse : fond uni couleur nuit.
                info!("No background image ({}), using plain night color", e);
                None
            }
        });

        Ok(Self {
            program,
            vao,
            fireworks_tex,
            fireworks_tex_size: (0, 0),
            background_tex,
            window_size: (width, height),
            u_tex,
            u_uv_offset,
            u_uv_scale,
        })
    }

    unsafe fn draw_layer(&self, tex: u32, uv_offset: (f32, f32), uv_scale: f32) {
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, tex);
        gl::Uniform1i(self.u_tex, 0);
        gl::Uniform2f(self.u_uv_offset, uv_offset.0, uv_offset.1);
        gl::Uniform1f(self.u_uv_scale, uv_scale);
        gl::DrawArrays(gl::TRIANGLES, 0, 3);
    }

    unsafe fn upload_canvas(&mut self, canvas: &PixelCanvas) {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        gl::BindTexture(gl::TEXTURE_2D, self.fireworks_tex);
        if (w, h) != self.fireworks_tex_size {
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as i32,
                w,
                h,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                canvas.pixels().as_ptr() as *const _,
            );
            self.fireworks_tex_size = (w, h);
        } else {
            gl::TexSubImage2D(
                gl::TEXTURE_2D,
                0,
                0,
                0,
                w,
                h,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                canvas.pixels().as_ptr() as *const _,
            );
        }
    }
}

impl RendererEngine for GlRenderer {
    fn render_frame(&mut self, canvas: &PixelCanvas, parallax: Vec2) -> Result<()> {
        if self.program == 0 {
            // Renderer déjà fermé : no-op.
            return Ok(());
        }

        unsafe {
            self.upload_canvas(canvas);

            gl::ClearColor(2.0 / 255.0, 6.0 / 255.0, 23.0 / 255.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            gl::UseProgram(self.program);
            gl::BindVertexArray(self.vao);

            if let Some(background) = self.background_tex {
                let (w, h) = self.window_size;
                let uv_offset = (
                    parallax.x / w.max(1) as f32,
                    -parallax.y / h.max(1) as f32,
                );
                gl::Disable(gl::BLEND);
                self.draw_layer(background, uv_offset, BACKGROUND_SCALE);
            }

            // Le canvas est quasi noir là où il n'y a rien : la composition
            // additive laisse le fond visible et ajoute la lumière des tirs.
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::ONE, gl::ONE);
            self.draw_layer(self.fireworks_tex, (0.0, 0.0), 1.0);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

            gl::BindVertexArray(0);
        }
        Ok(())
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size = (width, height);
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
    }

    fn close(&mut self) {
        if self.program == 0 {
            return;
        }
        unsafe {
            gl::DeleteProgram(self.program);
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteTextures(1, &self.fireworks_tex);
            if let Some(tex) = self.background_tex.take() {
                gl::DeleteTextures(1, &tex);
            }
        }
        self.program = 0;
        self.vao = 0;
        self.fireworks_tex = 0;
    }
}

unsafe fn uniform_location(program: u32, name: &str) -> i32 {
    let c_name = std::ffi::CString::new(name).unwrap_or_default();
    gl::GetUniformLocation(program, c_name.as_ptr())
}

unsafe fn create_texture() -> u32 {
    let mut tex = 0;
    gl::GenTextures(1, &mut tex);
    gl::BindTexture(gl::TEXTURE_2D, tex);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
    tex
}

/// Charge l'image de fond dans une texture (ligne 0 en haut, comme le canvas).
fn load_background(path: &str) -> Result<u32> {
    let img = image::open(std::path::Path::new(path))?;
    let (width, height) = (img.width(), img.height());
    let rgba = img.to_rgba8();

    if width == 0 || height == 0 {
        warn!("🖼️ Background image '{}' is empty", path);
        anyhow::bail!("empty image");
    }

    let tex = unsafe {
        let tex = create_texture();
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as i32,
            width as i32,
            height as i32,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            rgba.as_raw().as_ptr() as *const _,
        );
        gl::BindTexture(gl::TEXTURE_2D, 0);
        tex
    };
    Ok(tex)
}
