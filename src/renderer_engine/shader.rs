use anyhow::{anyhow, Result};
use gl::types::*;
use std::{ffi::CString, ptr};

/// Compile un programme shader à partir des sources GLSL.
///
/// # Safety
/// Interagit directement avec l'API OpenGL ; un contexte doit être courant.
pub unsafe fn compile_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vertex = compile_stage(vertex_src, gl::VERTEX_SHADER)?;
    let fragment = match compile_stage(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fragment) => fragment,
        Err(e) => {
            gl::DeleteShader(vertex);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vertex);
    gl::AttachShader(program, fragment);
    gl::LinkProgram(program);

    // Les stages ne sont plus nécessaires une fois liés.
    gl::DeleteShader(vertex);
    gl::DeleteShader(fragment);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let log = program_info_log(program);
        gl::DeleteProgram(program);
        return Err(anyhow!("Shader link failed:\n{}", log));
    }

    Ok(program)
}

unsafe fn compile_stage(src: &str, stage: GLenum) -> Result<u32> {
    let shader = gl::CreateShader(stage);
    let c_src = CString::new(src).map_err(|e| anyhow!("CString error: {}", e))?;
    gl::ShaderSource(shader, 1, &c_src.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteShader(shader);
        let log_cow = String::from_utf8_lossy(&buf);
        let log = log_cow.trim_matches(char::from(0)).to_string();
        return Err(anyhow!("Shader compilation failed:\n{}", log));
    }

    Ok(shader)
}

unsafe fn program_info_log(program: u32) -> String {
    let mut len = 0;
    gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    let mut buf = vec![0u8; len.max(0) as usize];
    gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    String::from_utf8_lossy(&buf)
        .trim_matches(char::from(0))
        .to_string()
}
