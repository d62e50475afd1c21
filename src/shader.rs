// glspin/src/shader.rs
//
//! Shader compilation and program linking.

use crate::error::Error;
use crate::loader::Gl;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use std::ffi::CString;
use std::fmt;
use std::ptr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn to_gl(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// A compiled shader object.
///
/// Shaders are only needed until the program that uses them is linked; call `destroy` after
/// that.
pub struct Shader {
    object: GLuint,
    kind: ShaderKind,
}

impl Shader {
    pub fn compile(gl: &Gl, kind: ShaderKind, source: &str) -> Result<Shader, Error> {
        unsafe {
            let shader = gl.CreateShader(kind.to_gl());
            gl.ShaderSource(
                shader,
                1,
                &(source.as_ptr() as *const GLchar),
                &(source.len() as GLint),
            );
            gl.CompileShader(shader);

            let mut compile_status = 0;
            gl.GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status);
            if compile_status != gl::TRUE as GLint {
                let mut info_log_length = 0;
                gl.GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut info_log_length);
                let mut info_log = vec![0u8; info_log_length.max(0) as usize];
                gl.GetShaderInfoLog(
                    shader,
                    info_log_length,
                    ptr::null_mut(),
                    info_log.as_mut_ptr() as *mut GLchar,
                );
                gl.DeleteShader(shader);
                return Err(Error::ShaderCompilationFailed {
                    kind,
                    log: info_log_to_string(info_log),
                });
            }

            debug!("compiled {} shader {}", kind, shader);
            Ok(Shader { object: shader, kind })
        }
    }

    #[inline]
    pub fn object(&self) -> GLuint {
        self.object
    }

    #[inline]
    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub fn destroy(self, gl: &Gl) {
        unsafe {
            gl.DeleteShader(self.object);
        }
    }
}

/// A linked shader program.
pub struct Program {
    object: GLuint,
}

impl Program {
    /// Links `vertex_shader` and `fragment_shader` into a new program.
    ///
    /// The shaders are detached again whether or not linking succeeds, so they can be deleted
    /// straight away.
    pub fn link(gl: &Gl, vertex_shader: &Shader, fragment_shader: &Shader)
                -> Result<Program, Error> {
        debug_assert_eq!(vertex_shader.kind(), ShaderKind::Vertex);
        debug_assert_eq!(fragment_shader.kind(), ShaderKind::Fragment);

        unsafe {
            let program = gl.CreateProgram();
            gl.AttachShader(program, vertex_shader.object);
            gl.AttachShader(program, fragment_shader.object);
            gl.LinkProgram(program);

            let mut link_status = 0;
            gl.GetProgramiv(program, gl::LINK_STATUS, &mut link_status);

            gl.DetachShader(program, vertex_shader.object);
            gl.DetachShader(program, fragment_shader.object);

            if link_status != gl::TRUE as GLint {
                let mut info_log_length = 0;
                gl.GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut info_log_length);
                let mut info_log = vec![0u8; info_log_length.max(0) as usize];
                gl.GetProgramInfoLog(
                    program,
                    info_log_length,
                    ptr::null_mut(),
                    info_log.as_mut_ptr() as *mut GLchar,
                );
                gl.DeleteProgram(program);
                return Err(Error::ProgramLinkFailed(info_log_to_string(info_log)));
            }

            debug!("linked program {}", program);
            Ok(Program { object: program })
        }
    }

    #[inline]
    pub fn object(&self) -> GLuint {
        self.object
    }

    /// Returns the location of the named uniform, or `None` if the program has no active
    /// uniform by that name.
    pub fn uniform_location(&self, gl: &Gl, name: &str) -> Option<GLint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl.GetUniformLocation(self.object, name.as_ptr()) };
        if location < 0 {
            None
        } else {
            Some(location)
        }
    }

    pub fn destroy(self, gl: &Gl) {
        unsafe {
            gl.DeleteProgram(self.object);
        }
    }
}

// Info logs are NUL-terminated and may come back empty.
pub(crate) fn info_log_to_string(mut info_log: Vec<u8>) -> String {
    if let Some(end) = info_log.iter().position(|&byte| byte == 0) {
        info_log.truncate(end);
    }
    String::from_utf8_lossy(&info_log).trim_end().to_owned()
}

