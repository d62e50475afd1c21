// glspin/src/loader.rs
//
//! OpenGL function pointer loading.
//!
//! Core-profile entry points beyond GL 1.1 aren't exported by the system GL library on every
//! platform, so they have to be looked up at runtime once a context is current. `Gl` holds the
//! result of that lookup.

use crate::error::Error;

use gl::types::{GLbitfield, GLboolean, GLchar, GLenum, GLfloat, GLint, GLsizei, GLsizeiptr};
use gl::types::{GLubyte, GLuint};
use std::mem;
use std::os::raw::c_void;

gl_function_table! {
    /// The OpenGL entry points the demo uses.
    ///
    /// A `Gl` can only be obtained from [`Gl::load_with`], so holding one means every entry point
    /// was found. There is no way to build one with unresolved slots:
    ///
    /// ```compile_fail
    /// let gl: glspin::Gl = Default::default();
    /// ```
    pub struct Gl {
        fn CreateShader = "glCreateShader"(shader_type: GLenum) -> GLuint;
        fn DeleteShader = "glDeleteShader"(shader: GLuint);
        fn AttachShader = "glAttachShader"(program: GLuint, shader: GLuint);
        fn DetachShader = "glDetachShader"(program: GLuint, shader: GLuint);
        fn ShaderSource = "glShaderSource"(
            shader: GLuint,
            count: GLsizei,
            string: *const *const GLchar,
            length: *const GLint,
        );
        fn CompileShader = "glCompileShader"(shader: GLuint);
        fn GetShaderiv = "glGetShaderiv"(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn GetShaderInfoLog = "glGetShaderInfoLog"(
            shader: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        );
        fn CreateProgram = "glCreateProgram"() -> GLuint;
        fn DeleteProgram = "glDeleteProgram"(program: GLuint);
        fn UseProgram = "glUseProgram"(program: GLuint);
        fn LinkProgram = "glLinkProgram"(program: GLuint);
        fn ValidateProgram = "glValidateProgram"(program: GLuint);
        fn GetProgramiv = "glGetProgramiv"(program: GLuint, pname: GLenum, params: *mut GLint);
        fn GetProgramInfoLog = "glGetProgramInfoLog"(
            program: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        );
        fn Uniform1i = "glUniform1i"(location: GLint, v0: GLint);
        fn Uniform1f = "glUniform1f"(location: GLint, v0: GLfloat);
        fn Uniform3f = "glUniform3f"(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn UniformMatrix4fv = "glUniformMatrix4fv"(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        );
        fn GetUniformLocation = "glGetUniformLocation"(
            program: GLuint,
            name: *const GLchar,
        ) -> GLint;
        fn GenBuffers = "glGenBuffers"(n: GLsizei, buffers: *mut GLuint);
        fn DeleteBuffers = "glDeleteBuffers"(n: GLsizei, buffers: *const GLuint);
        fn BindBuffer = "glBindBuffer"(target: GLenum, buffer: GLuint);
        fn BufferData = "glBufferData"(
            target: GLenum,
            size: GLsizeiptr,
            data: *const c_void,
            usage: GLenum,
        );
        fn GenVertexArrays = "glGenVertexArrays"(n: GLsizei, arrays: *mut GLuint);
        fn DeleteVertexArrays = "glDeleteVertexArrays"(n: GLsizei, arrays: *const GLuint);
        fn BindVertexArray = "glBindVertexArray"(array: GLuint);
        fn VertexAttribPointer = "glVertexAttribPointer"(
            index: GLuint,
            size: GLint,
            type_: GLenum,
            normalized: GLboolean,
            stride: GLsizei,
            pointer: *const c_void,
        );
        fn EnableVertexAttribArray = "glEnableVertexAttribArray"(index: GLuint);
        fn DisableVertexAttribArray = "glDisableVertexAttribArray"(index: GLuint);

        // GL 1.x. These are usually exported directly, but resolving them here keeps every call
        // going through the same table.
        fn GetString = "glGetString"(name: GLenum) -> *const GLubyte;
        fn GetError = "glGetError"() -> GLenum;
        fn ClearColor = "glClearColor"(
            red: GLfloat,
            green: GLfloat,
            blue: GLfloat,
            alpha: GLfloat,
        );
        fn Clear = "glClear"(mask: GLbitfield);
        fn Viewport = "glViewport"(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn DrawArrays = "glDrawArrays"(mode: GLenum, first: GLint, count: GLsizei);
    }
}

/// Looks up `symbol` and reinterprets its address as the function pointer type `F`.
///
/// # Safety
///
/// `F` must be the function pointer type the resolver's symbol actually has.
pub(crate) unsafe fn resolve<L, F>(loader: &mut L, symbol: &'static str) -> Result<F, Error>
where
    L: FnMut(&'static str) -> *const c_void,
    F: Copy,
{
    let address = loader(symbol);
    if address.is_null() {
        error!("OpenGL entry point `{}` could not be resolved", symbol);
        return Err(Error::GLFunctionNotFound(symbol));
    }
    trace!("{} => {:p}", symbol, address);
    Ok(bridge(address))
}

/// Converts a non-null data address into a function pointer.
///
/// This is the only place in the crate where a resolved address changes type.
unsafe fn bridge<F: Copy>(address: *const c_void) -> F {
    debug_assert!(!address.is_null());
    assert_eq!(
        mem::size_of::<F>(),
        mem::size_of::<*const c_void>(),
        "function pointers and data pointers differ in size on this target"
    );
    mem::transmute_copy::<*const c_void, F>(&address)
}
