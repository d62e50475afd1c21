// glspin/src/square.rs
//
//! The spinning square.

use crate::error::Error;
use crate::loader::Gl;
use crate::shader::{Program, Shader, ShaderKind};

use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};
use std::f64::consts::TAU;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use std::time::Duration;

static SQUARE_VERTICES: [[f32; 2]; 4] = [
    [-1.0,  1.0],
    [-1.0, -1.0],
    [ 1.0,  1.0],
    [ 1.0, -1.0],
];

static VERTEX_SHADER_SOURCE: &str = "\
#version 330
layout(location = 0) in vec2 point;
uniform float angle;
void main() {
    mat2 rotate = mat2(cos(angle), -sin(angle),
                       sin(angle), cos(angle));
    gl_Position = vec4(0.75 * rotate * point, 0.0, 1.0);
}
";

static FRAGMENT_SHADER_SOURCE: &str = "\
#version 330
out vec4 color;
void main() {
    color = vec4(1, 0.15, 0.15, 0);
}
";

const CLEAR_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

/// The square's rotation in radians, kept within `[0, 2π]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    angle: f64,
}

impl Rotation {
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Turns the square by one radian per second of `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.angle += elapsed.as_secs_f64();
        if self.angle > TAU {
            self.angle -= TAU;
        }
    }
}

/// GL objects for drawing the square.
pub struct SquareScene {
    program: Program,
    angle_uniform: GLint,
    vertex_buffer: GLuint,
    vertex_array: GLuint,
}

impl SquareScene {
    pub fn new(gl: &Gl) -> Result<SquareScene, Error> {
        let vertex_shader = Shader::compile(gl, ShaderKind::Vertex, VERTEX_SHADER_SOURCE)?;
        let fragment_shader =
            match Shader::compile(gl, ShaderKind::Fragment, FRAGMENT_SHADER_SOURCE) {
                Ok(fragment_shader) => fragment_shader,
                Err(err) => {
                    vertex_shader.destroy(gl);
                    return Err(err);
                }
            };

        let program = Program::link(gl, &vertex_shader, &fragment_shader);
        fragment_shader.destroy(gl);
        vertex_shader.destroy(gl);
        let program = program?;

        // An unused uniform gets optimized out; -1 makes `Uniform1f` a no-op.
        let angle_uniform = program.uniform_location(gl, "angle").unwrap_or(-1);

        unsafe {
            let mut vertex_buffer = 0;
            gl.GenBuffers(1, &mut vertex_buffer);
            gl.BindBuffer(gl::ARRAY_BUFFER, vertex_buffer);
            gl.BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(&SQUARE_VERTICES) as GLsizeiptr,
                SQUARE_VERTICES.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
            gl.BindBuffer(gl::ARRAY_BUFFER, 0);

            let mut vertex_array = 0;
            gl.GenVertexArrays(1, &mut vertex_array);
            gl.BindVertexArray(vertex_array);
            gl.BindBuffer(gl::ARRAY_BUFFER, vertex_buffer);
            gl.VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, 0, ptr::null());
            gl.EnableVertexAttribArray(0);
            gl.BindBuffer(gl::ARRAY_BUFFER, 0);
            gl.BindVertexArray(0);

            Ok(SquareScene { program, angle_uniform, vertex_buffer, vertex_array })
        }
    }

    pub fn draw(&self, gl: &Gl, rotation: Rotation) {
        let [red, green, blue, alpha] = CLEAR_COLOR;
        unsafe {
            gl.ClearColor(red, green, blue, alpha);
            gl.Clear(gl::COLOR_BUFFER_BIT);

            gl.UseProgram(self.program.object());
            gl.Uniform1f(self.angle_uniform, rotation.angle() as f32);
            gl.BindVertexArray(self.vertex_array);
            gl.DrawArrays(gl::TRIANGLE_STRIP, 0, SQUARE_VERTICES.len() as GLsizei);
            gl.BindVertexArray(0);
            gl.UseProgram(0);
        }
    }

    /// Deletes the scene's GL objects. The context they were created in must be current.
    pub fn destroy(self, gl: &Gl) {
        unsafe {
            gl.DeleteVertexArrays(1, &self.vertex_array);
            gl.DeleteBuffers(1, &self.vertex_buffer);
        }
        self.program.destroy(gl);
    }
}
