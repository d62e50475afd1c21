// glspin/src/lib.rs
//
//! A spinning-square OpenGL demo.
//!
//! Most of this crate is ordinary window and render-loop plumbing. The piece worth reading is
//! `loader`: the modern OpenGL entry points are looked up by name at runtime, once a context is
//! current, and collected into a `Gl` table that can only exist if every lookup succeeded. Adding
//! an entry point is one line in that table's declaration.

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod loader;
pub use crate::loader::Gl;

pub mod error;
pub use crate::error::Error;

mod context;
pub use crate::context::{ContextAttributeFlags, ContextAttributes};

mod info;
pub use crate::info::{GLInfo, GLVersion, PlatformInfo, SimdSupport};

mod options;
pub use crate::options::{DemoFlags, DemoOptions};

pub mod shader;
pub mod square;
pub mod frame_stats;
pub mod app;
