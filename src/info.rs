// glspin/src/info.rs
//
//! Platform and OpenGL information printed at startup.

use crate::loader::Gl;

use gl::types::GLenum;
use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;
use std::thread;

/// Describes an OpenGL version, either requested or reported by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Parses the leading `major.minor` out of a `GL_VERSION` string such as
    /// `"4.6.0 NVIDIA 535.54"` or `"OpenGL ES 3.2 Mesa 23.0"`.
    pub fn parse(version_string: &str) -> Option<GLVersion> {
        let version_string = version_string.trim_start_matches("OpenGL ES").trim_start();
        let mut version_string_iter = version_string.split(|c| c == '.' || c == ' ');
        let major = version_string_iter.next()?.parse().ok()?;
        let minor = version_string_iter.next()?.parse().ok()?;
        Some(GLVersion { major, minor })
    }
}

impl fmt::Display for GLVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Strings describing the OpenGL implementation behind the current context.
#[derive(Clone, Debug)]
pub struct GLInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
}

impl GLInfo {
    pub fn current(gl: &Gl) -> GLInfo {
        GLInfo {
            vendor: get_string(gl, gl::VENDOR),
            renderer: get_string(gl, gl::RENDERER),
            version: get_string(gl, gl::VERSION),
            shading_language_version: get_string(gl, gl::SHADING_LANGUAGE_VERSION),
        }
    }

    /// The context version as reported by the driver, if it could be parsed.
    pub fn gl_version(&self) -> Option<GLVersion> {
        GLVersion::parse(&self.version)
    }
}

impl fmt::Display for GLInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OpenGL Vendor:   {}", self.vendor)?;
        writeln!(f, "OpenGL Renderer: {}", self.renderer)?;
        writeln!(f, "OpenGL Version:  {}", self.version)?;
        write!(f, "GLSL Version:    {}", self.shading_language_version)
    }
}

fn get_string(gl: &Gl, name: GLenum) -> String {
    unsafe {
        let string = gl.GetString(name) as *const c_char;
        if string.is_null() {
            return "unknown".to_owned();
        }
        CStr::from_ptr(string).to_string_lossy().into_owned()
    }
}

/// Host details. Nothing here needs a GL context.
#[derive(Clone, Debug)]
pub struct PlatformInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub cpu_count: usize,
    pub system_ram_mb: Option<u64>,
    pub simd: SimdSupport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimdSupport {
    pub sse: bool,
    pub sse2: bool,
    pub sse3: bool,
    pub sse41: bool,
    pub sse42: bool,
}

impl PlatformInfo {
    pub fn current() -> PlatformInfo {
        PlatformInfo {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            cpu_count: thread::available_parallelism().map_or(1, |count| count.get()),
            system_ram_mb: system_ram_mb(),
            simd: SimdSupport::detect(),
        }
    }
}

impl SimdSupport {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub fn detect() -> SimdSupport {
        SimdSupport {
            sse: is_x86_feature_detected!("sse"),
            sse2: is_x86_feature_detected!("sse2"),
            sse3: is_x86_feature_detected!("sse3"),
            sse41: is_x86_feature_detected!("sse4.1"),
            sse42: is_x86_feature_detected!("sse4.2"),
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    pub fn detect() -> SimdSupport {
        SimdSupport::default()
    }
}

#[cfg(unix)]
fn system_ram_mb() -> Option<u64> {
    let (pages, page_size) = unsafe {
        (libc::sysconf(libc::_SC_PHYS_PAGES), libc::sysconf(libc::_SC_PAGESIZE))
    };
    if pages <= 0 || page_size <= 0 {
        return None;
    }
    Some(pages as u64 * page_size as u64 / (1024 * 1024))
}

#[cfg(not(unix))]
fn system_ram_mb() -> Option<u64> {
    None
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Platform:        {} ({})", self.os, self.arch)?;
        writeln!(f, "CPU Count:       {}", self.cpu_count)?;
        match self.system_ram_mb {
            Some(megabytes) => writeln!(f, "System RAM:      {} MB", megabytes)?,
            None => writeln!(f, "System RAM:      unknown")?,
        }
        writeln!(f, "Supports SSE:    {}", self.simd.sse)?;
        writeln!(f, "Supports SSE2:   {}", self.simd.sse2)?;
        writeln!(f, "Supports SSE3:   {}", self.simd.sse3)?;
        writeln!(f, "Supports SSE4.1: {}", self.simd.sse41)?;
        write!(f, "Supports SSE4.2: {}", self.simd.sse42)
    }
}
