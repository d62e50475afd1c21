// glspin/src/context.rs
//
//! The context and window the demo asks the windowing system for.

use crate::info::GLVersion;
use crate::options::DemoOptions;

use bitflags::bitflags;
use euclid::default::Size2D;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContextAttributeFlags: u8 {
        const DOUBLE_BUFFER = 0x01;
        const FULLSCREEN    = 0x02;
        const VSYNC         = 0x04;
    }
}

/// Attributes of the OpenGL context and window to create.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextAttributes {
    /// Minimum core-profile version.
    pub version: GLVersion,
    /// Minimum bits per color channel, alpha included.
    pub color_bits: u8,
    pub flags: ContextAttributeFlags,
    pub window_title: String,
    /// Window size when not fullscreen.
    pub window_size: Size2D<u32>,
}

impl Default for ContextAttributes {
    fn default() -> ContextAttributes {
        ContextAttributes {
            version: GLVersion::new(3, 3),
            color_bits: 8,
            flags: ContextAttributeFlags::DOUBLE_BUFFER,
            window_title: "glspin".to_owned(),
            window_size: Size2D::new(640, 640),
        }
    }
}

impl ContextAttributes {
    pub fn for_options(options: &DemoOptions) -> ContextAttributes {
        let mut attributes = ContextAttributes::default();
        attributes.flags.set(ContextAttributeFlags::FULLSCREEN, options.fullscreen());
        attributes.flags.set(ContextAttributeFlags::VSYNC, options.vsync());
        attributes
    }

    #[inline]
    pub fn fullscreen(&self) -> bool {
        self.flags.contains(ContextAttributeFlags::FULLSCREEN)
    }

    #[inline]
    pub fn vsync(&self) -> bool {
        self.flags.contains(ContextAttributeFlags::VSYNC)
    }

    /// Swap interval to request: one frame with vsync, none without.
    #[inline]
    pub fn swap_interval(&self) -> u32 {
        if self.vsync() {
            1
        } else {
            0
        }
    }
}
