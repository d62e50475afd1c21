// glspin/src/app.rs
//
//! The window, the OpenGL context and the event loop.

use crate::context::ContextAttributes;
use crate::error::Error;
use crate::frame_stats::FrameCounter;
use crate::info::GLInfo;
use crate::loader::Gl;
use crate::square::{Rotation, SquareScene};

use anyhow::{anyhow, Context as _};
use glutin::config::{ColorBufferType, Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext};
use glutin::context::{PossiblyCurrentContext, PossiblyCurrentGlContext, Version};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use rwh_06::HasWindowHandle;
use std::ffi::CString;
use std::num::NonZeroU32;
use std::ptr;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, Window, WindowId};

/// Opens the window and renders until it's closed.
///
/// Returns the first error hit while setting up or drawing.
pub fn run(attributes: ContextAttributes) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { attributes, renderer: None, error: None };
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Resolves the demo's OpenGL entry points through `context`'s display.
///
/// `context` must be current on this thread; the driver only hands out valid addresses for the
/// current context.
pub fn load_functions(context: &PossiblyCurrentContext) -> Result<Gl, Error> {
    if !context.is_current() {
        return Err(Error::NoCurrentContext);
    }

    let display = context.display();
    Gl::load_with(|symbol_name| match CString::new(symbol_name) {
        Ok(symbol_name) => display.get_proc_address(&symbol_name),
        Err(_) => ptr::null(),
    })
}

/// Whether releasing `key` should close the demo.
pub fn is_quit_key(key: &Key) -> bool {
    match key.as_ref() {
        Key::Named(NamedKey::Escape) => true,
        Key::Character(character) => character.eq_ignore_ascii_case("q"),
        _ => false,
    }
}

struct App {
    attributes: ContextAttributes,
    renderer: Option<Renderer>,
    error: Option<anyhow::Error>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        match Renderer::new(event_loop, &self.attributes) {
            Ok(renderer) => {
                renderer.window.request_redraw();
                self.renderer = Some(renderer);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event: KeyEvent { state: ElementState::Released, ref logical_key, .. },
                ..
            } if is_quit_key(logical_key) => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(ref renderer) = self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let result = match self.renderer {
                    Some(ref mut renderer) => renderer.redraw(),
                    None => Ok(()),
                };
                if let Err(err) = result {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy();
        }
    }
}

// Fields drop in declaration order: the surface and context go before the window they use.
struct Renderer {
    scene: SquareScene,
    rotation: Rotation,
    frames: FrameCounter,
    gl: Gl,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl Renderer {
    fn new(event_loop: &ActiveEventLoop, attributes: &ContextAttributes)
           -> anyhow::Result<Renderer> {
        let window_size = LogicalSize::new(attributes.window_size.width,
                                           attributes.window_size.height);
        let fullscreen = if attributes.fullscreen() {
            Some(Fullscreen::Borderless(None))
        } else {
            None
        };
        let window_attributes = Window::default_attributes()
            .with_title(attributes.window_title.clone())
            .with_inner_size(window_size)
            .with_fullscreen(fullscreen);

        let color_bits = attributes.color_bits;
        let template = ConfigTemplateBuilder::new()
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: color_bits,
                g_size: color_bits,
                b_size: color_bits,
            })
            .with_alpha_size(color_bits)
            .with_single_buffering(false);

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, pick_config)
            .map_err(|err| anyhow!("failed to create window: {}", err))?;
        let window = window.ok_or_else(|| anyhow!("failed to create window"))?;

        let raw_window_handle = window
            .window_handle()
            .context("failed to get window handle")?
            .as_raw();
        let version = Version::new(attributes.version.major, attributes.version.minor);
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(version)))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let display = config.display();
        let context = unsafe { display.create_context(&config, &context_attributes) }
            .context("failed to create OpenGL context")?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = context
            .make_current(&surface)
            .context("failed to make OpenGL context current")?;
        info!("created OpenGL {} core context", attributes.version);

        let swap_interval = match NonZeroU32::new(attributes.swap_interval()) {
            Some(interval) => SwapInterval::Wait(interval),
            None => SwapInterval::DontWait,
        };
        match surface.set_swap_interval(&context, swap_interval) {
            Ok(()) => debug!("swap interval set to {:?}", swap_interval),
            Err(err) => warn!("failed to set swap interval {:?}: {}", swap_interval, err),
        }

        let gl = load_functions(&context).context("failed to load OpenGL functions")?;

        let gl_info = GLInfo::current(&gl);
        println!("{}", gl_info);
        if let Some(reported) = gl_info.gl_version() {
            if reported < attributes.version {
                warn!("driver reports OpenGL {}, but {} was requested",
                      reported,
                      attributes.version);
            }
        }

        let scene = SquareScene::new(&gl).context("failed to build the scene")?;

        Ok(Renderer {
            scene,
            rotation: Rotation::default(),
            frames: FrameCounter::new(Instant::now()),
            gl,
            surface,
            context,
            window,
        })
    }

    fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width),
                                           NonZeroU32::new(size.height)) else {
            return;
        };
        self.surface.resize(&self.context, width, height);
        unsafe {
            self.gl.Viewport(0, 0, width.get() as i32, height.get() as i32);
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        self.scene.draw(&self.gl, self.rotation);
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")?;

        let tick = self.frames.tick(Instant::now());
        if let Some(frames_per_second) = tick.frames_per_second {
            println!("FPS: {}", frames_per_second);
        }
        self.rotation.advance(tick.elapsed);

        self.window.request_redraw();
        Ok(())
    }

    fn destroy(self) {
        let Renderer { scene, gl, .. } = self;
        scene.destroy(&gl);
    }
}

// Prefer a plain single-sampled config; the square doesn't need multisampling.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            if config.num_samples() < best.num_samples() {
                config
            } else {
                best
            }
        })
        .expect("display offered no OpenGL configs matching the template")
}
