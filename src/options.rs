// glspin/src/options.rs
//
//! Command-line options.

use bitflags::bitflags;
use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;

static APP_NAME: &str = "glspin";

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct DemoFlags: u8 {
        const FULLSCREEN = 0x01;
        const VSYNC      = 0x02;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DemoOptions {
    pub flags: DemoFlags,
}

impl DemoOptions {
    /// Parses the process arguments. Prints usage and exits on `--help` or on bad input.
    pub fn from_env() -> DemoOptions {
        DemoOptions::from_matches(&app().get_matches())
    }

    /// Parses `args`, whose first item is the program name.
    pub fn from_args<I, T>(args: I) -> Result<DemoOptions, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Ok(DemoOptions::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> DemoOptions {
        let mut flags = DemoFlags::empty();
        flags.set(DemoFlags::FULLSCREEN, matches.is_present("fullscreen"));
        flags.set(DemoFlags::VSYNC, matches.is_present("vsync"));
        DemoOptions { flags }
    }

    #[inline]
    pub fn fullscreen(&self) -> bool {
        self.flags.contains(DemoFlags::FULLSCREEN)
    }

    #[inline]
    pub fn vsync(&self) -> bool {
        self.flags.contains(DemoFlags::VSYNC)
    }
}

fn app() -> App<'static, 'static> {
    App::new(APP_NAME)
        .about("Draws a spinning square with dynamically loaded OpenGL functions")
        .arg(
            Arg::with_name("fullscreen")
                .short("f")
                .long("fullscreen")
                .help("fullscreen window"),
        )
        .arg(
            Arg::with_name("vsync")
                .short("v")
                .long("vsync")
                .help("enable vsync"),
        )
}
