// glspin/src/main.rs
//
//! Opens a window and spins a square until it's closed, printing the frame rate once a second.

use glspin::{app, ContextAttributes, DemoOptions, PlatformInfo};
use log::error;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = DemoOptions::from_env();
    println!("{}", PlatformInfo::current());

    if let Err(err) = app::run(ContextAttributes::for_options(&options)) {
        error!("{:#}", err);
        process::exit(1);
    }
}
