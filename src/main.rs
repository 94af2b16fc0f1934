use std::env;
use std::path::PathBuf;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::info;

use hex_fill::app::App;
use hex_fill::error::{Error, ErrorConversion, Result};
use hex_fill::prefs::Prefs;

fn main() -> Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let prefs_path = env::args_os().nth(1).map(PathBuf::from);
    let prefs = Prefs::load(prefs_path.as_deref()).with_trace_step("main")?;

    let wm = WindowMode::default()
        .dimensions(prefs.window_width, prefs.window_height)
        .resizable(false);
    let ws = WindowSetup::default().title("Hex Fill");

    let (ctx, event_loop) = ContextBuilder::new("hex_fill", "hex_fill")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    info!("starting with {:?} key bindings", prefs.layout);
    let app = App::new(&prefs);
    run(ctx, event_loop, app)
}
