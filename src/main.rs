use clap::Parser;
use log::error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::Window;

use cuboid_lab::application::Application;
use cuboid_lab::config::{Args, Config};
use cuboid_lab::error::LabError;
use cuboid_lab::trace::run_trace;
use cuboid_lab::LabEvent;

fn main() {
    run();
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn run() {
    init_logging();
    #[cfg(target_arch = "wasm32")]
    let args = Args::parse_from(["cuboid-lab"]);
    #[cfg(not(target_arch = "wasm32"))]
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(lab_error) => {
            error!("{lab_error}");
            return;
        }
    };
    if let Some(frame_step) = config.trace {
        let stdout = std::io::stdout();
        if let Err(io_error) = run_trace(config.speed, frame_step, &mut stdout.lock()) {
            error!("Trace failed: {io_error}");
        }
        return;
    }
    if let Err(lab_error) = run_window(config) {
        error!("{lab_error}");
    }
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // only fails when a logger is already installed, which then gets the warning
        if let Err(logger_error) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Console logger not installed: {logger_error}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
}

fn run_window(config: Config) -> Result<(), LabError> {
    let event_loop = EventLoop::<LabEvent>::with_user_event()
        .build()
        .map_err(|error| LabError::EventLoop(error.to_string()))?;
    #[allow(unused_mut)]
    let mut window_attributes = Window::default_attributes()
        .with_title("Cuboid Lab")
        .with_inner_size(PhysicalSize::new(1200, 800));
    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowAttributesExtWebSys;
        window_attributes = window_attributes.with_append(true);
    }
    let radio = event_loop.create_proxy();
    let mut app = Application::new(window_attributes, config, radio);
    event_loop
        .run_app(&mut app)
        .map_err(|error| LabError::EventLoop(error.to_string()))
}
