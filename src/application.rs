use std::sync::Arc;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::Config;
use crate::keyboard::Keyboard;
use crate::pointer::PointerHandler;
use crate::scene::Scene;
use crate::wgpu::Wgpu;
use crate::{LabEvent, Radio};

pub struct Application {
    window_attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    config: Config,
    keyboard: Keyboard,
    pointer_handler: PointerHandler,
    radio: Radio,
}

impl Application {
    pub fn new(window_attributes: WindowAttributes, config: Config, radio: Radio) -> Self {
        let keyboard = Keyboard::default();
        info!("{}", keyboard.legend().join(", "));
        Self {
            window_attributes,
            window: None,
            scene: None,
            config,
            keyboard,
            pointer_handler: PointerHandler::new(1.0),
            radio,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler<LabEvent> for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(self.window_attributes.clone()) {
            Ok(window) => Arc::new(window),
            Err(create_error) => {
                error!("Unable to create window: {create_error}");
                event_loop.exit();
                return;
            }
        };
        self.pointer_handler.set_density(window.scale_factor());
        self.window = Some(window.clone());
        Wgpu::create_and_send(window, self.radio.clone());
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: LabEvent) {
        match event {
            LabEvent::ContextCreated(wgpu) => {
                let mut scene = Scene::new(wgpu, &self.config);
                // the window may have been resized while the context was being built
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    scene.resize(size.width, size.height);
                }
                self.scene = Some(scene);
                self.request_redraw();
            }
            LabEvent::ContextFailed(lab_error) => {
                error!("{lab_error}");
                event_loop.exit();
            }
            LabEvent::RestartAnimation => {
                if let Some(scene) = &mut self.scene {
                    scene.restart_animation();
                }
            }
            LabEvent::ResetView => {
                if let Some(scene) = &mut self.scene {
                    scene.reset_view();
                }
            }
            LabEvent::NudgePuck { index, offset } => {
                if let Some(scene) = &mut self.scene {
                    scene.nudge_puck(index, offset);
                }
            }
            LabEvent::Exit => event_loop.exit(),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.keyboard.handle_key_event(key_event, &self.radio);
                return;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.pointer_handler.set_density(*scale_factor);
                return;
            }
            _ => {}
        }
        let Some(scene) = &mut self.scene else {
            return;
        };
        match event {
            WindowEvent::Resized(size) => scene.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                scene.redraw();
                self.request_redraw();
            }
            event => {
                if let Some(delta) = self.pointer_handler.process_window_event(&event) {
                    scene.rotate(delta);
                }
            }
        }
    }
}
