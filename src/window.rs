//! The winit application driving the field.
//!
//! One frame = one simulation step + one render. Resizes flow to both the
//! surface and the field's extent; closing the window stops the field and
//! exits the loop, after which no further callbacks fire.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::field::Field;
use crate::gpu::links::LinkInstance;
use crate::gpu::{DiscInstance, GpuState};
use crate::time::Time;

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Field,
    time: Time,
    discs: Vec<DiscInstance>,
    links: Vec<LinkInstance>,
    title: String,
    /// Set when startup fails inside a winit callback; surfaced by `try_run`.
    pub(crate) failure: Option<RunError>,
}

impl App {
    pub(crate) fn new(field: Field, title: String) -> Self {
        Self {
            window: None,
            gpu: None,
            field,
            time: Time::new(),
            discs: Vec::new(),
            links: Vec::new(),
            title,
            failure: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.failure = Some(RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), self.field.visuals())) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.field
                    .attach(Vec2::new(size.width as f32, size.height as f32));
                self.gpu = Some(gpu);
                // Kick off the redraw cycle; each frame requests the next.
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.failure = Some(RunError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.field.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.field.resize(Vec2::new(
                    physical_size.width as f32,
                    physical_size.height as f32,
                ));
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu) = &mut self.gpu {
                    self.time.update();
                    self.field.step();
                    self.field.disc_instances(&mut self.discs);
                    self.field.link_instances(&mut self.links);

                    match gpu.render(&self.discs, &self.links) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            self.field.stop();
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("render error: {:?}", e),
                    }

                    if self.time.frame() % 600 == 0 {
                        log::debug!(
                            "frame {}: {:.1} fps, {} links",
                            self.time.frame(),
                            self.time.fps(),
                            self.links.len()
                        );
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
