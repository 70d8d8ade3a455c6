use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use diorama_gallery::camera::Camera;
use diorama_gallery::cli::Cli;
use diorama_gallery::config::GalleryConfig;
use diorama_gallery::frame::{FpsCounter, FrameClock};
use diorama_gallery::input::{Button, Controller, WinitController};
use diorama_gallery::logging;
use diorama_gallery::renderer::{GalleryRenderer, Overlay};
use diorama_gallery::{Gallery, NavCommand, Stage, CATALOG};

struct App {
    config: GalleryConfig,
    gallery: Gallery,
    stage: Stage,
    camera: Camera,
    controller: WinitController,
    clock: FrameClock,
    fps: FpsCounter,
    window: Option<Arc<Window>>,
    renderer: Option<GalleryRenderer>,
}

impl App {
    fn new(config: GalleryConfig, gallery: Gallery) -> Self {
        let mut app = Self {
            config,
            gallery,
            stage: Stage::new(),
            camera: Camera::new(),
            controller: WinitController::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::default(),
            window: None,
            renderer: None,
        };
        app.mount_current();
        app
    }

    /// Builds the selected scene and restarts its clock from zero
    fn mount_current(&mut self) {
        let content = self.gallery.current().instantiate(self.config.seed);
        self.stage.mount(content);
        self.camera.reset();
        self.clock.restart();
        if let Some(window) = &self.window {
            window.set_title(&format!("{} - {}", self.config.window.title, self.gallery.label()));
        }
    }

    fn navigate(&mut self, command: NavCommand) {
        self.gallery.apply(command);
        log::info!("{}", self.gallery.label());
        self.mount_current();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.was_pressed(Button::Escape) {
            event_loop.exit();
            return;
        }
        if let Some(command) = NavCommand::from_controller(&self.controller) {
            self.navigate(command);
        }

        let frame = self.clock.tick();
        if let Some(fps) = self.fps.record(frame.delta) {
            log::debug!("FPS: {fps:.1}");
        }

        // drags and scrolls over the overlay belong to egui
        let over_ui = self.renderer.as_ref().is_some_and(|r| r.wants_pointer());
        let (mouse_delta, scroll) = if over_ui {
            ((0.0, 0.0), 0.0)
        } else {
            (self.controller.mouse_delta(), self.controller.scroll_delta())
        };
        self.camera.update(&self.controller, mouse_delta, scroll);
        self.stage.tick(frame.time);
        self.controller.reset_deltas();

        let overlay = Overlay {
            label: self.gallery.label(),
            fps: self.fps.fps(),
            visible: self.config.show_ui,
        };

        let result = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => {
                renderer.render(&self.camera, &mut self.stage, &overlay, window)
            }
            _ => return,
        };
        match result {
            Ok(Some(command)) => self.navigate(command),
            Ok(None) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                if let Some(renderer) = &mut self.renderer {
                    renderer.reconfigure();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(format!("{} - {}", self.config.window.title, self.gallery.label()))
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(GalleryRenderer::new(window.clone(), self.config.vsync)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.restart();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn print_catalog(gallery: &Gallery) {
    for (i, entry) in gallery.entries().iter().enumerate() {
        println!("{:>3}  {}", i + 1, entry.name);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = GalleryConfig::resolve(&cli)?;
    let mut gallery = Gallery::new(CATALOG)?;

    if cli.list {
        print_catalog(&gallery);
        return Ok(());
    }

    if let Some(name) = &cli.describe {
        gallery.select(name)?;
        let content = gallery.current().instantiate(config.seed);
        println!("{}", serde_json::to_string_pretty(&content.summary())?);
        return Ok(());
    }

    if let Some(name) = &config.start_scene {
        gallery.select(name)?;
    }

    log::info!(
        "{} scenes, seed {:#x}; arrows switch scenes, drag orbits, wheel zooms, R resets, Escape quits",
        gallery.len(),
        config.seed
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, gallery);
    event_loop.run_app(&mut app)?;

    Ok(())
}
