// Window management and the main loop
//
// winit owns the event loop; each redraw runs the emulator to the next
// vertical blank and presents the finished frame through a pixels
// surface. Frame pacing happens here, on the host side - the core never
// reads a clock.

use super::framebuffer::blit_argb;
use crate::emulator::Emulator;
use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Integer scale factor (1x-8x)
    pub scale: u32,
    /// Target frame rate (60 for NTSC)
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Default configuration: 3x scale, 60 FPS, VSync on
    pub fn new() -> Self {
        Self {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Set the scale factor (clamped to 1x-8x)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Enable or disable VSync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Window width in physical pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Window height in physical pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    /// Duration of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The emulator window: event handling, pacing, and presentation
struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    emulator: Emulator,
    last_frame_time: Instant,
}

impl DisplayWindow {
    fn new(config: WindowConfig, emulator: Emulator) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            emulator,
            last_frame_time: Instant::now(),
        }
    }

    /// Run the emulator to the next VBlank and present the frame
    fn render(&mut self) -> Result<(), pixels::Error> {
        if !self.emulator.is_paused() {
            self.emulator.run_frame();
        }

        if let Some(pixels) = &mut self.pixels {
            blit_argb(self.emulator.frame(), pixels.frame_mut());
            pixels.render()?;
        }
        Ok(())
    }

    /// Whether enough wall-clock time has passed for the next frame
    fn should_render_frame(&mut self) -> bool {
        if self.last_frame_time.elapsed() >= self.config.frame_duration() {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    fn handle_key(&mut self, key: PhysicalKey, event_loop: &ActiveEventLoop) {
        match key {
            PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
            PhysicalKey::Code(KeyCode::KeyP) => {
                self.emulator.toggle_pause();
                info!(
                    "{}",
                    if self.emulator.is_paused() { "paused" } else { "resumed" }
                );
            }
            PhysicalKey::Code(KeyCode::F12) => match self.emulator.screenshot() {
                Ok(path) => info!("screenshot: {}", path.display()),
                Err(err) => warn!("screenshot failed: {}", err),
            },
            _ => {}
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = match self.emulator.rom_path() {
            Some(path) => format!("famicore - {}", path.display()),
            None => "famicore".to_string(),
        };
        let window_attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );
        let size = window.inner_size();

        // Arc<Window> gives the surface its 'static lifetime
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture)
            .expect("failed to create pixel surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(physical_key, event_loop),

            WindowEvent::RedrawRequested => {
                if self.should_render_frame() {
                    if let Err(err) = self.render() {
                        error!("render error: {}", err);
                        event_loop.exit();
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window and run the emulator until the user quits
///
/// # Errors
/// Surfaces event-loop creation and run failures.
pub fn run_display(
    config: WindowConfig,
    emulator: Emulator,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(if config.vsync {
        ControlFlow::Wait
    } else {
        ControlFlow::Poll
    });

    info!(
        "display: {}x{} window ({}x scale, {} FPS, vsync {})",
        config.window_width(),
        config.window_height(),
        config.scale,
        config.target_fps,
        config.vsync
    );

    let mut display = DisplayWindow::new(config, emulator);
    event_loop.run_app(&mut display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
    }

    #[test]
    fn test_config_builders_and_clamping() {
        let config = WindowConfig::new().with_scale(20).with_fps(0).with_vsync(false);
        assert_eq!(config.scale, 8, "scale clamps at 8x");
        assert_eq!(config.target_fps, 1);
        assert!(!config.vsync);
    }

    #[test]
    fn test_window_dimensions_follow_scale() {
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(), 512);
        assert_eq!(config.window_height(), 480);
    }

    #[test]
    fn test_frame_duration() {
        let config = WindowConfig::new().with_fps(60);
        assert_eq!(config.frame_duration(), Duration::from_micros(16_666));
    }
}
