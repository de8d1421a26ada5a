// Display module - host-side window and frame presentation
//
// The core hands over a finished 256x240 ARGB frame per vertical blank;
// this module owns the winit window, the pixels surface, and the ~60 Hz
// pacing. Nothing here is consulted by the emulation core.

pub mod framebuffer;
mod window;

pub use window::{run_display, WindowConfig};
