// Screenshot capture
//
// Dumps the ARGB framebuffer as a PNG with a timestamped filename.

use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chrono::Local;
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for screenshot capture
#[derive(Debug)]
pub enum ScreenshotError {
    /// Directory creation or file write failed
    Io(std::io::Error),
    /// PNG encoding failed
    Encoding(png::EncodingError),
}

impl fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenshotError::Io(err) => write!(f, "screenshot I/O error: {}", err),
            ScreenshotError::Encoding(err) => write!(f, "PNG encoding error: {}", err),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<std::io::Error> for ScreenshotError {
    fn from(err: std::io::Error) -> Self {
        ScreenshotError::Io(err)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(err: png::EncodingError) -> Self {
        ScreenshotError::Encoding(err)
    }
}

/// Save a frame as `<rom-stem>_<timestamp>.png` under `directory`
///
/// # Errors
/// Surfaces directory creation, encoding, and write failures.
pub fn save_screenshot(
    frame: &[u32],
    directory: &Path,
    rom_path: Option<&Path>,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(directory)?;

    let stem = rom_path
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("famicore");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = directory.join(format!("{}_{}.png", stem, timestamp));

    let file = fs::File::create(&path)?;
    let mut encoder = png::Encoder::new(file, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgba = vec![0u8; frame.len() * 4];
    for (pixel, out) in frame.iter().zip(rgba.chunks_exact_mut(4)) {
        out[0] = (pixel >> 16) as u8; // R
        out[1] = (pixel >> 8) as u8; // G
        out[2] = *pixel as u8; // B
        out[3] = (pixel >> 24) as u8; // A
    }
    writer.write_image_data(&rgba)?;

    info!("screenshot saved to {}", path.display());
    Ok(path)
}
