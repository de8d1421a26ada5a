// Memory inspection

use crate::bus::Bus;

/// Side-effect-free memory dumps over the bus `peek` path
pub struct MemoryViewer;

impl MemoryViewer {
    /// Read `len` bytes starting at `start`, wrapping at $FFFF
    pub fn dump(bus: &Bus, start: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| bus.peek(start.wrapping_add(i as u16)))
            .collect()
    }

    /// Render a classic hex dump, 16 bytes per row
    pub fn format_hex(bus: &Bus, start: u16, len: usize) -> String {
        let bytes = Self::dump(bus, start, len);
        let mut out = String::new();

        for (row, chunk) in bytes.chunks(16).enumerate() {
            let addr = start.wrapping_add((row * 16) as u16);
            out.push_str(&format!("{:04X}:", addr));
            for byte in chunk {
                out.push_str(&format!(" {:02X}", byte));
            }
            out.push('\n');
        }
        out
    }
}
