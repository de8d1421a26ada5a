// Mapper 0 (NROM) - no bank switching
//
// Memory layout:
// - CPU $8000-$BFFF: first 16KB of PRG-ROM
// - CPU $C000-$FFFF: last 16KB of PRG-ROM (mirror of the first for 16KB boards)
// - PPU $0000-$1FFF: 8KB CHR-ROM or CHR-RAM
//
// Variants:
// - NROM-128: 16KB PRG-ROM, mirrored to fill the 32KB window
// - NROM-256: 32KB PRG-ROM, mapped directly

use crate::cartridge::{Cartridge, Mapper, MapperError, Mirroring};

/// Mapper 0 implementation (NROM)
///
/// The board used by Super Mario Bros., Donkey Kong, and the standard CPU
/// test ROMs. PRG writes are ignored; CHR writes are honored only when the
/// board carries CHR-RAM.
pub struct Mapper0 {
    /// PRG-ROM data (16KB or 32KB)
    prg_rom: Vec<u8>,
    /// CHR-ROM or CHR-RAM data (8KB)
    chr_mem: Vec<u8>,
    /// Whether CHR memory is RAM (writable) or ROM (read-only)
    chr_is_ram: bool,
    /// Mirroring is fixed by the board; NROM cannot change it
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Create a new NROM mapper from a cartridge
    ///
    /// # Errors
    /// Returns `MapperError::InvalidConfiguration` unless the PRG-ROM is
    /// exactly 16KB or 32KB and CHR memory is exactly 8KB.
    pub fn new(cartridge: Cartridge) -> Result<Self, MapperError> {
        let prg_size = cartridge.prg_rom.len();
        if prg_size != 16 * 1024 && prg_size != 32 * 1024 {
            return Err(MapperError::InvalidConfiguration(format!(
                "NROM requires 16KB or 32KB PRG-ROM, got {} bytes",
                prg_size
            )));
        }

        if cartridge.chr_rom.len() != 8 * 1024 {
            return Err(MapperError::InvalidConfiguration(format!(
                "NROM requires 8KB CHR memory, got {} bytes",
                cartridge.chr_rom.len()
            )));
        }

        Ok(Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_mem: cartridge.chr_rom,
            chr_is_ram: cartridge.chr_is_ram,
            mirroring: cartridge.mirroring,
        })
    }
}

impl Mapper for Mapper0 {
    /// PRG reads: byte offset from $8000, modulo the PRG size
    ///
    /// The modulo mirrors a 16KB image into both halves of the window and
    /// is a no-op for 32KB images.
    fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x8000..=0xFFFF => {
                let index = (addr - 0x8000) as usize;
                self.prg_rom[index % self.prg_rom.len()]
            }
            // Below $8000 nothing is mapped on an NROM board
            _ => 0,
        }
    }

    /// NROM has no registers; PRG writes are ignored
    fn cpu_write(&mut self, _addr: u16, _value: u8) {}

    /// CHR reads: direct index into the 8KB pattern memory
    fn ppu_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.chr_mem[addr as usize],
            _ => 0,
        }
    }

    /// CHR writes: honored for CHR-RAM, silently ignored for CHR-ROM
    fn ppu_write(&mut self, addr: u16, value: u8) {
        if let 0x0000..=0x1FFF = addr {
            if self.chr_is_ram {
                self.chr_mem[addr as usize] = value;
            }
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
