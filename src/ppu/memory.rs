// PPU address space (14 bits)
//
// ```text
// $0000-$1FFF: pattern tables (cartridge CHR via the mapper)
// $2000-$2FFF: four 1KB nametable windows, folded through nt_map
// $3000-$3EFF: mirror of $2000-$2EFF
// $3F00-$3FFF: palette RAM, 32 bytes, mirrored every 32
// ```

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Rebuild the nametable window map from the current mirroring mode
    ///
    /// Horizontal folds the windows {A,A,B,B}, vertical {A,B,A,B};
    /// four-screen gives every window its own bank (the second 2KB stands
    /// in for the RAM a four-screen board would supply).
    pub(super) fn rebuild_nt_map(&mut self) {
        self.nt_map = match self.mirroring {
            Mirroring::Horizontal => [0, 0, 1, 1],
            Mirroring::Vertical => [0, 1, 0, 1],
            Mirroring::FourScreen => [0, 1, 2, 3],
        };
    }

    /// Resolve a nametable address ($2000-$2FFF range) to a physical index
    #[inline]
    pub(super) fn nametable_index(&self, addr: u16) -> usize {
        let window = ((addr >> 10) & 0x03) as usize;
        let offset = (addr as usize) & (NAMETABLE_SIZE - 1);
        self.nt_map[window] * NAMETABLE_SIZE + offset
    }

    /// Resolve a palette address ($3F00-$3FFF range) to 0-31
    ///
    /// Entries $10/$14/$18/$1C fold onto $00/$04/$08/$0C: the sprite
    /// palettes share their zero entry with the backdrop.
    #[inline]
    pub(super) fn palette_index(addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index >= 0x10 && index % 4 == 0 {
            index - 0x10
        } else {
            index
        }
    }

    /// Read a byte from the PPU address space
    pub(super) fn read_vram(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => match &self.mapper {
                Some(mapper) => mapper.borrow().ppu_read(addr),
                None => 0,
            },
            0x2000..=0x3EFF => self.nametables[self.nametable_index(addr)],
            0x3F00..=0x3FFF => self.palette_ram[Self::palette_index(addr)],
            _ => unreachable!(),
        }
    }

    /// Write a byte to the PPU address space
    pub(super) fn write_vram(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().ppu_write(addr, data);
                }
            }
            0x2000..=0x3EFF => {
                let index = self.nametable_index(addr);
                self.nametables[index] = data;
            }
            0x3F00..=0x3FFF => self.palette_ram[Self::palette_index(addr)] = data,
            _ => unreachable!(),
        }
    }
}
