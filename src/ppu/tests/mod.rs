// PPU test suite, split by concern

mod memory;

use super::Ppu;
use crate::cartridge::{create_mapper, Cartridge, Mirroring};
use std::cell::RefCell;
use std::rc::Rc;

/// PPU wired to an NROM cartridge with the given 8KB CHR-ROM image
pub(super) fn ppu_with_chr_rom(chr_rom: Vec<u8>, mirroring: Mirroring) -> Ppu {
    let cartridge = Cartridge {
        prg_rom: vec![0; 16 * 1024],
        chr_rom,
        chr_is_ram: false,
        trainer: None,
        mapper: 0,
        mirroring,
        has_battery: false,
    };
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));

    let mut ppu = Ppu::new();
    ppu.set_mapper(mapper);
    ppu
}

/// PPU wired to an NROM cartridge whose CHR is filled with `chr_fill`
pub(super) fn ppu_with_chr(chr_fill: u8, mirroring: Mirroring) -> Ppu {
    ppu_with_chr_rom(vec![chr_fill; 8 * 1024], mirroring)
}

/// Advance the PPU by `n` dots
pub(super) fn run_dots(ppu: &mut Ppu, n: u64) {
    for _ in 0..n {
        ppu.step();
    }
}

/// Run the PPU until the VBlank transition, with a safety bound
pub(super) fn run_to_vblank(ppu: &mut Ppu) {
    for _ in 0..(341 * 262 * 2) {
        if ppu.step() {
            return;
        }
    }
    panic!("PPU never reached VBlank");
}
