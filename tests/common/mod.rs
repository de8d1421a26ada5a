// Shared helpers for ROM-based integration tests

#![allow(dead_code)]

use famicore::{Bus, Cartridge, Mirroring};
use std::fs;
use std::path::Path;

/// Load an iNES file from disk, if present
///
/// Test ROMs are not checked in; tests that need one are `#[ignore]`d and
/// call this with the expected local path.
pub fn load_ines(path: &str) -> Option<Vec<u8>> {
    let path = Path::new(path);
    if path.exists() {
        Some(fs::read(path).expect("failed to read test ROM"))
    } else {
        None
    }
}

/// Build an NROM cartridge from raw PRG bytes (padded to 16KB)
pub fn nrom_with_prg(prg: &[u8]) -> Cartridge {
    let mut prg_rom = vec![0u8; 16 * 1024];
    prg_rom[..prg.len()].copy_from_slice(prg);
    Cartridge {
        prg_rom,
        chr_rom: vec![0; 8 * 1024],
        chr_is_ram: false,
        trainer: None,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    }
}

/// Bus with an attached NROM cartridge built from raw PRG bytes
pub fn bus_with_prg(prg: &[u8]) -> Bus {
    let mut bus = Bus::new();
    bus.attach_cartridge(nrom_with_prg(prg)).unwrap();
    bus
}
