// PPU address space: nametable mirroring, palette RAM, pattern tables

use super::{ppu_with_chr, Ppu};
use crate::cartridge::Mirroring;

#[test]
fn test_pattern_table_reads_come_from_mapper() {
    let ppu = ppu_with_chr(0x5A, Mirroring::Horizontal);

    assert_eq!(ppu.read_vram(0x0000), 0x5A);
    assert_eq!(ppu.read_vram(0x1FFF), 0x5A);
}

#[test]
fn test_pattern_table_reads_without_cartridge() {
    let ppu = Ppu::new();
    assert_eq!(ppu.read_vram(0x0000), 0, "no cartridge floats to zero");
}

#[test]
fn test_horizontal_mirroring_folds_pairs() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Horizontal);

    // $2000 and $2400 share a bank; $2800 and $2C00 share the other
    ppu.write_vram(0x2000, 0x11);
    assert_eq!(ppu.read_vram(0x2400), 0x11);

    ppu.write_vram(0x2800, 0x22);
    assert_eq!(ppu.read_vram(0x2C00), 0x22);
    assert_eq!(ppu.read_vram(0x2000), 0x11, "banks stay distinct");
}

#[test]
fn test_vertical_mirroring_folds_alternates() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Vertical);

    ppu.write_vram(0x2000, 0x33);
    assert_eq!(ppu.read_vram(0x2800), 0x33);

    ppu.write_vram(0x2400, 0x44);
    assert_eq!(ppu.read_vram(0x2C00), 0x44);
    assert_ne!(ppu.read_vram(0x2400), ppu.read_vram(0x2000));
}

#[test]
fn test_four_screen_keeps_all_windows_distinct() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::FourScreen);

    ppu.write_vram(0x2000, 0x01);
    ppu.write_vram(0x2400, 0x02);
    ppu.write_vram(0x2800, 0x03);
    ppu.write_vram(0x2C00, 0x04);

    assert_eq!(ppu.read_vram(0x2000), 0x01);
    assert_eq!(ppu.read_vram(0x2400), 0x02);
    assert_eq!(ppu.read_vram(0x2800), 0x03);
    assert_eq!(ppu.read_vram(0x2C00), 0x04);
}

#[test]
fn test_mirroring_change_recomputes_map() {
    let mut ppu = Ppu::new();

    ppu.set_mirroring(Mirroring::Horizontal);
    assert_eq!(ppu.nt_map, [0, 0, 1, 1]);

    ppu.set_mirroring(Mirroring::Vertical);
    assert_eq!(ppu.nt_map, [0, 1, 0, 1]);
}

#[test]
fn test_nametable_mirror_region_3000() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x2005, 0x77);
    assert_eq!(ppu.read_vram(0x3005), 0x77, "$3000-$3EFF mirrors $2000-$2EFF");

    ppu.write_vram(0x3105, 0x88);
    assert_eq!(ppu.read_vram(0x2105), 0x88);
}

#[test]
fn test_palette_write_read_identity() {
    let mut ppu = Ppu::new();

    for i in 0..32u16 {
        ppu.write_vram(0x3F00 + i, i as u8);
    }
    for i in 0..32u16 {
        let expected = match i {
            0x10 | 0x14 | 0x18 | 0x1C => (i - 0x10) as u8,
            _ => i as u8,
        };
        assert_eq!(ppu.read_vram(0x3F00 + i), expected, "entry {:02X}", i);
    }
}

#[test]
fn test_palette_sprite_zero_entries_mirror_backdrop() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x3F10, 0x2A);
    assert_eq!(ppu.read_vram(0x3F00), 0x2A, "$3F10 is $3F00");

    ppu.write_vram(0x3F04, 0x1B);
    assert_eq!(ppu.read_vram(0x3F14), 0x1B);
}

#[test]
fn test_palette_region_wraps_every_32_bytes() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x3F01, 0x15);
    assert_eq!(ppu.read_vram(0x3F21), 0x15);
    assert_eq!(ppu.read_vram(0x3FE1), 0x15);
}
