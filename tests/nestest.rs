// nestest golden-log integration test
//
// Runs the canonical CPU test ROM from its automation entry point at
// $C000 and compares every instruction boundary against the published
// trace. The ROM and log are not checked in; drop them under
// tests/roms/ and run with:
//
//   cargo test nestest -- --ignored --nocapture

mod common;

use famicore::{Bus, Cartridge, Cpu};
use std::fs;
use std::io::Write;

const ROM_PATH: &str = "tests/roms/nestest.nes";
const LOG_PATH: &str = "tests/roms/nestest.log";

/// Instructions in nestest's automated section
const MAX_INSTRUCTIONS: usize = 8991;

#[test]
#[ignore] // needs tests/roms/nestest.nes and nestest.log
fn nestest_golden_log() {
    let rom = common::load_ines(ROM_PATH).expect("nestest.nes not found");
    let golden = fs::read_to_string(LOG_PATH).expect("nestest.log not found");
    let golden_lines: Vec<&str> = golden.lines().collect();

    let cartridge = Cartridge::from_ines_bytes(&rom).expect("valid iNES image");
    let mut bus = Bus::new();
    bus.attach_cartridge(cartridge).unwrap();

    // Automation mode: start at $C000 instead of the reset vector, with
    // the cycle counter at 7 to match the log
    let mut cpu = Cpu::new();
    cpu.pc = 0xC000;
    cpu.cycles = 7;

    let mut trace_file =
        fs::File::create("nestest_trace.log").expect("failed to create trace file");
    let mut mismatches = 0usize;

    for line_number in 0..MAX_INSTRUCTIONS.min(golden_lines.len()) {
        let trace = cpu.trace(&bus);
        writeln!(trace_file, "{}", trace).unwrap();

        if !lines_match(&trace, golden_lines[line_number]) {
            mismatches += 1;
            if mismatches <= 10 {
                println!("mismatch at line {}:", line_number + 1);
                println!("  expected: {}", golden_lines[line_number]);
                println!("  got:      {}", trace);
            }
        }

        cpu.step(&mut bus);

        // nestest reports failures through $02/$03
        let official = bus.peek(0x0002);
        let unofficial = bus.peek(0x0003);
        if official != 0 || unofficial != 0 {
            panic!(
                "nestest reported failure: $02={:02X} $03={:02X} at line {}",
                official,
                unofficial,
                line_number + 1
            );
        }
    }

    assert_eq!(mismatches, 0, "{} trace mismatches (see nestest_trace.log)", mismatches);
}

/// Compare a trace line against the golden log, skipping the PPU column
/// (the golden log interleaves PPU coordinates we do not emit in traces)
fn lines_match(actual: &str, expected: &str) -> bool {
    // Everything up to the register dump must match exactly
    let registers_end = match (actual.find("SP:"), expected.find("SP:")) {
        (Some(a), Some(e)) => (a + 5, e + 5),
        _ => return false,
    };
    if actual[..registers_end.0] != expected[..registers_end.1] {
        return false;
    }

    // And the cycle counters must agree
    let actual_cyc = actual.split("CYC:").nth(1).map(str::trim);
    let expected_cyc = expected.split("CYC:").nth(1).map(str::trim);
    actual_cyc == expected_cyc
}

#[test]
fn nestest_smoke_program() {
    // LDA #$42; STA $00; NOP - the minimal end-to-end CPU/bus check
    let mut bus = common::bus_with_prg(&[0xA9, 0x42, 0x85, 0x00, 0xEA]);
    let mut cpu = Cpu::new();
    cpu.pc = 0x8000;

    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x8002);

    cpu.step(&mut bus);
    assert_eq!(bus.read(0x0000), 0x42);
    assert_eq!(cpu.pc, 0x8004);
}
