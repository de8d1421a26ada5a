// CPU interpreter benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::{Bus, Cartridge, Cpu, Mirroring};
use std::hint::black_box;

/// Bus with an NROM cartridge running a small arithmetic loop
fn bench_bus() -> Bus {
    // loop: LDA $00; CLC; ADC #$01; STA $00; INX; CPX #$00; BNE loop; JMP loop
    let code = [
        0xA5, 0x00, // LDA $00
        0x18, // CLC
        0x69, 0x01, // ADC #$01
        0x85, 0x00, // STA $00
        0xE8, // INX
        0xE0, 0x00, // CPX #$00
        0xD0, 0xF4, // BNE loop
        0x4C, 0x00, 0x80, // JMP loop
    ];
    let mut prg_rom = vec![0xEA; 16 * 1024];
    prg_rom[..code.len()].copy_from_slice(&code);
    prg_rom[0x3FFC] = 0x00;
    prg_rom[0x3FFD] = 0x80;

    let mut bus = Bus::new();
    bus.attach_cartridge(Cartridge {
        prg_rom,
        chr_rom: vec![0; 8 * 1024],
        chr_is_ram: false,
        trainer: None,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    })
    .unwrap();
    bus
}

fn cpu_step_loop(c: &mut Criterion) {
    c.bench_function("cpu_10k_instructions", |b| {
        b.iter(|| {
            let mut bus = bench_bus();
            let mut cpu = Cpu::new();
            cpu.reset(&mut bus);
            for _ in 0..10_000 {
                black_box(cpu.step(&mut bus));
            }
            black_box(cpu.cycles)
        })
    });
}

fn cpu_trace_format(c: &mut Criterion) {
    let bus = bench_bus();
    let mut cpu = Cpu::new();
    cpu.pc = 0x8000;

    c.bench_function("cpu_trace_line", |b| {
        b.iter(|| black_box(cpu.trace(&bus)))
    });
}

criterion_group!(benches, cpu_step_loop, cpu_trace_format);
criterion_main!(benches);
