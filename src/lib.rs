// famicore - NES emulator library
// Core library: CPU, PPU, bus, cartridge, orchestrator, and frontend glue

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, INesError, INesHeader, Mapper, Mirroring};
pub use cpu::Cpu;
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, CpuSnapshot,
    DisassembledInstruction, ExecutionLog, MemoryViewer, TraceEntry,
};
pub use display::WindowConfig;
pub use emulator::{ConfigError, Emulator, EmulatorConfig, ScreenshotError};
pub use ppu::Ppu;
pub use ram::Ram;
