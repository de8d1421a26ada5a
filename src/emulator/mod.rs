// Emulator module - the orchestrator
//
// Owns the CPU and the bus (which owns RAM, PPU, and the mapper) and
// advances them in lock-step: one CPU instruction, then three PPU dots
// per CPU cycle. NMI assertions from the PPU are latched and consumed at
// the next instruction boundary, never mid-instruction.
//
// The core is single-threaded and deterministic: for a given ROM the
// sequence of CPU and PPU states is a pure function of the inputs, and
// nothing in here reads a clock or blocks on I/O. Pacing to ~60 Hz is the
// host's job.

mod config;
mod screenshot;

pub use config::{ConfigError, EmulatorConfig};
pub use screenshot::ScreenshotError;

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use log::info;
use std::path::{Path, PathBuf};

/// PPU dots per CPU cycle (NTSC)
const DOTS_PER_CPU_CYCLE: u32 = 3;

/// The assembled console
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
    paused: bool,
}

impl Emulator {
    /// Create an emulator with no cartridge attached
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
        }
    }

    /// Load an iNES ROM file and reset the machine
    ///
    /// # Errors
    /// Load and mapper errors are surfaced without constructing any
    /// machine state; the previous cartridge (if any) stays in place.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let cartridge = Cartridge::from_ines_file(path.as_ref())?;
        self.attach_cartridge(cartridge)?;
        self.rom_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Attach an already-loaded cartridge and reset the machine
    ///
    /// # Errors
    /// Fails when the cartridge's mapper is unsupported or misconfigured.
    pub fn attach_cartridge(
        &mut self,
        cartridge: Cartridge,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.bus.attach_cartridge(cartridge)?;
        self.reset();
        Ok(())
    }

    /// Reset the machine, as if the reset button was pressed
    ///
    /// PC reloads from the reset vector; the PPU returns to its power-on
    /// state (the cartridge keeps its mapper and mirroring).
    pub fn reset(&mut self) {
        self.bus.ppu_mut().reset();
        self.cpu.reset(&mut self.bus);
        self.paused = false;
        info!("reset: PC={:04X}", self.cpu.pc);
    }

    /// Execute one CPU instruction and keep the PPU in step
    ///
    /// A latched NMI is taken first (it counts toward the returned
    /// cycles), then the instruction, then any OAM DMA stall the
    /// instruction triggered. The PPU advances three dots per cycle.
    ///
    /// # Returns
    /// The CPU cycles consumed at this boundary.
    pub fn step_instruction(&mut self) -> u32 {
        let (cycles, _) = self.step_internal();
        cycles
    }

    /// Run until the PPU enters vertical blank (scanline 241, dot 1)
    ///
    /// On return the framebuffer holds a completed frame and is stable
    /// until the next call into the emulator.
    pub fn run_frame(&mut self) {
        loop {
            let (_, frame_complete) = self.step_internal();
            if frame_complete {
                return;
            }
        }
    }

    fn step_internal(&mut self) -> (u32, bool) {
        let mut cycles = 0u32;

        // Interrupts are boundary-delivered: consume the latch before the
        // next instruction
        if self.bus.ppu().nmi_pending() {
            self.bus.ppu_mut().clear_nmi();
            cycles += self.cpu.nmi(&mut self.bus) as u32;
        }

        cycles += self.cpu.step(&mut self.bus) as u32;
        cycles += self.bus.take_dma_stall();

        let mut frame_complete = false;
        for _ in 0..cycles * DOTS_PER_CPU_CYCLE {
            frame_complete |= self.bus.ppu_mut().step();
        }

        (cycles, frame_complete)
    }

    /// The completed frame: 256x240 ARGB pixels, row-major
    pub fn frame(&self) -> &[u32] {
        self.bus.ppu().frame()
    }

    /// Read a bus address without side effects (debugger)
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.peek(addr)
    }

    /// Write a bus address (debugger)
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Current PPU scanline (-1 = pre-render)
    pub fn scanline(&self) -> i16 {
        self.bus.ppu().scanline()
    }

    /// Current PPU dot within the scanline
    pub fn dot(&self) -> u16 {
        self.bus.ppu().dot()
    }

    /// Save the current frame as a PNG in the configured directory
    ///
    /// # Errors
    /// Surfaces filesystem and encoding failures.
    pub fn screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        screenshot::save_screenshot(
            self.frame(),
            &self.config.screenshot.directory,
            self.rom_path.as_deref(),
        )
    }

    /// Pause emulation (the host stops calling run_frame)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume emulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle the paused state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether the emulator is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get a reference to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get a mutable reference to the CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get a reference to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get a mutable reference to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// Path of the loaded ROM, if any
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
