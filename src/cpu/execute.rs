// Instruction execution and trace logging

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::{OpcodeInfo, OPCODE_TABLE};
use crate::cpu::Cpu;

impl Cpu {
    /// Execute one instruction
    ///
    /// Fetches the opcode at PC, resolves the operand through the decoded
    /// addressing mode, runs the semantic action, and accounts cycles:
    /// base count, plus one for a page crossing on penalty-flagged
    /// opcodes, plus whatever a taken branch reports.
    ///
    /// # Returns
    /// The number of cycles the instruction consumed.
    pub fn step(&mut self, bus: &mut Bus) -> u8 {
        let opcode = bus.read(self.pc);
        let opcode_info = &OPCODE_TABLE[opcode as usize];

        self.pc = self.pc.wrapping_add(1);

        let addr_result = match opcode_info.mode {
            AddressingMode::Implied => self.addr_implied(),
            AddressingMode::Accumulator => self.addr_accumulator(),
            AddressingMode::Immediate => self.addr_immediate(bus),
            AddressingMode::ZeroPage => self.addr_zero_page(bus),
            AddressingMode::ZeroPageX => self.addr_zero_page_x(bus),
            AddressingMode::ZeroPageY => self.addr_zero_page_y(bus),
            AddressingMode::Relative => self.addr_relative(bus),
            AddressingMode::Absolute => self.addr_absolute(bus),
            AddressingMode::AbsoluteX => self.addr_absolute_x(bus),
            AddressingMode::AbsoluteY => self.addr_absolute_y(bus),
            AddressingMode::Indirect => self.addr_indirect(bus),
            AddressingMode::IndexedIndirect => self.addr_indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.addr_indirect_indexed(bus),
        };

        let branch_cycles = self.execute_instruction(opcode, &addr_result, bus);

        let mut cycles = opcode_info.cycles;
        if opcode_info.page_cycle
            && addr_result.page_crossed
            && opcode_info.mode != AddressingMode::Relative
        {
            cycles += 1;
        }
        cycles += branch_cycles;

        self.cycles = self.cycles.wrapping_add(cycles as u64);
        cycles
    }

    /// Run the semantic action for an opcode
    ///
    /// # Returns
    /// Extra cycles reported by branch instructions (0 for everything else).
    #[allow(clippy::too_many_lines)]
    fn execute_instruction(
        &mut self,
        opcode: u8,
        addr_result: &crate::cpu::addressing::AddressingResult,
        bus: &mut Bus,
    ) -> u8 {
        match opcode {
            // Load/store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, addr_result),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, addr_result),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, addr_result),
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, addr_result),
            0x86 | 0x96 | 0x8E => self.stx(bus, addr_result),
            0x84 | 0x94 | 0x8C => self.sty(bus, addr_result),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, addr_result),
            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 | 0xEB => {
                self.sbc(bus, addr_result)
            }
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, addr_result),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, addr_result),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Logic
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, addr_result),
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, addr_result),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, addr_result),
            0x24 | 0x2C => self.bit(bus, addr_result),

            // Shift/rotate
            0x0A => self.asl(bus, addr_result, true),
            0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, addr_result, false),
            0x4A => self.lsr(bus, addr_result, true),
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, addr_result, false),
            0x2A => self.rol(bus, addr_result, true),
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, addr_result, false),
            0x6A => self.ror(bus, addr_result, true),
            0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, addr_result, false),

            // Compare
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, addr_result),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, addr_result),
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, addr_result),

            // Branches report their own extra cycles
            0x90 => return self.bcc(addr_result),
            0xB0 => return self.bcs(addr_result),
            0xF0 => return self.beq(addr_result),
            0x30 => return self.bmi(addr_result),
            0xD0 => return self.bne(addr_result),
            0x10 => return self.bpl(addr_result),
            0x50 => return self.bvc(addr_result),
            0x70 => return self.bvs(addr_result),

            // Jumps and subroutines
            0x4C | 0x6C => self.jmp(addr_result),
            0x20 => self.jsr(bus, addr_result),
            0x60 => self.rts(bus),

            // Stack
            0x48 => self.pha(bus, addr_result),
            0x68 => self.pla(bus, addr_result),
            0x08 => self.php(bus, addr_result),
            0x28 => self.plp(bus, addr_result),
            0x9A => self.txs(),
            0xBA => self.tsx(),

            // Transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),

            // Flags
            0x18 => self.clc(),
            0x38 => self.sec(),
            0x58 => self.cli(),
            0x78 => self.sei(),
            0xD8 => self.cld(),
            0xF8 => self.sed(),
            0xB8 => self.clv(),

            // Interrupt-related
            0x00 => self.brk(bus),
            0x40 => self.rti(bus),

            // Undocumented (stable subset)
            0xA7 | 0xB7 | 0xAF | 0xBF | 0xA3 | 0xB3 | 0xAB => self.lax(bus, addr_result),
            0x87 | 0x97 | 0x8F | 0x83 => self.sax(bus, addr_result),
            0xC7 | 0xD7 | 0xCF | 0xDF | 0xDB | 0xC3 | 0xD3 => self.dcp(bus, addr_result),
            0xE7 | 0xF7 | 0xEF | 0xFF | 0xFB | 0xE3 | 0xF3 => self.isb(bus, addr_result),
            0x07 | 0x17 | 0x0F | 0x1F | 0x1B | 0x03 | 0x13 => self.slo(bus, addr_result),
            0x27 | 0x37 | 0x2F | 0x3F | 0x3B | 0x23 | 0x33 => self.rla(bus, addr_result),
            0x47 | 0x57 | 0x4F | 0x5F | 0x5B | 0x43 | 0x53 => self.sre(bus, addr_result),
            0x67 | 0x77 | 0x6F | 0x7F | 0x7B | 0x63 | 0x73 => self.rra(bus, addr_result),
            0x0B | 0x2B => self.anc(bus, addr_result),
            0x4B => self.alr(bus, addr_result),
            0x6B => self.arr(bus, addr_result),
            0xCB => self.axs(bus, addr_result),

            // Everything else (official NOP, undocumented NOP sizes, halts)
            // is a defined no-op; unknown bytes never crash the core.
            _ => self.nop(),
        }
        0
    }

    /// Format a trace line for the instruction at the current PC
    ///
    /// Matches the layout of the published nestest log:
    /// `PC  OP OP OP  MNEMONIC OPERAND   A:XX X:XX Y:XX P:XX SP:XX CYC:n`.
    /// Reads go through `peek`, so tracing never perturbs emulation.
    pub fn trace(&self, bus: &Bus) -> String {
        let pc = self.pc;
        let opcode = bus.peek(pc);
        let opcode_info = &OPCODE_TABLE[opcode as usize];

        let byte1 = opcode;
        let byte2 = if opcode_info.bytes >= 2 {
            bus.peek(pc.wrapping_add(1))
        } else {
            0
        };
        let byte3 = if opcode_info.bytes >= 3 {
            bus.peek(pc.wrapping_add(2))
        } else {
            0
        };

        let hex_bytes = match opcode_info.bytes {
            1 => format!("{:02X}      ", byte1),
            2 => format!("{:02X} {:02X}   ", byte1, byte2),
            _ => format!("{:02X} {:02X} {:02X}", byte1, byte2, byte3),
        };

        // Undocumented opcodes carry a '*' in the column before the mnemonic
        let star = if opcode_info.unofficial { '*' } else { ' ' };
        let disassembly = self.format_operand(pc, bus, opcode_info, byte2, byte3);

        format!(
            "{:04X}  {} {}{:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, hex_bytes, star, disassembly, self.a, self.x, self.y, self.status, self.sp,
            self.cycles
        )
    }

    /// Render the mnemonic and operand of an instruction, with the memory
    /// annotations the nestest log uses
    fn format_operand(
        &self,
        pc: u16,
        bus: &Bus,
        opcode_info: &OpcodeInfo,
        byte2: u8,
        byte3: u8,
    ) -> String {
        let mnemonic = opcode_info.mnemonic;

        match opcode_info.mode {
            AddressingMode::Implied => mnemonic.to_string(),
            AddressingMode::Accumulator => format!("{} A", mnemonic),
            AddressingMode::Immediate => format!("{} #${:02X}", mnemonic, byte2),
            AddressingMode::ZeroPage => {
                format!("{} ${:02X} = {:02X}", mnemonic, byte2, bus.peek(byte2 as u16))
            }
            AddressingMode::ZeroPageX => {
                let addr = byte2.wrapping_add(self.x);
                format!(
                    "{} ${:02X},X @ {:02X} = {:02X}",
                    mnemonic,
                    byte2,
                    addr,
                    bus.peek(addr as u16)
                )
            }
            AddressingMode::ZeroPageY => {
                let addr = byte2.wrapping_add(self.y);
                format!(
                    "{} ${:02X},Y @ {:02X} = {:02X}",
                    mnemonic,
                    byte2,
                    addr,
                    bus.peek(addr as u16)
                )
            }
            AddressingMode::Relative => {
                let offset = byte2 as i8;
                let target = pc.wrapping_add(2).wrapping_add(offset as u16);
                format!("{} ${:04X}", mnemonic, target)
            }
            AddressingMode::Absolute => {
                let addr = u16::from_le_bytes([byte2, byte3]);
                if mnemonic == "JMP" || mnemonic == "JSR" {
                    format!("{} ${:04X}", mnemonic, addr)
                } else {
                    format!("{} ${:04X} = {:02X}", mnemonic, addr, bus.peek(addr))
                }
            }
            AddressingMode::AbsoluteX => {
                let base = u16::from_le_bytes([byte2, byte3]);
                let addr = base.wrapping_add(self.x as u16);
                format!(
                    "{} ${:04X},X @ {:04X} = {:02X}",
                    mnemonic,
                    base,
                    addr,
                    bus.peek(addr)
                )
            }
            AddressingMode::AbsoluteY => {
                let base = u16::from_le_bytes([byte2, byte3]);
                let addr = base.wrapping_add(self.y as u16);
                format!(
                    "{} ${:04X},Y @ {:04X} = {:02X}",
                    mnemonic,
                    base,
                    addr,
                    bus.peek(addr)
                )
            }
            AddressingMode::Indirect => {
                let ptr = u16::from_le_bytes([byte2, byte3]);
                let lo = bus.peek(ptr);
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr + 1
                };
                let target = u16::from_le_bytes([lo, bus.peek(hi_addr)]);
                format!("{} (${:04X}) = {:04X}", mnemonic, ptr, target)
            }
            AddressingMode::IndexedIndirect => {
                let ptr = byte2.wrapping_add(self.x);
                let lo = bus.peek(ptr as u16);
                let hi = bus.peek(ptr.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([lo, hi]);
                format!(
                    "{} (${:02X},X) @ {:02X} = {:04X} = {:02X}",
                    mnemonic,
                    byte2,
                    ptr,
                    addr,
                    bus.peek(addr)
                )
            }
            AddressingMode::IndirectIndexed => {
                let lo = bus.peek(byte2 as u16);
                let hi = bus.peek(byte2.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                format!(
                    "{} (${:02X}),Y = {:04X} @ {:04X} = {:02X}",
                    mnemonic,
                    byte2,
                    base,
                    addr,
                    bus.peek(addr)
                )
            }
        }
    }
}
