// Disassembler - table-driven 6502 disassembly
//
// Decodes instructions straight out of the opcode table, reading operand
// bytes through the bus `peek` path so disassembling never perturbs
// emulation.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;

/// One disassembled instruction
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address of the opcode byte
    pub address: u16,
    /// The opcode byte itself
    pub opcode: u8,
    /// Mnemonic ("LDA", "JMP", ...)
    pub mnemonic: &'static str,
    /// Operand bytes following the opcode (0-2)
    pub operands: Vec<u8>,
    /// Total instruction length in bytes
    pub length: u8,
    /// Whether the opcode is outside the documented set
    pub unofficial: bool,
}

impl DisassembledInstruction {
    /// Format as assembly text ("LDA #$42", "JMP ($02FF)", ...)
    pub fn format_assembly(&self) -> String {
        let info = &OPCODE_TABLE[self.opcode as usize];
        let prefix = if self.unofficial { "*" } else { "" };

        let operand = match info.mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Accumulator => " A".to_string(),
            AddressingMode::Immediate => format!(" #${:02X}", self.operands[0]),
            AddressingMode::ZeroPage => format!(" ${:02X}", self.operands[0]),
            AddressingMode::ZeroPageX => format!(" ${:02X},X", self.operands[0]),
            AddressingMode::ZeroPageY => format!(" ${:02X},Y", self.operands[0]),
            AddressingMode::Relative => {
                let offset = self.operands[0] as i8;
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add(offset as u16);
                format!(" ${:04X}", target)
            }
            AddressingMode::Absolute => format!(" ${:04X}", self.absolute_operand()),
            AddressingMode::AbsoluteX => format!(" ${:04X},X", self.absolute_operand()),
            AddressingMode::AbsoluteY => format!(" ${:04X},Y", self.absolute_operand()),
            AddressingMode::Indirect => format!(" (${:04X})", self.absolute_operand()),
            AddressingMode::IndexedIndirect => format!(" (${:02X},X)", self.operands[0]),
            AddressingMode::IndirectIndexed => format!(" (${:02X}),Y", self.operands[0]),
        };

        format!("{}{}{}", prefix, self.mnemonic, operand)
    }

    fn absolute_operand(&self) -> u16 {
        u16::from_le_bytes([self.operands[0], self.operands[1]])
    }
}

/// Disassemble the instruction at `addr`
pub fn disassemble_instruction(bus: &Bus, addr: u16) -> DisassembledInstruction {
    let opcode = bus.peek(addr);
    let info = &OPCODE_TABLE[opcode as usize];

    let operands = (1..info.bytes)
        .map(|i| bus.peek(addr.wrapping_add(i as u16)))
        .collect();

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: info.mnemonic,
        operands,
        length: info.bytes,
        unofficial: info.unofficial,
    }
}

/// Disassemble `count` instructions starting at `addr`
pub fn disassemble_count(bus: &Bus, addr: u16, count: usize) -> Vec<DisassembledInstruction> {
    let mut out = Vec::with_capacity(count);
    let mut pc = addr;
    for _ in 0..count {
        let instruction = disassemble_instruction(bus, pc);
        pc = pc.wrapping_add(instruction.length as u16);
        out.push(instruction);
    }
    out
}

/// Disassemble every instruction whose opcode byte lies in [start, end)
pub fn disassemble_range(bus: &Bus, start: u16, end: u16) -> Vec<DisassembledInstruction> {
    let mut out = Vec::new();
    let mut pc = start;
    while pc < end {
        let instruction = disassemble_instruction(bus, pc);
        let next = pc.wrapping_add(instruction.length as u16);
        out.push(instruction);
        if next <= pc {
            break; // wrapped around the top of the address space
        }
        pc = next;
    }
    out
}
