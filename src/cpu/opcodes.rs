// Opcode dispatch table for the 6502 CPU
//
// Decoding is table-driven: the opcode byte indexes a 256-entry table
// carrying the mnemonic, the addressing mode, the instruction length, the
// base cycle count, and whether the instruction pays the one-cycle
// page-crossing penalty. The execute module switches on the opcode for the
// semantic action; everything else comes from here.
//
// Undocumented opcodes are present with their real lengths and timings so
// that unknown bytes never desynchronize the instruction stream. The
// stable ones (NOP variants, LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA, the
// $EB SBC, ANC, ALR, ARR, AXS) are implemented; the unstable rest decode
// as NOPs of the right size.

use crate::cpu::addressing::AddressingMode;
use AddressingMode::*;

/// Static decode information for one opcode
pub struct OpcodeInfo {
    /// Instruction mnemonic ("LDA", "STA", ...)
    pub mnemonic: &'static str,
    /// Addressing mode resolving the operand
    pub mode: AddressingMode,
    /// Total instruction length in bytes, opcode included (1-3)
    pub bytes: u8,
    /// Base cycle count
    pub cycles: u8,
    /// Whether a crossed page during indexing adds one cycle
    pub page_cycle: bool,
    /// Whether this opcode is outside the documented set
    pub unofficial: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
        unofficial: false,
    }
}

const fn xop(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
        unofficial: true,
    }
}

/// The full 256-entry opcode matrix, indexed by opcode byte
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    // $00-$0F
    op("BRK", Implied, 1, 7, false),
    op("ORA", IndexedIndirect, 2, 6, false),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("SLO", IndexedIndirect, 2, 8, false),
    xop("NOP", ZeroPage, 2, 3, false),
    op("ORA", ZeroPage, 2, 3, false),
    op("ASL", ZeroPage, 2, 5, false),
    xop("SLO", ZeroPage, 2, 5, false),
    op("PHP", Implied, 1, 3, false),
    op("ORA", Immediate, 2, 2, false),
    op("ASL", Accumulator, 1, 2, false),
    xop("ANC", Immediate, 2, 2, false),
    xop("NOP", Absolute, 3, 4, false),
    op("ORA", Absolute, 3, 4, false),
    op("ASL", Absolute, 3, 6, false),
    xop("SLO", Absolute, 3, 6, false),
    // $10-$1F
    op("BPL", Relative, 2, 2, false),
    op("ORA", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("SLO", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("ORA", ZeroPageX, 2, 4, false),
    op("ASL", ZeroPageX, 2, 6, false),
    xop("SLO", ZeroPageX, 2, 6, false),
    op("CLC", Implied, 1, 2, false),
    op("ORA", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("SLO", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("ORA", AbsoluteX, 3, 4, true),
    op("ASL", AbsoluteX, 3, 7, false),
    xop("SLO", AbsoluteX, 3, 7, false),
    // $20-$2F
    op("JSR", Absolute, 3, 6, false),
    op("AND", IndexedIndirect, 2, 6, false),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("RLA", IndexedIndirect, 2, 8, false),
    op("BIT", ZeroPage, 2, 3, false),
    op("AND", ZeroPage, 2, 3, false),
    op("ROL", ZeroPage, 2, 5, false),
    xop("RLA", ZeroPage, 2, 5, false),
    op("PLP", Implied, 1, 4, false),
    op("AND", Immediate, 2, 2, false),
    op("ROL", Accumulator, 1, 2, false),
    xop("ANC", Immediate, 2, 2, false),
    op("BIT", Absolute, 3, 4, false),
    op("AND", Absolute, 3, 4, false),
    op("ROL", Absolute, 3, 6, false),
    xop("RLA", Absolute, 3, 6, false),
    // $30-$3F
    op("BMI", Relative, 2, 2, false),
    op("AND", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("RLA", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("AND", ZeroPageX, 2, 4, false),
    op("ROL", ZeroPageX, 2, 6, false),
    xop("RLA", ZeroPageX, 2, 6, false),
    op("SEC", Implied, 1, 2, false),
    op("AND", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("RLA", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("AND", AbsoluteX, 3, 4, true),
    op("ROL", AbsoluteX, 3, 7, false),
    xop("RLA", AbsoluteX, 3, 7, false),
    // $40-$4F
    op("RTI", Implied, 1, 6, false),
    op("EOR", IndexedIndirect, 2, 6, false),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("SRE", IndexedIndirect, 2, 8, false),
    xop("NOP", ZeroPage, 2, 3, false),
    op("EOR", ZeroPage, 2, 3, false),
    op("LSR", ZeroPage, 2, 5, false),
    xop("SRE", ZeroPage, 2, 5, false),
    op("PHA", Implied, 1, 3, false),
    op("EOR", Immediate, 2, 2, false),
    op("LSR", Accumulator, 1, 2, false),
    xop("ALR", Immediate, 2, 2, false),
    op("JMP", Absolute, 3, 3, false),
    op("EOR", Absolute, 3, 4, false),
    op("LSR", Absolute, 3, 6, false),
    xop("SRE", Absolute, 3, 6, false),
    // $50-$5F
    op("BVC", Relative, 2, 2, false),
    op("EOR", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("SRE", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("EOR", ZeroPageX, 2, 4, false),
    op("LSR", ZeroPageX, 2, 6, false),
    xop("SRE", ZeroPageX, 2, 6, false),
    op("CLI", Implied, 1, 2, false),
    op("EOR", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("SRE", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("EOR", AbsoluteX, 3, 4, true),
    op("LSR", AbsoluteX, 3, 7, false),
    xop("SRE", AbsoluteX, 3, 7, false),
    // $60-$6F
    op("RTS", Implied, 1, 6, false),
    op("ADC", IndexedIndirect, 2, 6, false),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("RRA", IndexedIndirect, 2, 8, false),
    xop("NOP", ZeroPage, 2, 3, false),
    op("ADC", ZeroPage, 2, 3, false),
    op("ROR", ZeroPage, 2, 5, false),
    xop("RRA", ZeroPage, 2, 5, false),
    op("PLA", Implied, 1, 4, false),
    op("ADC", Immediate, 2, 2, false),
    op("ROR", Accumulator, 1, 2, false),
    xop("ARR", Immediate, 2, 2, false),
    op("JMP", Indirect, 3, 5, false),
    op("ADC", Absolute, 3, 4, false),
    op("ROR", Absolute, 3, 6, false),
    xop("RRA", Absolute, 3, 6, false),
    // $70-$7F
    op("BVS", Relative, 2, 2, false),
    op("ADC", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("RRA", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("ADC", ZeroPageX, 2, 4, false),
    op("ROR", ZeroPageX, 2, 6, false),
    xop("RRA", ZeroPageX, 2, 6, false),
    op("SEI", Implied, 1, 2, false),
    op("ADC", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("RRA", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("ADC", AbsoluteX, 3, 4, true),
    op("ROR", AbsoluteX, 3, 7, false),
    xop("RRA", AbsoluteX, 3, 7, false),
    // $80-$8F
    xop("NOP", Immediate, 2, 2, false),
    op("STA", IndexedIndirect, 2, 6, false),
    xop("NOP", Immediate, 2, 2, false),
    xop("SAX", IndexedIndirect, 2, 6, false),
    op("STY", ZeroPage, 2, 3, false),
    op("STA", ZeroPage, 2, 3, false),
    op("STX", ZeroPage, 2, 3, false),
    xop("SAX", ZeroPage, 2, 3, false),
    op("DEY", Implied, 1, 2, false),
    xop("NOP", Immediate, 2, 2, false),
    op("TXA", Implied, 1, 2, false),
    xop("NOP", Immediate, 2, 2, false), // XAA
    op("STY", Absolute, 3, 4, false),
    op("STA", Absolute, 3, 4, false),
    op("STX", Absolute, 3, 4, false),
    xop("SAX", Absolute, 3, 4, false),
    // $90-$9F
    op("BCC", Relative, 2, 2, false),
    op("STA", IndirectIndexed, 2, 6, false),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("NOP", IndirectIndexed, 2, 6, false), // AHX
    op("STY", ZeroPageX, 2, 4, false),
    op("STA", ZeroPageX, 2, 4, false),
    op("STX", ZeroPageY, 2, 4, false),
    xop("SAX", ZeroPageY, 2, 4, false),
    op("TYA", Implied, 1, 2, false),
    op("STA", AbsoluteY, 3, 5, false),
    op("TXS", Implied, 1, 2, false),
    xop("NOP", AbsoluteY, 3, 5, false), // TAS
    xop("NOP", AbsoluteX, 3, 5, false), // SHY
    op("STA", AbsoluteX, 3, 5, false),
    xop("NOP", AbsoluteY, 3, 5, false), // SHX
    xop("NOP", AbsoluteY, 3, 5, false), // AHX
    // $A0-$AF
    op("LDY", Immediate, 2, 2, false),
    op("LDA", IndexedIndirect, 2, 6, false),
    op("LDX", Immediate, 2, 2, false),
    xop("LAX", IndexedIndirect, 2, 6, false),
    op("LDY", ZeroPage, 2, 3, false),
    op("LDA", ZeroPage, 2, 3, false),
    op("LDX", ZeroPage, 2, 3, false),
    xop("LAX", ZeroPage, 2, 3, false),
    op("TAY", Implied, 1, 2, false),
    op("LDA", Immediate, 2, 2, false),
    op("TAX", Implied, 1, 2, false),
    xop("LAX", Immediate, 2, 2, false),
    op("LDY", Absolute, 3, 4, false),
    op("LDA", Absolute, 3, 4, false),
    op("LDX", Absolute, 3, 4, false),
    xop("LAX", Absolute, 3, 4, false),
    // $B0-$BF
    op("BCS", Relative, 2, 2, false),
    op("LDA", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("LAX", IndirectIndexed, 2, 5, true),
    op("LDY", ZeroPageX, 2, 4, false),
    op("LDA", ZeroPageX, 2, 4, false),
    op("LDX", ZeroPageY, 2, 4, false),
    xop("LAX", ZeroPageY, 2, 4, false),
    op("CLV", Implied, 1, 2, false),
    op("LDA", AbsoluteY, 3, 4, true),
    op("TSX", Implied, 1, 2, false),
    xop("NOP", AbsoluteY, 3, 4, true), // LAS
    op("LDY", AbsoluteX, 3, 4, true),
    op("LDA", AbsoluteX, 3, 4, true),
    op("LDX", AbsoluteY, 3, 4, true),
    xop("LAX", AbsoluteY, 3, 4, true),
    // $C0-$CF
    op("CPY", Immediate, 2, 2, false),
    op("CMP", IndexedIndirect, 2, 6, false),
    xop("NOP", Immediate, 2, 2, false),
    xop("DCP", IndexedIndirect, 2, 8, false),
    op("CPY", ZeroPage, 2, 3, false),
    op("CMP", ZeroPage, 2, 3, false),
    op("DEC", ZeroPage, 2, 5, false),
    xop("DCP", ZeroPage, 2, 5, false),
    op("INY", Implied, 1, 2, false),
    op("CMP", Immediate, 2, 2, false),
    op("DEX", Implied, 1, 2, false),
    xop("AXS", Immediate, 2, 2, false),
    op("CPY", Absolute, 3, 4, false),
    op("CMP", Absolute, 3, 4, false),
    op("DEC", Absolute, 3, 6, false),
    xop("DCP", Absolute, 3, 6, false),
    // $D0-$DF
    op("BNE", Relative, 2, 2, false),
    op("CMP", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("DCP", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("CMP", ZeroPageX, 2, 4, false),
    op("DEC", ZeroPageX, 2, 6, false),
    xop("DCP", ZeroPageX, 2, 6, false),
    op("CLD", Implied, 1, 2, false),
    op("CMP", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("DCP", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("CMP", AbsoluteX, 3, 4, true),
    op("DEC", AbsoluteX, 3, 7, false),
    xop("DCP", AbsoluteX, 3, 7, false),
    // $E0-$EF
    op("CPX", Immediate, 2, 2, false),
    op("SBC", IndexedIndirect, 2, 6, false),
    xop("NOP", Immediate, 2, 2, false),
    xop("ISB", IndexedIndirect, 2, 8, false),
    op("CPX", ZeroPage, 2, 3, false),
    op("SBC", ZeroPage, 2, 3, false),
    op("INC", ZeroPage, 2, 5, false),
    xop("ISB", ZeroPage, 2, 5, false),
    op("INX", Implied, 1, 2, false),
    op("SBC", Immediate, 2, 2, false),
    op("NOP", Implied, 1, 2, false),
    xop("SBC", Immediate, 2, 2, false),
    op("CPX", Absolute, 3, 4, false),
    op("SBC", Absolute, 3, 4, false),
    op("INC", Absolute, 3, 6, false),
    xop("ISB", Absolute, 3, 6, false),
    // $F0-$FF
    op("BEQ", Relative, 2, 2, false),
    op("SBC", IndirectIndexed, 2, 5, true),
    xop("NOP", Implied, 1, 2, false), // KIL
    xop("ISB", IndirectIndexed, 2, 8, false),
    xop("NOP", ZeroPageX, 2, 4, false),
    op("SBC", ZeroPageX, 2, 4, false),
    op("INC", ZeroPageX, 2, 6, false),
    xop("ISB", ZeroPageX, 2, 6, false),
    op("SED", Implied, 1, 2, false),
    op("SBC", AbsoluteY, 3, 4, true),
    xop("NOP", Implied, 1, 2, false),
    xop("ISB", AbsoluteY, 3, 7, false),
    xop("NOP", AbsoluteX, 3, 4, true),
    op("SBC", AbsoluteX, 3, 4, true),
    op("INC", AbsoluteX, 3, 7, false),
    xop("ISB", AbsoluteX, 3, 7, false),
];
