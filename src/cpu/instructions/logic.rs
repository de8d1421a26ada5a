// Logical instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// AND - Logical AND with accumulator
    ///
    /// Flags affected: Z, N
    pub fn and(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a &= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Logical OR with accumulator
    ///
    /// Flags affected: Z, N
    pub fn ora(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a |= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Exclusive OR with accumulator
    ///
    /// Flags affected: Z, N
    pub fn eor(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a ^= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test
    ///
    /// Z from A & M; N and V copied straight from bits 7 and 6 of the
    /// memory operand. A is not modified.
    pub fn bit(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);

        self.set_zero(self.a & value == 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_ora_eor() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.a = 0b1100_1100;
        cpu.and(&mut bus, &AddressingResult::immediate(0b1010_1010));
        assert_eq!(cpu.a, 0b1000_1000);
        assert!(cpu.get_negative());

        cpu.ora(&mut bus, &AddressingResult::immediate(0b0000_0111));
        assert_eq!(cpu.a, 0b1000_1111);

        cpu.eor(&mut bus, &AddressingResult::immediate(0b1000_1111));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_bit_copies_operand_high_bits() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write(0x0010, 0xC0);

        cpu.a = 0x3F; // A & M == 0 while M has bits 7 and 6 set
        cpu.bit(&mut bus, &AddressingResult::new(0x0010));

        assert!(cpu.get_zero());
        assert!(cpu.get_negative());
        assert!(cpu.get_overflow());
    }

    #[test]
    fn test_bit_leaves_accumulator_alone() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write(0x0010, 0xFF);

        cpu.a = 0x42;
        cpu.bit(&mut bus, &AddressingResult::new(0x0010));
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.get_zero());
    }
}
