// Flag set/clear instructions
//
// Decimal can be set and cleared but has no arithmetic effect on the 2A03.

use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// CLC - Clear Carry
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// SEC - Set Carry
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// CLI - Clear Interrupt Disable
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// SEI - Set Interrupt Disable
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLD - Clear Decimal
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// SED - Set Decimal
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// CLV - Clear Overflow (there is no SEV)
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_pairs() {
        let mut cpu = Cpu::new();

        cpu.sec();
        assert!(cpu.get_carry());
        cpu.clc();
        assert!(!cpu.get_carry());

        cpu.sei();
        assert!(cpu.get_interrupt_disable());
        cpu.cli();
        assert!(!cpu.get_interrupt_disable());

        cpu.sed();
        assert!(cpu.get_decimal());
        cpu.cld();
        assert!(!cpu.get_decimal());
    }

    #[test]
    fn test_clv_clears_overflow() {
        let mut cpu = Cpu::new();
        cpu.set_overflow(true);
        cpu.clv();
        assert!(!cpu.get_overflow());
    }
}
