/*!
logical.rs - ANA/ANI, ORA/ORI, XRA/XRI, CMA, STC, CMC.

CY is always cleared by AND/OR/XOR. AC is architecturally documented only
for AND (set from bit 3 of the OR of the two operands); OR and XOR always
clear it. This matches the common documented behavior and is recorded as
an explicit choice rather than left to guesswork (design notes: "AC for
non-arithmetic logical ops").
*/

use super::super::flags::{self, FLAG_AC, FLAG_CY, FLAG_P, FLAG_S, FLAG_Z};
use super::super::regs::{decode_operand, Register};
use super::super::state::Cpu;

pub(crate) fn ana(cpu: &mut Cpu, opcode: u8) -> u8 {
    let value = cpu.operand_get(decode_operand(opcode));
    logical_and(cpu, value);
    1
}

pub(crate) fn ani(cpu: &mut Cpu) -> u8 {
    let value = cpu.fetch_immediate8();
    logical_and(cpu, value);
    2
}

fn logical_and(cpu: &mut Cpu, value: u8) {
    let a = cpu.reg(Register::A);
    let ac = ((a | value) & 0x08) != 0;
    let result = a & value;
    cpu.set_reg(Register::A, result);
    flags::apply_result_flags(cpu, result as u16, FLAG_Z | FLAG_S | FLAG_P);
    cpu.assign_flag(FLAG_AC, ac);
    cpu.assign_flag(FLAG_CY, false);
}

pub(crate) fn ora(cpu: &mut Cpu, opcode: u8) -> u8 {
    let value = cpu.operand_get(decode_operand(opcode));
    logical_or(cpu, value);
    1
}

pub(crate) fn ori(cpu: &mut Cpu) -> u8 {
    let value = cpu.fetch_immediate8();
    logical_or(cpu, value);
    2
}

fn logical_or(cpu: &mut Cpu, value: u8) {
    let a = cpu.reg(Register::A);
    let result = a | value;
    cpu.set_reg(Register::A, result);
    flags::apply_result_flags(cpu, result as u16, FLAG_Z | FLAG_S | FLAG_P);
    cpu.assign_flag(FLAG_AC, false);
    cpu.assign_flag(FLAG_CY, false);
}

pub(crate) fn xra(cpu: &mut Cpu, opcode: u8) -> u8 {
    let value = cpu.operand_get(decode_operand(opcode));
    logical_xor(cpu, value);
    1
}

pub(crate) fn xri(cpu: &mut Cpu) -> u8 {
    let value = cpu.fetch_immediate8();
    logical_xor(cpu, value);
    2
}

fn logical_xor(cpu: &mut Cpu, value: u8) {
    let a = cpu.reg(Register::A);
    let result = a ^ value;
    cpu.set_reg(Register::A, result);
    flags::apply_result_flags(cpu, result as u16, FLAG_Z | FLAG_S | FLAG_P);
    cpu.assign_flag(FLAG_AC, false);
    cpu.assign_flag(FLAG_CY, false);
}

pub(crate) fn cma(cpu: &mut Cpu) -> u8 {
    let a = cpu.reg(Register::A);
    cpu.set_reg(Register::A, !a);
    1
}

pub(crate) fn stc(cpu: &mut Cpu) -> u8 {
    cpu.assign_flag(FLAG_CY, true);
    1
}

pub(crate) fn cmc(cpu: &mut Cpu) -> u8 {
    let cy = cpu.cy();
    cpu.assign_flag(FLAG_CY, !cy);
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ana_clears_carry_and_computes_ac_from_operand_bit3() {
        let mut cpu = Cpu::new();
        cpu.assign_flag(FLAG_CY, true);
        cpu.set_reg(Register::A, 0x0F);
        cpu.set_reg(Register::B, 0x0F);
        ana(&mut cpu, 0xA0);
        assert_eq!(cpu.reg(Register::A), 0x0F);
        assert!(!cpu.cy());
        assert!(cpu.ac());
    }

    #[test]
    fn xra_with_self_zeroes_a_and_sets_zero_flag() {
        let mut cpu = Cpu::new();
        cpu.set_reg(Register::A, 0x5A);
        xra(&mut cpu, 0xAF);
        assert_eq!(cpu.reg(Register::A), 0x00);
        assert!(cpu.z());
        assert!(!cpu.cy());
    }

    #[test]
    fn cma_complements_without_touching_flags() {
        let mut cpu = Cpu::new();
        cpu.set_reg(Register::A, 0b1010_0101);
        cma(&mut cpu);
        assert_eq!(cpu.reg(Register::A), 0b0101_1010);
    }

    #[test]
    fn stc_and_cmc_toggle_carry() {
        let mut cpu = Cpu::new();
        stc(&mut cpu);
        assert!(cpu.cy());
        cmc(&mut cpu);
        assert!(!cpu.cy());
        cmc(&mut cpu);
        assert!(cpu.cy());
    }
}
