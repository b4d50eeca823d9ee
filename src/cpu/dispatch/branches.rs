/*!
branches.rs - JMP/Jcc, CALL/Ccc, RET/Rcc, RST.

The condition field is the same 3-bit `(opcode >> 3) & 0x07` encoding used
by the conditional JMP/CALL/RET family: NZ,Z,NC,C,PO,PE,P,M.
*/

use super::super::flags::normalize_u16;
use super::super::state::Cpu;

fn condition_true(cpu: &Cpu, opcode: u8) -> bool {
    match (opcode >> 3) & 0x07 {
        0 => !cpu.z(),
        1 => cpu.z(),
        2 => !cpu.cy(),
        3 => cpu.cy(),
        4 => !cpu.p(),
        5 => cpu.p(),
        6 => !cpu.s(),
        7 => cpu.s(),
        _ => unreachable!("3-bit field is masked to 0..=7"),
    }
}

pub(crate) fn jmp(cpu: &mut Cpu) -> u8 {
    let target = cpu.fetch_immediate16();
    cpu.set_pc(target);
    0
}

pub(crate) fn jcc(cpu: &mut Cpu, opcode: u8) -> u8 {
    let target = cpu.fetch_immediate16();
    if condition_true(cpu, opcode) {
        cpu.set_pc(target);
        0
    } else {
        3
    }
}

pub(crate) fn call(cpu: &mut Cpu) -> u8 {
    let target = cpu.fetch_immediate16();
    let return_addr = normalize_u16(cpu.pc() as i32 + 3);
    cpu.push_word(return_addr);
    cpu.set_pc(target);
    0
}

pub(crate) fn ccc(cpu: &mut Cpu, opcode: u8) -> u8 {
    let target = cpu.fetch_immediate16();
    if condition_true(cpu, opcode) {
        let return_addr = normalize_u16(cpu.pc() as i32 + 3);
        cpu.push_word(return_addr);
        cpu.set_pc(target);
        0
    } else {
        3
    }
}

pub(crate) fn ret(cpu: &mut Cpu) -> u8 {
    let target = cpu.pop_word();
    cpu.set_pc(target);
    0
}

pub(crate) fn rcc(cpu: &mut Cpu, opcode: u8) -> u8 {
    if condition_true(cpu, opcode) {
        let target = cpu.pop_word();
        cpu.set_pc(target);
        0
    } else {
        1
    }
}

/// Push the current, unadvanced PC and jump to `opcode & 0x38`. This is
/// deliberately *not* PC+1: `interrupt()` relies on RST pushing the PC at
/// the moment of injection, and the instruction set's own RST wording
/// never calls for a +1 adjustment the way CALL's "push PC+3" does.
pub(crate) fn rst(cpu: &mut Cpu, opcode: u8) -> u8 {
    let return_addr = cpu.pc();
    cpu.push_word(return_addr);
    cpu.set_pc((opcode & 0x38) as u16);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::flags::FLAG_Z;

    #[test]
    fn jmp_sets_pc_and_returns_zero_advance() {
        let mut cpu = Cpu::new();
        cpu.load(&[0xC3, 0x00, 0x40], 0x0000);
        let advance = jmp(&mut cpu);
        assert_eq!(advance, 0);
        assert_eq!(cpu.pc(), 0x4000);
    }

    #[test]
    fn call_pushes_return_address_and_jumps() {
        let mut cpu = Cpu::new();
        cpu.set_sp(0x2000);
        cpu.load(&[0xCD, 0x00, 0x50], 0x0000);
        call(&mut cpu);
        assert_eq!(cpu.pc(), 0x5000);
        assert_eq!(cpu.sp(), 0x1FFE);
        assert_eq!(cpu.pop_word(), 0x0003);
    }

    #[test]
    fn ret_restores_pc_from_stack() {
        let mut cpu = Cpu::new();
        cpu.set_sp(0x2000);
        cpu.push_word(0x1234);
        ret(&mut cpu);
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn conditional_jump_not_taken_advances_past_operand() {
        let mut cpu = Cpu::new();
        cpu.assign_flag(FLAG_Z, false);
        cpu.load(&[0xCA, 0x00, 0x40], 0x0000); // JZ, Z clear => not taken
        let advance = jcc(&mut cpu, 0xCA);
        assert_eq!(advance, 3);
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn rst_pushes_unadvanced_pc_and_jumps_to_vector() {
        let mut cpu = Cpu::new();
        cpu.set_sp(0x2000);
        cpu.set_pc(0x00AB);
        rst(&mut cpu, 0xD7); // RST 2 -> vector 0x10
        assert_eq!(cpu.pc(), 0x0010);
        assert_eq!(cpu.pop_word(), 0x00AB);
    }
}
