/*!
load_store.rs - Data movement: MOV, MVI, LXI, LDA/STA, LHLD/SHLD,
LDAX/STAX, XCHG, XTHL, SPHL, PCHL.
*/

use super::super::flags::normalize_u16;
use super::super::regs::{decode_operand, decode_register_pair, Register, RegisterPair};
use super::super::state::Cpu;

pub(crate) fn mov(cpu: &mut Cpu, opcode: u8) -> u8 {
    let dst = decode_operand(opcode >> 3);
    let src = decode_operand(opcode);
    let value = cpu.operand_get(src);
    cpu.operand_set(dst, value);
    1
}

pub(crate) fn mvi(cpu: &mut Cpu, opcode: u8) -> u8 {
    let dst = decode_operand(opcode >> 3);
    let value = cpu.fetch_immediate8();
    cpu.operand_set(dst, value);
    2
}

pub(crate) fn lxi(cpu: &mut Cpu, opcode: u8) -> u8 {
    let pair = decode_register_pair(opcode);
    let value = cpu.fetch_immediate16();
    cpu.set_register_pair(pair, value);
    3
}

pub(crate) fn lda(cpu: &mut Cpu) -> u8 {
    let addr = cpu.fetch_immediate16();
    let value = cpu.read_byte(addr);
    cpu.set_reg(Register::A, value);
    3
}

pub(crate) fn sta(cpu: &mut Cpu) -> u8 {
    let addr = cpu.fetch_immediate16();
    cpu.write_byte(addr, cpu.reg(Register::A));
    3
}

pub(crate) fn lhld(cpu: &mut Cpu) -> u8 {
    let addr = cpu.fetch_immediate16();
    let lo = cpu.read_byte(addr);
    let hi = cpu.read_byte(normalize_u16(addr as i32 + 1));
    cpu.set_reg(Register::L, lo);
    cpu.set_reg(Register::H, hi);
    3
}

pub(crate) fn shld(cpu: &mut Cpu) -> u8 {
    let addr = cpu.fetch_immediate16();
    cpu.write_byte(addr, cpu.reg(Register::L));
    cpu.write_byte(normalize_u16(addr as i32 + 1), cpu.reg(Register::H));
    3
}

pub(crate) fn ldax(cpu: &mut Cpu, opcode: u8) -> u8 {
    let pair = if opcode == 0x0A { RegisterPair::Bc } else { RegisterPair::De };
    let addr = cpu.register_pair(pair);
    cpu.set_reg(Register::A, cpu.read_byte(addr));
    1
}

pub(crate) fn stax(cpu: &mut Cpu, opcode: u8) -> u8 {
    let pair = if opcode == 0x02 { RegisterPair::Bc } else { RegisterPair::De };
    let addr = cpu.register_pair(pair);
    cpu.write_byte(addr, cpu.reg(Register::A));
    1
}

pub(crate) fn xchg(cpu: &mut Cpu) -> u8 {
    let hl = cpu.hl();
    let de = cpu.de();
    cpu.set_hl(de);
    cpu.set_de(hl);
    1
}

pub(crate) fn xthl(cpu: &mut Cpu) -> u8 {
    let sp = cpu.sp();
    let lo = cpu.read_byte(sp);
    let hi = cpu.read_byte(normalize_u16(sp as i32 + 1));
    let (h, l) = (cpu.reg(Register::H), cpu.reg(Register::L));
    cpu.write_byte(sp, l);
    cpu.write_byte(normalize_u16(sp as i32 + 1), h);
    cpu.set_reg(Register::L, lo);
    cpu.set_reg(Register::H, hi);
    1
}

pub(crate) fn sphl(cpu: &mut Cpu) -> u8 {
    cpu.set_sp(cpu.hl());
    1
}

pub(crate) fn pchl(cpu: &mut Cpu) -> u8 {
    cpu.set_pc(cpu.hl());
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mov_copies_register_to_register() {
        let mut cpu = Cpu::new();
        cpu.set_reg(Register::C, 0x42);
        mov(&mut cpu, 0x41); // MOV B,C
        assert_eq!(cpu.reg(Register::B), 0x42);
    }

    #[test]
    fn mov_through_m_aliases_hl() {
        let mut cpu = Cpu::new();
        cpu.set_hl(0x3000);
        cpu.write_byte(0x3000, 0x77);
        mov(&mut cpu, 0x46); // MOV B,M
        assert_eq!(cpu.reg(Register::B), 0x77);
    }

    #[test]
    fn lxi_loads_pair_low_byte_first_in_memory() {
        let mut cpu = Cpu::new();
        cpu.load(&[0x01, 0x34, 0x12], 0x0000);
        lxi(&mut cpu, 0x01);
        assert_eq!(cpu.reg(Register::B), 0x12);
        assert_eq!(cpu.reg(Register::C), 0x34);
    }

    #[test]
    fn lda_sta_round_trip() {
        let mut cpu = Cpu::new();
        cpu.load(&[0x32, 0x00, 0x30], 0x0000);
        cpu.set_reg(Register::A, 0x9A);
        sta(&mut cpu);
        assert_eq!(cpu.read_byte(0x3000), 0x9A);
    }

    #[test]
    fn xthl_swaps_hl_with_stack_top_leaving_sp_unchanged() {
        let mut cpu = Cpu::new();
        cpu.set_sp(0x1000);
        cpu.write_byte(0x1000, 0xF0);
        cpu.write_byte(0x1001, 0x0D);
        cpu.set_hl(0x0B0C);
        xthl(&mut cpu);
        assert_eq!(cpu.hl(), 0x0DF0);
        assert_eq!(cpu.sp(), 0x1000);
        assert_eq!(cpu.read_byte(0x1000), 0x0C);
        assert_eq!(cpu.read_byte(0x1001), 0x0B);
    }

    #[test]
    fn pchl_sets_pc_and_returns_zero_advance() {
        let mut cpu = Cpu::new();
        cpu.set_hl(0x4000);
        let advance = pchl(&mut cpu);
        assert_eq!(advance, 0);
        assert_eq!(cpu.pc(), 0x4000);
    }
}
