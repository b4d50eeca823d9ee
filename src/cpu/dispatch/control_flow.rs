/*!
control_flow.rs - NOP, HLT, DI, EI.
*/

use super::super::state::Cpu;

pub(crate) fn nop() -> u8 {
    1
}

pub(crate) fn hlt(cpu: &mut Cpu) -> u8 {
    cpu.halt();
    1
}

pub(crate) fn di(cpu: &mut Cpu) -> u8 {
    cpu.set_ie(false);
    1
}

pub(crate) fn ei(cpu: &mut Cpu) -> u8 {
    cpu.set_ie(true);
    1
}
