/*!
io.rs - OUT/IN. Port mapping is explicitly out of scope; these handlers
only advance PC. `Cpu::port()`/`take_write()`/`apply_read()` give a host
everything it needs to wire ports externally.
*/

use super::super::state::Cpu;

pub(crate) fn out(cpu: &mut Cpu) -> u8 {
    let _ = cpu.fetch_immediate8();
    2
}

pub(crate) fn inp(cpu: &mut Cpu) -> u8 {
    let _ = cpu.fetch_immediate8();
    2
}
