/*!
Closed register enumerations, replacing the source's string-keyed register
dictionary (see design notes: "Register naming"). Opcode-bit decoding for
the three places the instruction set indexes registers by a 3-bit or 2-bit
field (MOV/MVI/ALU source-destination, and LXI/INX/DCX/DAD/PUSH/POP pair
selection) lives here too, next to the enums it produces.
*/

/// The seven 8-bit registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// The two 16-bit registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideRegister {
    Sp,
    Pc,
}

/// Register pairs addressable as a 16-bit unit. `Sp` only ever appears for
/// LXI/INX/DCX/DAD; PUSH/POP address PSW via a dedicated opcode instead of
/// this enum (see `stack.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    Bc,
    De,
    Hl,
    Sp,
}

/// An instruction operand: either a plain register or the pseudo-register
/// `M`, which aliases memory[HL] (never cached; re-read on every access).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Reg(Register),
    Memory,
}

/// Decode a 3-bit register field (0..=7: B,C,D,E,H,L,M,A) as used by
/// MOV/MVI/ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP source operands and by the
/// destination field of MOV/MVI/INR/DCR.
pub(crate) fn decode_operand(bits: u8) -> Operand {
    match bits & 0x07 {
        0 => Operand::Reg(Register::B),
        1 => Operand::Reg(Register::C),
        2 => Operand::Reg(Register::D),
        3 => Operand::Reg(Register::E),
        4 => Operand::Reg(Register::H),
        5 => Operand::Reg(Register::L),
        6 => Operand::Memory,
        7 => Operand::Reg(Register::A),
        _ => unreachable!("3-bit field is masked to 0..=7"),
    }
}

/// Decode the 2-bit register-pair field shared by LXI/INX/DCX/DAD (bits 5:4
/// of the opcode) and by PUSH/POP (same bit position, but PSW is handled
/// separately so only Bc/De/Hl ever arise there).
pub(crate) fn decode_register_pair(opcode: u8) -> RegisterPair {
    match (opcode >> 4) & 0x03 {
        0 => RegisterPair::Bc,
        1 => RegisterPair::De,
        2 => RegisterPair::Hl,
        3 => RegisterPair::Sp,
        _ => unreachable!("2-bit field is masked to 0..=3"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_field_order_matches_8080_encoding() {
        assert_eq!(decode_operand(0), Operand::Reg(Register::B));
        assert_eq!(decode_operand(6), Operand::Memory);
        assert_eq!(decode_operand(7), Operand::Reg(Register::A));
    }

    #[test]
    fn register_pair_field_matches_lxi_encoding() {
        assert_eq!(decode_register_pair(0x01), RegisterPair::Bc);
        assert_eq!(decode_register_pair(0x11), RegisterPair::De);
        assert_eq!(decode_register_pair(0x21), RegisterPair::Hl);
        assert_eq!(decode_register_pair(0x31), RegisterPair::Sp);
    }
}
