#![doc = r#"
Intel 8080 CPU emulation library.

Exposes a faithful interpreter over a flat 64 KiB memory: registers,
flags, the full 256-opcode instruction set, a `step()`/`interrupt()`
stepping interface, and a companion disassembler sharing the opcode
table. The video/audio host, ROM loader, port mapping, and frame-pacing
main loop are left to callers; this crate only specifies their external
interfaces (`memory_slice()`, `port()`/`take_write()`/`apply_read()`,
`step()`/`interrupt()`).

Modules:
- cpu: registers, flags, and the opcode dispatcher (`Cpu::step`/`interrupt`)
- disassembler: byte-to-mnemonic decoding, sharing the dispatcher's opcode table
- error: the crate's `Error`/`Result` types
"#]

pub mod cpu;
pub mod disassembler;
pub mod error;

pub use cpu::{Cpu, Operand, Register, RegisterPair, WideRegister};
pub use error::{Error, Result};
