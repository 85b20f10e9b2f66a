//! The full implementation of the chip8 virtual machine, from the machine
//! state up to the opcode handlers.
mod chipset;
mod opcodes;

/// reexport chipset structs and data for simpler usage
pub use chipset::*;
