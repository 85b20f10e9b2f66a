use thiserror::Error;

use crate::opcode::Opcode;

/// Failures while validating a program image, before any machine exists.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadError {
    #[error("The program image is empty.")]
    EmptyImage,
    #[error("The program image of {size} bytes does not fit into the {max} bytes of program memory.")]
    ImageTooLarge { size: usize, max: usize },
}

/// An instruction word that matches none of the defined operations.
///
/// Not fatal, the cycle driver logs it and completes the cycle as a no-op
/// so that malformed roms keep running.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("An unsupported opcode was used {0:#06X?}.")]
pub struct DecodeError(pub Opcode);

/// Fatal execution faults. The machine state can not be trusted once one
/// of these surfaced, the driver has to halt the interpreter.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessError {
    #[error("No opcode can be read at {pointer:#06X}, the address space ends at {len:#06X}.")]
    FetchOutOfBounds { pointer: usize, len: usize },
    #[error("A subroutine return was executed with an empty call stack.")]
    StackUnderflow,
}
