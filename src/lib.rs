#![no_std]
#![doc = include_str!("../README.md")]

#[macro_use]
extern crate log;

#[cfg(test)]
mod tests;

mod decoder;
mod input;
mod insn;
mod mnemonic;
pub(crate) mod optree;
mod regs;

pub use decoder::{DecodeIter, DisassemblerMode, InstructionDecoder, InstructionSetVendor};
pub use input::{ByteSource, IterSource, MemorySource};
pub use insn::{
    InstructionFlags, InstructionInfo, Lvalue, OperandAccessMode, OperandInfo, OperandType,
};
pub use mnemonic::Mnemonic;
pub use optree::{
    DefinedOperandSize, DefinedOperandType, DefinitionFlags, InstructionDefinition,
    OperandDefinition,
};
pub use regs::Register;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub use input::ReaderSource;
    }
}

/// The architectural maximum instruction length in bytes.
pub const MAX_INSTRUCTION_LENGTH: usize = 15;
