//! The instruction decoder.
//!
//! [`InstructionDecoder`] drives one instruction per [`decode_instruction`]
//! call: prefix scan, opcode-tree walk, operand decoding, then either a
//! commit (instruction pointer advances by the full length) or a byte-exact
//! rollback that leaves a one-byte invalid record and re-synchronizes the
//! source on the next byte.
//!
//! [`decode_instruction`]: InstructionDecoder::decode_instruction

mod opcode;
mod operands;
mod prefixes;

use crate::input::ByteSource;
use crate::insn::{InstructionFlags, InstructionInfo};
use crate::mnemonic::Mnemonic;
use crate::optree;
use crate::regs::Register;

/// The CPU mode instructions are decoded for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisassemblerMode {
    /// 16-bit real/protected mode.
    M16,
    /// 32-bit protected mode.
    #[default]
    M32,
    /// 64-bit long mode.
    M64,
}

/// The vendor whose branch is taken at vendor-dispatch nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstructionSetVendor {
    /// Take whichever branch is populated, preferring AMD.
    #[default]
    Any,
    /// Always take the Intel branch.
    Intel,
    /// Always take the AMD branch.
    Amd,
}

/// A stateful x86/x86-64 instruction decoder over a byte source.
///
/// The decoder owns no bytes, only the source handle and its own cursor
/// state; the record is caller-allocated and overwritten per call. One
/// decoder must not be shared between threads, but independent decoders
/// are fully isolated.
#[derive(Debug)]
pub struct InstructionDecoder<S> {
    source: Option<S>,
    mode: DisassemblerMode,
    preferred_vendor: InstructionSetVendor,
    instruction_pointer: u64,
    /// The byte returned by the most recent successful peek or consume.
    current: u8,
    /// `true` while the current call is still fetching prefix or opcode
    /// bytes. End of input in that phase is a ragged stream end; end of
    /// input after it (ModR/M, SIB, VEX payload, displacement, immediate)
    /// is a truncated instruction and yields an invalid record instead.
    in_opcode_fetch: bool,
}

impl<S: ByteSource> InstructionDecoder<S> {
    /// Creates a decoder with no source, 32-bit mode, vendor `Any` and
    /// instruction pointer 0.
    pub fn new() -> Self {
        Self::with_config(None, DisassemblerMode::M32, InstructionSetVendor::Any, 0)
    }

    /// Creates a fully configured decoder.
    pub fn with_config(
        source: Option<S>,
        mode: DisassemblerMode,
        preferred_vendor: InstructionSetVendor,
        instruction_pointer: u64,
    ) -> Self {
        InstructionDecoder {
            source,
            mode,
            preferred_vendor,
            instruction_pointer,
            current: 0,
            in_opcode_fetch: true,
        }
    }

    /// The current byte source, if any.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Replaces the byte source; pass `None` to detach.
    pub fn set_source(&mut self, source: Option<S>) {
        self.source = source;
    }

    /// Removes and returns the byte source.
    pub fn take_source(&mut self) -> Option<S> {
        self.source.take()
    }

    /// The disassembler mode.
    pub fn mode(&self) -> DisassemblerMode {
        self.mode
    }

    /// Changes the disassembler mode for subsequent decode calls.
    pub fn set_mode(&mut self, mode: DisassemblerMode) {
        self.mode = mode;
    }

    /// The preferred vendor.
    pub fn preferred_vendor(&self) -> InstructionSetVendor {
        self.preferred_vendor
    }

    /// Changes the preferred vendor for subsequent decode calls.
    pub fn set_preferred_vendor(&mut self, preferred_vendor: InstructionSetVendor) {
        self.preferred_vendor = preferred_vendor;
    }

    /// The virtual address of the next instruction to decode.
    pub fn instruction_pointer(&self) -> u64 {
        self.instruction_pointer
    }

    /// Moves the virtual instruction pointer. Does not seek the source.
    pub fn set_instruction_pointer(&mut self, instruction_pointer: u64) {
        self.instruction_pointer = instruction_pointer;
    }

    pub(crate) fn is_mode64(&self) -> bool {
        self.mode == DisassemblerMode::M64
    }

    /// The byte returned by the most recent successful peek or consume.
    pub(crate) fn input_current(&self) -> u8 {
        self.current
    }

    /// Peeks the next input byte without consuming it.
    ///
    /// On failure the matching error flag is set on `info` and 0 is
    /// returned; the current-byte cache keeps its previous value.
    pub(crate) fn input_peek(&mut self, info: &mut InstructionInfo) -> u8 {
        if info.length == 15 {
            info.flags |= InstructionFlags::ERROR_LENGTH;
            return 0;
        }
        let Some(source) = self.source.as_mut() else {
            info.flags |= InstructionFlags::ERROR_END_OF_INPUT;
            return 0;
        };
        match source.peek() {
            Some(byte) => {
                self.current = byte;
                byte
            }
            None => {
                info.flags |= InstructionFlags::ERROR_END_OF_INPUT;
                0
            }
        }
    }

    /// Consumes the next input byte, appending it to `info.data`.
    ///
    /// Error handling as for [`input_peek`](Self::input_peek).
    pub(crate) fn input_next(&mut self, info: &mut InstructionInfo) -> u8 {
        if info.length == 15 {
            info.flags |= InstructionFlags::ERROR_LENGTH;
            return 0;
        }
        let Some(source) = self.source.as_mut() else {
            info.flags |= InstructionFlags::ERROR_END_OF_INPUT;
            return 0;
        };
        match source.next() {
            Some(byte) => {
                self.current = byte;
                info.data[info.length as usize] = byte;
                info.length += 1;
                byte
            }
            None => {
                info.flags |= InstructionFlags::ERROR_END_OF_INPUT;
                0
            }
        }
    }
}

macro_rules! impl_input_next_wide {
    ($($width:literal),+) => {
        impl<S: ByteSource> InstructionDecoder<S> {
            paste::paste! {
                $(
                    /// Reads a little-endian value byte by byte,
                    /// short-circuiting to 0 on the first input error.
                    pub(crate) fn [<input_next $width>](
                        &mut self,
                        info: &mut InstructionInfo,
                    ) -> [<u $width>] {
                        let mut result: [<u $width>] = 0;
                        for i in 0..($width / 8) {
                            let byte = self.input_next(info);
                            if byte == 0 && info.has_error() {
                                return 0;
                            }
                            result |= ([<u $width>]::from(byte)) << (i * 8);
                        }
                        result
                    }
                )+
            }
        }
    };
}

impl_input_next_wide!(16, 32, 64);

impl<S: ByteSource> InstructionDecoder<S> {
    /// Decodes the next instruction into `info`.
    ///
    /// Returns `true` while input remains; the record is then either a
    /// fully decoded instruction or a one-byte invalid record (error flags
    /// set, `mnemonic == Invalid`). Returns `false` only when the source
    /// is exhausted at the start of the call.
    pub fn decode_instruction(&mut self, info: &mut InstructionInfo) -> bool {
        *info = InstructionInfo::default();
        self.in_opcode_fetch = true;

        info.flags |= match self.mode {
            DisassemblerMode::M16 => InstructionFlags::DISASSEMBLER_MODE_16,
            DisassemblerMode::M32 => InstructionFlags::DISASSEMBLER_MODE_32,
            DisassemblerMode::M64 => InstructionFlags::DISASSEMBLER_MODE_64,
        };
        info.instr_address = self.instruction_pointer;

        if !self.decode_prefixes(info) || !self.decode_opcode(info) {
            return self.decode_error(info);
        }

        // SWAPGS exists in 64-bit mode only.
        if info.mnemonic == Mnemonic::Swapgs && !self.is_mode64() {
            info.flags &= InstructionFlags::ERROR_INVALID;
            return self.decode_error(info);
        }

        // XCHG (e)ax, (e)ax is the canonical NOP encoding.
        if info.mnemonic == Mnemonic::Xchg {
            let op0 = &info.operand[0];
            let op1 = &info.operand[1];
            let both = |reg: Register| {
                op0.ty == crate::insn::OperandType::Register
                    && op0.base == reg
                    && op1.ty == crate::insn::OperandType::Register
                    && op1.base == reg
            };
            if both(Register::Ax) || both(Register::Eax) {
                info.mnemonic = Mnemonic::Nop;
                info.operand[0].ty = crate::insn::OperandType::None;
                info.operand[1].ty = crate::insn::OperandType::None;
                info.operand[0].access_mode = crate::insn::OperandAccessMode::Na;
                info.operand[1].access_mode = crate::insn::OperandAccessMode::Na;
            }
        }

        if info.mnemonic == Mnemonic::Nop && info.flags.contains(InstructionFlags::PREFIX_REP) {
            info.mnemonic = Mnemonic::Pause;
            info.flags &= !InstructionFlags::PREFIX_REP;
        }

        self.instruction_pointer += u64::from(info.length);
        info.instr_pointer = self.instruction_pointer;
        true
    }

    /// Failure path: preserve the error evidence, roll the source back to
    /// one byte past the instruction address, and emit a one-byte invalid
    /// record. End of input at the first byte is the one case reported
    /// through the return value.
    fn decode_error(&mut self, info: &mut InstructionInfo) -> bool {
        self.instruction_pointer += 1;

        let flags =
            info.flags & (InstructionFlags::ERROR_MASK | InstructionFlags::MODE_MASK);
        let length = info.length;
        let first_byte = info.data[0];
        let instr_address = info.instr_address;

        debug!(
            "invalid instruction at {:#x}: flags {:?}, {} byte(s) consumed",
            instr_address, flags, length
        );

        *info = InstructionInfo::default();
        info.flags = flags;
        info.length = length;
        info.data[0] = first_byte;
        info.instr_address = instr_address;
        info.instr_definition = Some(optree::instruction_definition(optree::OpcodeTreeNode(0)));

        if info.length != 1 {
            if let Some(source) = self.source.as_mut() {
                let position = source.position();
                source.seek(position - u64::from(info.length) + 1);
            }
            info.length = 1;
        }

        if info.flags.contains(InstructionFlags::ERROR_END_OF_INPUT) && self.in_opcode_fetch {
            info.length = 0;
            return false;
        }
        true
    }
}

impl<S: ByteSource> Default for InstructionDecoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> InstructionDecoder<S> {
    /// Drains the decoder into an iterator of records.
    ///
    /// Each step is one [`decode_instruction`](Self::decode_instruction)
    /// call; iteration ends when the source is exhausted.
    pub fn iter_mut(&mut self) -> DecodeIter<'_, S> {
        DecodeIter { decoder: self }
    }
}

/// Iterator adapter over [`InstructionDecoder::decode_instruction`].
#[derive(Debug)]
pub struct DecodeIter<'a, S> {
    decoder: &'a mut InstructionDecoder<S>,
}

impl<S: ByteSource> Iterator for DecodeIter<'_, S> {
    type Item = InstructionInfo;

    fn next(&mut self) -> Option<InstructionInfo> {
        let mut info = InstructionInfo::default();
        self.decoder.decode_instruction(&mut info).then_some(info)
    }
}
