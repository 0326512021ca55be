//! Legacy-prefix and REX scanning.

use bit_field::BitField;

use super::InstructionDecoder;
use crate::input::ByteSource;
use crate::insn::{InstructionFlags, InstructionInfo};
use crate::regs::Register;

impl<S: ByteSource> InstructionDecoder<S> {
    /// Collects all legacy prefixes and, in 64-bit mode, REX.
    ///
    /// Group-1 repeat prefixes are mutually exclusive and the last one
    /// wins; segment overrides likewise. The loop keeps running after a
    /// REX byte, so a later REX overwrites the earlier one and legacy
    /// prefixes after REX are still recorded, although the architecture
    /// requires REX to immediately precede the opcode.
    pub(super) fn decode_prefixes(&mut self, info: &mut InstructionInfo) -> bool {
        let mut done = false;
        loop {
            match self.input_peek(info) {
                0xF0 => {
                    info.flags |= InstructionFlags::PREFIX_LOCK;
                }
                0xF2 => {
                    // REPNE and REP are mutually exclusive; the later one wins.
                    info.flags |= InstructionFlags::PREFIX_REPNE;
                    info.flags &= !InstructionFlags::PREFIX_REP;
                }
                0xF3 => {
                    info.flags |= InstructionFlags::PREFIX_REP;
                    info.flags &= !InstructionFlags::PREFIX_REPNE;
                }
                0x2E => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Cs;
                }
                0x36 => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Ss;
                }
                0x3E => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Ds;
                }
                0x26 => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Es;
                }
                0x64 => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Fs;
                }
                0x65 => {
                    info.flags |= InstructionFlags::PREFIX_SEGMENT;
                    info.segment = Register::Gs;
                }
                0x66 => {
                    info.flags |= InstructionFlags::PREFIX_OPERAND_SIZE;
                }
                0x67 => {
                    info.flags |= InstructionFlags::PREFIX_ADDRESS_SIZE;
                }
                _ => {
                    if self.is_mode64() && (self.input_current() & 0xF0) == 0x40 {
                        info.flags |= InstructionFlags::PREFIX_REX;
                        info.rex = self.input_current();
                    } else {
                        done = true;
                    }
                }
            }
            if done {
                break;
            }
            #[cfg(feature = "tracing")]
            trace!("prefix byte {:#04x}", self.input_current());
            if self.input_next(info) == 0 && info.has_error() {
                return false;
            }
        }
        if info.flags.contains(InstructionFlags::PREFIX_REX) {
            info.rex_w = info.rex.get_bit(3) as u8;
            info.rex_r = info.rex.get_bit(2) as u8;
            info.rex_x = info.rex.get_bit(1) as u8;
            info.rex_b = info.rex.get_bit(0) as u8;
        }
        true
    }
}
