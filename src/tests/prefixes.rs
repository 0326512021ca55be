//! Tests for the prefix scanner.

use crate::insn::{InstructionFlags, InstructionInfo};
use crate::regs::Register;
use crate::{DisassemblerMode, InstructionDecoder, InstructionSetVendor, MemorySource};

fn decode(mode: DisassemblerMode, bytes: &[u8]) -> InstructionInfo {
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(bytes)),
        mode,
        InstructionSetVendor::Any,
        0,
    );
    let mut info = InstructionInfo::default();
    assert!(decoder.decode_instruction(&mut info));
    info
}

#[test]
fn records_lock_prefix() {
    // lock add [eax], eax
    let info = decode(DisassemblerMode::M32, &[0xF0, 0x01, 0x00]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_LOCK));
    assert_eq!(info.length, 3);
}

#[test]
fn records_segment_override() {
    let info = decode(DisassemblerMode::M32, &[0x64, 0x8B, 0x00]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_SEGMENT));
    assert_eq!(info.segment, Register::Fs);

    // The last segment override wins.
    let info = decode(DisassemblerMode::M32, &[0x64, 0x3E, 0x8B, 0x00]);
    assert_eq!(info.segment, Register::Ds);
}

#[test]
fn repeat_prefixes_are_mutually_exclusive() {
    // f2 f3 <add>: the later F3 replaces the F2
    let info = decode(DisassemblerMode::M32, &[0xF2, 0xF3, 0x01, 0x00]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_REP));
    assert!(!info.flags.contains(InstructionFlags::PREFIX_REPNE));

    let info = decode(DisassemblerMode::M32, &[0xF3, 0xF2, 0x01, 0x00]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_REPNE));
    assert!(!info.flags.contains(InstructionFlags::PREFIX_REP));
}

#[test]
fn repeated_pair_behaves_like_single_last_prefix() {
    let double = decode(DisassemblerMode::M32, &[0xF2, 0xF2, 0xF3, 0x01, 0x00]);
    let single = decode(DisassemblerMode::M32, &[0xF3, 0x01, 0x00]);
    assert_eq!(
        double.flags & (InstructionFlags::PREFIX_REP | InstructionFlags::PREFIX_REPNE),
        single.flags & (InstructionFlags::PREFIX_REP | InstructionFlags::PREFIX_REPNE),
    );
}

#[test]
fn decodes_rex_fields_in_64bit_mode() {
    // 4C 8B D0: mov r10, rax
    let info = decode(DisassemblerMode::M64, &[0x4C, 0x8B, 0xD0]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_REX));
    assert_eq!(info.rex, 0x4C);
    assert_eq!(info.rex_w, 1);
    assert_eq!(info.rex_r, 1);
    assert_eq!(info.rex_x, 0);
    assert_eq!(info.rex_b, 0);
}

#[test]
fn rex_bytes_are_instructions_outside_64bit_mode() {
    // 0x48 is dec eax in 32-bit mode
    let info = decode(DisassemblerMode::M32, &[0x48]);
    assert!(!info.flags.contains(InstructionFlags::PREFIX_REX));
    assert_eq!(info.mnemonic, crate::Mnemonic::Dec);
    assert_eq!(info.length, 1);
}

#[test]
fn later_rex_wins() {
    // 48 41 50: both bytes scan as REX; the 0x41 one is in effect
    let info = decode(DisassemblerMode::M64, &[0x48, 0x41, 0x50]);
    assert_eq!(info.rex, 0x41);
    assert_eq!(info.rex_b, 1);
    assert_eq!(info.mnemonic, crate::Mnemonic::Push);
    assert_eq!(info.operand[0].base, Register::R8);
}

#[test]
fn size_override_prefixes_set_flags() {
    let info = decode(DisassemblerMode::M64, &[0x66, 0x67, 0x8B, 0x00]);
    assert!(info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE));
    assert!(info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE));
    assert_eq!(info.operand_mode, 16);
    assert_eq!(info.address_mode, 32);
}
