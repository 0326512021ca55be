//! Error reporting, rollback and re-synchronization behavior.

mod common;

use common::{decode_all, decode_one};
use x86_decoder::{
    DisassemblerMode, InstructionDecoder, InstructionFlags, InstructionInfo,
    InstructionSetVendor, MemorySource, Mnemonic, OperandType,
};

#[test]
fn empty_input_reports_no_more_instructions() {
    let (more, info) = decode_one(DisassemblerMode::M64, &[]);
    assert!(!more);
    assert_eq!(info.length, 0);
    assert!(info.flags.contains(InstructionFlags::ERROR_END_OF_INPUT));
}

#[test]
fn no_source_behaves_like_empty_input() {
    let mut decoder: InstructionDecoder<MemorySource<'_>> = InstructionDecoder::new();
    let mut info = InstructionInfo::default();
    assert!(!decoder.decode_instruction(&mut info));
    assert!(info.flags.contains(InstructionFlags::ERROR_END_OF_INPUT));
}

#[test]
fn invalid_record_preserves_first_byte_and_address() {
    // 0F 0B is UD2; 0F 04 is undefined and must roll back to one byte.
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(&[0x0F, 0x04, 0x90][..])),
        DisassemblerMode::M32,
        InstructionSetVendor::Intel,
        0x2000,
    );
    let mut info = InstructionInfo::default();
    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.length, 1);
    assert_eq!(info.data[0], 0x0F);
    assert_eq!(info.instr_address, 0x2000);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
    assert!(info.flags.contains(InstructionFlags::ERROR_INVALID));
    // The mode bits survive the flag masking.
    assert!(info.flags.contains(InstructionFlags::DISASSEMBLER_MODE_32));
    assert_eq!(info.operand[0].ty, OperandType::None);

    // The source re-synchronized on the byte after the failed one: the
    // tail re-decodes as add al, 0x90.
    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.instr_address, 0x2001);
    assert_eq!(info.mnemonic, Mnemonic::Add);
    assert_eq!(info.length, 2);
    assert_eq!(&info.data[..2], &[0x04, 0x90]);
}

#[test]
fn invalid_in_64bit_mode_sets_dedicated_flag() {
    // 0x06 (push es) exists only outside 64-bit mode
    let (more, info) = decode_one(DisassemblerMode::M64, &[0x06]);
    assert!(more);
    assert_eq!(info.length, 1);
    assert!(info.flags.contains(InstructionFlags::ERROR_INVALID_64));

    let (_, info) = decode_one(DisassemblerMode::M32, &[0x06]);
    assert_eq!(info.mnemonic, Mnemonic::Push);
}

#[test]
fn overlength_instruction_is_rejected() {
    // Fifteen 0x66 prefixes leave no room for the opcode.
    let bytes = [0x66; 16];
    let (more, info) = decode_one(DisassemblerMode::M32, &bytes);
    assert!(more);
    assert!(info.flags.contains(InstructionFlags::ERROR_LENGTH));
    assert_eq!(info.length, 1);
    assert_eq!(info.data[0], 0x66);
}

#[test]
fn truncated_immediate_yields_invalid_record() {
    // mov eax, imm32 with only two immediate bytes present
    let (more, info) = decode_one(DisassemblerMode::M32, &[0xB8, 0x78, 0x56]);
    assert!(more);
    assert_eq!(info.length, 1);
    assert_eq!(info.data[0], 0xB8);
    assert!(info.flags.contains(InstructionFlags::ERROR_END_OF_INPUT));
}

#[test]
fn stream_self_synchronizes_after_errors() {
    // invalid, invalid-tail bytes, then a clean nop
    let code = [0x0F, 0x04, 0xFF, 0x90];
    let records = decode_all(DisassemblerMode::M32, &code);
    // 0F 04 -> one-byte invalid record, then the stream re-synchronizes
    // and the remaining bytes all end up in some record.
    let total: u32 = records.iter().map(|r| u32::from(r.length)).sum();
    assert_eq!(total as usize, code.len());
    assert_eq!(records[0].mnemonic, Mnemonic::Invalid);
    assert_eq!(records[0].length, 1);
    assert_eq!(records.last().unwrap().mnemonic, Mnemonic::Nop);
}

#[test]
fn error_records_never_alias() {
    // F3 90 would be PAUSE, but the rep-nop alias must not fire on the
    // invalid path: F3 0F 04 fails before aliasing.
    let records = decode_all(DisassemblerMode::M32, &[0xF3, 0x0F, 0x04]);
    assert!(records.iter().all(|r| r.mnemonic != Mnemonic::Pause));
}

#[test]
fn xop_encodings_are_rejected() {
    // 8F is POP r/m; in 64-bit mode a well-formed POP must still decode.
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x8F, 0xC0]);
    assert_eq!(info.mnemonic, Mnemonic::Pop);

    // A three-byte VEX payload selecting an out-of-range opcode map is
    // rejected as a whole.
    let (more, info) = decode_one(DisassemblerMode::M64, &[0xC4, 0x04, 0x00, 0x00]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
    assert_eq!(info.length, 1);
    assert!(info.flags.contains(InstructionFlags::ERROR_INVALID));
}

#[test]
fn decoder_reports_end_after_consuming_everything() {
    let code = [0x90, 0x90];
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(&code[..])),
        DisassemblerMode::M64,
        InstructionSetVendor::Intel,
        0,
    );
    let mut info = InstructionInfo::default();
    assert!(decoder.decode_instruction(&mut info));
    assert!(decoder.decode_instruction(&mut info));
    assert!(!decoder.decode_instruction(&mut info));
    // Still exhausted on the next call.
    assert!(!decoder.decode_instruction(&mut info));
}
