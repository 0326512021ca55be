//! Property tests over arbitrary byte streams.

mod common;

use common::XorShift64;
use proptest::prelude::*;
use x86_decoder::{
    DisassemblerMode, InstructionDecoder, InstructionFlags, InstructionInfo,
    InstructionSetVendor, MemorySource, Mnemonic, OperandType, Register,
    MAX_INSTRUCTION_LENGTH,
};

fn decode_all(mode: DisassemblerMode, bytes: &[u8]) -> Vec<InstructionInfo> {
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(bytes)),
        mode,
        InstructionSetVendor::Intel,
        0,
    );
    decoder.iter_mut().collect()
}

fn check_record_invariants(info: &InstructionInfo) {
    let length = info.length as usize;
    assert!(length >= 1 && length <= MAX_INSTRUCTION_LENGTH);
    if info.has_error() {
        assert_eq!(length, 1);
        assert_eq!(info.mnemonic, Mnemonic::Invalid);
    }
    for operand in &info.operand {
        if operand.ty == OperandType::Register {
            assert!(operand.base != Register::None);
            assert!(matches!(operand.size, 8 | 16 | 32 | 64 | 80 | 128 | 256));
        }
        if operand.ty == OperandType::Memory && operand.base == Register::Rip {
            assert!(info.flags.contains(InstructionFlags::RELATIVE));
            assert!(info.flags.contains(InstructionFlags::DISASSEMBLER_MODE_64));
        }
    }
}

proptest! {
    #[test]
    fn decoding_never_panics_and_lengths_are_sane(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        mode_sel in 0u8..3,
    ) {
        let mode = match mode_sel {
            0 => DisassemblerMode::M16,
            1 => DisassemblerMode::M32,
            _ => DisassemblerMode::M64,
        };
        for info in decode_all(mode, &bytes) {
            check_record_invariants(&info);
        }
    }

    #[test]
    fn record_lengths_sum_to_consumed_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let records = decode_all(DisassemblerMode::M64, &bytes);
        let total: usize = records.iter().map(|r| r.length as usize).sum();
        prop_assert!(total <= bytes.len());
        // Whatever was consumed is byte-identical to the source.
        let mut at = 0;
        for record in &records {
            let length = record.length as usize;
            prop_assert_eq!(&record.data[..length], &bytes[at..at + length]);
            at += length;
        }
    }

    #[test]
    fn decoding_is_deterministic(
        bytes in proptest::collection::vec(any::<u8>(), 0..48),
    ) {
        let first = decode_all(DisassemblerMode::M32, &bytes);
        let second = decode_all(DisassemblerMode::M32, &bytes);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stream_terminates_within_byte_count(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        // Self-synchronization: no input needs more records than bytes.
        let records = decode_all(DisassemblerMode::M16, &bytes);
        prop_assert!(records.len() <= bytes.len());
    }
}

#[test]
fn deterministic_random_stream_decodes_identically_per_position() {
    // Decode a fixed pseudo-random buffer from every starting offset; the
    // decoder must terminate and respect the invariants each time.
    let mut buf = [0u8; 256];
    XorShift64(0x1234_5678_9ABC_DEF0).fill(&mut buf);
    for start in 0..buf.len() {
        for info in decode_all(DisassemblerMode::M64, &buf[start..]) {
            check_record_invariants(&info);
        }
    }
}
