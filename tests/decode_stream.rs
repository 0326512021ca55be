//! End-to-end decoding scenarios.

mod common;

use common::{decode_all, decode_one};
use x86_decoder::{
    DisassemblerMode, InstructionFlags, Mnemonic, OperandAccessMode, OperandType, Register,
};

#[test]
fn nop_is_the_xchg_alias() {
    let (more, info) = decode_one(DisassemblerMode::M64, &[0x90]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Nop);
    assert_eq!(info.length, 1);
    assert_eq!(info.operand[0].ty, OperandType::None);
    assert_eq!(info.operand[1].ty, OperandType::None);
    assert_eq!(info.operand[0].access_mode, OperandAccessMode::Na);
}

#[test]
fn rep_nop_is_pause() {
    let (more, info) = decode_one(DisassemblerMode::M64, &[0xF3, 0x90]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Pause);
    assert!(!info.flags.contains(InstructionFlags::PREFIX_REP));
    assert_eq!(info.length, 2);
}

#[test]
fn rex_w_mov_reg_reg() {
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x48, 0x89, 0xD8]);
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.length, 3);
    assert_eq!(info.operand_mode, 64);
    assert_eq!(info.operand[0].base, Register::Rax);
    assert_eq!(info.operand[0].size, 64);
    assert_eq!(info.operand[0].access_mode, OperandAccessMode::Write);
    assert_eq!(info.operand[1].base, Register::Rbx);
    assert_eq!(info.operand[1].access_mode, OperandAccessMode::Read);
}

#[test]
fn mov_eax_imm32() {
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xB8, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.length, 5);
    assert_eq!(info.operand[0].base, Register::Eax);
    assert_eq!(info.operand[0].access_mode, OperandAccessMode::Write);
    assert_eq!(info.operand[1].ty, OperandType::Immediate);
    assert_eq!(info.operand[1].lval.udword(), 0x1234_5678);
    assert_eq!(info.operand[1].access_mode, OperandAccessMode::Read);
}

#[test]
fn jmp_rel32() {
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xE9, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(info.mnemonic, Mnemonic::Jmp);
    assert_eq!(info.length, 5);
    assert_eq!(info.operand[0].ty, OperandType::RelImmediate);
    assert_eq!(info.operand[0].lval.sdword(), 0);
    assert!(info.flags.contains(InstructionFlags::RELATIVE));
    assert!(info.operand[0].signed_lval);
}

#[test]
fn ret_has_no_operands() {
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC3]);
    assert_eq!(info.mnemonic, Mnemonic::Ret);
    assert_eq!(info.length, 1);
    assert_eq!(info.operand[0].ty, OperandType::None);
}

#[test]
fn opsize_xchg_alias_fires_for_ax() {
    let (_, info) = decode_one(DisassemblerMode::M32, &[0x66, 0x90]);
    assert_eq!(info.mnemonic, Mnemonic::Nop);
    assert_eq!(info.operand[0].ty, OperandType::None);
    assert_eq!(info.operand[1].ty, OperandType::None);
}

#[test]
fn truncated_escape_reports_end_of_input() {
    let (more, info) = decode_one(DisassemblerMode::M32, &[0x0F]);
    assert!(!more);
    assert_eq!(info.length, 0);
    assert!(info.flags.contains(InstructionFlags::ERROR_END_OF_INPUT));
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
}

#[test]
fn truncated_modrm_yields_invalid_record() {
    let (more, info) = decode_one(DisassemblerMode::M32, &[0xFF]);
    assert!(more);
    assert_eq!(info.length, 1);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
    assert!(info.has_error());
}

#[test]
fn rip_relative_load() {
    // mov rax, [rip+0x10]
    let (_, info) = decode_one(
        DisassemblerMode::M64,
        &[0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00],
    );
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.operand[1].ty, OperandType::Memory);
    assert_eq!(info.operand[1].base, Register::Rip);
    assert!(info.flags.contains(InstructionFlags::RELATIVE));
    assert_eq!(info.operand[1].offset, 32);
    assert_eq!(info.operand[1].lval.udword(), 0x10);
}

#[test]
fn swapgs_decodes_in_64bit_mode_only() {
    let bytes = [0x0F, 0x01, 0xF8];
    let (_, info) = decode_one(DisassemblerMode::M64, &bytes);
    assert_eq!(info.mnemonic, Mnemonic::Swapgs);

    let (more, info) = decode_one(DisassemblerMode::M32, &bytes);
    assert!(more);
    assert_eq!(info.length, 1);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
}

#[test]
fn mandatory_prefix_selects_sse_variant() {
    // movss xmm0, xmm1 / movsd xmm0, xmm1 / movupd xmm0, xmm1
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xF3, 0x0F, 0x10, 0xC1]);
    assert_eq!(info.mnemonic, Mnemonic::Movss);
    assert_eq!(info.operand[0].base, Register::Xmm0);
    assert_eq!(info.operand[1].base, Register::Xmm1);
    assert!(!info.flags.contains(InstructionFlags::PREFIX_REP));

    let (_, info) = decode_one(DisassemblerMode::M64, &[0xF2, 0x0F, 0x10, 0xC1]);
    assert_eq!(info.mnemonic, Mnemonic::Movsd);

    let (_, info) = decode_one(DisassemblerMode::M64, &[0x66, 0x0F, 0x10, 0xC1]);
    assert_eq!(info.mnemonic, Mnemonic::Movupd);
    assert!(!info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE));

    let (_, info) = decode_one(DisassemblerMode::M64, &[0x0F, 0x10, 0xC1]);
    assert_eq!(info.mnemonic, Mnemonic::Movups);
}

#[test]
fn x87_register_and_memory_forms() {
    // fadd st0, st3
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xD8, 0xC3]);
    assert_eq!(info.mnemonic, Mnemonic::Fadd);
    assert_eq!(info.operand[0].base, Register::St0);
    assert_eq!(info.operand[1].base, Register::St3);
    assert_eq!(info.operand[0].size, 80);

    // fadd dword [eax]
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xD8, 0x00]);
    assert_eq!(info.mnemonic, Mnemonic::Fadd);
    assert_eq!(info.operand[0].ty, OperandType::Memory);
    assert_eq!(info.operand[0].base, Register::Eax);
    assert_eq!(info.operand[0].size, 32);

    // fsqrt
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xD9, 0xFA]);
    assert_eq!(info.mnemonic, Mnemonic::Fsqrt);
}

#[test]
fn amd_3dnow_uses_trailing_opcode() {
    // pfadd mm0, mm1 (0F 0F /r 9E); vendor Any resolves to the AMD branch
    let mut decoder = x86_decoder::InstructionDecoder::with_config(
        Some(x86_decoder::MemorySource::new(&[0x0F, 0x0F, 0xC1, 0x9E][..])),
        DisassemblerMode::M32,
        x86_decoder::InstructionSetVendor::Any,
        0,
    );
    let mut info = x86_decoder::InstructionInfo::default();
    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.mnemonic, Mnemonic::Pfadd);
    assert_eq!(info.length, 4);
    assert_eq!(info.operand[0].base, Register::Mm0);
    assert_eq!(info.operand[1].base, Register::Mm1);
    assert_eq!(info.operand[0].access_mode, OperandAccessMode::ReadWrite);

    // Preferring Intel turns the same bytes into an invalid record.
    let (more, info) = decode_one(DisassemblerMode::M32, &[0x0F, 0x0F, 0xC1, 0x9E]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
    assert_eq!(info.length, 1);
}

#[test]
fn vex_two_byte_form() {
    // vaddps xmm0, xmm1, xmm2: C5 F0 58 C2
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC5, 0xF0, 0x58, 0xC2]);
    assert_eq!(info.mnemonic, Mnemonic::Vaddps);
    assert!(info.flags.contains(InstructionFlags::PREFIX_VEX));
    assert_eq!(info.operand[0].base, Register::Xmm0);
    assert_eq!(info.operand[1].base, Register::Xmm1);
    assert_eq!(info.operand[2].base, Register::Xmm2);

    // vaddps ymm0, ymm1, ymm2: VEX.L set selects the 256-bit file
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC5, 0xF4, 0x58, 0xC2]);
    assert_eq!(info.operand[0].base, Register::Ymm0);
    assert_eq!(info.operand[0].size, 256);
}

#[test]
fn vex_three_byte_form() {
    // vaddps ymm0, ymm1, ymm2: C4 E1 74 58 C2
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC4, 0xE1, 0x74, 0x58, 0xC2]);
    assert_eq!(info.mnemonic, Mnemonic::Vaddps);
    assert!(info.flags.contains(InstructionFlags::PREFIX_VEX));
    assert!(!info.has_error());
    assert_eq!(info.length, 5);
    // The lead byte is rewritten to the map-1 escape.
    assert_eq!(info.opcode[0], 0x0F);
    assert_eq!(info.operand[0].base, Register::Ymm0);
    assert_eq!(info.operand[1].base, Register::Ymm1);
    assert_eq!(info.operand[2].base, Register::Ymm2);
    assert_eq!(info.operand[0].size, 256);
}

#[test]
fn vex_payload_bytes_may_be_zero() {
    // C5 00 58 C0: a well-formed two-byte VEX whose payload reads as
    // 0x00 — inverted vvvv selects xmm15, inverted R extends reg to
    // xmm8. Must decode, not degrade to an invalid record.
    let (more, info) = decode_one(DisassemblerMode::M64, &[0xC5, 0x00, 0x58, 0xC0]);
    assert!(more);
    assert!(!info.has_error());
    assert_eq!(info.mnemonic, Mnemonic::Vaddps);
    assert_eq!(info.length, 4);
    assert_eq!(info.operand[0].base, Register::Xmm8);
    assert_eq!(info.operand[1].base, Register::Xmm15);
    assert_eq!(info.operand[2].base, Register::Xmm0);

    // Same with a zero second payload byte in the three-byte form.
    let (more, info) = decode_one(DisassemblerMode::M64, &[0xC4, 0xE1, 0x00, 0x58, 0xC0]);
    assert!(more);
    assert!(!info.has_error());
    assert_eq!(info.mnemonic, Mnemonic::Vaddps);
    assert_eq!(info.length, 5);
    assert_eq!(info.operand[0].base, Register::Xmm0);
    assert_eq!(info.operand[1].base, Register::Xmm15);
    assert_eq!(info.operand[2].base, Register::Xmm0);
}

#[test]
fn vex_l_dispatch_selects_vzero_forms() {
    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC5, 0xF8, 0x77]);
    assert_eq!(info.mnemonic, Mnemonic::Vzeroupper);

    let (_, info) = decode_one(DisassemblerMode::M64, &[0xC5, 0xFC, 0x77]);
    assert_eq!(info.mnemonic, Mnemonic::Vzeroall);
}

#[test]
fn instruction_pointer_advances_per_record() {
    let code = [0x90, 0x48, 0x89, 0xD8, 0xC3];
    let mut decoder = x86_decoder::InstructionDecoder::with_config(
        Some(x86_decoder::MemorySource::new(&code[..])),
        DisassemblerMode::M64,
        x86_decoder::InstructionSetVendor::Intel,
        0x400000,
    );
    let mut info = x86_decoder::InstructionInfo::default();

    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.instr_address, 0x400000);
    assert_eq!(info.instr_pointer, 0x400001);

    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.instr_address, 0x400001);
    assert_eq!(info.instr_pointer, 0x400004);

    assert!(decoder.decode_instruction(&mut info));
    assert_eq!(info.instr_address, 0x400004);

    assert!(!decoder.decode_instruction(&mut info));
}

#[test]
fn data_matches_consumed_bytes() {
    let code = [0x66, 0x0F, 0x58, 0x04, 0x25, 0x44, 0x33, 0x22, 0x11];
    let records = decode_all(DisassemblerMode::M64, &code);
    assert_eq!(records.len(), 1);
    let info = &records[0];
    assert_eq!(info.mnemonic, Mnemonic::Addpd);
    assert_eq!(&info.data[..info.length as usize], &code[..]);
}
