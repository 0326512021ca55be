//! ModR/M and SIB addressing forms across the three address modes.

mod common;

use common::decode_one;
use x86_decoder::{DisassemblerMode, Mnemonic, OperandType, Register};

#[test]
fn addressing_16bit_base_index_pairs() {
    // 8B 00: mov ax, [bx+si]
    let (_, info) = decode_one(DisassemblerMode::M16, &[0x8B, 0x00]);
    assert_eq!(info.operand[1].ty, OperandType::Memory);
    assert_eq!(info.operand[1].base, Register::Bx);
    assert_eq!(info.operand[1].index, Register::Si);
    assert_eq!(info.operand[1].scale, 0);
    assert_eq!(info.operand[1].offset, 0);

    // 8B 42 10: mov ax, [bp+si+0x10]
    let (_, info) = decode_one(DisassemblerMode::M16, &[0x8B, 0x42, 0x10]);
    assert_eq!(info.operand[1].base, Register::Bp);
    assert_eq!(info.operand[1].index, Register::Si);
    assert_eq!(info.operand[1].offset, 8);
    assert_eq!(info.operand[1].lval.ubyte(), 0x10);
}

#[test]
fn addressing_16bit_direct() {
    // 8B 06 34 12: mov ax, [0x1234]
    let (_, info) = decode_one(DisassemblerMode::M16, &[0x8B, 0x06, 0x34, 0x12]);
    assert_eq!(info.operand[1].base, Register::None);
    assert_eq!(info.operand[1].index, Register::None);
    assert_eq!(info.operand[1].offset, 16);
    assert_eq!(info.operand[1].lval.uword(), 0x1234);
}

#[test]
fn addressing_32bit_direct() {
    // 8B 05 78 56 34 12: mov eax, [0x12345678]
    let (_, info) = decode_one(DisassemblerMode::M32, &[0x8B, 0x05, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(info.operand[1].base, Register::None);
    assert_eq!(info.operand[1].offset, 32);
    assert_eq!(info.operand[1].lval.udword(), 0x1234_5678);
}

#[test]
fn addressing_32bit_sib_scale() {
    // 8B 04 8B: mov eax, [ebx+ecx*4]
    let (_, info) = decode_one(DisassemblerMode::M32, &[0x8B, 0x04, 0x8B]);
    assert_eq!(info.operand[1].base, Register::Ebx);
    assert_eq!(info.operand[1].index, Register::Ecx);
    assert_eq!(info.operand[1].scale, 4);
}

#[test]
fn addressing_32bit_sib_esp_index_is_none() {
    // 8B 04 24: mov eax, [esp]
    let (_, info) = decode_one(DisassemblerMode::M32, &[0x8B, 0x04, 0x24]);
    assert_eq!(info.operand[1].base, Register::Esp);
    assert_eq!(info.operand[1].index, Register::None);
    assert_eq!(info.operand[1].scale, 0);
}

#[test]
fn addressing_32bit_sib_ebp_base_disp32() {
    // 8B 04 2D 44 33 22 11: mov eax, [ebp*1 + 0x11223344] with mod == 0
    let (_, info) = decode_one(
        DisassemblerMode::M32,
        &[0x8B, 0x04, 0x2D, 0x44, 0x33, 0x22, 0x11],
    );
    assert_eq!(info.operand[1].base, Register::None);
    assert_eq!(info.operand[1].index, Register::Ebp);
    assert_eq!(info.operand[1].offset, 32);
    assert_eq!(info.operand[1].lval.udword(), 0x1122_3344);
}

#[test]
fn addressing_64bit_rex_extends_base_and_index() {
    // 4B 8B 04 0C: mov rax, [r12+r9]
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x4B, 0x8B, 0x04, 0x0C]);
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.operand[0].base, Register::Rax);
    assert_eq!(info.operand[1].base, Register::R12);
    assert_eq!(info.operand[1].index, Register::R9);
    assert_eq!(info.operand[1].scale, 0);
}

#[test]
fn addressing_64bit_r13_behaves_like_rbp() {
    // 41 8B 45 00: mov eax, [r13+0x0]
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x41, 0x8B, 0x45, 0x00]);
    assert_eq!(info.operand[1].base, Register::R13);
    assert_eq!(info.operand[1].offset, 8);

    // 43 8B 44 2D 00: mov eax, [r13+r13*1+0x0] via SIB
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x43, 0x8B, 0x44, 0x2D, 0x00]);
    assert_eq!(info.operand[1].base, Register::R13);
    assert_eq!(info.operand[1].index, Register::R13);
    assert_eq!(info.operand[1].offset, 8);
}

#[test]
fn address_size_override_switches_form() {
    // 67 8B 00 in 64-bit mode: mov eax, [eax]
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x67, 0x8B, 0x00]);
    assert_eq!(info.address_mode, 32);
    assert_eq!(info.operand[1].base, Register::Eax);
}

#[test]
fn memory_only_operand_rejects_register_form() {
    // 8D C0: lea eax, eax is not encodable
    let (more, info) = decode_one(DisassemblerMode::M32, &[0x8D, 0xC0]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);
    assert_eq!(info.length, 1);
}

#[test]
fn register_only_operand_rejects_memory_form() {
    // 0F 20 00: mov r/m, cr0 requires mod == 11
    let (more, info) = decode_one(DisassemblerMode::M32, &[0x0F, 0x20, 0x00]);
    assert!(more);
    assert_eq!(info.mnemonic, Mnemonic::Invalid);

    // 0F 20 C0: mov eax, cr0
    let (_, info) = decode_one(DisassemblerMode::M32, &[0x0F, 0x20, 0xC0]);
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.operand[0].base, Register::Eax);
    assert_eq!(info.operand[1].base, Register::Cr0);
}

#[test]
fn rex_b_selects_high_register_file() {
    // 41 50: push r8
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x41, 0x50]);
    assert_eq!(info.mnemonic, Mnemonic::Push);
    assert_eq!(info.operand[0].base, Register::R8);

    // 40 80 C4 01: add spl, 1 (REX remaps id 4 from AH to SPL)
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x40, 0x80, 0xC4, 0x01]);
    assert_eq!(info.operand[0].base, Register::Spl);

    // 80 C4 01: add ah, 1 without REX
    let (_, info) = decode_one(DisassemblerMode::M64, &[0x80, 0xC4, 0x01]);
    assert_eq!(info.operand[0].base, Register::Ah);
}

#[test]
fn moffs_uses_address_width_displacement() {
    // A1 .. : mov eax, [moffs32]
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xA1, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(info.mnemonic, Mnemonic::Mov);
    assert_eq!(info.operand[1].ty, OperandType::Memory);
    assert_eq!(info.operand[1].base, Register::None);
    assert_eq!(info.operand[1].offset, 32);
    assert_eq!(info.operand[1].lval.udword(), 0x1234_5678);

    // In 64-bit mode the displacement is 8 bytes wide.
    let (_, info) = decode_one(
        DisassemblerMode::M64,
        &[0xA1, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88],
    );
    assert_eq!(info.operand[1].offset, 64);
    assert_eq!(info.operand[1].lval.uqword(), 0x8877_6655_4433_2211);
    assert_eq!(info.length, 9);
}

#[test]
fn far_pointer_operand() {
    // 9A 44 33 22 11 34 12: call 0x1234:0x11223344
    let (_, info) = decode_one(
        DisassemblerMode::M32,
        &[0x9A, 0x44, 0x33, 0x22, 0x11, 0x34, 0x12],
    );
    assert_eq!(info.mnemonic, Mnemonic::Call);
    assert_eq!(info.operand[0].ty, OperandType::Pointer);
    assert_eq!(info.operand[0].size, 48);
    assert_eq!(info.operand[0].lval.ptr_off(), 0x1122_3344);
    assert_eq!(info.operand[0].lval.ptr_seg(), 0x1234);
}

#[test]
fn group_dispatch_by_modrm_reg() {
    // F7 D8: neg eax ; F7 E0: mul eax
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xF7, 0xD8]);
    assert_eq!(info.mnemonic, Mnemonic::Neg);
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xF7, 0xE0]);
    assert_eq!(info.mnemonic, Mnemonic::Mul);

    // C1 E0 04: shl eax, 4
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xC1, 0xE0, 0x04]);
    assert_eq!(info.mnemonic, Mnemonic::Shl);
    assert_eq!(info.operand[1].lval.ubyte(), 4);

    // D1 E0: shl eax, 1 with the implicit-one form
    let (_, info) = decode_one(DisassemblerMode::M32, &[0xD1, 0xE0]);
    assert_eq!(info.operand[1].ty, OperandType::Constant);
    assert_eq!(info.operand[1].lval.udword(), 1);
}
