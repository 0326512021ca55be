//! Operand materialization: register selection, ModR/M and SIB memory
//! forms, displacements and immediates, effective sizing.

use bit_field::BitField;

use super::InstructionDecoder;
use crate::input::ByteSource;
use crate::insn::{InstructionFlags, InstructionInfo, Lvalue, OperandAccessMode, OperandType};
use crate::optree::{
    DefinedOperandSize, DefinedOperandType, DefinitionFlags, InstructionDefinition,
};
use crate::regs::{Register, RegisterClass};

/// Base registers of the eight 16-bit ModR/M memory forms.
const BASES16: [Register; 8] = [
    Register::Bx, Register::Bx, Register::Bp, Register::Bp,
    Register::Si, Register::Di, Register::Bp, Register::Bx,
];

/// Index registers of the eight 16-bit ModR/M memory forms.
const INDICES16: [Register; 8] = [
    Register::Si, Register::Di, Register::Si, Register::Di,
    Register::None, Register::None, Register::None, Register::None,
];

impl<S: ByteSource> InstructionDecoder<S> {
    /// Lazily decodes the ModR/M byte. The extended register selectors are
    /// refreshed on every call: before the definition is committed the
    /// effective extension bits read as zero, afterwards they carry the
    /// masked REX/VEX values the operand decoder needs.
    pub(super) fn decode_modrm(&mut self, info: &mut InstructionInfo) -> bool {
        self.in_opcode_fetch = false;
        if !info.flags.contains(InstructionFlags::MODRM) {
            info.modrm = self.input_next(info);
            if info.modrm == 0 && info.has_error() {
                return false;
            }
            info.flags |= InstructionFlags::MODRM;
            info.modrm_mod = info.modrm.get_bits(6..8);
            info.modrm_reg = info.modrm.get_bits(3..6);
            info.modrm_rm = info.modrm.get_bits(0..3);
        }
        info.modrm_reg_ext = (info.eff_rexvex_r << 3) | info.modrm_reg;
        info.modrm_rm_ext = (info.eff_rexvex_b << 3) | info.modrm_rm;
        true
    }

    /// Lazily decodes the SIB byte; only reached from 32/64-bit memory
    /// forms with `rm == 0b100`, which is after the definition commit, so
    /// the effective extension bits are final here.
    fn decode_sib(&mut self, info: &mut InstructionInfo) -> bool {
        if !info.flags.contains(InstructionFlags::SIB) {
            info.sib = self.input_next(info);
            if info.sib == 0 && info.has_error() {
                return false;
            }
            info.flags |= InstructionFlags::SIB;
            info.sib_scale = info.sib.get_bits(6..8);
            info.sib_index = info.sib.get_bits(3..6);
            info.sib_base = info.sib.get_bits(0..3);
            info.sib_index_ext = (info.eff_rexvex_x << 3) | info.sib_index;
            info.sib_base_ext = (info.eff_rexvex_b << 3) | info.sib_base;
        }
        true
    }

    /// Masks the raw REX (or VEX-equivalent) extension bits with the
    /// definition's accepts-flags.
    pub(super) fn calculate_effective_rexvex(
        &self,
        info: &mut InstructionInfo,
        definition: &InstructionDefinition,
    ) {
        let mut rex = info.rex;
        if info.flags.contains(InstructionFlags::PREFIX_VEX) {
            rex = match info.vex_op {
                // Three-byte forms store inverted R/X/B in byte 1 and W in
                // byte 2; rebuild the REX bit layout from them.
                0xC4 | 0x8F => (!(info.vex_b1 >> 5) & 0x07) | ((info.vex_b2 >> 4) & 0x08),
                _ => !(info.vex_b1 >> 5) & 0x04,
            };
        }
        rex &= definition.flags.rexvex_mask();
        info.eff_rexvex_w = rex.get_bit(3) as u8;
        info.eff_rexvex_r = rex.get_bit(2) as u8;
        info.eff_rexvex_x = rex.get_bit(1) as u8;
        info.eff_rexvex_b = rex.get_bit(0) as u8;
        info.eff_vex_l = u8::from(
            info.vex_l != 0 && definition.flags.contains(DefinitionFlags::ACCEPTS_VEXL),
        );
    }

    /// Collapses CPU mode, size-override prefixes, the effective W bit and
    /// the definition's 64-bit default into the operand and address modes.
    pub(super) fn resolve_operand_and_address_mode(
        &self,
        info: &mut InstructionInfo,
        definition: &InstructionDefinition,
    ) {
        match self.mode {
            super::DisassemblerMode::M16 => {
                info.operand_mode =
                    if info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE) { 32 } else { 16 };
                info.address_mode =
                    if info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE) { 32 } else { 16 };
            }
            super::DisassemblerMode::M32 => {
                info.operand_mode =
                    if info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE) { 16 } else { 32 };
                info.address_mode =
                    if info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE) { 16 } else { 32 };
            }
            super::DisassemblerMode::M64 => {
                info.operand_mode = if info.eff_rexvex_w != 0 {
                    64
                } else if info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE) {
                    16
                } else if definition.flags.contains(DefinitionFlags::DEFAULT_64) {
                    64
                } else {
                    32
                };
                info.address_mode =
                    if info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE) { 32 } else { 64 };
            }
        }
    }

    /// The concrete bit width of a defined size code for this instruction.
    fn effective_operand_size(
        &self,
        info: &InstructionInfo,
        size: DefinedOperandSize,
    ) -> u16 {
        use DefinedOperandSize as Sz;
        if size == Sz::NA {
            0
        } else if size == Sz::Z {
            if info.operand_mode == 16 { 16 } else { 32 }
        } else if size == Sz::V {
            u16::from(info.operand_mode)
        } else if size == Sz::Y {
            if info.operand_mode == 16 { 32 } else { u16::from(info.operand_mode) }
        } else if size == Sz::X {
            if info.eff_vex_l != 0 { 256 } else { 128 }
        } else if size == Sz::RDQ {
            if self.is_mode64() { 64 } else { 32 }
        } else {
            size.simple_bits()
        }
    }

    /// Decodes every defined operand slot, then applies the definition's
    /// access-mode flags.
    pub(super) fn decode_operands(
        &mut self,
        info: &mut InstructionInfo,
        definition: &InstructionDefinition,
    ) -> bool {
        self.in_opcode_fetch = false;
        // The first slot is unconditional; each further slot only exists
        // if the previous one did.
        if !self.decode_operand(info, 0, definition.operand[0].ty, definition.operand[0].size) {
            return false;
        }
        for i in 1..4 {
            if info.operand[i - 1].ty != OperandType::None
                && !self.decode_operand(info, i, definition.operand[i].ty, definition.operand[i].size)
            {
                return false;
            }
        }

        for i in 0..4 {
            if info.operand[i].ty != OperandType::None {
                info.operand[i].access_mode = OperandAccessMode::Read;
            }
        }
        self.apply_access_flags(info, definition);
        true
    }

    /// Rewrites the access modes of the first two operands according to
    /// the definition's write/readwrite flags.
    pub(super) fn apply_access_flags(
        &self,
        info: &mut InstructionInfo,
        definition: &InstructionDefinition,
    ) {
        if info.operand[0].ty != OperandType::None {
            if definition.flags.contains(DefinitionFlags::OPERAND1_WRITE) {
                info.operand[0].access_mode = OperandAccessMode::Write;
            } else if definition.flags.contains(DefinitionFlags::OPERAND1_READWRITE) {
                info.operand[0].access_mode = OperandAccessMode::ReadWrite;
            }
        }
        if info.operand[1].ty != OperandType::None {
            if definition.flags.contains(DefinitionFlags::OPERAND2_WRITE) {
                info.operand[1].access_mode = OperandAccessMode::Write;
            } else if definition.flags.contains(DefinitionFlags::OPERAND2_READWRITE) {
                info.operand[1].access_mode = OperandAccessMode::ReadWrite;
            }
        }
    }

    fn decode_operand(
        &mut self,
        info: &mut InstructionInfo,
        slot: usize,
        ty: DefinedOperandType,
        size: DefinedOperandSize,
    ) -> bool {
        use DefinedOperandType as T;

        info.operand[slot].ty = OperandType::None;
        match ty {
            T::None => true,
            T::A => {
                let (size_bits, off, seg) = if info.operand_mode == 16 {
                    let off = u32::from(self.input_next16(info));
                    let seg = self.input_next16(info);
                    (32, off, seg)
                } else {
                    let off = self.input_next32(info);
                    let seg = self.input_next16(info);
                    (48, off, seg)
                };
                if (off == 0 || seg == 0) && info.has_error() {
                    return false;
                }
                info.operand[slot].ty = OperandType::Pointer;
                info.operand[slot].size = size_bits;
                info.operand[slot].lval = Lvalue::from_far_ptr(seg, off);
                true
            }
            T::C => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::Control, id, size)
            }
            T::D => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::Debug, id, size)
            }
            T::E => self.decode_register_memory_operand(
                info,
                slot,
                RegisterClass::GeneralPurpose,
                size,
            ),
            T::M => {
                if !self.decode_modrm(info) {
                    return false;
                }
                if info.modrm_mod == 0b11 {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                self.decode_register_memory_operand(
                    info,
                    slot,
                    RegisterClass::GeneralPurpose,
                    size,
                )
            }
            T::G => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::GeneralPurpose, id, size)
            }
            T::H => {
                let id = 0x0F & !info.vex_vvvv;
                self.decode_register_operand(info, slot, RegisterClass::Xmm, id, size)
            }
            T::SI => {
                info.operand[slot].signed_lval = true;
                self.decode_immediate(info, slot, size)
            }
            T::I => self.decode_immediate(info, slot, size),
            T::I1 => {
                info.operand[slot].ty = OperandType::Constant;
                info.operand[slot].lval = Lvalue::from_u64(1);
                true
            }
            T::J => {
                if !self.decode_immediate(info, slot, size) {
                    return false;
                }
                info.operand[slot].ty = OperandType::RelImmediate;
                info.operand[slot].signed_lval = true;
                info.flags |= InstructionFlags::RELATIVE;
                true
            }
            T::L => {
                let imm = self.input_next(info);
                if imm == 0 && info.has_error() {
                    return false;
                }
                let mask = if self.is_mode64() { 0x0F } else { 0x07 };
                self.decode_register_operand(info, slot, RegisterClass::Xmm, mask & (imm >> 4), size)
            }
            T::MR => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let part = if info.modrm_mod == 0b11 {
                    size.reg_part()
                } else {
                    size.mem_part()
                };
                self.decode_register_memory_operand(
                    info,
                    slot,
                    RegisterClass::GeneralPurpose,
                    part,
                )
            }
            T::MU => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let part = if info.modrm_mod == 0b11 {
                    size.reg_part()
                } else {
                    size.mem_part()
                };
                self.decode_register_memory_operand(info, slot, RegisterClass::Xmm, part)
            }
            T::N => {
                if !self.decode_modrm(info) {
                    return false;
                }
                if info.modrm_mod != 0b11 {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                self.decode_register_memory_operand(info, slot, RegisterClass::Mmx, size)
            }
            T::Q => self.decode_register_memory_operand(info, slot, RegisterClass::Mmx, size),
            T::O => {
                info.operand[slot].ty = OperandType::Memory;
                info.operand[slot].base = Register::None;
                info.operand[slot].index = Register::None;
                info.operand[slot].scale = 0;
                info.operand[slot].size = self.effective_operand_size(info, size);
                let width = info.address_mode;
                self.decode_displacement(info, slot, width)
            }
            T::P => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::Mmx, id, size)
            }
            T::R => {
                if !self.decode_modrm(info) {
                    return false;
                }
                if info.modrm_mod != 0b11 {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                self.decode_register_memory_operand(
                    info,
                    slot,
                    RegisterClass::GeneralPurpose,
                    size,
                )
            }
            T::S => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::Segment, id, size)
            }
            T::U => {
                if !self.decode_modrm(info) {
                    return false;
                }
                if info.modrm_mod != 0b11 {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                self.decode_register_memory_operand(info, slot, RegisterClass::Xmm, size)
            }
            T::W => self.decode_register_memory_operand(info, slot, RegisterClass::Xmm, size),
            T::V => {
                if !self.decode_modrm(info) {
                    return false;
                }
                let id = info.modrm_reg_ext;
                self.decode_register_operand(info, slot, RegisterClass::Xmm, id, size)
            }
            T::R0 | T::R1 | T::R2 | T::R3 | T::R4 | T::R5 | T::R6 | T::R7 => {
                let n = ty as u8 - T::R0 as u8;
                let id = (info.eff_rexvex_b << 3) | n;
                self.decode_register_operand(info, slot, RegisterClass::GeneralPurpose, id, size)
            }
            T::Al | T::Ax | T::Eax | T::Rax => {
                self.decode_register_operand(info, slot, RegisterClass::GeneralPurpose, 0, size)
            }
            T::Cl | T::Cx | T::Ecx | T::Rcx => {
                self.decode_register_operand(info, slot, RegisterClass::GeneralPurpose, 1, size)
            }
            T::Dl | T::Dx | T::Edx | T::Rdx => {
                self.decode_register_operand(info, slot, RegisterClass::GeneralPurpose, 2, size)
            }
            T::Es | T::Cs | T::Ss | T::Ds | T::Fs | T::Gs => {
                if self.is_mode64() && !matches!(ty, T::Fs | T::Gs) {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                info.operand[slot].ty = OperandType::Register;
                info.operand[slot].base = Register::segment(ty as u8 - T::Es as u8);
                info.operand[slot].size = 16;
                true
            }
            T::St0 | T::St1 | T::St2 | T::St3 | T::St4 | T::St5 | T::St6 | T::St7 => {
                info.operand[slot].ty = OperandType::Register;
                info.operand[slot].base = Register::st(ty as u8 - T::St0 as u8);
                info.operand[slot].size = 80;
                true
            }
        }
    }

    /// Materializes a register operand from a class, an id and a defined
    /// size.
    fn decode_register_operand(
        &self,
        info: &mut InstructionInfo,
        slot: usize,
        class: RegisterClass,
        id: u8,
        size: DefinedOperandSize,
    ) -> bool {
        let bits = self.effective_operand_size(info, size);
        let reg = match class {
            RegisterClass::GeneralPurpose => match bits {
                64 | 32 | 16 => Register::gp(bits, id),
                8 => {
                    if self.is_mode64() && info.flags.contains(InstructionFlags::PREFIX_REX) {
                        Register::gp8_rex(id)
                    } else {
                        Register::gp8_legacy(id)
                    }
                }
                _ => Register::None,
            },
            RegisterClass::Mmx => Register::mmx(id),
            RegisterClass::Control => Register::control(id),
            RegisterClass::Debug => Register::debug(id),
            RegisterClass::Segment => {
                if (id & 0x07) > 5 {
                    info.flags |= InstructionFlags::ERROR_OPERAND;
                    return false;
                }
                Register::segment(id)
            }
            RegisterClass::Xmm => Register::multimedia(bits, id),
        };
        info.operand[slot].ty = OperandType::Register;
        info.operand[slot].base = reg;
        info.operand[slot].size = bits;
        true
    }

    /// Decodes a register-or-memory operand: a plain register when
    /// `mod == 0b11`, otherwise a memory operand shaped by the effective
    /// address mode (with SIB and displacement as required).
    fn decode_register_memory_operand(
        &mut self,
        info: &mut InstructionInfo,
        slot: usize,
        class: RegisterClass,
        size: DefinedOperandSize,
    ) -> bool {
        if !self.decode_modrm(info) {
            return false;
        }
        if info.modrm_mod == 0b11 {
            let id = info.modrm_rm_ext;
            return self.decode_register_operand(info, slot, class, id, size);
        }

        let mut offset: u8 = 0;
        info.operand[slot].ty = OperandType::Memory;
        info.operand[slot].size = self.effective_operand_size(info, size);
        match info.address_mode {
            16 => {
                info.operand[slot].base = BASES16[(info.modrm_rm_ext & 0x07) as usize];
                info.operand[slot].index = INDICES16[(info.modrm_rm_ext & 0x07) as usize];
                info.operand[slot].scale = 0;
                if info.modrm_mod == 0 && info.modrm_rm_ext == 6 {
                    offset = 16;
                    info.operand[slot].base = Register::None;
                } else if info.modrm_mod == 1 {
                    offset = 8;
                } else if info.modrm_mod == 2 {
                    offset = 16;
                }
            }
            32 => {
                info.operand[slot].base = Register::gp(32, info.modrm_rm_ext);
                match info.modrm_mod {
                    0 => {
                        if info.modrm_rm_ext == 5 {
                            info.operand[slot].base = Register::None;
                            offset = 32;
                        }
                    }
                    1 => offset = 8,
                    _ => offset = 32,
                }
                if (info.modrm_rm_ext & 0x07) == 4 {
                    if !self.decode_sib(info) {
                        return false;
                    }
                    info.operand[slot].base = Register::gp(32, info.sib_base_ext);
                    info.operand[slot].index = Register::gp(32, info.sib_index_ext);
                    info.operand[slot].scale = (1 << info.sib_scale) & !1;
                    if info.operand[slot].index == Register::Esp {
                        info.operand[slot].index = Register::None;
                        info.operand[slot].scale = 0;
                    }
                    if info.operand[slot].base == Register::Ebp {
                        if info.modrm_mod == 0 {
                            info.operand[slot].base = Register::None;
                        }
                        if info.modrm_mod == 1 {
                            offset = 8;
                        } else {
                            offset = 32;
                        }
                    }
                } else {
                    info.operand[slot].index = Register::None;
                    info.operand[slot].scale = 0;
                }
            }
            _ => {
                info.operand[slot].base = Register::gp(64, info.modrm_rm_ext);
                match info.modrm_mod {
                    0 => {
                        if (info.modrm_rm_ext & 0x07) == 5 {
                            info.flags |= InstructionFlags::RELATIVE;
                            info.operand[slot].base = Register::Rip;
                            offset = 32;
                        }
                    }
                    1 => offset = 8,
                    _ => offset = 32,
                }
                if (info.modrm_rm_ext & 0x07) == 4 {
                    if !self.decode_sib(info) {
                        return false;
                    }
                    info.operand[slot].base = Register::gp(64, info.sib_base_ext);
                    info.operand[slot].index = Register::gp(64, info.sib_index_ext);
                    if info.operand[slot].index == Register::Rsp {
                        info.operand[slot].index = Register::None;
                        info.operand[slot].scale = 0;
                    } else {
                        info.operand[slot].scale = (1 << info.sib_scale) & !1;
                    }
                    if info.operand[slot].base == Register::Rbp
                        || info.operand[slot].base == Register::R13
                    {
                        if info.modrm_mod == 0 {
                            info.operand[slot].base = Register::None;
                        }
                        if info.modrm_mod == 1 {
                            offset = 8;
                        } else {
                            offset = 32;
                        }
                    }
                } else {
                    info.operand[slot].index = Register::None;
                    info.operand[slot].scale = 0;
                }
            }
        }

        if offset != 0 {
            self.decode_displacement(info, slot, offset)
        } else {
            info.operand[slot].offset = 0;
            true
        }
    }

    /// Reads an immediate of the effective size into the operand's lvalue.
    fn decode_immediate(
        &mut self,
        info: &mut InstructionInfo,
        slot: usize,
        size: DefinedOperandSize,
    ) -> bool {
        info.operand[slot].ty = OperandType::Immediate;
        let bits = self.effective_operand_size(info, size);
        info.operand[slot].size = bits;
        let value = match bits {
            8 => u64::from(self.input_next(info)),
            16 => u64::from(self.input_next16(info)),
            32 => u64::from(self.input_next32(info)),
            64 => self.input_next64(info),
            _ => {
                info.flags |= InstructionFlags::ERROR_OPERAND;
                return false;
            }
        };
        info.operand[slot].lval = Lvalue::from_u64(value);
        if value == 0 && info.has_error() {
            return false;
        }
        true
    }

    /// Reads a displacement of the given bit width into the operand's
    /// lvalue and records its width.
    fn decode_displacement(
        &mut self,
        info: &mut InstructionInfo,
        slot: usize,
        width: u8,
    ) -> bool {
        let value = match width {
            8 => u64::from(self.input_next(info)),
            16 => u64::from(self.input_next16(info)),
            32 => u64::from(self.input_next32(info)),
            64 => self.input_next64(info),
            _ => {
                info.flags |= InstructionFlags::ERROR_OPERAND;
                return false;
            }
        };
        info.operand[slot].offset = width;
        info.operand[slot].lval = Lvalue::from_u64(value);
        if value == 0 && info.has_error() {
            return false;
        }
        true
    }
}
