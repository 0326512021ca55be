//! Opcode-tree traversal.

use bit_field::BitField;

use super::{InstructionDecoder, InstructionSetVendor};
use crate::input::ByteSource;
use crate::insn::{InstructionFlags, InstructionInfo, OperandType};
use crate::mnemonic::Mnemonic;
use crate::optree::{
    DefinitionFlags, NodeType, instruction_definition, opcode_tree_child, opcode_tree_root,
};

impl<S: ByteSource> InstructionDecoder<S> {
    /// Walks the opcode tree from the root to an instruction definition,
    /// consuming opcode bytes and decoding ModR/M or VEX on the way as
    /// the node types demand.
    pub(super) fn decode_opcode(&mut self, info: &mut InstructionInfo) -> bool {
        if self.input_next(info) == 0 && info.has_error() {
            return false;
        }
        info.opcode[0] = self.input_current();
        info.opcode_length = 1;

        let mut node = opcode_tree_child(opcode_tree_root(), u16::from(self.input_current()));

        loop {
            let mut index: u16 = 0;
            #[cfg(feature = "tracing")]
            trace!("opcode node {:?} value {:#05x}", node.node_type(), node.value());
            match node.node_type() {
                NodeType::InstructionDefinition => {
                    if node.value() == 0 {
                        info.flags |= InstructionFlags::ERROR_INVALID;
                        return false;
                    }
                    let definition = instruction_definition(node);
                    if self.is_mode64()
                        && definition.flags.contains(DefinitionFlags::INVALID_64)
                    {
                        info.flags |= InstructionFlags::ERROR_INVALID_64;
                        return false;
                    }
                    info.instr_definition = Some(definition);
                    info.mnemonic = definition.mnemonic;
                    self.calculate_effective_rexvex(info, definition);
                    self.resolve_operand_and_address_mode(info, definition);
                    return self.decode_operands(info, definition);
                }
                NodeType::Table => {
                    if self.input_next(info) == 0 && info.has_error() {
                        return false;
                    }
                    if info.opcode_length < 3 {
                        info.opcode[info.opcode_length as usize] = self.input_current();
                        info.opcode_length += 1;
                    }
                    index = u16::from(self.input_current());
                }
                NodeType::ModrmMod => {
                    if !self.decode_modrm(info) {
                        return false;
                    }
                    index = u16::from(info.modrm_mod == 0b11);
                }
                NodeType::ModrmReg => {
                    if !self.decode_modrm(info) {
                        return false;
                    }
                    index = u16::from(info.modrm_reg);
                }
                NodeType::ModrmRm => {
                    if !self.decode_modrm(info) {
                        return false;
                    }
                    index = u16::from(info.modrm_rm);
                }
                NodeType::Mandatory => {
                    if info.flags.contains(InstructionFlags::PREFIX_REP) {
                        index = 1;
                    } else if info.flags.contains(InstructionFlags::PREFIX_REPNE) {
                        index = 2;
                    } else if info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE) {
                        index = 3;
                    }
                    if opcode_tree_child(node, index).0 == 0 {
                        index = 0;
                    }
                    if index != 0 {
                        // The prefix is part of the opcode now; drop it from
                        // the prefix semantics so it is not applied twice.
                        info.flags &=
                            !(InstructionFlags::PREFIX_REP | InstructionFlags::PREFIX_REPNE);
                        if index == 3 {
                            info.flags &= !InstructionFlags::PREFIX_OPERAND_SIZE;
                        }
                    }
                }
                NodeType::X87 => {
                    if !self.decode_modrm(info) {
                        return false;
                    }
                    index = u16::from(info.modrm.wrapping_sub(0xC0) & 0x3F);
                }
                NodeType::AddressSize => {
                    index = match self.mode {
                        super::DisassemblerMode::M16 => {
                            u16::from(info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE))
                        }
                        super::DisassemblerMode::M32 => {
                            u16::from(!info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE))
                        }
                        super::DisassemblerMode::M64 => {
                            if info.flags.contains(InstructionFlags::PREFIX_ADDRESS_SIZE) {
                                1
                            } else {
                                2
                            }
                        }
                    };
                }
                NodeType::OperandSize => {
                    index = match self.mode {
                        super::DisassemblerMode::M16 => {
                            u16::from(info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE))
                        }
                        super::DisassemblerMode::M32 => {
                            u16::from(!info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE))
                        }
                        super::DisassemblerMode::M64 => {
                            if info.rex_w != 0 {
                                2
                            } else if info.flags.contains(InstructionFlags::PREFIX_OPERAND_SIZE) {
                                0
                            } else {
                                1
                            }
                        }
                    };
                }
                NodeType::Mode => {
                    index = u16::from(self.is_mode64());
                }
                NodeType::Vendor => {
                    index = match self.preferred_vendor {
                        InstructionSetVendor::Any => {
                            u16::from(opcode_tree_child(node, 0).0 == 0)
                        }
                        InstructionSetVendor::Intel => 1,
                        InstructionSetVendor::Amd => 0,
                    };
                }
                NodeType::Amd3dnow => {
                    return self.decode_3dnow(info, node);
                }
                NodeType::Vex => {
                    if self.is_mode64() || (self.input_current() >> 6) & 0b11 == 0b11 {
                        if !self.decode_vex(info) {
                            return false;
                        }
                        match info.vex_m_mmmm {
                            1 => {
                                info.opcode_length = 1;
                                info.opcode[0] = 0x0F;
                            }
                            2 => {
                                info.opcode_length = 2;
                                info.opcode[0] = 0x0F;
                                info.opcode[1] = 0x38;
                            }
                            3 => {
                                info.opcode_length = 2;
                                info.opcode[0] = 0x0F;
                                info.opcode[1] = 0x3A;
                            }
                            _ => {}
                        }
                        index = u16::from(info.vex_m_mmmm | (info.vex_pp << 2));
                    }
                }
                NodeType::VexW => {
                    index = u16::from(info.vex_w);
                }
                NodeType::VexL => {
                    index = u16::from(info.vex_l);
                }
            }
            node = opcode_tree_child(node, index);
        }
    }

    /// 3DNow! tail: all entries share one operand layout, so operands are
    /// decoded through a placeholder definition before the trailing opcode
    /// byte selects the real one.
    fn decode_3dnow(
        &mut self,
        info: &mut InstructionInfo,
        node: crate::optree::OpcodeTreeNode,
    ) -> bool {
        let placeholder = instruction_definition(opcode_tree_child(node, 0x0C));
        info.instr_definition = Some(placeholder);
        info.mnemonic = placeholder.mnemonic;
        self.calculate_effective_rexvex(info, placeholder);
        self.resolve_operand_and_address_mode(info, placeholder);
        if !self.decode_operands(info, placeholder) {
            return false;
        }

        info.opcode[2] = self.input_next(info);
        if info.opcode[2] == 0 && info.has_error() {
            return false;
        }

        let definition =
            instruction_definition(opcode_tree_child(node, u16::from(info.opcode[2])));
        if definition.mnemonic == Mnemonic::Invalid {
            info.flags |= InstructionFlags::ERROR_INVALID;
            return false;
        }
        info.instr_definition = Some(definition);
        info.mnemonic = definition.mnemonic;

        for i in 0..4 {
            if info.operand[i].ty != OperandType::None {
                info.operand[i].access_mode = crate::insn::OperandAccessMode::Read;
            }
        }
        self.apply_access_flags(info, definition);
        true
    }

    /// Decodes a VEX or XOP prefix. The lead byte (0xC4, 0xC5 or 0x8F) is
    /// the current input byte; one or two payload bytes follow.
    pub(super) fn decode_vex(&mut self, info: &mut InstructionInfo) -> bool {
        if info.flags.contains(InstructionFlags::PREFIX_VEX) {
            return true;
        }
        self.in_opcode_fetch = false;
        info.vex_op = self.input_current();
        match info.vex_op {
            0xC4 | 0x8F => {
                info.vex_b1 = self.input_next(info);
                if info.vex_b1 == 0 && info.has_error() {
                    return false;
                }
                info.vex_b2 = self.input_next(info);
                if info.vex_b2 == 0 && info.has_error() {
                    return false;
                }
                info.vex_r = info.vex_b1.get_bit(7) as u8;
                info.vex_x = info.vex_b1.get_bit(6) as u8;
                info.vex_b = info.vex_b1.get_bit(5) as u8;
                info.vex_m_mmmm = info.vex_b1.get_bits(0..5);
                info.vex_w = info.vex_b2.get_bit(7) as u8;
                info.vex_vvvv = info.vex_b2.get_bits(3..7);
                info.vex_l = info.vex_b2.get_bit(2) as u8;
                info.vex_pp = info.vex_b2.get_bits(0..2);
            }
            0xC5 => {
                info.vex_b1 = self.input_next(info);
                if info.vex_b1 == 0 && info.has_error() {
                    return false;
                }
                info.vex_r = info.vex_b1.get_bit(7) as u8;
                info.vex_x = 1;
                info.vex_b = 1;
                info.vex_m_mmmm = 1;
                info.vex_w = 0;
                info.vex_vvvv = info.vex_b1.get_bits(3..7);
                info.vex_l = info.vex_b1.get_bit(2) as u8;
                info.vex_pp = info.vex_b1.get_bits(0..2);
            }
            _ => {
                info.flags |= InstructionFlags::ERROR_INVALID;
                return false;
            }
        }
        if info.vex_m_mmmm > 3 {
            // XOP opcode maps and malformed VEX payloads land here.
            info.flags |= InstructionFlags::ERROR_INVALID;
            return false;
        }
        info.flags |= InstructionFlags::PREFIX_VEX;
        true
    }
}
