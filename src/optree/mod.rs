//! The statically compiled opcode-dispatch tree.
//!
//! The tree is a forest of small read-only tables. A node is a packed
//! 16-bit value: the top four bits select the node type (and with it the
//! table kind to index), the low twelve bits select the table. Leaves
//! carry an index into [`INSTRUCTION_DEFINITIONS`] instead; index 0 is the
//! reserved invalid definition.
//!
//! Dispatch is data, not code: the walker never branches on instruction
//! identity, it only follows child links until it hits a leaf.

mod tables;

use crate::mnemonic::Mnemonic;

use bitflags::bitflags;
use numeric_enum_macro::numeric_enum;

numeric_enum! {
    #[repr(u8)]
    /// The table kind a tree node refers to, encoded in the node's top
    /// four bits. Each variant selects a table family and a fan-out:
    /// opcode tables dispatch 256 ways on a consumed byte, ModR/M nodes
    /// on the mod/reg/rm fields, `Mandatory` on the none/F3/F2/66 prefix,
    /// `X87` on the low six ModR/M bits, the size nodes on the effective
    /// 16/32/64-bit width, `Vendor` on AMD/Intel, and the VEX nodes on
    /// `m_mmmm | (pp << 2)`, `W` and `L`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NodeType {
        InstructionDefinition = 0,
        Table = 1,
        ModrmMod = 2,
        ModrmReg = 3,
        ModrmRm = 4,
        Mandatory = 5,
        X87 = 6,
        AddressSize = 7,
        OperandSize = 8,
        Mode = 9,
        Vendor = 10,
        Amd3dnow = 11,
        Vex = 12,
        VexW = 13,
        VexL = 14,
    }
}

/// A packed opcode-tree node: type tag in bits 15..12, table id or
/// definition index in bits 11..0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeTreeNode(pub(crate) u16);

/// The empty leaf: instruction definition 0, the reserved invalid entry.
pub(crate) const INVALID_NODE: OpcodeTreeNode = OpcodeTreeNode(0);

impl OpcodeTreeNode {
    /// The node's type tag.
    pub fn node_type(self) -> NodeType {
        // The tag nibble is trusted static data, but an out-of-range value
        // must degrade to "invalid instruction", not panic.
        NodeType::try_from((self.0 >> 12) as u8 & 0x0F)
            .unwrap_or(NodeType::InstructionDefinition)
    }

    /// The node's table id or definition index.
    pub fn value(self) -> u16 {
        self.0 & 0x0FFF
    }
}

/// The root of the opcode tree: the one-byte opcode map.
pub fn opcode_tree_root() -> OpcodeTreeNode {
    tables::ROOT
}

/// Returns the child of `parent` selected by `index`.
///
/// Out-of-range indices and table ids resolve to the invalid leaf.
pub fn opcode_tree_child(parent: OpcodeTreeNode, index: u16) -> OpcodeTreeNode {
    let table = parent.value() as usize;
    let index = index as usize;

    fn get<const N: usize>(
        tables: &'static [[OpcodeTreeNode; N]],
        table: usize,
        index: usize,
    ) -> OpcodeTreeNode {
        match tables.get(table).and_then(|t| t.get(index)) {
            Some(&node) => node,
            None => INVALID_NODE,
        }
    }

    match parent.node_type() {
        NodeType::InstructionDefinition => INVALID_NODE,
        NodeType::Table => get(tables::TABLE, table, index),
        NodeType::ModrmMod => get(tables::MODRM_MOD, table, index),
        NodeType::ModrmReg => get(tables::MODRM_REG, table, index),
        NodeType::ModrmRm => get(tables::MODRM_RM, table, index),
        NodeType::Mandatory => get(tables::MANDATORY, table, index),
        NodeType::X87 => get(tables::X87, table, index),
        NodeType::AddressSize => get(tables::ADDRESS_SIZE, table, index),
        NodeType::OperandSize => get(tables::OPERAND_SIZE, table, index),
        NodeType::Mode => get(tables::MODE, table, index),
        NodeType::Vendor => get(tables::VENDOR, table, index),
        NodeType::Amd3dnow => get(tables::AMD3DNOW, table, index),
        NodeType::Vex => get(tables::VEX, table, index),
        NodeType::VexW => get(tables::VEXW, table, index),
        NodeType::VexL => get(tables::VEXL, table, index),
    }
}

/// Returns the instruction definition a leaf refers to.
///
/// Non-leaf nodes and out-of-range indices yield the invalid definition.
pub fn instruction_definition(node: OpcodeTreeNode) -> &'static InstructionDefinition {
    let index = match node.node_type() {
        NodeType::InstructionDefinition => node.value() as usize,
        _ => 0,
    };
    INSTRUCTION_DEFINITIONS
        .get(index)
        .unwrap_or(&INSTRUCTION_DEFINITIONS[0])
}

/// All instruction definitions referenced by the tree. Index 0 is the
/// reserved invalid definition.
pub static INSTRUCTION_DEFINITIONS: &[InstructionDefinition] = tables::DEFINITIONS;

bitflags! {
    /// Per-definition capability and access-mode flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct DefinitionFlags: u16 {
        /// The instruction honors the REX/VEX B extension bit.
        const ACCEPTS_REXB = 0x0001;
        /// The instruction honors the REX/VEX X extension bit.
        const ACCEPTS_REXX = 0x0002;
        /// The instruction honors the REX/VEX R extension bit.
        const ACCEPTS_REXR = 0x0004;
        /// The instruction honors the REX/VEX W bit.
        const ACCEPTS_REXW = 0x0008;
        /// The instruction honors VEX.L.
        const ACCEPTS_VEXL = 0x0100;
        /// The instruction is invalid in 64-bit mode.
        const INVALID_64 = 0x0200;
        /// The operand size defaults to 64 bits in 64-bit mode.
        const DEFAULT_64 = 0x0400;
        /// Operand 1 is written.
        const OPERAND1_WRITE = 0x0800;
        /// Operand 1 is read and written.
        const OPERAND1_READWRITE = 0x1000;
        /// Operand 2 is written.
        const OPERAND2_WRITE = 0x2000;
        /// Operand 2 is read and written.
        const OPERAND2_READWRITE = 0x4000;
    }
}

impl DefinitionFlags {
    /// The low nibble, laid out like a REX byte (W/R/X/B in bits 3..0),
    /// used to mask raw extension bits down to the accepted ones.
    pub(crate) fn rexvex_mask(self) -> u8 {
        (self.bits() & 0x000F) as u8
    }
}

/// The addressing class of a defined operand, the closed alphabet of the
/// instruction table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum DefinedOperandType {
    /// Unused operand slot.
    #[default]
    None,
    /// Far pointer encoded directly in the instruction.
    A,
    /// Control register selected by ModR/M.reg.
    C,
    /// Debug register selected by ModR/M.reg.
    D,
    /// General-purpose register or memory, via ModR/M.
    E,
    /// General-purpose register selected by ModR/M.reg.
    G,
    /// XMM register selected by the inverted VEX.vvvv field.
    H,
    /// Immediate.
    I,
    /// Signed immediate.
    SI,
    /// The constant 1.
    I1,
    /// Relative immediate (branch target).
    J,
    /// XMM register selected by the high nibble of an immediate byte.
    L,
    /// Memory only, via ModR/M (`mod != 0b11`).
    M,
    /// Register-or-memory with a composite register|memory size.
    MR,
    /// XMM-register-or-memory with a composite register|memory size.
    MU,
    /// MMX register selected by ModR/M.rm (`mod == 0b11` required).
    N,
    /// Absolute offset (moffs) of address-size width.
    O,
    /// MMX register selected by ModR/M.reg.
    P,
    /// MMX register or memory, via ModR/M.
    Q,
    /// General-purpose register only (`mod == 0b11` required).
    R,
    /// Segment register selected by ModR/M.reg.
    S,
    /// XMM register selected by ModR/M.rm (`mod == 0b11` required).
    U,
    /// XMM register selected by ModR/M.reg.
    V,
    /// XMM register or memory, via ModR/M.
    W,
    // Register slots encoded in the opcode byte, extended by REX/VEX B.
    R0, R1, R2, R3, R4, R5, R6, R7,
    // Fixed general-purpose registers.
    Al, Cl, Dl,
    Ax, Cx, Dx,
    Eax, Ecx, Edx,
    Rax, Rcx, Rdx,
    // Fixed segment registers.
    Es, Cs, Ss, Ds, Fs, Gs,
    // Fixed x87 registers.
    St0, St1, St2, St3, St4, St5, St6, St7,
}

/// A defined operand size code. Values 0..=13 are the scalar codes;
/// higher values pack a register-form code in the high nibble and a
/// memory-form code in the low nibble (see
/// [`DefinedOperandSize::composite`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinedOperandSize(pub u8);

impl DefinedOperandSize {
    /// No operand / no intrinsic size.
    pub const NA: Self = Self(0);
    /// 16 bits in 16-bit operand mode, else 32.
    pub const Z: Self = Self(1);
    /// The effective operand mode.
    pub const V: Self = Self(2);
    /// 32 bits in 16-bit operand mode, else the effective operand mode.
    pub const Y: Self = Self(3);
    /// 256 bits under an effective VEX.L, else 128.
    pub const X: Self = Self(4);
    /// 64 bits in 64-bit disassembler mode, else 32.
    pub const RDQ: Self = Self(5);
    /// 8 bits.
    pub const B: Self = Self(6);
    /// 16 bits.
    pub const W: Self = Self(7);
    /// 32 bits.
    pub const D: Self = Self(8);
    /// 64 bits.
    pub const Q: Self = Self(9);
    /// 80 bits.
    pub const T: Self = Self(10);
    /// 12-byte far state.
    pub const O: Self = Self(11);
    /// 128 bits.
    pub const DQ: Self = Self(12);
    /// 256 bits.
    pub const QQ: Self = Self(13);

    /// Packs a register-form and a memory-form size for the `MR`/`MU`
    /// operand types; ModR/M.mod picks the part that applies.
    pub const fn composite(reg: Self, mem: Self) -> Self {
        Self((reg.0 << 4) | mem.0)
    }

    /// Memory-form part of a composite code.
    pub(crate) const fn mem_part(self) -> Self {
        Self(self.0 & 0x0F)
    }

    /// Register-form part of a composite code.
    pub(crate) const fn reg_part(self) -> Self {
        Self((self.0 >> 4) & 0x0F)
    }

    /// The fixed bit width of a scalar code, 0 for the mode-dependent ones.
    pub(crate) const fn simple_bits(self) -> u16 {
        match self.0 {
            6 => 8,
            7 => 16,
            8 => 32,
            9 => 64,
            10 => 80,
            11 => 12,
            12 => 128,
            13 => 256,
            _ => 0,
        }
    }
}

/// One operand slot of an instruction definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperandDefinition {
    /// The addressing class.
    pub ty: DefinedOperandType,
    /// The defined size code.
    pub size: DefinedOperandSize,
}

impl OperandDefinition {
    pub(crate) const NONE: Self = Self {
        ty: DefinedOperandType::None,
        size: DefinedOperandSize::NA,
    };
}

/// An instruction definition: the terminal payload of the opcode tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDefinition {
    /// The instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// The four operand slots, unused ones set to `None`.
    pub operand: [OperandDefinition; 4],
    /// Capability and access-mode flags.
    pub flags: DefinitionFlags,
}

#[cfg(test)]
mod node_tests {
    use super::*;
    use crate::mnemonic::Mnemonic;

    fn assert_node_valid(node: OpcodeTreeNode) {
        let value = node.value() as usize;
        let in_range = match node.node_type() {
            NodeType::InstructionDefinition => value < INSTRUCTION_DEFINITIONS.len(),
            NodeType::Table => value < tables::TABLE.len(),
            NodeType::ModrmMod => value < tables::MODRM_MOD.len(),
            NodeType::ModrmReg => value < tables::MODRM_REG.len(),
            NodeType::ModrmRm => value < tables::MODRM_RM.len(),
            NodeType::Mandatory => value < tables::MANDATORY.len(),
            NodeType::X87 => value < tables::X87.len(),
            NodeType::AddressSize => value < tables::ADDRESS_SIZE.len(),
            NodeType::OperandSize => value < tables::OPERAND_SIZE.len(),
            NodeType::Mode => value < tables::MODE.len(),
            NodeType::Vendor => value < tables::VENDOR.len(),
            NodeType::Amd3dnow => value < tables::AMD3DNOW.len(),
            NodeType::Vex => value < tables::VEX.len(),
            NodeType::VexW => value < tables::VEXW.len(),
            NodeType::VexL => value < tables::VEXL.len(),
        };
        assert!(in_range, "dangling node {:#06x}", node.0);
    }

    #[test]
    fn definition_zero_is_invalid() {
        assert_eq!(INSTRUCTION_DEFINITIONS[0].mnemonic, Mnemonic::Invalid);
        assert_eq!(
            instruction_definition(OpcodeTreeNode(0)).mnemonic,
            Mnemonic::Invalid
        );
    }

    #[test]
    fn definition_ids_match_table_order() {
        // The Def enum and the definition array are generated from one
        // macro list; the last variant pins them together.
        assert_eq!(
            tables::Def::FcomipSt7 as usize,
            INSTRUCTION_DEFINITIONS.len() - 1
        );
        assert!(INSTRUCTION_DEFINITIONS.len() <= 0x0FFF);
    }

    #[test]
    fn every_table_entry_resolves() {
        for table in tables::TABLE.iter().chain(tables::AMD3DNOW) {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::MODRM_REG.iter().chain(tables::MODRM_RM) {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::MODRM_MOD.iter().chain(tables::VEXW).chain(tables::VEXL) {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::MANDATORY {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::X87 {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::ADDRESS_SIZE.iter().chain(tables::OPERAND_SIZE) {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::MODE.iter().chain(tables::VENDOR) {
            table.iter().copied().for_each(assert_node_valid);
        }
        for table in tables::VEX {
            table.iter().copied().for_each(assert_node_valid);
        }
    }

    #[test]
    fn root_dispatches_one_byte_opcodes() {
        let root = opcode_tree_root();
        assert_eq!(root.node_type(), NodeType::Table);

        let nop = opcode_tree_child(root, 0x90);
        assert_eq!(nop.node_type(), NodeType::InstructionDefinition);
        assert_eq!(instruction_definition(nop).mnemonic, Mnemonic::Xchg);

        let escape = opcode_tree_child(root, 0x0F);
        assert_eq!(escape.node_type(), NodeType::Table);

        let ret = opcode_tree_child(root, 0xC3);
        assert_eq!(instruction_definition(ret).mnemonic, Mnemonic::Ret);
    }

    #[test]
    fn out_of_range_lookups_degrade_to_invalid() {
        let bogus = OpcodeTreeNode((0x1 << 12) | 0x0FFF);
        assert_eq!(opcode_tree_child(bogus, 0), OpcodeTreeNode(0));
        assert_eq!(
            instruction_definition(OpcodeTreeNode(0x0FFF)).mnemonic,
            Mnemonic::Invalid
        );
    }
}
