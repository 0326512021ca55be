//! Opcode-dispatch table data.
//!
//! Hand-maintained after the Intel/AMD opcode maps. Rows follow the map
//! layout; `INV` marks holes that decode to the invalid definition.
//!
//! Mandatory-prefix tables are indexed none/F3/F2/66 in that order. Vendor
//! tables are indexed AMD/Intel. Every table kind lives in its own array,
//! addressed by the id enums below; the enums and the arrays must stay in
//! the same order.

use super::{
    DefinedOperandSize, DefinedOperandType, DefinitionFlags, InstructionDefinition, NodeType,
    OpcodeTreeNode, OperandDefinition,
};
use crate::mnemonic::Mnemonic;

const INV: OpcodeTreeNode = OpcodeTreeNode(0);

const fn node(ty: NodeType, value: u16) -> OpcodeTreeNode {
    OpcodeTreeNode(((ty as u16) << 12) | (value & 0x0FFF))
}

/// 256-entry opcode tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum Tbl {
    Main,
    TwoByte,
    T38,
    T3a,
    Vex0f,
    Vex0f66,
    Vex0fF3,
    Vex0fF2,
    Vex38,
    Vex3a,
}

/// ModR/M.reg switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum RegTbl {
    Grp1x80,
    Grp1x81,
    Grp1x83,
    Grp1a,
    Grp2xC0,
    Grp2xC1,
    Grp2xD0,
    Grp2xD1,
    Grp2xD2,
    Grp2xD3,
    Grp3xF6,
    Grp3xF7,
    Grp4,
    Grp5,
    Grp6,
    Grp7Mem,
    Grp7Reg,
    Grp8,
    Grp9Mem,
    Grp11xC6,
    Grp11xC7,
    Grp12Mmx,
    Grp12Xmm,
    Grp13Mmx,
    Grp13Xmm,
    Grp14Mmx,
    Grp14Xmm,
    Grp15Mem,
    Grp15Reg,
    Grp16Mem,
    GrpPrefetch,
    FpuD8Mem,
    FpuD9Mem,
    FpuDaMem,
    FpuDbMem,
    FpuDcMem,
    FpuDdMem,
    FpuDeMem,
    FpuDfMem,
}

/// ModR/M.mod switch tables (`!11` / `11`).
#[repr(u16)]
#[derive(Clone, Copy)]
enum ModTbl {
    Grp7,
    Grp9,
    Grp15,
    Grp16,
    Movlps,
    Movhps,
    FpuD8,
    FpuD9,
    FpuDa,
    FpuDb,
    FpuDc,
    FpuDd,
    FpuDe,
    FpuDf,
}

/// ModR/M.rm switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum RmTbl {
    Grp7Reg0,
    Grp7Reg1,
    Grp7Reg2,
    Grp7Reg7,
}

/// Mandatory-prefix switch tables, named after their opcode.
#[repr(u16)]
#[derive(Clone, Copy)]
enum MandTbl {
    M0f10, M0f11, M0f12, M0f13, M0f14, M0f15, M0f16, M0f17,
    M0f28, M0f29, M0f2a, M0f2b, M0f2c, M0f2d, M0f2e, M0f2f,
    M0f50, M0f51, M0f52, M0f53, M0f54, M0f55, M0f56, M0f57,
    M0f58, M0f59, M0f5a, M0f5b, M0f5c, M0f5d, M0f5e, M0f5f,
    M0f60, M0f61, M0f62, M0f63, M0f64, M0f65, M0f66, M0f67,
    M0f68, M0f69, M0f6a, M0f6b, M0f6c, M0f6d, M0f6e, M0f6f,
    M0f70, M0f71, M0f72, M0f73, M0f74, M0f75, M0f76,
    M0f7c, M0f7d, M0f7e, M0f7f,
    M0fb8, M0fbc, M0fbd,
    M0fc2, M0fc4, M0fc5, M0fc6,
    M0fd0, M0fd1, M0fd2, M0fd3, M0fd4, M0fd5, M0fd6, M0fd7,
    M0fd8, M0fd9, M0fda, M0fdb, M0fdc, M0fdd, M0fde, M0fdf,
    M0fe0, M0fe1, M0fe2, M0fe3, M0fe4, M0fe5, M0fe6, M0fe7,
    M0fe8, M0fe9, M0fea, M0feb, M0fec, M0fed, M0fee, M0fef,
    M0ff0, M0ff1, M0ff2, M0ff3, M0ff4, M0ff5, M0ff6, M0ff7,
    M0ff8, M0ff9, M0ffa, M0ffb, M0ffc, M0ffd, M0ffe,
    M38x00, M38x01, M38x02, M38x03, M38x04, M38x05, M38x06, M38x07,
    M38x08, M38x09, M38x0a, M38x0b, M38x17, M38x1c, M38x1d, M38x1e,
    M38xf0, M38xf1,
    M3a08, M3a09, M3a0a, M3a0b, M3a0c, M3a0d, M3a0e, M3a0f,
}

/// x87 register-form tables (64 entries each).
#[repr(u16)]
#[derive(Clone, Copy)]
enum X87Tbl {
    D8,
    D9,
    Da,
    Db,
    Dc,
    Dd,
    De,
    Df,
}

/// Address-size switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum AsTbl {
    Jcxz,
}

/// Operand-size switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum OsTbl {
    Cbw,
    Cwd,
    Pusha,
    Popa,
    Ins,
    Outs,
    Movs,
    Cmps,
    Stos,
    Lods,
    Scas,
    Iret,
    Cmpxchg8b,
}

/// CPU-mode switch tables (`!64` / `64`).
#[repr(u16)]
#[derive(Clone, Copy)]
enum ModeTbl {
    X63,
    X82,
    Syscall,
    Sysret,
}

/// Vendor switch tables (AMD / Intel).
#[repr(u16)]
#[derive(Clone, Copy)]
enum VenTbl {
    Syscall,
    Sysret,
    Prefetch,
    Femms,
    Amd3dnow,
}

/// 3DNow! trailing-opcode tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum DnowTbl {
    Main,
}

/// VEX map/prefix switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum VexTbl {
    C4,
    C5,
}

/// VEX.W switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum VexWTbl {
    M6e,
    M7e,
}

/// VEX.L switch tables.
#[repr(u16)]
#[derive(Clone, Copy)]
enum VexLTbl {
    Vzero,
}

const fn l(def: Def) -> OpcodeTreeNode {
    node(NodeType::InstructionDefinition, def as u16)
}
const fn t(id: Tbl) -> OpcodeTreeNode {
    node(NodeType::Table, id as u16)
}
const fn m2(id: ModTbl) -> OpcodeTreeNode {
    node(NodeType::ModrmMod, id as u16)
}
const fn r8(id: RegTbl) -> OpcodeTreeNode {
    node(NodeType::ModrmReg, id as u16)
}
const fn rm(id: RmTbl) -> OpcodeTreeNode {
    node(NodeType::ModrmRm, id as u16)
}
const fn mp(id: MandTbl) -> OpcodeTreeNode {
    node(NodeType::Mandatory, id as u16)
}
const fn x87(id: X87Tbl) -> OpcodeTreeNode {
    node(NodeType::X87, id as u16)
}
const fn asz(id: AsTbl) -> OpcodeTreeNode {
    node(NodeType::AddressSize, id as u16)
}
const fn osz(id: OsTbl) -> OpcodeTreeNode {
    node(NodeType::OperandSize, id as u16)
}
const fn mode(id: ModeTbl) -> OpcodeTreeNode {
    node(NodeType::Mode, id as u16)
}
const fn ven(id: VenTbl) -> OpcodeTreeNode {
    node(NodeType::Vendor, id as u16)
}
const fn dnow(id: DnowTbl) -> OpcodeTreeNode {
    node(NodeType::Amd3dnow, id as u16)
}
const fn vex(id: VexTbl) -> OpcodeTreeNode {
    node(NodeType::Vex, id as u16)
}
const fn vw(id: VexWTbl) -> OpcodeTreeNode {
    node(NodeType::VexW, id as u16)
}
const fn vl(id: VexLTbl) -> OpcodeTreeNode {
    node(NodeType::VexL, id as u16)
}

/// Operand-size codes in the opcode-map notation (lower case, as in `E v`).
#[allow(non_upper_case_globals, dead_code)]
mod sz {
    use super::DefinedOperandSize as S;

    pub const na: S = S::NA;
    pub const z: S = S::Z;
    pub const v: S = S::V;
    pub const y: S = S::Y;
    pub const x: S = S::X;
    pub const rdq: S = S::RDQ;
    pub const b: S = S::B;
    pub const w: S = S::W;
    pub const d: S = S::D;
    pub const q: S = S::Q;
    pub const t: S = S::T;
    pub const o: S = S::O;
    pub const dq: S = S::DQ;
    pub const qq: S = S::QQ;
    /// v-sized register form, w-sized memory form.
    pub const vw: S = S::composite(S::V, S::W);
    /// d-sized register form, w-sized memory form.
    pub const dw: S = S::composite(S::D, S::W);
}

// Definition-flag shorthands (see `DefinitionFlags`).
const RB: u16 = 0x0001;
const RX: u16 = 0x0002;
const RR: u16 = 0x0004;
const RW: u16 = 0x0008;
const VL: u16 = 0x0100;
const I64: u16 = 0x0200;
const D64: u16 = 0x0400;
const W1: u16 = 0x0800;
const RW1: u16 = 0x1000;
const W2: u16 = 0x2000;
const RW2: u16 = 0x4000;
/// Any ModR/M r/m (+ SIB) form.
const RM: u16 = RB | RX;
/// Two-register ModR/M form.
const MODRM: u16 = RM | RR;
/// Mode-wide two-register ModR/M form.
const MODRMW: u16 = MODRM | RW;

const fn od(ty: DefinedOperandType, size: DefinedOperandSize) -> OperandDefinition {
    OperandDefinition { ty, size }
}

const fn def(
    mnemonic: Mnemonic,
    ops: &[OperandDefinition],
    flags: u16,
) -> InstructionDefinition {
    let mut operand = [OperandDefinition::NONE; 4];
    let mut i = 0;
    while i < ops.len() {
        operand[i] = ops[i];
        i += 1;
    }
    InstructionDefinition {
        mnemonic,
        operand,
        flags: DefinitionFlags::from_bits_retain(flags),
    }
}

macro_rules! definitions {
    ($($name:ident: $mnem:ident [$($ty:ident $size:ident),*] $flags:expr;)+) => {
        /// Definition-table indices, in table order.
        #[repr(u16)]
        #[derive(Debug, Clone, Copy)]
        #[allow(dead_code)]
        pub(crate) enum Def {
            $($name),+
        }

        pub(super) static DEFINITIONS: &[InstructionDefinition] = &[
            $(def(
                Mnemonic::$mnem,
                &[$(od(DefinedOperandType::$ty, sz::$size)),*],
                $flags,
            )),+
        ];
    };
}

definitions! {
    Invalid: Invalid [] 0;

    // one-byte ALU
    AddEbGb: Add [E b, G b] MODRM | RW1;
    AddEvGv: Add [E v, G v] MODRMW | RW1;
    AddGbEb: Add [G b, E b] MODRM | RW1;
    AddGvEv: Add [G v, E v] MODRMW | RW1;
    AddAlIb: Add [Al b, I b] RW1;
    AddEaxIz: Add [Eax v, I z] RW | RW1;
    OrEbGb: Or [E b, G b] MODRM | RW1;
    OrEvGv: Or [E v, G v] MODRMW | RW1;
    OrGbEb: Or [G b, E b] MODRM | RW1;
    OrGvEv: Or [G v, E v] MODRMW | RW1;
    OrAlIb: Or [Al b, I b] RW1;
    OrEaxIz: Or [Eax v, I z] RW | RW1;
    AdcEbGb: Adc [E b, G b] MODRM | RW1;
    AdcEvGv: Adc [E v, G v] MODRMW | RW1;
    AdcGbEb: Adc [G b, E b] MODRM | RW1;
    AdcGvEv: Adc [G v, E v] MODRMW | RW1;
    AdcAlIb: Adc [Al b, I b] RW1;
    AdcEaxIz: Adc [Eax v, I z] RW | RW1;
    SbbEbGb: Sbb [E b, G b] MODRM | RW1;
    SbbEvGv: Sbb [E v, G v] MODRMW | RW1;
    SbbGbEb: Sbb [G b, E b] MODRM | RW1;
    SbbGvEv: Sbb [G v, E v] MODRMW | RW1;
    SbbAlIb: Sbb [Al b, I b] RW1;
    SbbEaxIz: Sbb [Eax v, I z] RW | RW1;
    AndEbGb: And [E b, G b] MODRM | RW1;
    AndEvGv: And [E v, G v] MODRMW | RW1;
    AndGbEb: And [G b, E b] MODRM | RW1;
    AndGvEv: And [G v, E v] MODRMW | RW1;
    AndAlIb: And [Al b, I b] RW1;
    AndEaxIz: And [Eax v, I z] RW | RW1;
    SubEbGb: Sub [E b, G b] MODRM | RW1;
    SubEvGv: Sub [E v, G v] MODRMW | RW1;
    SubGbEb: Sub [G b, E b] MODRM | RW1;
    SubGvEv: Sub [G v, E v] MODRMW | RW1;
    SubAlIb: Sub [Al b, I b] RW1;
    SubEaxIz: Sub [Eax v, I z] RW | RW1;
    XorEbGb: Xor [E b, G b] MODRM | RW1;
    XorEvGv: Xor [E v, G v] MODRMW | RW1;
    XorGbEb: Xor [G b, E b] MODRM | RW1;
    XorGvEv: Xor [G v, E v] MODRMW | RW1;
    XorAlIb: Xor [Al b, I b] RW1;
    XorEaxIz: Xor [Eax v, I z] RW | RW1;
    CmpEbGb: Cmp [E b, G b] MODRM;
    CmpEvGv: Cmp [E v, G v] MODRMW;
    CmpGbEb: Cmp [G b, E b] MODRM;
    CmpGvEv: Cmp [G v, E v] MODRMW;
    CmpAlIb: Cmp [Al b, I b] 0;
    CmpEaxIz: Cmp [Eax v, I z] RW;
    TestEbGb: Test [E b, G b] MODRM;
    TestEvGv: Test [E v, G v] MODRMW;
    TestAlIb: Test [Al b, I b] 0;
    TestEaxIz: Test [Eax v, I z] RW;

    // one-byte stack and segment forms
    PushEs: Push [Es w] I64;
    PopEs: Pop [Es w] I64 | W1;
    PushCs: Push [Cs w] I64;
    PushSs: Push [Ss w] I64;
    PopSs: Pop [Ss w] I64 | W1;
    PushDs: Push [Ds w] I64;
    PopDs: Pop [Ds w] I64 | W1;
    PushFs: Push [Fs w] 0;
    PopFs: Pop [Fs w] W1;
    PushGs: Push [Gs w] 0;
    PopGs: Pop [Gs w] W1;
    PushR0: Push [R0 v] RB | D64;
    PushR1: Push [R1 v] RB | D64;
    PushR2: Push [R2 v] RB | D64;
    PushR3: Push [R3 v] RB | D64;
    PushR4: Push [R4 v] RB | D64;
    PushR5: Push [R5 v] RB | D64;
    PushR6: Push [R6 v] RB | D64;
    PushR7: Push [R7 v] RB | D64;
    PopR0: Pop [R0 v] RB | D64 | W1;
    PopR1: Pop [R1 v] RB | D64 | W1;
    PopR2: Pop [R2 v] RB | D64 | W1;
    PopR3: Pop [R3 v] RB | D64 | W1;
    PopR4: Pop [R4 v] RB | D64 | W1;
    PopR5: Pop [R5 v] RB | D64 | W1;
    PopR6: Pop [R6 v] RB | D64 | W1;
    PopR7: Pop [R7 v] RB | D64 | W1;
    PushIz: Push [I z] D64;
    PushIb: Push [SI b] D64;
    Pusha: Pusha [] I64;
    Pushad: Pushad [] I64;
    Popa: Popa [] I64;
    Popad: Popad [] I64;
    Pushf: Pushf [] D64;
    Popf: Popf [] D64 | W1;

    // one-byte misc
    IncR0: Inc [R0 v] RW1;
    IncR1: Inc [R1 v] RW1;
    IncR2: Inc [R2 v] RW1;
    IncR3: Inc [R3 v] RW1;
    IncR4: Inc [R4 v] RW1;
    IncR5: Inc [R5 v] RW1;
    IncR6: Inc [R6 v] RW1;
    IncR7: Inc [R7 v] RW1;
    DecR0: Dec [R0 v] RW1;
    DecR1: Dec [R1 v] RW1;
    DecR2: Dec [R2 v] RW1;
    DecR3: Dec [R3 v] RW1;
    DecR4: Dec [R4 v] RW1;
    DecR5: Dec [R5 v] RW1;
    DecR6: Dec [R6 v] RW1;
    DecR7: Dec [R7 v] RW1;
    Daa: Daa [] I64;
    Das: Das [] I64;
    Aaa: Aaa [] I64;
    Aas: Aas [] I64;
    AamIb: Aam [I b] I64;
    AadIb: Aad [I b] I64;
    Salc: Salc [] I64;
    Xlatb: Xlatb [] 0;
    BoundGvMa: Bound [G v, M v] MODRM | I64;
    ArplEwGw: Arpl [E w, G w] MODRM | RW1;
    MovsxdGvEd: Movsxd [G v, E d] MODRMW | W1;
    ImulGvEvIz: Imul [G v, E v, I z] MODRMW | W1;
    ImulGvEvIb: Imul [G v, E v, SI b] MODRMW | W1;
    Insb: Insb [] 0;
    Insw: Insw [] 0;
    Insd: Insd [] 0;
    Outsb: Outsb [] 0;
    Outsw: Outsw [] 0;
    Outsd: Outsd [] 0;
    JoJb: Jo [J b] 0;
    JnoJb: Jno [J b] 0;
    JbJb: Jb [J b] 0;
    JnbJb: Jnb [J b] 0;
    JzJb: Jz [J b] 0;
    JnzJb: Jnz [J b] 0;
    JbeJb: Jbe [J b] 0;
    JnbeJb: Jnbe [J b] 0;
    JsJb: Js [J b] 0;
    JnsJb: Jns [J b] 0;
    JpJb: Jp [J b] 0;
    JnpJb: Jnp [J b] 0;
    JlJb: Jl [J b] 0;
    JnlJb: Jnl [J b] 0;
    JleJb: Jle [J b] 0;
    JnleJb: Jnle [J b] 0;
    XchgEbGb: Xchg [E b, G b] MODRM | RW1 | RW2;
    XchgEvGv: Xchg [E v, G v] MODRMW | RW1 | RW2;
    MovEbGb: Mov [E b, G b] MODRM | W1;
    MovEvGv: Mov [E v, G v] MODRMW | W1;
    MovGbEb: Mov [G b, E b] MODRM | W1;
    MovGvEv: Mov [G v, E v] MODRMW | W1;
    MovEvSw: Mov [MR vw, S w] RM | RW | W1;
    LeaGvM: Lea [G v, M v] MODRMW | W1;
    MovSwEw: Mov [S w, E w] RM | W1;
    XchgR0Ax: Xchg [R0 v, Eax v] RB | RW | RW1 | RW2;
    XchgR1Ax: Xchg [R1 v, Eax v] RB | RW | RW1 | RW2;
    XchgR2Ax: Xchg [R2 v, Eax v] RB | RW | RW1 | RW2;
    XchgR3Ax: Xchg [R3 v, Eax v] RB | RW | RW1 | RW2;
    XchgR4Ax: Xchg [R4 v, Eax v] RB | RW | RW1 | RW2;
    XchgR5Ax: Xchg [R5 v, Eax v] RB | RW | RW1 | RW2;
    XchgR6Ax: Xchg [R6 v, Eax v] RB | RW | RW1 | RW2;
    XchgR7Ax: Xchg [R7 v, Eax v] RB | RW | RW1 | RW2;
    Cbw: Cbw [] 0;
    Cwde: Cwde [] 0;
    Cdqe: Cdqe [] 0;
    Cwd: Cwd [] 0;
    Cdq: Cdq [] 0;
    Cqo: Cqo [] 0;
    CallAp: Call [A v] I64;
    Fwait: Fwait [] 0;
    Sahf: Sahf [] 0;
    Lahf: Lahf [] 0;
    MovAlOb: Mov [Al b, O b] W1;
    MovEaxOv: Mov [Eax v, O v] RW | W1;
    MovObAl: Mov [O b, Al b] W1;
    MovOvEax: Mov [O v, Eax v] RW | W1;
    Movsb: Movsb [] 0;
    Movsw: Movsw [] 0;
    MovsdStr: Movsd [] 0;
    Movsq: Movsq [] 0;
    Cmpsb: Cmpsb [] 0;
    Cmpsw: Cmpsw [] 0;
    CmpsdStr: Cmpsd [] 0;
    Cmpsq: Cmpsq [] 0;
    Stosb: Stosb [] 0;
    Stosw: Stosw [] 0;
    Stosd: Stosd [] 0;
    Stosq: Stosq [] 0;
    Lodsb: Lodsb [] 0;
    Lodsw: Lodsw [] 0;
    Lodsd: Lodsd [] 0;
    Lodsq: Lodsq [] 0;
    Scasb: Scasb [] 0;
    Scasw: Scasw [] 0;
    Scasd: Scasd [] 0;
    Scasq: Scasq [] 0;
    MovR0Ib: Mov [R0 b, I b] RB | W1;
    MovR1Ib: Mov [R1 b, I b] RB | W1;
    MovR2Ib: Mov [R2 b, I b] RB | W1;
    MovR3Ib: Mov [R3 b, I b] RB | W1;
    MovR4Ib: Mov [R4 b, I b] RB | W1;
    MovR5Ib: Mov [R5 b, I b] RB | W1;
    MovR6Ib: Mov [R6 b, I b] RB | W1;
    MovR7Ib: Mov [R7 b, I b] RB | W1;
    MovR0Iv: Mov [R0 v, I v] RB | RW | W1;
    MovR1Iv: Mov [R1 v, I v] RB | RW | W1;
    MovR2Iv: Mov [R2 v, I v] RB | RW | W1;
    MovR3Iv: Mov [R3 v, I v] RB | RW | W1;
    MovR4Iv: Mov [R4 v, I v] RB | RW | W1;
    MovR5Iv: Mov [R5 v, I v] RB | RW | W1;
    MovR6Iv: Mov [R6 v, I v] RB | RW | W1;
    MovR7Iv: Mov [R7 v, I v] RB | RW | W1;
    RetIw: Ret [I w] 0;
    Ret: Ret [] 0;
    LesGvM: Les [G v, M v] MODRM | W1 | I64;
    LdsGvM: Lds [G v, M v] MODRM | W1 | I64;
    EnterIwIb: Enter [I w, I b] 0;
    Leave: Leave [] D64;
    RetfIw: Retf [I w] 0;
    Retf: Retf [] 0;
    Int3: Int3 [] 0;
    IntIb: Int [I b] 0;
    Into: Into [] I64;
    Iret: Iret [] 0;
    Iretd: Iretd [] 0;
    Iretq: Iretq [] 0;
    LoopneJb: Loopne [J b] 0;
    LoopeJb: Loope [J b] 0;
    LoopJb: Loop [J b] 0;
    JcxzJb: Jcxz [J b] 0;
    JecxzJb: Jecxz [J b] 0;
    JrcxzJb: Jrcxz [J b] 0;
    InAlIb: In [Al b, I b] W1;
    InEaxIb: In [Eax z, I b] W1;
    OutIbAl: Out [I b, Al b] 0;
    OutIbEax: Out [I b, Eax z] 0;
    CallJz: Call [J z] 0;
    JmpJz: Jmp [J z] 0;
    JmpAp: Jmp [A v] I64;
    JmpJb: Jmp [J b] 0;
    InAlDx: In [Al b, Dx w] W1;
    InEaxDx: In [Eax z, Dx w] W1;
    OutDxAl: Out [Dx w, Al b] 0;
    OutDxEax: Out [Dx w, Eax z] 0;
    Int1: Int1 [] 0;
    Hlt: Hlt [] 0;
    Cmc: Cmc [] 0;
    Clc: Clc [] 0;
    Stc: Stc [] 0;
    Cli: Cli [] 0;
    Sti: Sti [] 0;
    Cld: Cld [] 0;
    Std: Std [] 0;

    // immediate groups 1 and 11, shift group 2, unary groups 3..5
    AddEbIb: Add [E b, I b] RM | RW1;
    OrEbIb: Or [E b, I b] RM | RW1;
    AdcEbIb: Adc [E b, I b] RM | RW1;
    SbbEbIb: Sbb [E b, I b] RM | RW1;
    AndEbIb: And [E b, I b] RM | RW1;
    SubEbIb: Sub [E b, I b] RM | RW1;
    XorEbIb: Xor [E b, I b] RM | RW1;
    CmpEbIb: Cmp [E b, I b] RM;
    AddEvIz: Add [E v, I z] RM | RW | RW1;
    OrEvIz: Or [E v, I z] RM | RW | RW1;
    AdcEvIz: Adc [E v, I z] RM | RW | RW1;
    SbbEvIz: Sbb [E v, I z] RM | RW | RW1;
    AndEvIz: And [E v, I z] RM | RW | RW1;
    SubEvIz: Sub [E v, I z] RM | RW | RW1;
    XorEvIz: Xor [E v, I z] RM | RW | RW1;
    CmpEvIz: Cmp [E v, I z] RM | RW;
    AddEvIb: Add [E v, SI b] RM | RW | RW1;
    OrEvIb: Or [E v, SI b] RM | RW | RW1;
    AdcEvIb: Adc [E v, SI b] RM | RW | RW1;
    SbbEvIb: Sbb [E v, SI b] RM | RW | RW1;
    AndEvIb: And [E v, SI b] RM | RW | RW1;
    SubEvIb: Sub [E v, SI b] RM | RW | RW1;
    XorEvIb: Xor [E v, SI b] RM | RW | RW1;
    CmpEvIb: Cmp [E v, SI b] RM | RW;
    MovEbIb: Mov [E b, I b] RM | W1;
    MovEvIz: Mov [E v, I z] RM | RW | W1;
    RolEbIb: Rol [E b, I b] RM | RW1;
    RorEbIb: Ror [E b, I b] RM | RW1;
    RclEbIb: Rcl [E b, I b] RM | RW1;
    RcrEbIb: Rcr [E b, I b] RM | RW1;
    ShlEbIb: Shl [E b, I b] RM | RW1;
    ShrEbIb: Shr [E b, I b] RM | RW1;
    SalEbIb: Sal [E b, I b] RM | RW1;
    SarEbIb: Sar [E b, I b] RM | RW1;
    RolEvIb: Rol [E v, I b] RM | RW | RW1;
    RorEvIb: Ror [E v, I b] RM | RW | RW1;
    RclEvIb: Rcl [E v, I b] RM | RW | RW1;
    RcrEvIb: Rcr [E v, I b] RM | RW | RW1;
    ShlEvIb: Shl [E v, I b] RM | RW | RW1;
    ShrEvIb: Shr [E v, I b] RM | RW | RW1;
    SalEvIb: Sal [E v, I b] RM | RW | RW1;
    SarEvIb: Sar [E v, I b] RM | RW | RW1;
    RolEb1: Rol [E b, I1 na] RM | RW1;
    RorEb1: Ror [E b, I1 na] RM | RW1;
    RclEb1: Rcl [E b, I1 na] RM | RW1;
    RcrEb1: Rcr [E b, I1 na] RM | RW1;
    ShlEb1: Shl [E b, I1 na] RM | RW1;
    ShrEb1: Shr [E b, I1 na] RM | RW1;
    SalEb1: Sal [E b, I1 na] RM | RW1;
    SarEb1: Sar [E b, I1 na] RM | RW1;
    RolEv1: Rol [E v, I1 na] RM | RW | RW1;
    RorEv1: Ror [E v, I1 na] RM | RW | RW1;
    RclEv1: Rcl [E v, I1 na] RM | RW | RW1;
    RcrEv1: Rcr [E v, I1 na] RM | RW | RW1;
    ShlEv1: Shl [E v, I1 na] RM | RW | RW1;
    ShrEv1: Shr [E v, I1 na] RM | RW | RW1;
    SalEv1: Sal [E v, I1 na] RM | RW | RW1;
    SarEv1: Sar [E v, I1 na] RM | RW | RW1;
    RolEbCl: Rol [E b, Cl b] RM | RW1;
    RorEbCl: Ror [E b, Cl b] RM | RW1;
    RclEbCl: Rcl [E b, Cl b] RM | RW1;
    RcrEbCl: Rcr [E b, Cl b] RM | RW1;
    ShlEbCl: Shl [E b, Cl b] RM | RW1;
    ShrEbCl: Shr [E b, Cl b] RM | RW1;
    SalEbCl: Sal [E b, Cl b] RM | RW1;
    SarEbCl: Sar [E b, Cl b] RM | RW1;
    RolEvCl: Rol [E v, Cl b] RM | RW | RW1;
    RorEvCl: Ror [E v, Cl b] RM | RW | RW1;
    RclEvCl: Rcl [E v, Cl b] RM | RW | RW1;
    RcrEvCl: Rcr [E v, Cl b] RM | RW | RW1;
    ShlEvCl: Shl [E v, Cl b] RM | RW | RW1;
    ShrEvCl: Shr [E v, Cl b] RM | RW | RW1;
    SalEvCl: Sal [E v, Cl b] RM | RW | RW1;
    SarEvCl: Sar [E v, Cl b] RM | RW | RW1;
    TestEbIb: Test [E b, I b] RM;
    TestEvIz: Test [E v, I z] RM | RW;
    NotEb: Not [E b] RM | RW1;
    NotEv: Not [E v] RM | RW | RW1;
    NegEb: Neg [E b] RM | RW1;
    NegEv: Neg [E v] RM | RW | RW1;
    MulEb: Mul [E b] RM;
    MulEv: Mul [E v] RM | RW;
    ImulEb: Imul [E b] RM;
    ImulEv: Imul [E v] RM | RW;
    DivEb: Div [E b] RM;
    DivEv: Div [E v] RM | RW;
    IdivEb: Idiv [E b] RM;
    IdivEv: Idiv [E v] RM | RW;
    IncEb: Inc [E b] RM | RW1;
    IncEv: Inc [E v] RM | RW | RW1;
    DecEb: Dec [E b] RM | RW1;
    DecEv: Dec [E v] RM | RW | RW1;
    CallEv: Call [E v] RM | D64;
    CallEp: Call [M v] RM;
    JmpEv: Jmp [E v] RM | D64;
    JmpEp: Jmp [M v] RM;
    PushEv: Push [E v] RM | D64;
    PopEv: Pop [E v] RM | D64 | W1;

    // two-byte system instructions
    SldtMwRv: Sldt [MR vw] RM | RW | W1;
    StrMwRv: Str [MR vw] RM | RW | W1;
    LldtEw: Lldt [E w] RM;
    LtrEw: Ltr [E w] RM;
    VerrEw: Verr [E w] RM;
    VerwEw: Verw [E w] RM;
    SgdtM: Sgdt [M na] RM | W1;
    SidtM: Sidt [M na] RM | W1;
    LgdtM: Lgdt [M na] RM;
    LidtM: Lidt [M na] RM;
    SmswMw: Smsw [M w] RM | W1;
    SmswRv: Smsw [R v] RM | RW | W1;
    LmswMw: Lmsw [M w] RM;
    LmswRw: Lmsw [R w] RM;
    InvlpgMb: Invlpg [M b] RM;
    Vmcall: Vmcall [] 0;
    Vmlaunch: Vmlaunch [] 0;
    Vmresume: Vmresume [] 0;
    Vmxoff: Vmxoff [] 0;
    Monitor: Monitor [] 0;
    Mwait: Mwait [] 0;
    Xgetbv: Xgetbv [] 0;
    Xsetbv: Xsetbv [] 0;
    Swapgs: Swapgs [] 0;
    Rdtscp: Rdtscp [] 0;
    LarGvEw: Lar [G v, E w] MODRMW | W1;
    LslGvEw: Lsl [G v, E w] MODRMW | W1;
    Syscall: Syscall [] 0;
    Sysret: Sysret [] 0;
    Clts: Clts [] 0;
    Invd: Invd [] 0;
    Wbinvd: Wbinvd [] 0;
    Ud2: Ud2 [] 0;
    Femms: Femms [] 0;
    PrefetchMb: Prefetch [M b] RM;
    PrefetchwMb: Prefetchw [M b] RM;
    PrefetchntaMb: Prefetchnta [M b] RM;
    Prefetcht0Mb: Prefetcht0 [M b] RM;
    Prefetcht1Mb: Prefetcht1 [M b] RM;
    Prefetcht2Mb: Prefetcht2 [M b] RM;
    NopEv: Nop [E v] RM;
    MovRdCd: Mov [R rdq, C rdq] RB | RR | W1;
    MovRdDd: Mov [R rdq, D rdq] RB | RR | W1;
    MovCdRd: Mov [C rdq, R rdq] RB | RR | W1;
    MovDdRd: Mov [D rdq, R rdq] RB | RR | W1;
    Wrmsr: Wrmsr [] 0;
    Rdtsc: Rdtsc [] 0;
    Rdmsr: Rdmsr [] 0;
    Rdpmc: Rdpmc [] 0;
    Sysenter: Sysenter [] 0;
    Sysexit: Sysexit [] 0;
    Cpuid: Cpuid [] 0;
    Rsm: Rsm [] 0;
    CmovoGvEv: Cmovo [G v, E v] MODRMW | W1;
    CmovnoGvEv: Cmovno [G v, E v] MODRMW | W1;
    CmovbGvEv: Cmovb [G v, E v] MODRMW | W1;
    CmovnbGvEv: Cmovnb [G v, E v] MODRMW | W1;
    CmovzGvEv: Cmovz [G v, E v] MODRMW | W1;
    CmovnzGvEv: Cmovnz [G v, E v] MODRMW | W1;
    CmovbeGvEv: Cmovbe [G v, E v] MODRMW | W1;
    CmovnbeGvEv: Cmovnbe [G v, E v] MODRMW | W1;
    CmovsGvEv: Cmovs [G v, E v] MODRMW | W1;
    CmovnsGvEv: Cmovns [G v, E v] MODRMW | W1;
    CmovpGvEv: Cmovp [G v, E v] MODRMW | W1;
    CmovnpGvEv: Cmovnp [G v, E v] MODRMW | W1;
    CmovlGvEv: Cmovl [G v, E v] MODRMW | W1;
    CmovnlGvEv: Cmovnl [G v, E v] MODRMW | W1;
    CmovleGvEv: Cmovle [G v, E v] MODRMW | W1;
    CmovnleGvEv: Cmovnle [G v, E v] MODRMW | W1;
    JoJz: Jo [J z] 0;
    JnoJz: Jno [J z] 0;
    JbJz: Jb [J z] 0;
    JnbJz: Jnb [J z] 0;
    JzJz: Jz [J z] 0;
    JnzJz: Jnz [J z] 0;
    JbeJz: Jbe [J z] 0;
    JnbeJz: Jnbe [J z] 0;
    JsJz: Js [J z] 0;
    JnsJz: Jns [J z] 0;
    JpJz: Jp [J z] 0;
    JnpJz: Jnp [J z] 0;
    JlJz: Jl [J z] 0;
    JnlJz: Jnl [J z] 0;
    JleJz: Jle [J z] 0;
    JnleJz: Jnle [J z] 0;
    SetoEb: Seto [E b] RM | W1;
    SetnoEb: Setno [E b] RM | W1;
    SetbEb: Setb [E b] RM | W1;
    SetnbEb: Setnb [E b] RM | W1;
    SetzEb: Setz [E b] RM | W1;
    SetnzEb: Setnz [E b] RM | W1;
    SetbeEb: Setbe [E b] RM | W1;
    SetnbeEb: Setnbe [E b] RM | W1;
    SetsEb: Sets [E b] RM | W1;
    SetnsEb: Setns [E b] RM | W1;
    SetpEb: Setp [E b] RM | W1;
    SetnpEb: Setnp [E b] RM | W1;
    SetlEb: Setl [E b] RM | W1;
    SetnlEb: Setnl [E b] RM | W1;
    SetleEb: Setle [E b] RM | W1;
    SetnleEb: Setnle [E b] RM | W1;
    BtEvGv: Bt [E v, G v] MODRMW;
    BtsEvGv: Bts [E v, G v] MODRMW | RW1;
    BtrEvGv: Btr [E v, G v] MODRMW | RW1;
    BtcEvGv: Btc [E v, G v] MODRMW | RW1;
    BtEvIb: Bt [E v, I b] RM | RW;
    BtsEvIb: Bts [E v, I b] RM | RW | RW1;
    BtrEvIb: Btr [E v, I b] RM | RW | RW1;
    BtcEvIb: Btc [E v, I b] RM | RW | RW1;
    ShldEvGvIb: Shld [E v, G v, I b] MODRMW | RW1;
    ShldEvGvCl: Shld [E v, G v, Cl b] MODRMW | RW1;
    ShrdEvGvIb: Shrd [E v, G v, I b] MODRMW | RW1;
    ShrdEvGvCl: Shrd [E v, G v, Cl b] MODRMW | RW1;
    ImulGvEv: Imul [G v, E v] MODRMW | RW1;
    CmpxchgEbGb: Cmpxchg [E b, G b] MODRM | RW1;
    CmpxchgEvGv: Cmpxchg [E v, G v] MODRMW | RW1;
    LssGvM: Lss [G v, M v] MODRMW | W1;
    LfsGvM: Lfs [G v, M v] MODRMW | W1;
    LgsGvM: Lgs [G v, M v] MODRMW | W1;
    MovzxGvEb: Movzx [G v, E b] MODRMW | W1;
    MovzxGvEw: Movzx [G v, E w] MODRMW | W1;
    MovsxGvEb: Movsx [G v, E b] MODRMW | W1;
    MovsxGvEw: Movsx [G v, E w] MODRMW | W1;
    PopcntGvEv: Popcnt [G v, E v] MODRMW | W1;
    TzcntGvEv: Tzcnt [G v, E v] MODRMW | W1;
    LzcntGvEv: Lzcnt [G v, E v] MODRMW | W1;
    BsfGvEv: Bsf [G v, E v] MODRMW | W1;
    BsrGvEv: Bsr [G v, E v] MODRMW | W1;
    XaddEbGb: Xadd [E b, G b] MODRM | RW1 | RW2;
    XaddEvGv: Xadd [E v, G v] MODRMW | RW1 | RW2;
    MovntiMyGy: Movnti [M y, G y] MODRMW | W1;
    Cmpxchg8bMq: Cmpxchg8b [M q] RM | RW1;
    Cmpxchg16bMdq: Cmpxchg16b [M dq] RM | RW1;
    FxsaveM: Fxsave [M na] RM | W1;
    FxrstorM: Fxrstor [M na] RM;
    LdmxcsrMd: Ldmxcsr [M d] RM;
    StmxcsrMd: Stmxcsr [M d] RM | W1;
    ClflushMb: Clflush [M b] RM;
    Lfence: Lfence [] 0;
    Mfence: Mfence [] 0;
    Sfence: Sfence [] 0;
    BswapR0: Bswap [R0 y] RB | RW | RW1;
    BswapR1: Bswap [R1 y] RB | RW | RW1;
    BswapR2: Bswap [R2 y] RB | RW | RW1;
    BswapR3: Bswap [R3 y] RB | RW | RW1;
    BswapR4: Bswap [R4 y] RB | RW | RW1;
    BswapR5: Bswap [R5 y] RB | RW | RW1;
    BswapR6: Bswap [R6 y] RB | RW | RW1;
    BswapR7: Bswap [R7 y] RB | RW | RW1;

    // SSE/SSE2/SSE3 scalar and packed floating point
    MovupsVW: Movups [V dq, W dq] MODRM | W1;
    MovupsWV: Movups [W dq, V dq] MODRM | W1;
    MovupdVW: Movupd [V dq, W dq] MODRM | W1;
    MovupdWV: Movupd [W dq, V dq] MODRM | W1;
    MovssVW: Movss [V dq, W d] MODRM | W1;
    MovssWV: Movss [W d, V dq] MODRM | W1;
    MovsdVW: Movsd [V dq, W q] MODRM | W1;
    MovsdWV: Movsd [W q, V dq] MODRM | W1;
    MovlpsVM: Movlps [V q, M q] MODRM | W1;
    MovlpsMV: Movlps [M q, V q] MODRM | W1;
    MovlpdVM: Movlpd [V q, M q] MODRM | W1;
    MovlpdMV: Movlpd [M q, V q] MODRM | W1;
    MovhlpsVU: Movhlps [V q, U q] MODRM | W1;
    MovlhpsVU: Movlhps [V q, U q] MODRM | W1;
    MovhpsVM: Movhps [V q, M q] MODRM | W1;
    MovhpsMV: Movhps [M q, V q] MODRM | W1;
    MovhpdVM: Movhpd [V q, M q] MODRM | W1;
    MovhpdMV: Movhpd [M q, V q] MODRM | W1;
    MovddupVW: Movddup [V dq, W q] MODRM | W1;
    MovsldupVW: Movsldup [V dq, W dq] MODRM | W1;
    MovshdupVW: Movshdup [V dq, W dq] MODRM | W1;
    UnpcklpsVW: Unpcklps [V dq, W dq] MODRM | RW1;
    UnpcklpdVW: Unpcklpd [V dq, W dq] MODRM | RW1;
    UnpckhpsVW: Unpckhps [V dq, W dq] MODRM | RW1;
    UnpckhpdVW: Unpckhpd [V dq, W dq] MODRM | RW1;
    MovapsVW: Movaps [V dq, W dq] MODRM | W1;
    MovapsWV: Movaps [W dq, V dq] MODRM | W1;
    MovapdVW: Movapd [V dq, W dq] MODRM | W1;
    MovapdWV: Movapd [W dq, V dq] MODRM | W1;
    Cvtpi2psVQ: Cvtpi2ps [V dq, Q q] MODRM | W1;
    Cvtpi2pdVQ: Cvtpi2pd [V dq, Q q] MODRM | W1;
    Cvtsi2ssVE: Cvtsi2ss [V dq, E y] MODRMW | W1;
    Cvtsi2sdVE: Cvtsi2sd [V dq, E y] MODRMW | W1;
    MovntpsMV: Movntps [M dq, V dq] MODRM | W1;
    MovntpdMV: Movntpd [M dq, V dq] MODRM | W1;
    Cvttps2piPW: Cvttps2pi [P q, W q] MODRM | W1;
    Cvttpd2piPW: Cvttpd2pi [P q, W dq] MODRM | W1;
    Cvttss2siGW: Cvttss2si [G y, W d] MODRMW | W1;
    Cvttsd2siGW: Cvttsd2si [G y, W q] MODRMW | W1;
    Cvtps2piPW: Cvtps2pi [P q, W q] MODRM | W1;
    Cvtpd2piPW: Cvtpd2pi [P q, W dq] MODRM | W1;
    Cvtss2siGW: Cvtss2si [G y, W d] MODRMW | W1;
    Cvtsd2siGW: Cvtsd2si [G y, W q] MODRMW | W1;
    UcomissVW: Ucomiss [V dq, W d] MODRM;
    UcomisdVW: Ucomisd [V dq, W q] MODRM;
    ComissVW: Comiss [V dq, W d] MODRM;
    ComisdVW: Comisd [V dq, W q] MODRM;
    MovmskpsGU: Movmskps [G d, U dq] MODRM | W1;
    MovmskpdGU: Movmskpd [G d, U dq] MODRM | W1;
    SqrtpsVW: Sqrtps [V dq, W dq] MODRM | W1;
    SqrtssVW: Sqrtss [V dq, W d] MODRM | W1;
    SqrtsdVW: Sqrtsd [V dq, W q] MODRM | W1;
    SqrtpdVW: Sqrtpd [V dq, W dq] MODRM | W1;
    RsqrtpsVW: Rsqrtps [V dq, W dq] MODRM | W1;
    RsqrtssVW: Rsqrtss [V dq, W d] MODRM | W1;
    RcppsVW: Rcpps [V dq, W dq] MODRM | W1;
    RcpssVW: Rcpss [V dq, W d] MODRM | W1;
    AndpsVW: Andps [V dq, W dq] MODRM | RW1;
    AndpdVW: Andpd [V dq, W dq] MODRM | RW1;
    AndnpsVW: Andnps [V dq, W dq] MODRM | RW1;
    AndnpdVW: Andnpd [V dq, W dq] MODRM | RW1;
    OrpsVW: Orps [V dq, W dq] MODRM | RW1;
    OrpdVW: Orpd [V dq, W dq] MODRM | RW1;
    XorpsVW: Xorps [V dq, W dq] MODRM | RW1;
    XorpdVW: Xorpd [V dq, W dq] MODRM | RW1;
    AddpsVW: Addps [V dq, W dq] MODRM | RW1;
    AddssVW: Addss [V dq, W d] MODRM | RW1;
    AddsdVW: Addsd [V dq, W q] MODRM | RW1;
    AddpdVW: Addpd [V dq, W dq] MODRM | RW1;
    MulpsVW: Mulps [V dq, W dq] MODRM | RW1;
    MulssVW: Mulss [V dq, W d] MODRM | RW1;
    MulsdVW: Mulsd [V dq, W q] MODRM | RW1;
    MulpdVW: Mulpd [V dq, W dq] MODRM | RW1;
    Cvtps2pdVW: Cvtps2pd [V dq, W q] MODRM | W1;
    Cvtss2sdVW: Cvtss2sd [V dq, W d] MODRM | W1;
    Cvtsd2ssVW: Cvtsd2ss [V dq, W q] MODRM | W1;
    Cvtpd2psVW: Cvtpd2ps [V dq, W dq] MODRM | W1;
    Cvtdq2psVW: Cvtdq2ps [V dq, W dq] MODRM | W1;
    Cvttps2dqVW: Cvttps2dq [V dq, W dq] MODRM | W1;
    Cvtps2dqVW: Cvtps2dq [V dq, W dq] MODRM | W1;
    SubpsVW: Subps [V dq, W dq] MODRM | RW1;
    SubssVW: Subss [V dq, W d] MODRM | RW1;
    SubsdVW: Subsd [V dq, W q] MODRM | RW1;
    SubpdVW: Subpd [V dq, W dq] MODRM | RW1;
    MinpsVW: Minps [V dq, W dq] MODRM | RW1;
    MinssVW: Minss [V dq, W d] MODRM | RW1;
    MinsdVW: Minsd [V dq, W q] MODRM | RW1;
    MinpdVW: Minpd [V dq, W dq] MODRM | RW1;
    DivpsVW: Divps [V dq, W dq] MODRM | RW1;
    DivssVW: Divss [V dq, W d] MODRM | RW1;
    DivsdVW: Divsd [V dq, W q] MODRM | RW1;
    DivpdVW: Divpd [V dq, W dq] MODRM | RW1;
    MaxpsVW: Maxps [V dq, W dq] MODRM | RW1;
    MaxssVW: Maxss [V dq, W d] MODRM | RW1;
    MaxsdVW: Maxsd [V dq, W q] MODRM | RW1;
    MaxpdVW: Maxpd [V dq, W dq] MODRM | RW1;
    HaddpsVW: Haddps [V dq, W dq] MODRM | RW1;
    HaddpdVW: Haddpd [V dq, W dq] MODRM | RW1;
    HsubpsVW: Hsubps [V dq, W dq] MODRM | RW1;
    HsubpdVW: Hsubpd [V dq, W dq] MODRM | RW1;
    AddsubpsVW: Addsubps [V dq, W dq] MODRM | RW1;
    AddsubpdVW: Addsubpd [V dq, W dq] MODRM | RW1;
    CmppsVWIb: Cmpps [V dq, W dq, I b] MODRM | RW1;
    CmpssVWIb: Cmpss [V dq, W d, I b] MODRM | RW1;
    CmpsdVWIb: Cmpsd [V dq, W q, I b] MODRM | RW1;
    CmppdVWIb: Cmppd [V dq, W dq, I b] MODRM | RW1;
    ShufpsVWIb: Shufps [V dq, W dq, I b] MODRM | RW1;
    ShufpdVWIb: Shufpd [V dq, W dq, I b] MODRM | RW1;
    Cvtdq2pdVW: Cvtdq2pd [V dq, W q] MODRM | W1;
    Cvtpd2dqVW: Cvtpd2dq [V dq, W dq] MODRM | W1;
    Cvttpd2dqVW: Cvttpd2dq [V dq, W dq] MODRM | W1;
    LddquVM: Lddqu [V dq, M dq] MODRM | W1;
    MaskmovqPN: Maskmovq [P q, N q] MODRM;
    MaskmovdquVU: Maskmovdqu [V dq, U dq] MODRM;

    // MMX/SSE2 moves and shuffles
    MovdPE: Movd [P q, E y] MODRMW | W1;
    MovdVE: Movd [V dq, E y] MODRMW | W1;
    MovdEP: Movd [E y, P q] MODRMW | W1;
    MovdEV: Movd [E y, V dq] MODRMW | W1;
    MovqPQ: Movq [P q, Q q] MODRM | W1;
    MovqQP: Movq [Q q, P q] MODRM | W1;
    MovqVW: Movq [V q, W q] MODRM | W1;
    MovqWV: Movq [W q, V q] MODRM | W1;
    MovdqaVW: Movdqa [V dq, W dq] MODRM | W1;
    MovdqaWV: Movdqa [W dq, V dq] MODRM | W1;
    MovdquVW: Movdqu [V dq, W dq] MODRM | W1;
    MovdquWV: Movdqu [W dq, V dq] MODRM | W1;
    Movq2dqVN: Movq2dq [V dq, N q] MODRM | W1;
    Movdq2qPU: Movdq2q [P q, U dq] MODRM | W1;
    PshufwPQIb: Pshufw [P q, Q q, I b] MODRM | W1;
    PshufhwVWIb: Pshufhw [V dq, W dq, I b] MODRM | W1;
    PshuflwVWIb: Pshuflw [V dq, W dq, I b] MODRM | W1;
    PshufdVWIb: Pshufd [V dq, W dq, I b] MODRM | W1;
    PinsrwPMRIb: Pinsrw [P q, MR dw, I b] MODRM | RW1;
    PinsrwVMRIb: Pinsrw [V dq, MR dw, I b] MODRM | RW1;
    PextrwGNIb: Pextrw [G d, N q, I b] MODRM | W1;
    PextrwGUIb: Pextrw [G d, U dq, I b] MODRM | W1;
    PmovmskbGN: Pmovmskb [G d, N q] MODRM | W1;
    PmovmskbGU: Pmovmskb [G d, U dq] MODRM | W1;
    MovntqMP: Movntq [M q, P q] MODRM | W1;
    MovntdqMV: Movntdq [M dq, V dq] MODRM | W1;
    Emms: Emms [] 0;

    // MMX / SSE2 integer ALU (MMX form, then the 66-prefixed XMM form)
    PunpcklbwPQ: Punpcklbw [P q, Q q] MODRM | RW1;
    PunpcklbwVW: Punpcklbw [V dq, W dq] MODRM | RW1;
    PunpcklwdPQ: Punpcklwd [P q, Q q] MODRM | RW1;
    PunpcklwdVW: Punpcklwd [V dq, W dq] MODRM | RW1;
    PunpckldqPQ: Punpckldq [P q, Q q] MODRM | RW1;
    PunpckldqVW: Punpckldq [V dq, W dq] MODRM | RW1;
    PacksswbPQ: Packsswb [P q, Q q] MODRM | RW1;
    PacksswbVW: Packsswb [V dq, W dq] MODRM | RW1;
    PcmpgtbPQ: Pcmpgtb [P q, Q q] MODRM | RW1;
    PcmpgtbVW: Pcmpgtb [V dq, W dq] MODRM | RW1;
    PcmpgtwPQ: Pcmpgtw [P q, Q q] MODRM | RW1;
    PcmpgtwVW: Pcmpgtw [V dq, W dq] MODRM | RW1;
    PcmpgtdPQ: Pcmpgtd [P q, Q q] MODRM | RW1;
    PcmpgtdVW: Pcmpgtd [V dq, W dq] MODRM | RW1;
    PackuswbPQ: Packuswb [P q, Q q] MODRM | RW1;
    PackuswbVW: Packuswb [V dq, W dq] MODRM | RW1;
    PunpckhbwPQ: Punpckhbw [P q, Q q] MODRM | RW1;
    PunpckhbwVW: Punpckhbw [V dq, W dq] MODRM | RW1;
    PunpckhwdPQ: Punpckhwd [P q, Q q] MODRM | RW1;
    PunpckhwdVW: Punpckhwd [V dq, W dq] MODRM | RW1;
    PunpckhdqPQ: Punpckhdq [P q, Q q] MODRM | RW1;
    PunpckhdqVW: Punpckhdq [V dq, W dq] MODRM | RW1;
    PackssdwPQ: Packssdw [P q, Q q] MODRM | RW1;
    PackssdwVW: Packssdw [V dq, W dq] MODRM | RW1;
    PunpcklqdqVW: Punpcklqdq [V dq, W dq] MODRM | RW1;
    PunpckhqdqVW: Punpckhqdq [V dq, W dq] MODRM | RW1;
    PcmpeqbPQ: Pcmpeqb [P q, Q q] MODRM | RW1;
    PcmpeqbVW: Pcmpeqb [V dq, W dq] MODRM | RW1;
    PcmpeqwPQ: Pcmpeqw [P q, Q q] MODRM | RW1;
    PcmpeqwVW: Pcmpeqw [V dq, W dq] MODRM | RW1;
    PcmpeqdPQ: Pcmpeqd [P q, Q q] MODRM | RW1;
    PcmpeqdVW: Pcmpeqd [V dq, W dq] MODRM | RW1;
    PsrlwPQ: Psrlw [P q, Q q] MODRM | RW1;
    PsrlwVW: Psrlw [V dq, W dq] MODRM | RW1;
    PsrldPQ: Psrld [P q, Q q] MODRM | RW1;
    PsrldVW: Psrld [V dq, W dq] MODRM | RW1;
    PsrlqPQ: Psrlq [P q, Q q] MODRM | RW1;
    PsrlqVW: Psrlq [V dq, W dq] MODRM | RW1;
    PaddqPQ: Paddq [P q, Q q] MODRM | RW1;
    PaddqVW: Paddq [V dq, W dq] MODRM | RW1;
    PmullwPQ: Pmullw [P q, Q q] MODRM | RW1;
    PmullwVW: Pmullw [V dq, W dq] MODRM | RW1;
    PsubusbPQ: Psubusb [P q, Q q] MODRM | RW1;
    PsubusbVW: Psubusb [V dq, W dq] MODRM | RW1;
    PsubuswPQ: Psubusw [P q, Q q] MODRM | RW1;
    PsubuswVW: Psubusw [V dq, W dq] MODRM | RW1;
    PminubPQ: Pminub [P q, Q q] MODRM | RW1;
    PminubVW: Pminub [V dq, W dq] MODRM | RW1;
    PandPQ: Pand [P q, Q q] MODRM | RW1;
    PandVW: Pand [V dq, W dq] MODRM | RW1;
    PaddusbPQ: Paddusb [P q, Q q] MODRM | RW1;
    PaddusbVW: Paddusb [V dq, W dq] MODRM | RW1;
    PadduswPQ: Paddusw [P q, Q q] MODRM | RW1;
    PadduswVW: Paddusw [V dq, W dq] MODRM | RW1;
    PmaxubPQ: Pmaxub [P q, Q q] MODRM | RW1;
    PmaxubVW: Pmaxub [V dq, W dq] MODRM | RW1;
    PandnPQ: Pandn [P q, Q q] MODRM | RW1;
    PandnVW: Pandn [V dq, W dq] MODRM | RW1;
    PavgbPQ: Pavgb [P q, Q q] MODRM | RW1;
    PavgbVW: Pavgb [V dq, W dq] MODRM | RW1;
    PsrawPQ: Psraw [P q, Q q] MODRM | RW1;
    PsrawVW: Psraw [V dq, W dq] MODRM | RW1;
    PsradPQ: Psrad [P q, Q q] MODRM | RW1;
    PsradVW: Psrad [V dq, W dq] MODRM | RW1;
    PavgwPQ: Pavgw [P q, Q q] MODRM | RW1;
    PavgwVW: Pavgw [V dq, W dq] MODRM | RW1;
    PmulhuwPQ: Pmulhuw [P q, Q q] MODRM | RW1;
    PmulhuwVW: Pmulhuw [V dq, W dq] MODRM | RW1;
    PmulhwPQ: Pmulhw [P q, Q q] MODRM | RW1;
    PmulhwVW: Pmulhw [V dq, W dq] MODRM | RW1;
    PsubsbPQ: Psubsb [P q, Q q] MODRM | RW1;
    PsubsbVW: Psubsb [V dq, W dq] MODRM | RW1;
    PsubswPQ: Psubsw [P q, Q q] MODRM | RW1;
    PsubswVW: Psubsw [V dq, W dq] MODRM | RW1;
    PminswPQ: Pminsw [P q, Q q] MODRM | RW1;
    PminswVW: Pminsw [V dq, W dq] MODRM | RW1;
    PorPQ: Por [P q, Q q] MODRM | RW1;
    PorVW: Por [V dq, W dq] MODRM | RW1;
    PaddsbPQ: Paddsb [P q, Q q] MODRM | RW1;
    PaddsbVW: Paddsb [V dq, W dq] MODRM | RW1;
    PaddswPQ: Paddsw [P q, Q q] MODRM | RW1;
    PaddswVW: Paddsw [V dq, W dq] MODRM | RW1;
    PmaxswPQ: Pmaxsw [P q, Q q] MODRM | RW1;
    PmaxswVW: Pmaxsw [V dq, W dq] MODRM | RW1;
    PxorPQ: Pxor [P q, Q q] MODRM | RW1;
    PxorVW: Pxor [V dq, W dq] MODRM | RW1;
    PsllwPQ: Psllw [P q, Q q] MODRM | RW1;
    PsllwVW: Psllw [V dq, W dq] MODRM | RW1;
    PslldPQ: Pslld [P q, Q q] MODRM | RW1;
    PslldVW: Pslld [V dq, W dq] MODRM | RW1;
    PsllqPQ: Psllq [P q, Q q] MODRM | RW1;
    PsllqVW: Psllq [V dq, W dq] MODRM | RW1;
    PmuludqPQ: Pmuludq [P q, Q q] MODRM | RW1;
    PmuludqVW: Pmuludq [V dq, W dq] MODRM | RW1;
    PmaddwdPQ: Pmaddwd [P q, Q q] MODRM | RW1;
    PmaddwdVW: Pmaddwd [V dq, W dq] MODRM | RW1;
    PsadbwPQ: Psadbw [P q, Q q] MODRM | RW1;
    PsadbwVW: Psadbw [V dq, W dq] MODRM | RW1;
    PsubbPQ: Psubb [P q, Q q] MODRM | RW1;
    PsubbVW: Psubb [V dq, W dq] MODRM | RW1;
    PsubwPQ: Psubw [P q, Q q] MODRM | RW1;
    PsubwVW: Psubw [V dq, W dq] MODRM | RW1;
    PsubdPQ: Psubd [P q, Q q] MODRM | RW1;
    PsubdVW: Psubd [V dq, W dq] MODRM | RW1;
    PsubqPQ: Psubq [P q, Q q] MODRM | RW1;
    PsubqVW: Psubq [V dq, W dq] MODRM | RW1;
    PaddbPQ: Paddb [P q, Q q] MODRM | RW1;
    PaddbVW: Paddb [V dq, W dq] MODRM | RW1;
    PaddwPQ: Paddw [P q, Q q] MODRM | RW1;
    PaddwVW: Paddw [V dq, W dq] MODRM | RW1;
    PadddPQ: Paddd [P q, Q q] MODRM | RW1;
    PadddVW: Paddd [V dq, W dq] MODRM | RW1;

    // groups 12..14: vector shifts by immediate
    PsrlwNIb: Psrlw [N q, I b] RM | RW1;
    PsrlwUIb: Psrlw [U dq, I b] RM | RW1;
    PsrawNIb: Psraw [N q, I b] RM | RW1;
    PsrawUIb: Psraw [U dq, I b] RM | RW1;
    PsllwNIb: Psllw [N q, I b] RM | RW1;
    PsllwUIb: Psllw [U dq, I b] RM | RW1;
    PsrldNIb: Psrld [N q, I b] RM | RW1;
    PsrldUIb: Psrld [U dq, I b] RM | RW1;
    PsradNIb: Psrad [N q, I b] RM | RW1;
    PsradUIb: Psrad [U dq, I b] RM | RW1;
    PslldNIb: Pslld [N q, I b] RM | RW1;
    PslldUIb: Pslld [U dq, I b] RM | RW1;
    PsrlqNIb: Psrlq [N q, I b] RM | RW1;
    PsrlqUIb: Psrlq [U dq, I b] RM | RW1;
    PsrldqUIb: Psrldq [U dq, I b] RM | RW1;
    PsllqNIb: Psllq [N q, I b] RM | RW1;
    PsllqUIb: Psllq [U dq, I b] RM | RW1;
    PslldqUIb: Pslldq [U dq, I b] RM | RW1;

    // 0F 38 / 0F 3A escape maps (SSSE3, SSE4.1 subset, MOVBE/CRC32)
    PshufbPQ: Pshufb [P q, Q q] MODRM | RW1;
    PshufbVW: Pshufb [V dq, W dq] MODRM | RW1;
    PhaddwPQ: Phaddw [P q, Q q] MODRM | RW1;
    PhaddwVW: Phaddw [V dq, W dq] MODRM | RW1;
    PhadddPQ: Phaddd [P q, Q q] MODRM | RW1;
    PhadddVW: Phaddd [V dq, W dq] MODRM | RW1;
    PhaddswPQ: Phaddsw [P q, Q q] MODRM | RW1;
    PhaddswVW: Phaddsw [V dq, W dq] MODRM | RW1;
    PmaddubswPQ: Pmaddubsw [P q, Q q] MODRM | RW1;
    PmaddubswVW: Pmaddubsw [V dq, W dq] MODRM | RW1;
    PhsubwPQ: Phsubw [P q, Q q] MODRM | RW1;
    PhsubwVW: Phsubw [V dq, W dq] MODRM | RW1;
    PhsubdPQ: Phsubd [P q, Q q] MODRM | RW1;
    PhsubdVW: Phsubd [V dq, W dq] MODRM | RW1;
    PhsubswPQ: Phsubsw [P q, Q q] MODRM | RW1;
    PhsubswVW: Phsubsw [V dq, W dq] MODRM | RW1;
    PsignbPQ: Psignb [P q, Q q] MODRM | RW1;
    PsignbVW: Psignb [V dq, W dq] MODRM | RW1;
    PsignwPQ: Psignw [P q, Q q] MODRM | RW1;
    PsignwVW: Psignw [V dq, W dq] MODRM | RW1;
    PsigndPQ: Psignd [P q, Q q] MODRM | RW1;
    PsigndVW: Psignd [V dq, W dq] MODRM | RW1;
    PmulhrswPQ: Pmulhrsw [P q, Q q] MODRM | RW1;
    PmulhrswVW: Pmulhrsw [V dq, W dq] MODRM | RW1;
    PtestVW: Ptest [V dq, W dq] MODRM;
    PabsbPQ: Pabsb [P q, Q q] MODRM | W1;
    PabsbVW: Pabsb [V dq, W dq] MODRM | W1;
    PabswPQ: Pabsw [P q, Q q] MODRM | W1;
    PabswVW: Pabsw [V dq, W dq] MODRM | W1;
    PabsdPQ: Pabsd [P q, Q q] MODRM | W1;
    PabsdVW: Pabsd [V dq, W dq] MODRM | W1;
    MovbeGvMv: Movbe [G v, M v] MODRMW | W1;
    MovbeMvGv: Movbe [M v, G v] MODRMW | W1;
    Crc32GdEb: Crc32 [G d, E b] MODRMW | RW1;
    Crc32GdEv: Crc32 [G d, E v] MODRMW | RW1;
    RoundpsVWIb: Roundps [V dq, W dq, I b] MODRM | W1;
    RoundpdVWIb: Roundpd [V dq, W dq, I b] MODRM | W1;
    RoundssVWIb: Roundss [V dq, W d, I b] MODRM | W1;
    RoundsdVWIb: Roundsd [V dq, W q, I b] MODRM | W1;
    BlendpsVWIb: Blendps [V dq, W dq, I b] MODRM | RW1;
    BlendpdVWIb: Blendpd [V dq, W dq, I b] MODRM | RW1;
    PblendwVWIb: Pblendw [V dq, W dq, I b] MODRM | RW1;
    PalignrPQIb: Palignr [P q, Q q, I b] MODRM | RW1;
    PalignrVWIb: Palignr [V dq, W dq, I b] MODRM | RW1;

    // AVX (VEX-encoded) forms
    VmovupsVW: Vmovups [V x, W x] MODRM | VL | W1;
    VmovupsWV: Vmovups [W x, V x] MODRM | VL | W1;
    VmovupdVW: Vmovupd [V x, W x] MODRM | VL | W1;
    VmovupdWV: Vmovupd [W x, V x] MODRM | VL | W1;
    VmovssVW: Vmovss [V dq, W d] MODRM | W1;
    VmovssWV: Vmovss [W d, V dq] MODRM | W1;
    VmovsdVW: Vmovsd [V dq, W q] MODRM | W1;
    VmovsdWV: Vmovsd [W q, V dq] MODRM | W1;
    VmovapsVW: Vmovaps [V x, W x] MODRM | VL | W1;
    VmovapsWV: Vmovaps [W x, V x] MODRM | VL | W1;
    VmovapdVW: Vmovapd [V x, W x] MODRM | VL | W1;
    VmovapdWV: Vmovapd [W x, V x] MODRM | VL | W1;
    VsqrtpsVW: Vsqrtps [V x, W x] MODRM | VL | W1;
    VsqrtpdVW: Vsqrtpd [V x, W x] MODRM | VL | W1;
    VandpsVHW: Vandps [V x, H x, W x] MODRM | VL | W1;
    VandpdVHW: Vandpd [V x, H x, W x] MODRM | VL | W1;
    VandnpsVHW: Vandnps [V x, H x, W x] MODRM | VL | W1;
    VandnpdVHW: Vandnpd [V x, H x, W x] MODRM | VL | W1;
    VorpsVHW: Vorps [V x, H x, W x] MODRM | VL | W1;
    VorpdVHW: Vorpd [V x, H x, W x] MODRM | VL | W1;
    VxorpsVHW: Vxorps [V x, H x, W x] MODRM | VL | W1;
    VxorpdVHW: Vxorpd [V x, H x, W x] MODRM | VL | W1;
    VaddpsVHW: Vaddps [V x, H x, W x] MODRM | VL | W1;
    VaddpdVHW: Vaddpd [V x, H x, W x] MODRM | VL | W1;
    VmulpsVHW: Vmulps [V x, H x, W x] MODRM | VL | W1;
    VmulpdVHW: Vmulpd [V x, H x, W x] MODRM | VL | W1;
    VsubpsVHW: Vsubps [V x, H x, W x] MODRM | VL | W1;
    VsubpdVHW: Vsubpd [V x, H x, W x] MODRM | VL | W1;
    VminpsVHW: Vminps [V x, H x, W x] MODRM | VL | W1;
    VminpdVHW: Vminpd [V x, H x, W x] MODRM | VL | W1;
    VdivpsVHW: Vdivps [V x, H x, W x] MODRM | VL | W1;
    VdivpdVHW: Vdivpd [V x, H x, W x] MODRM | VL | W1;
    VmaxpsVHW: Vmaxps [V x, H x, W x] MODRM | VL | W1;
    VmaxpdVHW: Vmaxpd [V x, H x, W x] MODRM | VL | W1;
    Vzeroupper: Vzeroupper [] 0;
    Vzeroall: Vzeroall [] 0;
    VmovdVE: Vmovd [V dq, E d] MODRM | W1;
    VmovqVE: Vmovq [V dq, E q] MODRM | W1;
    VmovdEV: Vmovd [E d, V dq] MODRM | W1;
    VmovqEV: Vmovq [E q, V dq] MODRM | W1;
    VmovqVW: Vmovq [V q, W q] MODRM | W1;
    VmovdqaVW: Vmovdqa [V x, W x] MODRM | VL | W1;
    VmovdqaWV: Vmovdqa [W x, V x] MODRM | VL | W1;
    VmovdquVW: Vmovdqu [V x, W x] MODRM | VL | W1;
    VmovdquWV: Vmovdqu [W x, V x] MODRM | VL | W1;
    VlddquVM: Vlddqu [V x, M x] MODRM | VL | W1;
    VpandVHW: Vpand [V dq, H dq, W dq] MODRM | W1;
    VporVHW: Vpor [V dq, H dq, W dq] MODRM | W1;
    VpxorVHW: Vpxor [V dq, H dq, W dq] MODRM | W1;
    VpaddbVHW: Vpaddb [V dq, H dq, W dq] MODRM | W1;
    VpaddwVHW: Vpaddw [V dq, H dq, W dq] MODRM | W1;
    VpadddVHW: Vpaddd [V dq, H dq, W dq] MODRM | W1;
    VpaddqVHW: Vpaddq [V dq, H dq, W dq] MODRM | W1;
    VpsubbVHW: Vpsubb [V dq, H dq, W dq] MODRM | W1;
    VpsubwVHW: Vpsubw [V dq, H dq, W dq] MODRM | W1;
    VpsubdVHW: Vpsubd [V dq, H dq, W dq] MODRM | W1;
    VpsubqVHW: Vpsubq [V dq, H dq, W dq] MODRM | W1;
    VpshufbVHW: Vpshufb [V dq, H dq, W dq] MODRM | W1;
    VphaddwVHW: Vphaddw [V dq, H dq, W dq] MODRM | W1;
    VphadddVHW: Vphaddd [V dq, H dq, W dq] MODRM | W1;
    VptestVW: Vptest [V x, W x] MODRM | VL;
    VpabsbVW: Vpabsb [V dq, W dq] MODRM | W1;
    VpabswVW: Vpabsw [V dq, W dq] MODRM | W1;
    VpabsdVW: Vpabsd [V dq, W dq] MODRM | W1;
    VroundpsVWIb: Vroundps [V x, W x, I b] MODRM | VL | W1;
    VroundpdVWIb: Vroundpd [V x, W x, I b] MODRM | VL | W1;
    VroundssVHWIb: Vroundss [V dq, H dq, W d, I b] MODRM | W1;
    VroundsdVHWIb: Vroundsd [V dq, H dq, W q, I b] MODRM | W1;
    VblendpsVHWIb: Vblendps [V x, H x, W x, I b] MODRM | VL | W1;
    VblendpdVHWIb: Vblendpd [V x, H x, W x, I b] MODRM | VL | W1;
    VpblendwVHWIb: Vpblendw [V dq, H dq, W dq, I b] MODRM | W1;
    VpalignrVHWIb: Vpalignr [V dq, H dq, W dq, I b] MODRM | W1;
    Vinsertf128VHWIb: Vinsertf128 [V qq, H qq, W dq, I b] MODRM | VL | W1;
    Vextractf128WVIb: Vextractf128 [W dq, V qq, I b] MODRM | VL | W1;
    VblendvpsVHWL: Vblendvps [V x, H x, W x, L x] MODRM | VL | W1;
    VblendvpdVHWL: Vblendvpd [V x, H x, W x, L x] MODRM | VL | W1;
    VpblendvbVHWL: Vpblendvb [V dq, H dq, W dq, L dq] MODRM | W1;

    // 3DNow!
    Pi2fwPQ: Pi2fw [P q, Q q] MODRM | RW1;
    Pi2fdPQ: Pi2fd [P q, Q q] MODRM | RW1;
    Pf2iwPQ: Pf2iw [P q, Q q] MODRM | RW1;
    Pf2idPQ: Pf2id [P q, Q q] MODRM | RW1;
    PfnaccPQ: Pfnacc [P q, Q q] MODRM | RW1;
    PfpnaccPQ: Pfpnacc [P q, Q q] MODRM | RW1;
    PfcmpgePQ: Pfcmpge [P q, Q q] MODRM | RW1;
    PfminPQ: Pfmin [P q, Q q] MODRM | RW1;
    PfrcpPQ: Pfrcp [P q, Q q] MODRM | RW1;
    PfrsqrtPQ: Pfrsqrt [P q, Q q] MODRM | RW1;
    PfsubPQ: Pfsub [P q, Q q] MODRM | RW1;
    PfaddPQ: Pfadd [P q, Q q] MODRM | RW1;
    PfcmpgtPQ: Pfcmpgt [P q, Q q] MODRM | RW1;
    PfmaxPQ: Pfmax [P q, Q q] MODRM | RW1;
    Pfrcpit1PQ: Pfrcpit1 [P q, Q q] MODRM | RW1;
    Pfrsqit1PQ: Pfrsqit1 [P q, Q q] MODRM | RW1;
    PfsubrPQ: Pfsubr [P q, Q q] MODRM | RW1;
    PfaccPQ: Pfacc [P q, Q q] MODRM | RW1;
    PfcmpeqPQ: Pfcmpeq [P q, Q q] MODRM | RW1;
    PfmulPQ: Pfmul [P q, Q q] MODRM | RW1;
    Pfrcpit2PQ: Pfrcpit2 [P q, Q q] MODRM | RW1;
    PmulhrwPQ: Pmulhrw [P q, Q q] MODRM | RW1;
    PswapdPQ: Pswapd [P q, Q q] MODRM | RW1;
    PavgusbPQ: Pavgusb [P q, Q q] MODRM | RW1;

    // x87 memory forms
    FaddMd: Fadd [M d] RM; FmulMd: Fmul [M d] RM;
    FcomMd: Fcom [M d] RM; FcompMd: Fcomp [M d] RM;
    FsubMd: Fsub [M d] RM; FsubrMd: Fsubr [M d] RM;
    FdivMd: Fdiv [M d] RM; FdivrMd: Fdivr [M d] RM;
    FldMd: Fld [M d] RM; FstMd: Fst [M d] RM | W1;
    FstpMd: Fstp [M d] RM | W1; FldenvM: Fldenv [M na] RM;
    FldcwMw: Fldcw [M w] RM; FnstenvM: Fnstenv [M na] RM | W1;
    FnstcwMw: Fnstcw [M w] RM | W1;
    FiaddMd: Fiadd [M d] RM; FimulMd: Fimul [M d] RM;
    FicomMd: Ficom [M d] RM; FicompMd: Ficomp [M d] RM;
    FisubMd: Fisub [M d] RM; FisubrMd: Fisubr [M d] RM;
    FidivMd: Fidiv [M d] RM; FidivrMd: Fidivr [M d] RM;
    FildMd: Fild [M d] RM; FisttpMd: Fisttp [M d] RM | W1;
    FistMd: Fist [M d] RM | W1; FistpMd: Fistp [M d] RM | W1;
    FldMt: Fld [M t] RM; FstpMt: Fstp [M t] RM | W1;
    FaddMq: Fadd [M q] RM; FmulMq: Fmul [M q] RM;
    FcomMq: Fcom [M q] RM; FcompMq: Fcomp [M q] RM;
    FsubMq: Fsub [M q] RM; FsubrMq: Fsubr [M q] RM;
    FdivMq: Fdiv [M q] RM; FdivrMq: Fdivr [M q] RM;
    FldMq: Fld [M q] RM; FisttpMq: Fisttp [M q] RM | W1;
    FstMq: Fst [M q] RM | W1; FstpMq: Fstp [M q] RM | W1;
    FrstorM: Frstor [M na] RM; FnsaveM: Fnsave [M na] RM | W1;
    FnstswMw: Fnstsw [M w] RM | W1;
    FiaddMw: Fiadd [M w] RM; FimulMw: Fimul [M w] RM;
    FicomMw: Ficom [M w] RM; FicompMw: Ficomp [M w] RM;
    FisubMw: Fisub [M w] RM; FisubrMw: Fisubr [M w] RM;
    FidivMw: Fidiv [M w] RM; FidivrMw: Fidivr [M w] RM;
    FildMw: Fild [M w] RM; FisttpMw: Fisttp [M w] RM | W1;
    FistMw: Fist [M w] RM | W1; FistpMw: Fistp [M w] RM | W1;
    FbldMt: Fbld [M t] RM; FildMq: Fild [M q] RM;
    FbstpMt: Fbstp [M t] RM | W1; FistpMq: Fistp [M q] RM | W1;

    // x87 register forms, escape D8
    FaddSt0St0: Fadd [St0 t, St0 t] RW1; FaddSt0St1: Fadd [St0 t, St1 t] RW1;
    FaddSt0St2: Fadd [St0 t, St2 t] RW1; FaddSt0St3: Fadd [St0 t, St3 t] RW1;
    FaddSt0St4: Fadd [St0 t, St4 t] RW1; FaddSt0St5: Fadd [St0 t, St5 t] RW1;
    FaddSt0St6: Fadd [St0 t, St6 t] RW1; FaddSt0St7: Fadd [St0 t, St7 t] RW1;
    FmulSt0St0: Fmul [St0 t, St0 t] RW1; FmulSt0St1: Fmul [St0 t, St1 t] RW1;
    FmulSt0St2: Fmul [St0 t, St2 t] RW1; FmulSt0St3: Fmul [St0 t, St3 t] RW1;
    FmulSt0St4: Fmul [St0 t, St4 t] RW1; FmulSt0St5: Fmul [St0 t, St5 t] RW1;
    FmulSt0St6: Fmul [St0 t, St6 t] RW1; FmulSt0St7: Fmul [St0 t, St7 t] RW1;
    FcomSt0St0: Fcom [St0 t, St0 t] 0; FcomSt0St1: Fcom [St0 t, St1 t] 0;
    FcomSt0St2: Fcom [St0 t, St2 t] 0; FcomSt0St3: Fcom [St0 t, St3 t] 0;
    FcomSt0St4: Fcom [St0 t, St4 t] 0; FcomSt0St5: Fcom [St0 t, St5 t] 0;
    FcomSt0St6: Fcom [St0 t, St6 t] 0; FcomSt0St7: Fcom [St0 t, St7 t] 0;
    FcompSt0St0: Fcomp [St0 t, St0 t] 0; FcompSt0St1: Fcomp [St0 t, St1 t] 0;
    FcompSt0St2: Fcomp [St0 t, St2 t] 0; FcompSt0St3: Fcomp [St0 t, St3 t] 0;
    FcompSt0St4: Fcomp [St0 t, St4 t] 0; FcompSt0St5: Fcomp [St0 t, St5 t] 0;
    FcompSt0St6: Fcomp [St0 t, St6 t] 0; FcompSt0St7: Fcomp [St0 t, St7 t] 0;
    FsubSt0St0: Fsub [St0 t, St0 t] RW1; FsubSt0St1: Fsub [St0 t, St1 t] RW1;
    FsubSt0St2: Fsub [St0 t, St2 t] RW1; FsubSt0St3: Fsub [St0 t, St3 t] RW1;
    FsubSt0St4: Fsub [St0 t, St4 t] RW1; FsubSt0St5: Fsub [St0 t, St5 t] RW1;
    FsubSt0St6: Fsub [St0 t, St6 t] RW1; FsubSt0St7: Fsub [St0 t, St7 t] RW1;
    FsubrSt0St0: Fsubr [St0 t, St0 t] RW1; FsubrSt0St1: Fsubr [St0 t, St1 t] RW1;
    FsubrSt0St2: Fsubr [St0 t, St2 t] RW1; FsubrSt0St3: Fsubr [St0 t, St3 t] RW1;
    FsubrSt0St4: Fsubr [St0 t, St4 t] RW1; FsubrSt0St5: Fsubr [St0 t, St5 t] RW1;
    FsubrSt0St6: Fsubr [St0 t, St6 t] RW1; FsubrSt0St7: Fsubr [St0 t, St7 t] RW1;
    FdivSt0St0: Fdiv [St0 t, St0 t] RW1; FdivSt0St1: Fdiv [St0 t, St1 t] RW1;
    FdivSt0St2: Fdiv [St0 t, St2 t] RW1; FdivSt0St3: Fdiv [St0 t, St3 t] RW1;
    FdivSt0St4: Fdiv [St0 t, St4 t] RW1; FdivSt0St5: Fdiv [St0 t, St5 t] RW1;
    FdivSt0St6: Fdiv [St0 t, St6 t] RW1; FdivSt0St7: Fdiv [St0 t, St7 t] RW1;
    FdivrSt0St0: Fdivr [St0 t, St0 t] RW1; FdivrSt0St1: Fdivr [St0 t, St1 t] RW1;
    FdivrSt0St2: Fdivr [St0 t, St2 t] RW1; FdivrSt0St3: Fdivr [St0 t, St3 t] RW1;
    FdivrSt0St4: Fdivr [St0 t, St4 t] RW1; FdivrSt0St5: Fdivr [St0 t, St5 t] RW1;
    FdivrSt0St6: Fdivr [St0 t, St6 t] RW1; FdivrSt0St7: Fdivr [St0 t, St7 t] RW1;

    // x87 register forms, escape D9
    FldSt0: Fld [St0 t] 0; FldSt1: Fld [St1 t] 0;
    FldSt2: Fld [St2 t] 0; FldSt3: Fld [St3 t] 0;
    FldSt4: Fld [St4 t] 0; FldSt5: Fld [St5 t] 0;
    FldSt6: Fld [St6 t] 0; FldSt7: Fld [St7 t] 0;
    FxchSt0: Fxch [St0 t, St0 t] RW1 | RW2; FxchSt1: Fxch [St0 t, St1 t] RW1 | RW2;
    FxchSt2: Fxch [St0 t, St2 t] RW1 | RW2; FxchSt3: Fxch [St0 t, St3 t] RW1 | RW2;
    FxchSt4: Fxch [St0 t, St4 t] RW1 | RW2; FxchSt5: Fxch [St0 t, St5 t] RW1 | RW2;
    FxchSt6: Fxch [St0 t, St6 t] RW1 | RW2; FxchSt7: Fxch [St0 t, St7 t] RW1 | RW2;
    Fnop: Fnop [] 0; Fchs: Fchs [] 0; Fabs: Fabs [] 0;
    Ftst: Ftst [] 0; Fxam: Fxam [] 0;
    Fld1: Fld1 [] 0; Fldl2t: Fldl2t [] 0; Fldl2e: Fldl2e [] 0;
    Fldpi: Fldpi [] 0; Fldlg2: Fldlg2 [] 0; Fldln2: Fldln2 [] 0;
    Fldz: Fldz [] 0;
    F2xm1: F2xm1 [] 0; Fyl2x: Fyl2x [] 0; Fptan: Fptan [] 0;
    Fpatan: Fpatan [] 0; Fxtract: Fxtract [] 0; Fprem1: Fprem1 [] 0;
    Fdecstp: Fdecstp [] 0; Fincstp: Fincstp [] 0; Fprem: Fprem [] 0;
    Fyl2xp1: Fyl2xp1 [] 0; Fsqrt: Fsqrt [] 0; Fsincos: Fsincos [] 0;
    Frndint: Frndint [] 0; Fscale: Fscale [] 0; Fsin: Fsin [] 0;
    Fcos: Fcos [] 0;

    // x87 register forms, escape DA
    FcmovbSt0: Fcmovb [St0 t, St0 t] W1; FcmovbSt1: Fcmovb [St0 t, St1 t] W1;
    FcmovbSt2: Fcmovb [St0 t, St2 t] W1; FcmovbSt3: Fcmovb [St0 t, St3 t] W1;
    FcmovbSt4: Fcmovb [St0 t, St4 t] W1; FcmovbSt5: Fcmovb [St0 t, St5 t] W1;
    FcmovbSt6: Fcmovb [St0 t, St6 t] W1; FcmovbSt7: Fcmovb [St0 t, St7 t] W1;
    FcmoveSt0: Fcmove [St0 t, St0 t] W1; FcmoveSt1: Fcmove [St0 t, St1 t] W1;
    FcmoveSt2: Fcmove [St0 t, St2 t] W1; FcmoveSt3: Fcmove [St0 t, St3 t] W1;
    FcmoveSt4: Fcmove [St0 t, St4 t] W1; FcmoveSt5: Fcmove [St0 t, St5 t] W1;
    FcmoveSt6: Fcmove [St0 t, St6 t] W1; FcmoveSt7: Fcmove [St0 t, St7 t] W1;
    FcmovbeSt0: Fcmovbe [St0 t, St0 t] W1; FcmovbeSt1: Fcmovbe [St0 t, St1 t] W1;
    FcmovbeSt2: Fcmovbe [St0 t, St2 t] W1; FcmovbeSt3: Fcmovbe [St0 t, St3 t] W1;
    FcmovbeSt4: Fcmovbe [St0 t, St4 t] W1; FcmovbeSt5: Fcmovbe [St0 t, St5 t] W1;
    FcmovbeSt6: Fcmovbe [St0 t, St6 t] W1; FcmovbeSt7: Fcmovbe [St0 t, St7 t] W1;
    FcmovuSt0: Fcmovu [St0 t, St0 t] W1; FcmovuSt1: Fcmovu [St0 t, St1 t] W1;
    FcmovuSt2: Fcmovu [St0 t, St2 t] W1; FcmovuSt3: Fcmovu [St0 t, St3 t] W1;
    FcmovuSt4: Fcmovu [St0 t, St4 t] W1; FcmovuSt5: Fcmovu [St0 t, St5 t] W1;
    FcmovuSt6: Fcmovu [St0 t, St6 t] W1; FcmovuSt7: Fcmovu [St0 t, St7 t] W1;
    Fucompp: Fucompp [] 0;

    // x87 register forms, escape DB
    FcmovnbSt0: Fcmovnb [St0 t, St0 t] W1; FcmovnbSt1: Fcmovnb [St0 t, St1 t] W1;
    FcmovnbSt2: Fcmovnb [St0 t, St2 t] W1; FcmovnbSt3: Fcmovnb [St0 t, St3 t] W1;
    FcmovnbSt4: Fcmovnb [St0 t, St4 t] W1; FcmovnbSt5: Fcmovnb [St0 t, St5 t] W1;
    FcmovnbSt6: Fcmovnb [St0 t, St6 t] W1; FcmovnbSt7: Fcmovnb [St0 t, St7 t] W1;
    FcmovneSt0: Fcmovne [St0 t, St0 t] W1; FcmovneSt1: Fcmovne [St0 t, St1 t] W1;
    FcmovneSt2: Fcmovne [St0 t, St2 t] W1; FcmovneSt3: Fcmovne [St0 t, St3 t] W1;
    FcmovneSt4: Fcmovne [St0 t, St4 t] W1; FcmovneSt5: Fcmovne [St0 t, St5 t] W1;
    FcmovneSt6: Fcmovne [St0 t, St6 t] W1; FcmovneSt7: Fcmovne [St0 t, St7 t] W1;
    FcmovnbeSt0: Fcmovnbe [St0 t, St0 t] W1; FcmovnbeSt1: Fcmovnbe [St0 t, St1 t] W1;
    FcmovnbeSt2: Fcmovnbe [St0 t, St2 t] W1; FcmovnbeSt3: Fcmovnbe [St0 t, St3 t] W1;
    FcmovnbeSt4: Fcmovnbe [St0 t, St4 t] W1; FcmovnbeSt5: Fcmovnbe [St0 t, St5 t] W1;
    FcmovnbeSt6: Fcmovnbe [St0 t, St6 t] W1; FcmovnbeSt7: Fcmovnbe [St0 t, St7 t] W1;
    FcmovnuSt0: Fcmovnu [St0 t, St0 t] W1; FcmovnuSt1: Fcmovnu [St0 t, St1 t] W1;
    FcmovnuSt2: Fcmovnu [St0 t, St2 t] W1; FcmovnuSt3: Fcmovnu [St0 t, St3 t] W1;
    FcmovnuSt4: Fcmovnu [St0 t, St4 t] W1; FcmovnuSt5: Fcmovnu [St0 t, St5 t] W1;
    FcmovnuSt6: Fcmovnu [St0 t, St6 t] W1; FcmovnuSt7: Fcmovnu [St0 t, St7 t] W1;
    Fnclex: Fnclex [] 0; Fninit: Fninit [] 0;
    FucomiSt0: Fucomi [St0 t, St0 t] 0; FucomiSt1: Fucomi [St0 t, St1 t] 0;
    FucomiSt2: Fucomi [St0 t, St2 t] 0; FucomiSt3: Fucomi [St0 t, St3 t] 0;
    FucomiSt4: Fucomi [St0 t, St4 t] 0; FucomiSt5: Fucomi [St0 t, St5 t] 0;
    FucomiSt6: Fucomi [St0 t, St6 t] 0; FucomiSt7: Fucomi [St0 t, St7 t] 0;
    FcomiSt0: Fcomi [St0 t, St0 t] 0; FcomiSt1: Fcomi [St0 t, St1 t] 0;
    FcomiSt2: Fcomi [St0 t, St2 t] 0; FcomiSt3: Fcomi [St0 t, St3 t] 0;
    FcomiSt4: Fcomi [St0 t, St4 t] 0; FcomiSt5: Fcomi [St0 t, St5 t] 0;
    FcomiSt6: Fcomi [St0 t, St6 t] 0; FcomiSt7: Fcomi [St0 t, St7 t] 0;

    // x87 register forms, escape DC
    FaddSt0ToSt0: Fadd [St0 t, St0 t] RW1; FaddSt1St0: Fadd [St1 t, St0 t] RW1;
    FaddSt2St0: Fadd [St2 t, St0 t] RW1; FaddSt3St0: Fadd [St3 t, St0 t] RW1;
    FaddSt4St0: Fadd [St4 t, St0 t] RW1; FaddSt5St0: Fadd [St5 t, St0 t] RW1;
    FaddSt6St0: Fadd [St6 t, St0 t] RW1; FaddSt7St0: Fadd [St7 t, St0 t] RW1;
    FmulSt0ToSt0: Fmul [St0 t, St0 t] RW1; FmulSt1St0: Fmul [St1 t, St0 t] RW1;
    FmulSt2St0: Fmul [St2 t, St0 t] RW1; FmulSt3St0: Fmul [St3 t, St0 t] RW1;
    FmulSt4St0: Fmul [St4 t, St0 t] RW1; FmulSt5St0: Fmul [St5 t, St0 t] RW1;
    FmulSt6St0: Fmul [St6 t, St0 t] RW1; FmulSt7St0: Fmul [St7 t, St0 t] RW1;
    FsubrSt0ToSt0: Fsubr [St0 t, St0 t] RW1; FsubrSt1St0: Fsubr [St1 t, St0 t] RW1;
    FsubrSt2St0: Fsubr [St2 t, St0 t] RW1; FsubrSt3St0: Fsubr [St3 t, St0 t] RW1;
    FsubrSt4St0: Fsubr [St4 t, St0 t] RW1; FsubrSt5St0: Fsubr [St5 t, St0 t] RW1;
    FsubrSt6St0: Fsubr [St6 t, St0 t] RW1; FsubrSt7St0: Fsubr [St7 t, St0 t] RW1;
    FsubSt0ToSt0: Fsub [St0 t, St0 t] RW1; FsubSt1St0: Fsub [St1 t, St0 t] RW1;
    FsubSt2St0: Fsub [St2 t, St0 t] RW1; FsubSt3St0: Fsub [St3 t, St0 t] RW1;
    FsubSt4St0: Fsub [St4 t, St0 t] RW1; FsubSt5St0: Fsub [St5 t, St0 t] RW1;
    FsubSt6St0: Fsub [St6 t, St0 t] RW1; FsubSt7St0: Fsub [St7 t, St0 t] RW1;
    FdivrSt0ToSt0: Fdivr [St0 t, St0 t] RW1; FdivrSt1St0: Fdivr [St1 t, St0 t] RW1;
    FdivrSt2St0: Fdivr [St2 t, St0 t] RW1; FdivrSt3St0: Fdivr [St3 t, St0 t] RW1;
    FdivrSt4St0: Fdivr [St4 t, St0 t] RW1; FdivrSt5St0: Fdivr [St5 t, St0 t] RW1;
    FdivrSt6St0: Fdivr [St6 t, St0 t] RW1; FdivrSt7St0: Fdivr [St7 t, St0 t] RW1;
    FdivSt0ToSt0: Fdiv [St0 t, St0 t] RW1; FdivSt1St0: Fdiv [St1 t, St0 t] RW1;
    FdivSt2St0: Fdiv [St2 t, St0 t] RW1; FdivSt3St0: Fdiv [St3 t, St0 t] RW1;
    FdivSt4St0: Fdiv [St4 t, St0 t] RW1; FdivSt5St0: Fdiv [St5 t, St0 t] RW1;
    FdivSt6St0: Fdiv [St6 t, St0 t] RW1; FdivSt7St0: Fdiv [St7 t, St0 t] RW1;

    // x87 register forms, escape DD
    FfreeSt0: Ffree [St0 t] 0; FfreeSt1: Ffree [St1 t] 0;
    FfreeSt2: Ffree [St2 t] 0; FfreeSt3: Ffree [St3 t] 0;
    FfreeSt4: Ffree [St4 t] 0; FfreeSt5: Ffree [St5 t] 0;
    FfreeSt6: Ffree [St6 t] 0; FfreeSt7: Ffree [St7 t] 0;
    FstSt0: Fst [St0 t] W1; FstSt1: Fst [St1 t] W1;
    FstSt2: Fst [St2 t] W1; FstSt3: Fst [St3 t] W1;
    FstSt4: Fst [St4 t] W1; FstSt5: Fst [St5 t] W1;
    FstSt6: Fst [St6 t] W1; FstSt7: Fst [St7 t] W1;
    FstpSt0: Fstp [St0 t] W1; FstpSt1: Fstp [St1 t] W1;
    FstpSt2: Fstp [St2 t] W1; FstpSt3: Fstp [St3 t] W1;
    FstpSt4: Fstp [St4 t] W1; FstpSt5: Fstp [St5 t] W1;
    FstpSt6: Fstp [St6 t] W1; FstpSt7: Fstp [St7 t] W1;
    FucomSt0: Fucom [St0 t] 0; FucomSt1: Fucom [St1 t] 0;
    FucomSt2: Fucom [St2 t] 0; FucomSt3: Fucom [St3 t] 0;
    FucomSt4: Fucom [St4 t] 0; FucomSt5: Fucom [St5 t] 0;
    FucomSt6: Fucom [St6 t] 0; FucomSt7: Fucom [St7 t] 0;
    FucompSt0: Fucomp [St0 t] 0; FucompSt1: Fucomp [St1 t] 0;
    FucompSt2: Fucomp [St2 t] 0; FucompSt3: Fucomp [St3 t] 0;
    FucompSt4: Fucomp [St4 t] 0; FucompSt5: Fucomp [St5 t] 0;
    FucompSt6: Fucomp [St6 t] 0; FucompSt7: Fucomp [St7 t] 0;

    // x87 register forms, escape DE
    FaddpSt0St0: Faddp [St0 t, St0 t] RW1; FaddpSt1St0: Faddp [St1 t, St0 t] RW1;
    FaddpSt2St0: Faddp [St2 t, St0 t] RW1; FaddpSt3St0: Faddp [St3 t, St0 t] RW1;
    FaddpSt4St0: Faddp [St4 t, St0 t] RW1; FaddpSt5St0: Faddp [St5 t, St0 t] RW1;
    FaddpSt6St0: Faddp [St6 t, St0 t] RW1; FaddpSt7St0: Faddp [St7 t, St0 t] RW1;
    FmulpSt0St0: Fmulp [St0 t, St0 t] RW1; FmulpSt1St0: Fmulp [St1 t, St0 t] RW1;
    FmulpSt2St0: Fmulp [St2 t, St0 t] RW1; FmulpSt3St0: Fmulp [St3 t, St0 t] RW1;
    FmulpSt4St0: Fmulp [St4 t, St0 t] RW1; FmulpSt5St0: Fmulp [St5 t, St0 t] RW1;
    FmulpSt6St0: Fmulp [St6 t, St0 t] RW1; FmulpSt7St0: Fmulp [St7 t, St0 t] RW1;
    Fcompp: Fcompp [] 0;
    FsubrpSt0St0: Fsubrp [St0 t, St0 t] RW1; FsubrpSt1St0: Fsubrp [St1 t, St0 t] RW1;
    FsubrpSt2St0: Fsubrp [St2 t, St0 t] RW1; FsubrpSt3St0: Fsubrp [St3 t, St0 t] RW1;
    FsubrpSt4St0: Fsubrp [St4 t, St0 t] RW1; FsubrpSt5St0: Fsubrp [St5 t, St0 t] RW1;
    FsubrpSt6St0: Fsubrp [St6 t, St0 t] RW1; FsubrpSt7St0: Fsubrp [St7 t, St0 t] RW1;
    FsubpSt0St0: Fsubp [St0 t, St0 t] RW1; FsubpSt1St0: Fsubp [St1 t, St0 t] RW1;
    FsubpSt2St0: Fsubp [St2 t, St0 t] RW1; FsubpSt3St0: Fsubp [St3 t, St0 t] RW1;
    FsubpSt4St0: Fsubp [St4 t, St0 t] RW1; FsubpSt5St0: Fsubp [St5 t, St0 t] RW1;
    FsubpSt6St0: Fsubp [St6 t, St0 t] RW1; FsubpSt7St0: Fsubp [St7 t, St0 t] RW1;
    FdivrpSt0St0: Fdivrp [St0 t, St0 t] RW1; FdivrpSt1St0: Fdivrp [St1 t, St0 t] RW1;
    FdivrpSt2St0: Fdivrp [St2 t, St0 t] RW1; FdivrpSt3St0: Fdivrp [St3 t, St0 t] RW1;
    FdivrpSt4St0: Fdivrp [St4 t, St0 t] RW1; FdivrpSt5St0: Fdivrp [St5 t, St0 t] RW1;
    FdivrpSt6St0: Fdivrp [St6 t, St0 t] RW1; FdivrpSt7St0: Fdivrp [St7 t, St0 t] RW1;
    FdivpSt0St0: Fdivp [St0 t, St0 t] RW1; FdivpSt1St0: Fdivp [St1 t, St0 t] RW1;
    FdivpSt2St0: Fdivp [St2 t, St0 t] RW1; FdivpSt3St0: Fdivp [St3 t, St0 t] RW1;
    FdivpSt4St0: Fdivp [St4 t, St0 t] RW1; FdivpSt5St0: Fdivp [St5 t, St0 t] RW1;
    FdivpSt6St0: Fdivp [St6 t, St0 t] RW1; FdivpSt7St0: Fdivp [St7 t, St0 t] RW1;

    // x87 register forms, escape DF
    FfreepSt0: Ffreep [St0 t] 0; FfreepSt1: Ffreep [St1 t] 0;
    FfreepSt2: Ffreep [St2 t] 0; FfreepSt3: Ffreep [St3 t] 0;
    FfreepSt4: Ffreep [St4 t] 0; FfreepSt5: Ffreep [St5 t] 0;
    FfreepSt6: Ffreep [St6 t] 0; FfreepSt7: Ffreep [St7 t] 0;
    FnstswAx: Fnstsw [Ax w] W1;
    FucomipSt0: Fucomip [St0 t, St0 t] 0; FucomipSt1: Fucomip [St0 t, St1 t] 0;
    FucomipSt2: Fucomip [St0 t, St2 t] 0; FucomipSt3: Fucomip [St0 t, St3 t] 0;
    FucomipSt4: Fucomip [St0 t, St4 t] 0; FucomipSt5: Fucomip [St0 t, St5 t] 0;
    FucomipSt6: Fucomip [St0 t, St6 t] 0; FucomipSt7: Fucomip [St0 t, St7 t] 0;
    FcomipSt0: Fcomip [St0 t, St0 t] 0; FcomipSt1: Fcomip [St0 t, St1 t] 0;
    FcomipSt2: Fcomip [St0 t, St2 t] 0; FcomipSt3: Fcomip [St0 t, St3 t] 0;
    FcomipSt4: Fcomip [St0 t, St4 t] 0; FcomipSt5: Fcomip [St0 t, St5 t] 0;
    FcomipSt6: Fcomip [St0 t, St6 t] 0; FcomipSt7: Fcomip [St0 t, St7 t] 0;
}

use self::Def as D;

/// The tree root: the one-byte opcode map.
pub(super) const ROOT: OpcodeTreeNode = t(Tbl::Main);

/// One-byte opcode map (table id 0, the tree root).
static MAIN: [OpcodeTreeNode; 256] = [
    // 0x00
    l(D::AddEbGb), l(D::AddEvGv), l(D::AddGbEb), l(D::AddGvEv), l(D::AddAlIb), l(D::AddEaxIz), l(D::PushEs), l(D::PopEs),
    l(D::OrEbGb), l(D::OrEvGv), l(D::OrGbEb), l(D::OrGvEv), l(D::OrAlIb), l(D::OrEaxIz), l(D::PushCs), t(Tbl::TwoByte),
    // 0x10
    l(D::AdcEbGb), l(D::AdcEvGv), l(D::AdcGbEb), l(D::AdcGvEv), l(D::AdcAlIb), l(D::AdcEaxIz), l(D::PushSs), l(D::PopSs),
    l(D::SbbEbGb), l(D::SbbEvGv), l(D::SbbGbEb), l(D::SbbGvEv), l(D::SbbAlIb), l(D::SbbEaxIz), l(D::PushDs), l(D::PopDs),
    // 0x20 (0x26/0x2E are prefixes, never reached through the map)
    l(D::AndEbGb), l(D::AndEvGv), l(D::AndGbEb), l(D::AndGvEv), l(D::AndAlIb), l(D::AndEaxIz), INV, l(D::Daa),
    l(D::SubEbGb), l(D::SubEvGv), l(D::SubGbEb), l(D::SubGvEv), l(D::SubAlIb), l(D::SubEaxIz), INV, l(D::Das),
    // 0x30
    l(D::XorEbGb), l(D::XorEvGv), l(D::XorGbEb), l(D::XorGvEv), l(D::XorAlIb), l(D::XorEaxIz), INV, l(D::Aaa),
    l(D::CmpEbGb), l(D::CmpEvGv), l(D::CmpGbEb), l(D::CmpGvEv), l(D::CmpAlIb), l(D::CmpEaxIz), INV, l(D::Aas),
    // 0x40 (REX territory in 64-bit mode; the prefix scanner consumes it there)
    l(D::IncR0), l(D::IncR1), l(D::IncR2), l(D::IncR3), l(D::IncR4), l(D::IncR5), l(D::IncR6), l(D::IncR7),
    l(D::DecR0), l(D::DecR1), l(D::DecR2), l(D::DecR3), l(D::DecR4), l(D::DecR5), l(D::DecR6), l(D::DecR7),
    // 0x50
    l(D::PushR0), l(D::PushR1), l(D::PushR2), l(D::PushR3), l(D::PushR4), l(D::PushR5), l(D::PushR6), l(D::PushR7),
    l(D::PopR0), l(D::PopR1), l(D::PopR2), l(D::PopR3), l(D::PopR4), l(D::PopR5), l(D::PopR6), l(D::PopR7),
    // 0x60
    osz(OsTbl::Pusha), osz(OsTbl::Popa), l(D::BoundGvMa), mode(ModeTbl::X63), INV, INV, INV, INV,
    l(D::PushIz), l(D::ImulGvEvIz), l(D::PushIb), l(D::ImulGvEvIb), l(D::Insb), osz(OsTbl::Ins), l(D::Outsb), osz(OsTbl::Outs),
    // 0x70
    l(D::JoJb), l(D::JnoJb), l(D::JbJb), l(D::JnbJb), l(D::JzJb), l(D::JnzJb), l(D::JbeJb), l(D::JnbeJb),
    l(D::JsJb), l(D::JnsJb), l(D::JpJb), l(D::JnpJb), l(D::JlJb), l(D::JnlJb), l(D::JleJb), l(D::JnleJb),
    // 0x80
    r8(RegTbl::Grp1x80), r8(RegTbl::Grp1x81), mode(ModeTbl::X82), r8(RegTbl::Grp1x83), l(D::TestEbGb), l(D::TestEvGv), l(D::XchgEbGb), l(D::XchgEvGv),
    l(D::MovEbGb), l(D::MovEvGv), l(D::MovGbEb), l(D::MovGvEv), l(D::MovEvSw), l(D::LeaGvM), l(D::MovSwEw), r8(RegTbl::Grp1a),
    // 0x90
    l(D::XchgR0Ax), l(D::XchgR1Ax), l(D::XchgR2Ax), l(D::XchgR3Ax), l(D::XchgR4Ax), l(D::XchgR5Ax), l(D::XchgR6Ax), l(D::XchgR7Ax),
    osz(OsTbl::Cbw), osz(OsTbl::Cwd), l(D::CallAp), l(D::Fwait), l(D::Pushf), l(D::Popf), l(D::Sahf), l(D::Lahf),
    // 0xA0
    l(D::MovAlOb), l(D::MovEaxOv), l(D::MovObAl), l(D::MovOvEax), l(D::Movsb), osz(OsTbl::Movs), l(D::Cmpsb), osz(OsTbl::Cmps),
    l(D::TestAlIb), l(D::TestEaxIz), l(D::Stosb), osz(OsTbl::Stos), l(D::Lodsb), osz(OsTbl::Lods), l(D::Scasb), osz(OsTbl::Scas),
    // 0xB0
    l(D::MovR0Ib), l(D::MovR1Ib), l(D::MovR2Ib), l(D::MovR3Ib), l(D::MovR4Ib), l(D::MovR5Ib), l(D::MovR6Ib), l(D::MovR7Ib),
    l(D::MovR0Iv), l(D::MovR1Iv), l(D::MovR2Iv), l(D::MovR3Iv), l(D::MovR4Iv), l(D::MovR5Iv), l(D::MovR6Iv), l(D::MovR7Iv),
    // 0xC0
    r8(RegTbl::Grp2xC0), r8(RegTbl::Grp2xC1), l(D::RetIw), l(D::Ret), vex(VexTbl::C4), vex(VexTbl::C5), r8(RegTbl::Grp11xC6), r8(RegTbl::Grp11xC7),
    l(D::EnterIwIb), l(D::Leave), l(D::RetfIw), l(D::Retf), l(D::Int3), l(D::IntIb), l(D::Into), osz(OsTbl::Iret),
    // 0xD0
    r8(RegTbl::Grp2xD0), r8(RegTbl::Grp2xD1), r8(RegTbl::Grp2xD2), r8(RegTbl::Grp2xD3), l(D::AamIb), l(D::AadIb), l(D::Salc), l(D::Xlatb),
    m2(ModTbl::FpuD8), m2(ModTbl::FpuD9), m2(ModTbl::FpuDa), m2(ModTbl::FpuDb), m2(ModTbl::FpuDc), m2(ModTbl::FpuDd), m2(ModTbl::FpuDe), m2(ModTbl::FpuDf),
    // 0xE0
    l(D::LoopneJb), l(D::LoopeJb), l(D::LoopJb), asz(AsTbl::Jcxz), l(D::InAlIb), l(D::InEaxIb), l(D::OutIbAl), l(D::OutIbEax),
    l(D::CallJz), l(D::JmpJz), l(D::JmpAp), l(D::JmpJb), l(D::InAlDx), l(D::InEaxDx), l(D::OutDxAl), l(D::OutDxEax),
    // 0xF0 (0xF0/0xF2/0xF3 are prefixes)
    INV, l(D::Int1), INV, INV, l(D::Hlt), l(D::Cmc), r8(RegTbl::Grp3xF6), r8(RegTbl::Grp3xF7),
    l(D::Clc), l(D::Stc), l(D::Cli), l(D::Sti), l(D::Cld), l(D::Std), r8(RegTbl::Grp4), r8(RegTbl::Grp5),
];

/// Two-byte opcode map (0F xx).
static TWO_BYTE: [OpcodeTreeNode; 256] = [
    // 0x00
    r8(RegTbl::Grp6), m2(ModTbl::Grp7), l(D::LarGvEw), l(D::LslGvEw), INV, mode(ModeTbl::Syscall), l(D::Clts), mode(ModeTbl::Sysret),
    l(D::Invd), l(D::Wbinvd), INV, l(D::Ud2), INV, ven(VenTbl::Prefetch), ven(VenTbl::Femms), ven(VenTbl::Amd3dnow),
    // 0x10
    mp(MandTbl::M0f10), mp(MandTbl::M0f11), mp(MandTbl::M0f12), mp(MandTbl::M0f13), mp(MandTbl::M0f14), mp(MandTbl::M0f15), mp(MandTbl::M0f16), mp(MandTbl::M0f17),
    m2(ModTbl::Grp16), l(D::NopEv), l(D::NopEv), l(D::NopEv), l(D::NopEv), l(D::NopEv), l(D::NopEv), l(D::NopEv),
    // 0x20
    l(D::MovRdCd), l(D::MovRdDd), l(D::MovCdRd), l(D::MovDdRd), INV, INV, INV, INV,
    mp(MandTbl::M0f28), mp(MandTbl::M0f29), mp(MandTbl::M0f2a), mp(MandTbl::M0f2b), mp(MandTbl::M0f2c), mp(MandTbl::M0f2d), mp(MandTbl::M0f2e), mp(MandTbl::M0f2f),
    // 0x30
    l(D::Wrmsr), l(D::Rdtsc), l(D::Rdmsr), l(D::Rdpmc), l(D::Sysenter), l(D::Sysexit), INV, INV,
    t(Tbl::T38), INV, t(Tbl::T3a), INV, INV, INV, INV, INV,
    // 0x40
    l(D::CmovoGvEv), l(D::CmovnoGvEv), l(D::CmovbGvEv), l(D::CmovnbGvEv), l(D::CmovzGvEv), l(D::CmovnzGvEv), l(D::CmovbeGvEv), l(D::CmovnbeGvEv),
    l(D::CmovsGvEv), l(D::CmovnsGvEv), l(D::CmovpGvEv), l(D::CmovnpGvEv), l(D::CmovlGvEv), l(D::CmovnlGvEv), l(D::CmovleGvEv), l(D::CmovnleGvEv),
    // 0x50
    mp(MandTbl::M0f50), mp(MandTbl::M0f51), mp(MandTbl::M0f52), mp(MandTbl::M0f53), mp(MandTbl::M0f54), mp(MandTbl::M0f55), mp(MandTbl::M0f56), mp(MandTbl::M0f57),
    mp(MandTbl::M0f58), mp(MandTbl::M0f59), mp(MandTbl::M0f5a), mp(MandTbl::M0f5b), mp(MandTbl::M0f5c), mp(MandTbl::M0f5d), mp(MandTbl::M0f5e), mp(MandTbl::M0f5f),
    // 0x60
    mp(MandTbl::M0f60), mp(MandTbl::M0f61), mp(MandTbl::M0f62), mp(MandTbl::M0f63), mp(MandTbl::M0f64), mp(MandTbl::M0f65), mp(MandTbl::M0f66), mp(MandTbl::M0f67),
    mp(MandTbl::M0f68), mp(MandTbl::M0f69), mp(MandTbl::M0f6a), mp(MandTbl::M0f6b), mp(MandTbl::M0f6c), mp(MandTbl::M0f6d), mp(MandTbl::M0f6e), mp(MandTbl::M0f6f),
    // 0x70
    mp(MandTbl::M0f70), mp(MandTbl::M0f71), mp(MandTbl::M0f72), mp(MandTbl::M0f73), mp(MandTbl::M0f74), mp(MandTbl::M0f75), mp(MandTbl::M0f76), l(D::Emms),
    INV, INV, INV, INV, mp(MandTbl::M0f7c), mp(MandTbl::M0f7d), mp(MandTbl::M0f7e), mp(MandTbl::M0f7f),
    // 0x80
    l(D::JoJz), l(D::JnoJz), l(D::JbJz), l(D::JnbJz), l(D::JzJz), l(D::JnzJz), l(D::JbeJz), l(D::JnbeJz),
    l(D::JsJz), l(D::JnsJz), l(D::JpJz), l(D::JnpJz), l(D::JlJz), l(D::JnlJz), l(D::JleJz), l(D::JnleJz),
    // 0x90
    l(D::SetoEb), l(D::SetnoEb), l(D::SetbEb), l(D::SetnbEb), l(D::SetzEb), l(D::SetnzEb), l(D::SetbeEb), l(D::SetnbeEb),
    l(D::SetsEb), l(D::SetnsEb), l(D::SetpEb), l(D::SetnpEb), l(D::SetlEb), l(D::SetnlEb), l(D::SetleEb), l(D::SetnleEb),
    // 0xA0
    l(D::PushFs), l(D::PopFs), l(D::Cpuid), l(D::BtEvGv), l(D::ShldEvGvIb), l(D::ShldEvGvCl), INV, INV,
    l(D::PushGs), l(D::PopGs), l(D::Rsm), l(D::BtsEvGv), l(D::ShrdEvGvIb), l(D::ShrdEvGvCl), m2(ModTbl::Grp15), l(D::ImulGvEv),
    // 0xB0
    l(D::CmpxchgEbGb), l(D::CmpxchgEvGv), l(D::LssGvM), l(D::BtrEvGv), l(D::LfsGvM), l(D::LgsGvM), l(D::MovzxGvEb), l(D::MovzxGvEw),
    mp(MandTbl::M0fb8), INV, r8(RegTbl::Grp8), l(D::BtcEvGv), mp(MandTbl::M0fbc), mp(MandTbl::M0fbd), l(D::MovsxGvEb), l(D::MovsxGvEw),
    // 0xC0
    l(D::XaddEbGb), l(D::XaddEvGv), mp(MandTbl::M0fc2), l(D::MovntiMyGy), mp(MandTbl::M0fc4), mp(MandTbl::M0fc5), mp(MandTbl::M0fc6), m2(ModTbl::Grp9),
    l(D::BswapR0), l(D::BswapR1), l(D::BswapR2), l(D::BswapR3), l(D::BswapR4), l(D::BswapR5), l(D::BswapR6), l(D::BswapR7),
    // 0xD0
    mp(MandTbl::M0fd0), mp(MandTbl::M0fd1), mp(MandTbl::M0fd2), mp(MandTbl::M0fd3), mp(MandTbl::M0fd4), mp(MandTbl::M0fd5), mp(MandTbl::M0fd6), mp(MandTbl::M0fd7),
    mp(MandTbl::M0fd8), mp(MandTbl::M0fd9), mp(MandTbl::M0fda), mp(MandTbl::M0fdb), mp(MandTbl::M0fdc), mp(MandTbl::M0fdd), mp(MandTbl::M0fde), mp(MandTbl::M0fdf),
    // 0xE0
    mp(MandTbl::M0fe0), mp(MandTbl::M0fe1), mp(MandTbl::M0fe2), mp(MandTbl::M0fe3), mp(MandTbl::M0fe4), mp(MandTbl::M0fe5), mp(MandTbl::M0fe6), mp(MandTbl::M0fe7),
    mp(MandTbl::M0fe8), mp(MandTbl::M0fe9), mp(MandTbl::M0fea), mp(MandTbl::M0feb), mp(MandTbl::M0fec), mp(MandTbl::M0fed), mp(MandTbl::M0fee), mp(MandTbl::M0fef),
    // 0xF0
    mp(MandTbl::M0ff0), mp(MandTbl::M0ff1), mp(MandTbl::M0ff2), mp(MandTbl::M0ff3), mp(MandTbl::M0ff4), mp(MandTbl::M0ff5), mp(MandTbl::M0ff6), mp(MandTbl::M0ff7),
    mp(MandTbl::M0ff8), mp(MandTbl::M0ff9), mp(MandTbl::M0ffa), mp(MandTbl::M0ffb), mp(MandTbl::M0ffc), mp(MandTbl::M0ffd), mp(MandTbl::M0ffe), INV,
];

/// Builds a mostly-empty table from `(index, node)` pairs.
const fn sparse<const N: usize>(entries: &[(u8, OpcodeTreeNode)]) -> [OpcodeTreeNode; N] {
    let mut table = [INV; N];
    let mut i = 0;
    while i < entries.len() {
        table[entries[i].0 as usize] = entries[i].1;
        i += 1;
    }
    table
}

/// Three-byte opcode map (0F 38 xx).
static T38: [OpcodeTreeNode; 256] = sparse(&[
    (0x00, mp(MandTbl::M38x00)), (0x01, mp(MandTbl::M38x01)), (0x02, mp(MandTbl::M38x02)),
    (0x03, mp(MandTbl::M38x03)), (0x04, mp(MandTbl::M38x04)), (0x05, mp(MandTbl::M38x05)),
    (0x06, mp(MandTbl::M38x06)), (0x07, mp(MandTbl::M38x07)), (0x08, mp(MandTbl::M38x08)),
    (0x09, mp(MandTbl::M38x09)), (0x0A, mp(MandTbl::M38x0a)), (0x0B, mp(MandTbl::M38x0b)),
    (0x17, mp(MandTbl::M38x17)),
    (0x1C, mp(MandTbl::M38x1c)), (0x1D, mp(MandTbl::M38x1d)), (0x1E, mp(MandTbl::M38x1e)),
    (0xF0, mp(MandTbl::M38xf0)), (0xF1, mp(MandTbl::M38xf1)),
]);

/// Three-byte opcode map (0F 3A xx).
static T3A: [OpcodeTreeNode; 256] = sparse(&[
    (0x08, mp(MandTbl::M3a08)), (0x09, mp(MandTbl::M3a09)), (0x0A, mp(MandTbl::M3a0a)),
    (0x0B, mp(MandTbl::M3a0b)), (0x0C, mp(MandTbl::M3a0c)), (0x0D, mp(MandTbl::M3a0d)),
    (0x0E, mp(MandTbl::M3a0e)), (0x0F, mp(MandTbl::M3a0f)),
]);

/// VEX map 1 (0F), no implied prefix.
static VEX_0F: [OpcodeTreeNode; 256] = sparse(&[
    (0x10, l(D::VmovupsVW)), (0x11, l(D::VmovupsWV)),
    (0x28, l(D::VmovapsVW)), (0x29, l(D::VmovapsWV)),
    (0x51, l(D::VsqrtpsVW)),
    (0x54, l(D::VandpsVHW)), (0x55, l(D::VandnpsVHW)), (0x56, l(D::VorpsVHW)), (0x57, l(D::VxorpsVHW)),
    (0x58, l(D::VaddpsVHW)), (0x59, l(D::VmulpsVHW)),
    (0x5C, l(D::VsubpsVHW)), (0x5D, l(D::VminpsVHW)), (0x5E, l(D::VdivpsVHW)), (0x5F, l(D::VmaxpsVHW)),
    (0x77, vl(VexLTbl::Vzero)),
]);

/// VEX map 1 (0F), implied 66.
static VEX_0F_66: [OpcodeTreeNode; 256] = sparse(&[
    (0x10, l(D::VmovupdVW)), (0x11, l(D::VmovupdWV)),
    (0x28, l(D::VmovapdVW)), (0x29, l(D::VmovapdWV)),
    (0x51, l(D::VsqrtpdVW)),
    (0x54, l(D::VandpdVHW)), (0x55, l(D::VandnpdVHW)), (0x56, l(D::VorpdVHW)), (0x57, l(D::VxorpdVHW)),
    (0x58, l(D::VaddpdVHW)), (0x59, l(D::VmulpdVHW)),
    (0x5C, l(D::VsubpdVHW)), (0x5D, l(D::VminpdVHW)), (0x5E, l(D::VdivpdVHW)), (0x5F, l(D::VmaxpdVHW)),
    (0x6E, vw(VexWTbl::M6e)), (0x6F, l(D::VmovdqaVW)),
    (0x7E, vw(VexWTbl::M7e)), (0x7F, l(D::VmovdqaWV)),
    (0xD4, l(D::VpaddqVHW)), (0xDB, l(D::VpandVHW)),
    (0xEB, l(D::VporVHW)), (0xEF, l(D::VpxorVHW)),
    (0xF8, l(D::VpsubbVHW)), (0xF9, l(D::VpsubwVHW)), (0xFA, l(D::VpsubdVHW)), (0xFB, l(D::VpsubqVHW)),
    (0xFC, l(D::VpaddbVHW)), (0xFD, l(D::VpaddwVHW)), (0xFE, l(D::VpadddVHW)),
]);

/// VEX map 1 (0F), implied F3.
static VEX_0F_F3: [OpcodeTreeNode; 256] = sparse(&[
    (0x10, l(D::VmovssVW)), (0x11, l(D::VmovssWV)),
    (0x6F, l(D::VmovdquVW)),
    (0x7E, l(D::VmovqVW)), (0x7F, l(D::VmovdquWV)),
]);

/// VEX map 1 (0F), implied F2.
static VEX_0F_F2: [OpcodeTreeNode; 256] = sparse(&[
    (0x10, l(D::VmovsdVW)), (0x11, l(D::VmovsdWV)),
    (0xF0, l(D::VlddquVM)),
]);

/// VEX map 2 (0F 38), implied 66.
static VEX_38: [OpcodeTreeNode; 256] = sparse(&[
    (0x00, l(D::VpshufbVHW)), (0x01, l(D::VphaddwVHW)), (0x02, l(D::VphadddVHW)),
    (0x17, l(D::VptestVW)),
    (0x1C, l(D::VpabsbVW)), (0x1D, l(D::VpabswVW)), (0x1E, l(D::VpabsdVW)),
]);

/// VEX map 3 (0F 3A), implied 66.
static VEX_3A: [OpcodeTreeNode; 256] = sparse(&[
    (0x08, l(D::VroundpsVWIb)), (0x09, l(D::VroundpdVWIb)),
    (0x0A, l(D::VroundssVHWIb)), (0x0B, l(D::VroundsdVHWIb)),
    (0x0C, l(D::VblendpsVHWIb)), (0x0D, l(D::VblendpdVHWIb)),
    (0x0E, l(D::VpblendwVHWIb)), (0x0F, l(D::VpalignrVHWIb)),
    (0x18, l(D::Vinsertf128VHWIb)), (0x19, l(D::Vextractf128WVIb)),
    (0x4A, l(D::VblendvpsVHWL)), (0x4B, l(D::VblendvpdVHWL)), (0x4C, l(D::VpblendvbVHWL)),
]);

pub(super) static TABLE: &[[OpcodeTreeNode; 256]] = &[
    MAIN, TWO_BYTE, T38, T3A, VEX_0F, VEX_0F_66, VEX_0F_F3, VEX_0F_F2, VEX_38, VEX_3A,
];

/// 3DNow! trailing-opcode map.
static AMD3DNOW_MAIN: [OpcodeTreeNode; 256] = sparse(&[
    (0x0C, l(D::Pi2fwPQ)), (0x0D, l(D::Pi2fdPQ)),
    (0x1C, l(D::Pf2iwPQ)), (0x1D, l(D::Pf2idPQ)),
    (0x8A, l(D::PfnaccPQ)), (0x8E, l(D::PfpnaccPQ)),
    (0x90, l(D::PfcmpgePQ)), (0x94, l(D::PfminPQ)), (0x96, l(D::PfrcpPQ)), (0x97, l(D::PfrsqrtPQ)),
    (0x9A, l(D::PfsubPQ)), (0x9E, l(D::PfaddPQ)),
    (0xA0, l(D::PfcmpgtPQ)), (0xA4, l(D::PfmaxPQ)), (0xA6, l(D::Pfrcpit1PQ)), (0xA7, l(D::Pfrsqit1PQ)),
    (0xAA, l(D::PfsubrPQ)), (0xAE, l(D::PfaccPQ)),
    (0xB0, l(D::PfcmpeqPQ)), (0xB4, l(D::PfmulPQ)), (0xB6, l(D::Pfrcpit2PQ)), (0xB7, l(D::PmulhrwPQ)),
    (0xBB, l(D::PswapdPQ)), (0xBF, l(D::PavgusbPQ)),
]);

pub(super) static AMD3DNOW: &[[OpcodeTreeNode; 256]] = &[AMD3DNOW_MAIN];

pub(super) static MODRM_REG: &[[OpcodeTreeNode; 8]] = &[
    // Grp1x80: 80 /r, Eb Ib
    [l(D::AddEbIb), l(D::OrEbIb), l(D::AdcEbIb), l(D::SbbEbIb), l(D::AndEbIb), l(D::SubEbIb), l(D::XorEbIb), l(D::CmpEbIb)],
    // Grp1x81: 81 /r, Ev Iz
    [l(D::AddEvIz), l(D::OrEvIz), l(D::AdcEvIz), l(D::SbbEvIz), l(D::AndEvIz), l(D::SubEvIz), l(D::XorEvIz), l(D::CmpEvIz)],
    // Grp1x83: 83 /r, Ev sIb
    [l(D::AddEvIb), l(D::OrEvIb), l(D::AdcEvIb), l(D::SbbEvIb), l(D::AndEvIb), l(D::SubEvIb), l(D::XorEvIb), l(D::CmpEvIb)],
    // Grp1a: 8F /r
    [l(D::PopEv), INV, INV, INV, INV, INV, INV, INV],
    // Grp2xC0: C0 /r, Eb Ib
    [l(D::RolEbIb), l(D::RorEbIb), l(D::RclEbIb), l(D::RcrEbIb), l(D::ShlEbIb), l(D::ShrEbIb), l(D::SalEbIb), l(D::SarEbIb)],
    // Grp2xC1: C1 /r, Ev Ib
    [l(D::RolEvIb), l(D::RorEvIb), l(D::RclEvIb), l(D::RcrEvIb), l(D::ShlEvIb), l(D::ShrEvIb), l(D::SalEvIb), l(D::SarEvIb)],
    // Grp2xD0: D0 /r, Eb 1
    [l(D::RolEb1), l(D::RorEb1), l(D::RclEb1), l(D::RcrEb1), l(D::ShlEb1), l(D::ShrEb1), l(D::SalEb1), l(D::SarEb1)],
    // Grp2xD1: D1 /r, Ev 1
    [l(D::RolEv1), l(D::RorEv1), l(D::RclEv1), l(D::RcrEv1), l(D::ShlEv1), l(D::ShrEv1), l(D::SalEv1), l(D::SarEv1)],
    // Grp2xD2: D2 /r, Eb CL
    [l(D::RolEbCl), l(D::RorEbCl), l(D::RclEbCl), l(D::RcrEbCl), l(D::ShlEbCl), l(D::ShrEbCl), l(D::SalEbCl), l(D::SarEbCl)],
    // Grp2xD3: D3 /r, Ev CL
    [l(D::RolEvCl), l(D::RorEvCl), l(D::RclEvCl), l(D::RcrEvCl), l(D::ShlEvCl), l(D::ShrEvCl), l(D::SalEvCl), l(D::SarEvCl)],
    // Grp3xF6: F6 /r, Eb
    [l(D::TestEbIb), l(D::TestEbIb), l(D::NotEb), l(D::NegEb), l(D::MulEb), l(D::ImulEb), l(D::DivEb), l(D::IdivEb)],
    // Grp3xF7: F7 /r, Ev
    [l(D::TestEvIz), l(D::TestEvIz), l(D::NotEv), l(D::NegEv), l(D::MulEv), l(D::ImulEv), l(D::DivEv), l(D::IdivEv)],
    // Grp4: FE /r
    [l(D::IncEb), l(D::DecEb), INV, INV, INV, INV, INV, INV],
    // Grp5: FF /r
    [l(D::IncEv), l(D::DecEv), l(D::CallEv), l(D::CallEp), l(D::JmpEv), l(D::JmpEp), l(D::PushEv), INV],
    // Grp6: 0F 00 /r
    [l(D::SldtMwRv), l(D::StrMwRv), l(D::LldtEw), l(D::LtrEw), l(D::VerrEw), l(D::VerwEw), INV, INV],
    // Grp7Mem: 0F 01 /r, mod != 11
    [l(D::SgdtM), l(D::SidtM), l(D::LgdtM), l(D::LidtM), l(D::SmswMw), INV, l(D::LmswMw), l(D::InvlpgMb)],
    // Grp7Reg: 0F 01 /r, mod == 11
    [rm(RmTbl::Grp7Reg0), rm(RmTbl::Grp7Reg1), rm(RmTbl::Grp7Reg2), INV, l(D::SmswRv), INV, l(D::LmswRw), rm(RmTbl::Grp7Reg7)],
    // Grp8: 0F BA /r, Ev Ib
    [INV, INV, INV, INV, l(D::BtEvIb), l(D::BtsEvIb), l(D::BtrEvIb), l(D::BtcEvIb)],
    // Grp9Mem: 0F C7 /r, mod != 11
    [INV, osz(OsTbl::Cmpxchg8b), INV, INV, INV, INV, INV, INV],
    // Grp11xC6: C6 /r
    [l(D::MovEbIb), INV, INV, INV, INV, INV, INV, INV],
    // Grp11xC7: C7 /r
    [l(D::MovEvIz), INV, INV, INV, INV, INV, INV, INV],
    // Grp12Mmx: 0F 71 /r
    [INV, INV, l(D::PsrlwNIb), INV, l(D::PsrawNIb), INV, l(D::PsllwNIb), INV],
    // Grp12Xmm: 66 0F 71 /r
    [INV, INV, l(D::PsrlwUIb), INV, l(D::PsrawUIb), INV, l(D::PsllwUIb), INV],
    // Grp13Mmx: 0F 72 /r
    [INV, INV, l(D::PsrldNIb), INV, l(D::PsradNIb), INV, l(D::PslldNIb), INV],
    // Grp13Xmm: 66 0F 72 /r
    [INV, INV, l(D::PsrldUIb), INV, l(D::PsradUIb), INV, l(D::PslldUIb), INV],
    // Grp14Mmx: 0F 73 /r
    [INV, INV, l(D::PsrlqNIb), INV, INV, INV, l(D::PsllqNIb), INV],
    // Grp14Xmm: 66 0F 73 /r
    [INV, INV, l(D::PsrlqUIb), l(D::PsrldqUIb), INV, INV, l(D::PsllqUIb), l(D::PslldqUIb)],
    // Grp15Mem: 0F AE /r, mod != 11
    [l(D::FxsaveM), l(D::FxrstorM), l(D::LdmxcsrMd), l(D::StmxcsrMd), INV, INV, INV, l(D::ClflushMb)],
    // Grp15Reg: 0F AE /r, mod == 11
    [INV, INV, INV, INV, INV, l(D::Lfence), l(D::Mfence), l(D::Sfence)],
    // Grp16Mem: 0F 18 /r, mod != 11
    [l(D::PrefetchntaMb), l(D::Prefetcht0Mb), l(D::Prefetcht1Mb), l(D::Prefetcht2Mb), INV, INV, INV, INV],
    // GrpPrefetch: 0F 0D /r (AMD)
    [l(D::PrefetchMb), l(D::PrefetchwMb), INV, INV, INV, INV, INV, INV],
    // FpuD8Mem
    [l(D::FaddMd), l(D::FmulMd), l(D::FcomMd), l(D::FcompMd), l(D::FsubMd), l(D::FsubrMd), l(D::FdivMd), l(D::FdivrMd)],
    // FpuD9Mem
    [l(D::FldMd), INV, l(D::FstMd), l(D::FstpMd), l(D::FldenvM), l(D::FldcwMw), l(D::FnstenvM), l(D::FnstcwMw)],
    // FpuDaMem
    [l(D::FiaddMd), l(D::FimulMd), l(D::FicomMd), l(D::FicompMd), l(D::FisubMd), l(D::FisubrMd), l(D::FidivMd), l(D::FidivrMd)],
    // FpuDbMem
    [l(D::FildMd), l(D::FisttpMd), l(D::FistMd), l(D::FistpMd), INV, l(D::FldMt), INV, l(D::FstpMt)],
    // FpuDcMem
    [l(D::FaddMq), l(D::FmulMq), l(D::FcomMq), l(D::FcompMq), l(D::FsubMq), l(D::FsubrMq), l(D::FdivMq), l(D::FdivrMq)],
    // FpuDdMem
    [l(D::FldMq), l(D::FisttpMq), l(D::FstMq), l(D::FstpMq), l(D::FrstorM), INV, l(D::FnsaveM), l(D::FnstswMw)],
    // FpuDeMem
    [l(D::FiaddMw), l(D::FimulMw), l(D::FicomMw), l(D::FicompMw), l(D::FisubMw), l(D::FisubrMw), l(D::FidivMw), l(D::FidivrMw)],
    // FpuDfMem
    [l(D::FildMw), l(D::FisttpMw), l(D::FistMw), l(D::FistpMw), l(D::FbldMt), l(D::FildMq), l(D::FbstpMt), l(D::FistpMq)],
];

pub(super) static MODRM_MOD: &[[OpcodeTreeNode; 2]] = &[
    // Grp7
    [r8(RegTbl::Grp7Mem), r8(RegTbl::Grp7Reg)],
    // Grp9
    [r8(RegTbl::Grp9Mem), INV],
    // Grp15
    [r8(RegTbl::Grp15Mem), r8(RegTbl::Grp15Reg)],
    // Grp16
    [r8(RegTbl::Grp16Mem), l(D::NopEv)],
    // Movlps: 0F 12, memory and register forms differ
    [l(D::MovlpsVM), l(D::MovhlpsVU)],
    // Movhps: 0F 16
    [l(D::MovhpsVM), l(D::MovlhpsVU)],
    // FpuD8..FpuDf
    [r8(RegTbl::FpuD8Mem), x87(X87Tbl::D8)],
    [r8(RegTbl::FpuD9Mem), x87(X87Tbl::D9)],
    [r8(RegTbl::FpuDaMem), x87(X87Tbl::Da)],
    [r8(RegTbl::FpuDbMem), x87(X87Tbl::Db)],
    [r8(RegTbl::FpuDcMem), x87(X87Tbl::Dc)],
    [r8(RegTbl::FpuDdMem), x87(X87Tbl::Dd)],
    [r8(RegTbl::FpuDeMem), x87(X87Tbl::De)],
    [r8(RegTbl::FpuDfMem), x87(X87Tbl::Df)],
];

pub(super) static MODRM_RM: &[[OpcodeTreeNode; 8]] = &[
    // Grp7Reg0: 0F 01 /0, mod == 11
    [INV, l(D::Vmcall), l(D::Vmlaunch), l(D::Vmresume), l(D::Vmxoff), INV, INV, INV],
    // Grp7Reg1: 0F 01 /1, mod == 11
    [l(D::Monitor), l(D::Mwait), INV, INV, INV, INV, INV, INV],
    // Grp7Reg2: 0F 01 /2, mod == 11
    [l(D::Xgetbv), l(D::Xsetbv), INV, INV, INV, INV, INV, INV],
    // Grp7Reg7: 0F 01 /7, mod == 11
    [l(D::Swapgs), l(D::Rdtscp), INV, INV, INV, INV, INV, INV],
];

/// Mandatory-prefix tables, indexed none / F3 / F2 / 66.
pub(super) static MANDATORY: &[[OpcodeTreeNode; 4]] = &[
    /* 0F 10 */ [l(D::MovupsVW), l(D::MovssVW), l(D::MovsdVW), l(D::MovupdVW)],
    /* 0F 11 */ [l(D::MovupsWV), l(D::MovssWV), l(D::MovsdWV), l(D::MovupdWV)],
    /* 0F 12 */ [m2(ModTbl::Movlps), l(D::MovsldupVW), l(D::MovddupVW), l(D::MovlpdVM)],
    /* 0F 13 */ [l(D::MovlpsMV), INV, INV, l(D::MovlpdMV)],
    /* 0F 14 */ [l(D::UnpcklpsVW), INV, INV, l(D::UnpcklpdVW)],
    /* 0F 15 */ [l(D::UnpckhpsVW), INV, INV, l(D::UnpckhpdVW)],
    /* 0F 16 */ [m2(ModTbl::Movhps), l(D::MovshdupVW), INV, l(D::MovhpdVM)],
    /* 0F 17 */ [l(D::MovhpsMV), INV, INV, l(D::MovhpdMV)],
    /* 0F 28 */ [l(D::MovapsVW), INV, INV, l(D::MovapdVW)],
    /* 0F 29 */ [l(D::MovapsWV), INV, INV, l(D::MovapdWV)],
    /* 0F 2A */ [l(D::Cvtpi2psVQ), l(D::Cvtsi2ssVE), l(D::Cvtsi2sdVE), l(D::Cvtpi2pdVQ)],
    /* 0F 2B */ [l(D::MovntpsMV), INV, INV, l(D::MovntpdMV)],
    /* 0F 2C */ [l(D::Cvttps2piPW), l(D::Cvttss2siGW), l(D::Cvttsd2siGW), l(D::Cvttpd2piPW)],
    /* 0F 2D */ [l(D::Cvtps2piPW), l(D::Cvtss2siGW), l(D::Cvtsd2siGW), l(D::Cvtpd2piPW)],
    /* 0F 2E */ [l(D::UcomissVW), INV, INV, l(D::UcomisdVW)],
    /* 0F 2F */ [l(D::ComissVW), INV, INV, l(D::ComisdVW)],
    /* 0F 50 */ [l(D::MovmskpsGU), INV, INV, l(D::MovmskpdGU)],
    /* 0F 51 */ [l(D::SqrtpsVW), l(D::SqrtssVW), l(D::SqrtsdVW), l(D::SqrtpdVW)],
    /* 0F 52 */ [l(D::RsqrtpsVW), l(D::RsqrtssVW), INV, INV],
    /* 0F 53 */ [l(D::RcppsVW), l(D::RcpssVW), INV, INV],
    /* 0F 54 */ [l(D::AndpsVW), INV, INV, l(D::AndpdVW)],
    /* 0F 55 */ [l(D::AndnpsVW), INV, INV, l(D::AndnpdVW)],
    /* 0F 56 */ [l(D::OrpsVW), INV, INV, l(D::OrpdVW)],
    /* 0F 57 */ [l(D::XorpsVW), INV, INV, l(D::XorpdVW)],
    /* 0F 58 */ [l(D::AddpsVW), l(D::AddssVW), l(D::AddsdVW), l(D::AddpdVW)],
    /* 0F 59 */ [l(D::MulpsVW), l(D::MulssVW), l(D::MulsdVW), l(D::MulpdVW)],
    /* 0F 5A */ [l(D::Cvtps2pdVW), l(D::Cvtss2sdVW), l(D::Cvtsd2ssVW), l(D::Cvtpd2psVW)],
    /* 0F 5B */ [l(D::Cvtdq2psVW), l(D::Cvttps2dqVW), INV, l(D::Cvtps2dqVW)],
    /* 0F 5C */ [l(D::SubpsVW), l(D::SubssVW), l(D::SubsdVW), l(D::SubpdVW)],
    /* 0F 5D */ [l(D::MinpsVW), l(D::MinssVW), l(D::MinsdVW), l(D::MinpdVW)],
    /* 0F 5E */ [l(D::DivpsVW), l(D::DivssVW), l(D::DivsdVW), l(D::DivpdVW)],
    /* 0F 5F */ [l(D::MaxpsVW), l(D::MaxssVW), l(D::MaxsdVW), l(D::MaxpdVW)],
    /* 0F 60 */ [l(D::PunpcklbwPQ), INV, INV, l(D::PunpcklbwVW)],
    /* 0F 61 */ [l(D::PunpcklwdPQ), INV, INV, l(D::PunpcklwdVW)],
    /* 0F 62 */ [l(D::PunpckldqPQ), INV, INV, l(D::PunpckldqVW)],
    /* 0F 63 */ [l(D::PacksswbPQ), INV, INV, l(D::PacksswbVW)],
    /* 0F 64 */ [l(D::PcmpgtbPQ), INV, INV, l(D::PcmpgtbVW)],
    /* 0F 65 */ [l(D::PcmpgtwPQ), INV, INV, l(D::PcmpgtwVW)],
    /* 0F 66 */ [l(D::PcmpgtdPQ), INV, INV, l(D::PcmpgtdVW)],
    /* 0F 67 */ [l(D::PackuswbPQ), INV, INV, l(D::PackuswbVW)],
    /* 0F 68 */ [l(D::PunpckhbwPQ), INV, INV, l(D::PunpckhbwVW)],
    /* 0F 69 */ [l(D::PunpckhwdPQ), INV, INV, l(D::PunpckhwdVW)],
    /* 0F 6A */ [l(D::PunpckhdqPQ), INV, INV, l(D::PunpckhdqVW)],
    /* 0F 6B */ [l(D::PackssdwPQ), INV, INV, l(D::PackssdwVW)],
    /* 0F 6C */ [INV, INV, INV, l(D::PunpcklqdqVW)],
    /* 0F 6D */ [INV, INV, INV, l(D::PunpckhqdqVW)],
    /* 0F 6E */ [l(D::MovdPE), INV, INV, l(D::MovdVE)],
    /* 0F 6F */ [l(D::MovqPQ), l(D::MovdquVW), INV, l(D::MovdqaVW)],
    /* 0F 70 */ [l(D::PshufwPQIb), l(D::PshufhwVWIb), l(D::PshuflwVWIb), l(D::PshufdVWIb)],
    /* 0F 71 */ [r8(RegTbl::Grp12Mmx), INV, INV, r8(RegTbl::Grp12Xmm)],
    /* 0F 72 */ [r8(RegTbl::Grp13Mmx), INV, INV, r8(RegTbl::Grp13Xmm)],
    /* 0F 73 */ [r8(RegTbl::Grp14Mmx), INV, INV, r8(RegTbl::Grp14Xmm)],
    /* 0F 74 */ [l(D::PcmpeqbPQ), INV, INV, l(D::PcmpeqbVW)],
    /* 0F 75 */ [l(D::PcmpeqwPQ), INV, INV, l(D::PcmpeqwVW)],
    /* 0F 76 */ [l(D::PcmpeqdPQ), INV, INV, l(D::PcmpeqdVW)],
    /* 0F 7C */ [INV, INV, l(D::HaddpsVW), l(D::HaddpdVW)],
    /* 0F 7D */ [INV, INV, l(D::HsubpsVW), l(D::HsubpdVW)],
    /* 0F 7E */ [l(D::MovdEP), l(D::MovqVW), INV, l(D::MovdEV)],
    /* 0F 7F */ [l(D::MovqQP), l(D::MovdquWV), INV, l(D::MovdqaWV)],
    /* 0F B8 */ [INV, l(D::PopcntGvEv), INV, INV],
    /* 0F BC */ [l(D::BsfGvEv), l(D::TzcntGvEv), INV, INV],
    /* 0F BD */ [l(D::BsrGvEv), l(D::LzcntGvEv), INV, INV],
    /* 0F C2 */ [l(D::CmppsVWIb), l(D::CmpssVWIb), l(D::CmpsdVWIb), l(D::CmppdVWIb)],
    /* 0F C4 */ [l(D::PinsrwPMRIb), INV, INV, l(D::PinsrwVMRIb)],
    /* 0F C5 */ [l(D::PextrwGNIb), INV, INV, l(D::PextrwGUIb)],
    /* 0F C6 */ [l(D::ShufpsVWIb), INV, INV, l(D::ShufpdVWIb)],
    /* 0F D0 */ [INV, INV, l(D::AddsubpsVW), l(D::AddsubpdVW)],
    /* 0F D1 */ [l(D::PsrlwPQ), INV, INV, l(D::PsrlwVW)],
    /* 0F D2 */ [l(D::PsrldPQ), INV, INV, l(D::PsrldVW)],
    /* 0F D3 */ [l(D::PsrlqPQ), INV, INV, l(D::PsrlqVW)],
    /* 0F D4 */ [l(D::PaddqPQ), INV, INV, l(D::PaddqVW)],
    /* 0F D5 */ [l(D::PmullwPQ), INV, INV, l(D::PmullwVW)],
    /* 0F D6 */ [INV, l(D::Movq2dqVN), l(D::Movdq2qPU), l(D::MovqWV)],
    /* 0F D7 */ [l(D::PmovmskbGN), INV, INV, l(D::PmovmskbGU)],
    /* 0F D8 */ [l(D::PsubusbPQ), INV, INV, l(D::PsubusbVW)],
    /* 0F D9 */ [l(D::PsubuswPQ), INV, INV, l(D::PsubuswVW)],
    /* 0F DA */ [l(D::PminubPQ), INV, INV, l(D::PminubVW)],
    /* 0F DB */ [l(D::PandPQ), INV, INV, l(D::PandVW)],
    /* 0F DC */ [l(D::PaddusbPQ), INV, INV, l(D::PaddusbVW)],
    /* 0F DD */ [l(D::PadduswPQ), INV, INV, l(D::PadduswVW)],
    /* 0F DE */ [l(D::PmaxubPQ), INV, INV, l(D::PmaxubVW)],
    /* 0F DF */ [l(D::PandnPQ), INV, INV, l(D::PandnVW)],
    /* 0F E0 */ [l(D::PavgbPQ), INV, INV, l(D::PavgbVW)],
    /* 0F E1 */ [l(D::PsrawPQ), INV, INV, l(D::PsrawVW)],
    /* 0F E2 */ [l(D::PsradPQ), INV, INV, l(D::PsradVW)],
    /* 0F E3 */ [l(D::PavgwPQ), INV, INV, l(D::PavgwVW)],
    /* 0F E4 */ [l(D::PmulhuwPQ), INV, INV, l(D::PmulhuwVW)],
    /* 0F E5 */ [l(D::PmulhwPQ), INV, INV, l(D::PmulhwVW)],
    /* 0F E6 */ [INV, l(D::Cvtdq2pdVW), l(D::Cvtpd2dqVW), l(D::Cvttpd2dqVW)],
    /* 0F E7 */ [l(D::MovntqMP), INV, INV, l(D::MovntdqMV)],
    /* 0F E8 */ [l(D::PsubsbPQ), INV, INV, l(D::PsubsbVW)],
    /* 0F E9 */ [l(D::PsubswPQ), INV, INV, l(D::PsubswVW)],
    /* 0F EA */ [l(D::PminswPQ), INV, INV, l(D::PminswVW)],
    /* 0F EB */ [l(D::PorPQ), INV, INV, l(D::PorVW)],
    /* 0F EC */ [l(D::PaddsbPQ), INV, INV, l(D::PaddsbVW)],
    /* 0F ED */ [l(D::PaddswPQ), INV, INV, l(D::PaddswVW)],
    /* 0F EE */ [l(D::PmaxswPQ), INV, INV, l(D::PmaxswVW)],
    /* 0F EF */ [l(D::PxorPQ), INV, INV, l(D::PxorVW)],
    /* 0F F0 */ [INV, INV, l(D::LddquVM), INV],
    /* 0F F1 */ [l(D::PsllwPQ), INV, INV, l(D::PsllwVW)],
    /* 0F F2 */ [l(D::PslldPQ), INV, INV, l(D::PslldVW)],
    /* 0F F3 */ [l(D::PsllqPQ), INV, INV, l(D::PsllqVW)],
    /* 0F F4 */ [l(D::PmuludqPQ), INV, INV, l(D::PmuludqVW)],
    /* 0F F5 */ [l(D::PmaddwdPQ), INV, INV, l(D::PmaddwdVW)],
    /* 0F F6 */ [l(D::PsadbwPQ), INV, INV, l(D::PsadbwVW)],
    /* 0F F7 */ [l(D::MaskmovqPN), INV, INV, l(D::MaskmovdquVU)],
    /* 0F F8 */ [l(D::PsubbPQ), INV, INV, l(D::PsubbVW)],
    /* 0F F9 */ [l(D::PsubwPQ), INV, INV, l(D::PsubwVW)],
    /* 0F FA */ [l(D::PsubdPQ), INV, INV, l(D::PsubdVW)],
    /* 0F FB */ [l(D::PsubqPQ), INV, INV, l(D::PsubqVW)],
    /* 0F FC */ [l(D::PaddbPQ), INV, INV, l(D::PaddbVW)],
    /* 0F FD */ [l(D::PaddwPQ), INV, INV, l(D::PaddwVW)],
    /* 0F FE */ [l(D::PadddPQ), INV, INV, l(D::PadddVW)],
    /* 0F 38 00 */ [l(D::PshufbPQ), INV, INV, l(D::PshufbVW)],
    /* 0F 38 01 */ [l(D::PhaddwPQ), INV, INV, l(D::PhaddwVW)],
    /* 0F 38 02 */ [l(D::PhadddPQ), INV, INV, l(D::PhadddVW)],
    /* 0F 38 03 */ [l(D::PhaddswPQ), INV, INV, l(D::PhaddswVW)],
    /* 0F 38 04 */ [l(D::PmaddubswPQ), INV, INV, l(D::PmaddubswVW)],
    /* 0F 38 05 */ [l(D::PhsubwPQ), INV, INV, l(D::PhsubwVW)],
    /* 0F 38 06 */ [l(D::PhsubdPQ), INV, INV, l(D::PhsubdVW)],
    /* 0F 38 07 */ [l(D::PhsubswPQ), INV, INV, l(D::PhsubswVW)],
    /* 0F 38 08 */ [l(D::PsignbPQ), INV, INV, l(D::PsignbVW)],
    /* 0F 38 09 */ [l(D::PsignwPQ), INV, INV, l(D::PsignwVW)],
    /* 0F 38 0A */ [l(D::PsigndPQ), INV, INV, l(D::PsigndVW)],
    /* 0F 38 0B */ [l(D::PmulhrswPQ), INV, INV, l(D::PmulhrswVW)],
    /* 0F 38 17 */ [INV, INV, INV, l(D::PtestVW)],
    /* 0F 38 1C */ [l(D::PabsbPQ), INV, INV, l(D::PabsbVW)],
    /* 0F 38 1D */ [l(D::PabswPQ), INV, INV, l(D::PabswVW)],
    /* 0F 38 1E */ [l(D::PabsdPQ), INV, INV, l(D::PabsdVW)],
    /* 0F 38 F0 */ [l(D::MovbeGvMv), INV, l(D::Crc32GdEb), INV],
    /* 0F 38 F1 */ [l(D::MovbeMvGv), INV, l(D::Crc32GdEv), INV],
    /* 0F 3A 08 */ [INV, INV, INV, l(D::RoundpsVWIb)],
    /* 0F 3A 09 */ [INV, INV, INV, l(D::RoundpdVWIb)],
    /* 0F 3A 0A */ [INV, INV, INV, l(D::RoundssVWIb)],
    /* 0F 3A 0B */ [INV, INV, INV, l(D::RoundsdVWIb)],
    /* 0F 3A 0C */ [INV, INV, INV, l(D::BlendpsVWIb)],
    /* 0F 3A 0D */ [INV, INV, INV, l(D::BlendpdVWIb)],
    /* 0F 3A 0E */ [INV, INV, INV, l(D::PblendwVWIb)],
    /* 0F 3A 0F */ [l(D::PalignrPQIb), INV, INV, l(D::PalignrVWIb)],
];

/// x87 register-form tables, indexed by `modrm - 0xC0`.
pub(super) static X87: &[[OpcodeTreeNode; 64]] = &[
    // D8
    [
        l(D::FaddSt0St0), l(D::FaddSt0St1), l(D::FaddSt0St2), l(D::FaddSt0St3),
        l(D::FaddSt0St4), l(D::FaddSt0St5), l(D::FaddSt0St6), l(D::FaddSt0St7),
        l(D::FmulSt0St0), l(D::FmulSt0St1), l(D::FmulSt0St2), l(D::FmulSt0St3),
        l(D::FmulSt0St4), l(D::FmulSt0St5), l(D::FmulSt0St6), l(D::FmulSt0St7),
        l(D::FcomSt0St0), l(D::FcomSt0St1), l(D::FcomSt0St2), l(D::FcomSt0St3),
        l(D::FcomSt0St4), l(D::FcomSt0St5), l(D::FcomSt0St6), l(D::FcomSt0St7),
        l(D::FcompSt0St0), l(D::FcompSt0St1), l(D::FcompSt0St2), l(D::FcompSt0St3),
        l(D::FcompSt0St4), l(D::FcompSt0St5), l(D::FcompSt0St6), l(D::FcompSt0St7),
        l(D::FsubSt0St0), l(D::FsubSt0St1), l(D::FsubSt0St2), l(D::FsubSt0St3),
        l(D::FsubSt0St4), l(D::FsubSt0St5), l(D::FsubSt0St6), l(D::FsubSt0St7),
        l(D::FsubrSt0St0), l(D::FsubrSt0St1), l(D::FsubrSt0St2), l(D::FsubrSt0St3),
        l(D::FsubrSt0St4), l(D::FsubrSt0St5), l(D::FsubrSt0St6), l(D::FsubrSt0St7),
        l(D::FdivSt0St0), l(D::FdivSt0St1), l(D::FdivSt0St2), l(D::FdivSt0St3),
        l(D::FdivSt0St4), l(D::FdivSt0St5), l(D::FdivSt0St6), l(D::FdivSt0St7),
        l(D::FdivrSt0St0), l(D::FdivrSt0St1), l(D::FdivrSt0St2), l(D::FdivrSt0St3),
        l(D::FdivrSt0St4), l(D::FdivrSt0St5), l(D::FdivrSt0St6), l(D::FdivrSt0St7),
    ],
    // D9
    [
        l(D::FldSt0), l(D::FldSt1), l(D::FldSt2), l(D::FldSt3),
        l(D::FldSt4), l(D::FldSt5), l(D::FldSt6), l(D::FldSt7),
        l(D::FxchSt0), l(D::FxchSt1), l(D::FxchSt2), l(D::FxchSt3),
        l(D::FxchSt4), l(D::FxchSt5), l(D::FxchSt6), l(D::FxchSt7),
        l(D::Fnop), INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
        l(D::Fchs), l(D::Fabs), INV, INV, l(D::Ftst), l(D::Fxam), INV, INV,
        l(D::Fld1), l(D::Fldl2t), l(D::Fldl2e), l(D::Fldpi),
        l(D::Fldlg2), l(D::Fldln2), l(D::Fldz), INV,
        l(D::F2xm1), l(D::Fyl2x), l(D::Fptan), l(D::Fpatan),
        l(D::Fxtract), l(D::Fprem1), l(D::Fdecstp), l(D::Fincstp),
        l(D::Fprem), l(D::Fyl2xp1), l(D::Fsqrt), l(D::Fsincos),
        l(D::Frndint), l(D::Fscale), l(D::Fsin), l(D::Fcos),
    ],
    // DA
    [
        l(D::FcmovbSt0), l(D::FcmovbSt1), l(D::FcmovbSt2), l(D::FcmovbSt3),
        l(D::FcmovbSt4), l(D::FcmovbSt5), l(D::FcmovbSt6), l(D::FcmovbSt7),
        l(D::FcmoveSt0), l(D::FcmoveSt1), l(D::FcmoveSt2), l(D::FcmoveSt3),
        l(D::FcmoveSt4), l(D::FcmoveSt5), l(D::FcmoveSt6), l(D::FcmoveSt7),
        l(D::FcmovbeSt0), l(D::FcmovbeSt1), l(D::FcmovbeSt2), l(D::FcmovbeSt3),
        l(D::FcmovbeSt4), l(D::FcmovbeSt5), l(D::FcmovbeSt6), l(D::FcmovbeSt7),
        l(D::FcmovuSt0), l(D::FcmovuSt1), l(D::FcmovuSt2), l(D::FcmovuSt3),
        l(D::FcmovuSt4), l(D::FcmovuSt5), l(D::FcmovuSt6), l(D::FcmovuSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, l(D::Fucompp), INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
    ],
    // DB
    [
        l(D::FcmovnbSt0), l(D::FcmovnbSt1), l(D::FcmovnbSt2), l(D::FcmovnbSt3),
        l(D::FcmovnbSt4), l(D::FcmovnbSt5), l(D::FcmovnbSt6), l(D::FcmovnbSt7),
        l(D::FcmovneSt0), l(D::FcmovneSt1), l(D::FcmovneSt2), l(D::FcmovneSt3),
        l(D::FcmovneSt4), l(D::FcmovneSt5), l(D::FcmovneSt6), l(D::FcmovneSt7),
        l(D::FcmovnbeSt0), l(D::FcmovnbeSt1), l(D::FcmovnbeSt2), l(D::FcmovnbeSt3),
        l(D::FcmovnbeSt4), l(D::FcmovnbeSt5), l(D::FcmovnbeSt6), l(D::FcmovnbeSt7),
        l(D::FcmovnuSt0), l(D::FcmovnuSt1), l(D::FcmovnuSt2), l(D::FcmovnuSt3),
        l(D::FcmovnuSt4), l(D::FcmovnuSt5), l(D::FcmovnuSt6), l(D::FcmovnuSt7),
        INV, INV, l(D::Fnclex), l(D::Fninit), INV, INV, INV, INV,
        l(D::FucomiSt0), l(D::FucomiSt1), l(D::FucomiSt2), l(D::FucomiSt3),
        l(D::FucomiSt4), l(D::FucomiSt5), l(D::FucomiSt6), l(D::FucomiSt7),
        l(D::FcomiSt0), l(D::FcomiSt1), l(D::FcomiSt2), l(D::FcomiSt3),
        l(D::FcomiSt4), l(D::FcomiSt5), l(D::FcomiSt6), l(D::FcomiSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
    ],
    // DC
    [
        l(D::FaddSt0ToSt0), l(D::FaddSt1St0), l(D::FaddSt2St0), l(D::FaddSt3St0),
        l(D::FaddSt4St0), l(D::FaddSt5St0), l(D::FaddSt6St0), l(D::FaddSt7St0),
        l(D::FmulSt0ToSt0), l(D::FmulSt1St0), l(D::FmulSt2St0), l(D::FmulSt3St0),
        l(D::FmulSt4St0), l(D::FmulSt5St0), l(D::FmulSt6St0), l(D::FmulSt7St0),
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
        l(D::FsubrSt0ToSt0), l(D::FsubrSt1St0), l(D::FsubrSt2St0), l(D::FsubrSt3St0),
        l(D::FsubrSt4St0), l(D::FsubrSt5St0), l(D::FsubrSt6St0), l(D::FsubrSt7St0),
        l(D::FsubSt0ToSt0), l(D::FsubSt1St0), l(D::FsubSt2St0), l(D::FsubSt3St0),
        l(D::FsubSt4St0), l(D::FsubSt5St0), l(D::FsubSt6St0), l(D::FsubSt7St0),
        l(D::FdivrSt0ToSt0), l(D::FdivrSt1St0), l(D::FdivrSt2St0), l(D::FdivrSt3St0),
        l(D::FdivrSt4St0), l(D::FdivrSt5St0), l(D::FdivrSt6St0), l(D::FdivrSt7St0),
        l(D::FdivSt0ToSt0), l(D::FdivSt1St0), l(D::FdivSt2St0), l(D::FdivSt3St0),
        l(D::FdivSt4St0), l(D::FdivSt5St0), l(D::FdivSt6St0), l(D::FdivSt7St0),
    ],
    // DD
    [
        l(D::FfreeSt0), l(D::FfreeSt1), l(D::FfreeSt2), l(D::FfreeSt3),
        l(D::FfreeSt4), l(D::FfreeSt5), l(D::FfreeSt6), l(D::FfreeSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
        l(D::FstSt0), l(D::FstSt1), l(D::FstSt2), l(D::FstSt3),
        l(D::FstSt4), l(D::FstSt5), l(D::FstSt6), l(D::FstSt7),
        l(D::FstpSt0), l(D::FstpSt1), l(D::FstpSt2), l(D::FstpSt3),
        l(D::FstpSt4), l(D::FstpSt5), l(D::FstpSt6), l(D::FstpSt7),
        l(D::FucomSt0), l(D::FucomSt1), l(D::FucomSt2), l(D::FucomSt3),
        l(D::FucomSt4), l(D::FucomSt5), l(D::FucomSt6), l(D::FucomSt7),
        l(D::FucompSt0), l(D::FucompSt1), l(D::FucompSt2), l(D::FucompSt3),
        l(D::FucompSt4), l(D::FucompSt5), l(D::FucompSt6), l(D::FucompSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
    ],
    // DE
    [
        l(D::FaddpSt0St0), l(D::FaddpSt1St0), l(D::FaddpSt2St0), l(D::FaddpSt3St0),
        l(D::FaddpSt4St0), l(D::FaddpSt5St0), l(D::FaddpSt6St0), l(D::FaddpSt7St0),
        l(D::FmulpSt0St0), l(D::FmulpSt1St0), l(D::FmulpSt2St0), l(D::FmulpSt3St0),
        l(D::FmulpSt4St0), l(D::FmulpSt5St0), l(D::FmulpSt6St0), l(D::FmulpSt7St0),
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, l(D::Fcompp), INV, INV, INV, INV, INV, INV,
        l(D::FsubrpSt0St0), l(D::FsubrpSt1St0), l(D::FsubrpSt2St0), l(D::FsubrpSt3St0),
        l(D::FsubrpSt4St0), l(D::FsubrpSt5St0), l(D::FsubrpSt6St0), l(D::FsubrpSt7St0),
        l(D::FsubpSt0St0), l(D::FsubpSt1St0), l(D::FsubpSt2St0), l(D::FsubpSt3St0),
        l(D::FsubpSt4St0), l(D::FsubpSt5St0), l(D::FsubpSt6St0), l(D::FsubpSt7St0),
        l(D::FdivrpSt0St0), l(D::FdivrpSt1St0), l(D::FdivrpSt2St0), l(D::FdivrpSt3St0),
        l(D::FdivrpSt4St0), l(D::FdivrpSt5St0), l(D::FdivrpSt6St0), l(D::FdivrpSt7St0),
        l(D::FdivpSt0St0), l(D::FdivpSt1St0), l(D::FdivpSt2St0), l(D::FdivpSt3St0),
        l(D::FdivpSt4St0), l(D::FdivpSt5St0), l(D::FdivpSt6St0), l(D::FdivpSt7St0),
    ],
    // DF
    [
        l(D::FfreepSt0), l(D::FfreepSt1), l(D::FfreepSt2), l(D::FfreepSt3),
        l(D::FfreepSt4), l(D::FfreepSt5), l(D::FfreepSt6), l(D::FfreepSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
        INV, INV, INV, INV, INV, INV, INV, INV,
        l(D::FnstswAx), INV, INV, INV, INV, INV, INV, INV,
        l(D::FucomipSt0), l(D::FucomipSt1), l(D::FucomipSt2), l(D::FucomipSt3),
        l(D::FucomipSt4), l(D::FucomipSt5), l(D::FucomipSt6), l(D::FucomipSt7),
        l(D::FcomipSt0), l(D::FcomipSt1), l(D::FcomipSt2), l(D::FcomipSt3),
        l(D::FcomipSt4), l(D::FcomipSt5), l(D::FcomipSt6), l(D::FcomipSt7),
        INV, INV, INV, INV, INV, INV, INV, INV,
    ],
];

/// Address-size switch tables, indexed 16/32/64.
pub(super) static ADDRESS_SIZE: &[[OpcodeTreeNode; 3]] = &[
    // Jcxz: E3
    [l(D::JcxzJb), l(D::JecxzJb), l(D::JrcxzJb)],
];

/// Operand-size switch tables, indexed 16/32/64.
pub(super) static OPERAND_SIZE: &[[OpcodeTreeNode; 3]] = &[
    // Cbw: 98
    [l(D::Cbw), l(D::Cwde), l(D::Cdqe)],
    // Cwd: 99
    [l(D::Cwd), l(D::Cdq), l(D::Cqo)],
    // Pusha: 60
    [l(D::Pusha), l(D::Pushad), INV],
    // Popa: 61
    [l(D::Popa), l(D::Popad), INV],
    // Ins: 6D
    [l(D::Insw), l(D::Insd), l(D::Insd)],
    // Outs: 6F
    [l(D::Outsw), l(D::Outsd), l(D::Outsd)],
    // Movs: A5
    [l(D::Movsw), l(D::MovsdStr), l(D::Movsq)],
    // Cmps: A7
    [l(D::Cmpsw), l(D::CmpsdStr), l(D::Cmpsq)],
    // Stos: AB
    [l(D::Stosw), l(D::Stosd), l(D::Stosq)],
    // Lods: AD
    [l(D::Lodsw), l(D::Lodsd), l(D::Lodsq)],
    // Scas: AF
    [l(D::Scasw), l(D::Scasd), l(D::Scasq)],
    // Iret: CF
    [l(D::Iret), l(D::Iretd), l(D::Iretq)],
    // Cmpxchg8b: 0F C7 /1
    [l(D::Cmpxchg8bMq), l(D::Cmpxchg8bMq), l(D::Cmpxchg16bMdq)],
];

/// CPU-mode switch tables, indexed !64 / 64.
pub(super) static MODE: &[[OpcodeTreeNode; 2]] = &[
    // X63: ARPL outside 64-bit mode, MOVSXD inside
    [l(D::ArplEwGw), l(D::MovsxdGvEd)],
    // X82: the 0x80 alias, invalid in 64-bit mode
    [r8(RegTbl::Grp1x80), INV],
    // Syscall: 0F 05
    [ven(VenTbl::Syscall), l(D::Syscall)],
    // Sysret: 0F 07
    [ven(VenTbl::Sysret), l(D::Sysret)],
];

/// Vendor switch tables, indexed AMD / Intel.
pub(super) static VENDOR: &[[OpcodeTreeNode; 2]] = &[
    // Syscall outside 64-bit mode is AMD-only
    [l(D::Syscall), INV],
    // Sysret outside 64-bit mode is AMD-only
    [l(D::Sysret), INV],
    // Prefetch group 0F 0D
    [r8(RegTbl::GrpPrefetch), INV],
    // Femms 0F 0E
    [l(D::Femms), INV],
    // 3DNow! escape 0F 0F
    [dnow(DnowTbl::Main), INV],
];

/// VEX dispatch tables, indexed `m_mmmm | (pp << 2)`; child 0 is the
/// legacy instruction sharing the lead byte.
pub(super) static VEX: &[[OpcodeTreeNode; 16]] = &[
    // C4
    [
        l(D::LesGvM), t(Tbl::Vex0f), INV, INV,
        INV, t(Tbl::Vex0f66), t(Tbl::Vex38), t(Tbl::Vex3a),
        INV, t(Tbl::Vex0fF3), INV, INV,
        INV, t(Tbl::Vex0fF2), INV, INV,
    ],
    // C5
    [
        l(D::LdsGvM), t(Tbl::Vex0f), INV, INV,
        INV, t(Tbl::Vex0f66), t(Tbl::Vex38), t(Tbl::Vex3a),
        INV, t(Tbl::Vex0fF3), INV, INV,
        INV, t(Tbl::Vex0fF2), INV, INV,
    ],
];

/// VEX.W switch tables.
pub(super) static VEXW: &[[OpcodeTreeNode; 2]] = &[
    // M6e: VEX.66.0F 6E
    [l(D::VmovdVE), l(D::VmovqVE)],
    // M7e: VEX.66.0F 7E
    [l(D::VmovdEV), l(D::VmovqEV)],
];

/// VEX.L switch tables.
pub(super) static VEXL: &[[OpcodeTreeNode; 2]] = &[
    // Vzero: VEX.0F 77
    [l(D::Vzeroupper), l(D::Vzeroall)],
];
