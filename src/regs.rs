//! CPU register model.
//!
//! The numeric order of [`Register`] is part of the public contract:
//! consumers index register files by `reg as u16` and rely on each class
//! occupying a contiguous range.

/// A concrete x86/x86-64 register, or [`Register::None`] for "no register"
/// (absent base/index of a memory operand, no segment override).
#[repr(u16)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Register {
    #[default]
    None = 0,
    // 8-bit general purpose
    Al, Cl, Dl, Bl,
    Ah, Ch, Dh, Bh,
    Spl, Bpl, Sil, Dil,
    R8b, R9b, R10b, R11b,
    R12b, R13b, R14b, R15b,
    // 16-bit general purpose
    Ax, Cx, Dx, Bx,
    Sp, Bp, Si, Di,
    R8w, R9w, R10w, R11w,
    R12w, R13w, R14w, R15w,
    // 32-bit general purpose
    Eax, Ecx, Edx, Ebx,
    Esp, Ebp, Esi, Edi,
    R8d, R9d, R10d, R11d,
    R12d, R13d, R14d, R15d,
    // 64-bit general purpose
    Rax, Rcx, Rdx, Rbx,
    Rsp, Rbp, Rsi, Rdi,
    R8, R9, R10, R11,
    R12, R13, R14, R15,
    // segment
    Es, Cs, Ss, Ds, Fs, Gs,
    // control
    Cr0, Cr1, Cr2, Cr3, Cr4, Cr5, Cr6, Cr7,
    Cr8, Cr9, Cr10, Cr11, Cr12, Cr13, Cr14, Cr15,
    // debug
    Dr0, Dr1, Dr2, Dr3, Dr4, Dr5, Dr6, Dr7,
    Dr8, Dr9, Dr10, Dr11, Dr12, Dr13, Dr14, Dr15,
    // MMX
    Mm0, Mm1, Mm2, Mm3, Mm4, Mm5, Mm6, Mm7,
    // x87
    St0, St1, St2, St3, St4, St5, St6, St7,
    // 128-bit multimedia
    Xmm0, Xmm1, Xmm2, Xmm3, Xmm4, Xmm5, Xmm6, Xmm7,
    Xmm8, Xmm9, Xmm10, Xmm11, Xmm12, Xmm13, Xmm14, Xmm15,
    // 256-bit multimedia
    Ymm0, Ymm1, Ymm2, Ymm3, Ymm4, Ymm5, Ymm6, Ymm7,
    Ymm8, Ymm9, Ymm10, Ymm11, Ymm12, Ymm13, Ymm14, Ymm15,
    // instruction pointer
    Rip,
}

/// The register class an operand definition selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegisterClass {
    GeneralPurpose,
    Mmx,
    Control,
    Debug,
    Segment,
    Xmm,
}

use Register::*;

const GP8_REX: [Register; 16] = [
    Al, Cl, Dl, Bl, Spl, Bpl, Sil, Dil,
    R8b, R9b, R10b, R11b, R12b, R13b, R14b, R15b,
];
const GP8_LEGACY: [Register; 8] = [Al, Cl, Dl, Bl, Ah, Ch, Dh, Bh];
const GP16: [Register; 16] = [
    Ax, Cx, Dx, Bx, Sp, Bp, Si, Di,
    R8w, R9w, R10w, R11w, R12w, R13w, R14w, R15w,
];
const GP32: [Register; 16] = [
    Eax, Ecx, Edx, Ebx, Esp, Ebp, Esi, Edi,
    R8d, R9d, R10d, R11d, R12d, R13d, R14d, R15d,
];
const GP64: [Register; 16] = [
    Rax, Rcx, Rdx, Rbx, Rsp, Rbp, Rsi, Rdi,
    R8, R9, R10, R11, R12, R13, R14, R15,
];
const SEGMENT: [Register; 8] = [Es, Cs, Ss, Ds, Fs, Gs, None, None];
const CONTROL: [Register; 16] = [
    Cr0, Cr1, Cr2, Cr3, Cr4, Cr5, Cr6, Cr7,
    Cr8, Cr9, Cr10, Cr11, Cr12, Cr13, Cr14, Cr15,
];
const DEBUG: [Register; 16] = [
    Dr0, Dr1, Dr2, Dr3, Dr4, Dr5, Dr6, Dr7,
    Dr8, Dr9, Dr10, Dr11, Dr12, Dr13, Dr14, Dr15,
];
const MMX: [Register; 8] = [Mm0, Mm1, Mm2, Mm3, Mm4, Mm5, Mm6, Mm7];
const ST: [Register; 8] = [St0, St1, St2, St3, St4, St5, St6, St7];
const XMM: [Register; 16] = [
    Xmm0, Xmm1, Xmm2, Xmm3, Xmm4, Xmm5, Xmm6, Xmm7,
    Xmm8, Xmm9, Xmm10, Xmm11, Xmm12, Xmm13, Xmm14, Xmm15,
];
const YMM: [Register; 16] = [
    Ymm0, Ymm1, Ymm2, Ymm3, Ymm4, Ymm5, Ymm6, Ymm7,
    Ymm8, Ymm9, Ymm10, Ymm11, Ymm12, Ymm13, Ymm14, Ymm15,
];

impl Register {
    /// The 8-bit general-purpose register for `id` under the REX register
    /// numbering: ids 4..=7 name SPL/BPL/SIL/DIL instead of AH/CH/DH/BH and
    /// ids 8..=15 name R8B..R15B.
    pub(crate) const fn gp8_rex(id: u8) -> Register {
        GP8_REX[(id & 0x0F) as usize]
    }

    /// The 8-bit general-purpose register for `id` under the legacy
    /// numbering (AL..BH).
    pub(crate) const fn gp8_legacy(id: u8) -> Register {
        GP8_LEGACY[(id & 0x07) as usize]
    }

    /// The general-purpose register of the given width (16/32/64) for `id`.
    pub(crate) const fn gp(size: u16, id: u8) -> Register {
        let id = (id & 0x0F) as usize;
        match size {
            16 => GP16[id],
            32 => GP32[id],
            _ => GP64[id],
        }
    }

    /// Segment register for `id & 0b111`; ids 6 and 7 have no register and
    /// yield [`Register::None`].
    pub(crate) const fn segment(id: u8) -> Register {
        SEGMENT[(id & 0x07) as usize]
    }

    pub(crate) const fn mmx(id: u8) -> Register {
        MMX[(id & 0x07) as usize]
    }

    pub(crate) const fn st(id: u8) -> Register {
        ST[(id & 0x07) as usize]
    }

    pub(crate) const fn control(id: u8) -> Register {
        CONTROL[(id & 0x0F) as usize]
    }

    pub(crate) const fn debug(id: u8) -> Register {
        DEBUG[(id & 0x0F) as usize]
    }

    /// The XMM or YMM register for `id`, selected by operand size.
    pub(crate) const fn multimedia(size: u16, id: u8) -> Register {
        let id = (id & 0x0F) as usize;
        if size == 256 { YMM[id] } else { XMM[id] }
    }

    /// `true` for any variant other than [`Register::None`].
    pub const fn is_some(self) -> bool {
        !matches!(self, Register::None)
    }
}
