//! Instruction mnemonics.
//!
//! The textual form returned by [`Mnemonic::as_str`] is the contract
//! formatters build on; the enum ordering itself carries no meaning.

macro_rules! mnemonics {
    ($($name:ident),+ $(,)?) => {
        /// All instruction mnemonics known to the decoder.
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum Mnemonic {
            /// Placeholder for byte sequences that decode to no instruction.
            #[default]
            Invalid,
            $($name),+
        }

        impl Mnemonic {
            /// The lower-case textual mnemonic.
            pub fn as_str(self) -> &'static str {
                paste::paste! {
                    match self {
                        Mnemonic::Invalid => "invalid",
                        $(Mnemonic::$name => stringify!([<$name:lower>])),+
                    }
                }
            }
        }

        impl core::fmt::Display for Mnemonic {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mnemonics! {
    Aaa, Aad, Aam, Aas, Adc, Add, Addpd, Addps, Addsd, Addss, Addsubpd,
    Addsubps, And, Andnpd, Andnps, Andpd, Andps, Arpl, Blendpd, Blendps,
    Bound, Bsf, Bsr,
    Bswap, Bt, Btc, Btr, Bts, Call, Cbw, Cdq, Cdqe, Clc, Cld, Clflush,
    Cli, Clts, Cmc, Cmovb, Cmovbe, Cmovl, Cmovle, Cmovnb, Cmovnbe, Cmovnl,
    Cmovnle, Cmovno, Cmovnp, Cmovns, Cmovnz, Cmovo, Cmovp, Cmovs, Cmovz,
    Cmp, Cmppd, Cmpps, Cmpsb, Cmpsd, Cmpsq, Cmpss, Cmpsw, Cmpxchg,
    Cmpxchg16b, Cmpxchg8b, Comisd, Comiss, Cpuid, Cqo, Crc32, Cvtdq2pd,
    Cvtdq2ps, Cvtpd2dq, Cvtpd2pi, Cvtpd2ps, Cvtpi2pd, Cvtpi2ps, Cvtps2dq,
    Cvtps2pd, Cvtps2pi, Cvtsd2si, Cvtsd2ss, Cvtsi2sd, Cvtsi2ss, Cvtss2sd,
    Cvtss2si, Cvttpd2dq, Cvttpd2pi, Cvttps2dq, Cvttps2pi, Cvttsd2si,
    Cvttss2si, Cwd, Cwde, Daa, Das, Dec, Div, Divpd, Divps, Divsd, Divss,
    Emms, Enter, F2xm1, Fabs, Fadd, Faddp, Fbld, Fbstp, Fchs, Fcmovb,
    Fcmovbe, Fcmove, Fcmovnb, Fcmovnbe, Fcmovne, Fcmovnu, Fcmovu, Fcom,
    Fcomi, Fcomip, Fcomp, Fcompp, Fcos, Fdecstp, Fdiv, Fdivp, Fdivr,
    Fdivrp, Femms, Ffree, Ffreep, Fiadd, Ficom, Ficomp, Fidiv, Fidivr,
    Fild, Fimul, Fincstp, Fist, Fistp, Fisttp, Fisub, Fisubr, Fld, Fld1,
    Fldcw, Fldenv, Fldl2e, Fldl2t, Fldlg2, Fldln2, Fldpi, Fldz, Fmul,
    Fmulp, Fnclex, Fninit, Fnop, Fnsave, Fnstcw, Fnstenv, Fnstsw, Fpatan,
    Fprem, Fprem1, Fptan, Frndint, Frstor, Fscale, Fsin, Fsincos, Fsqrt,
    Fst, Fstp, Fsub, Fsubp, Fsubr, Fsubrp, Ftst, Fucom, Fucomi, Fucomip,
    Fucomp, Fucompp, Fwait, Fxam, Fxch, Fxrstor, Fxsave, Fxtract, Fyl2x,
    Fyl2xp1, Haddpd, Haddps, Hlt, Hsubpd, Hsubps, Idiv, Imul, In, Inc,
    Insb, Insd, Insw, Int, Int1, Int3, Into, Invd, Invlpg, Iret, Iretd,
    Iretq, Jb, Jbe, Jcxz, Jecxz, Jl, Jle, Jmp, Jnb, Jnbe, Jnl, Jnle, Jno,
    Jnp, Jns, Jnz, Jo, Jp, Jrcxz, Js, Jz, Lahf, Lar, Lddqu, Ldmxcsr, Lds,
    Lea, Leave, Les, Lfence, Lfs, Lgdt, Lgs, Lidt, Lldt, Lmsw, Lodsb,
    Lodsd, Lodsq, Lodsw, Loop, Loope, Loopne, Lsl, Lss, Ltr, Lzcnt,
    Maskmovdqu, Maskmovq, Maxpd, Maxps, Maxsd, Maxss, Mfence, Minpd,
    Minps, Minsd, Minss, Monitor, Mov, Movapd, Movaps, Movbe, Movd,
    Movddup, Movdq2q, Movdqa, Movdqu, Movhlps, Movhpd, Movhps, Movlhps,
    Movlpd, Movlps, Movmskpd, Movmskps, Movntdq, Movnti, Movntpd, Movntps,
    Movntq, Movq, Movq2dq, Movsb, Movsd, Movshdup, Movsldup, Movsq, Movss,
    Movsw, Movsx, Movsxd, Movupd, Movups, Movzx, Mul, Mulpd, Mulps, Mulsd,
    Mulss, Mwait, Neg, Nop, Not, Or, Orpd, Orps, Out, Outsb, Outsd, Outsw,
    Pabsb, Pabsd, Pabsw, Packssdw, Packsswb, Packuswb, Paddb, Paddd,
    Paddq, Paddsb, Paddsw, Paddusb, Paddusw, Paddw, Palignr, Pand, Pandn,
    Pause, Pavgb, Pavgusb, Pavgw, Pblendw, Pcmpeqb, Pcmpeqd, Pcmpeqw,
    Pcmpgtb, Pcmpgtd, Pcmpgtw, Pextrw, Pf2id, Pf2iw, Pfacc, Pfadd,
    Pfcmpeq, Pfcmpge, Pfcmpgt, Pfmax, Pfmin, Pfmul, Pfnacc, Pfpnacc,
    Pfrcp, Pfrcpit1, Pfrcpit2, Pfrsqit1, Pfrsqrt, Pfsub, Pfsubr, Phaddd,
    Phaddsw, Phaddw, Phsubd, Phsubsw, Phsubw, Pi2fd, Pi2fw, Pinsrw,
    Pmaddubsw, Pmaddwd, Pmaxsw, Pmaxub, Pminsw, Pminub, Pmovmskb,
    Pmulhrsw, Pmulhrw, Pmulhuw, Pmulhw, Pmullw, Pmuludq, Pop, Popa,
    Popad, Popcnt, Popf, Por, Prefetch, Prefetchnta, Prefetcht0,
    Prefetcht1, Prefetcht2, Prefetchw, Psadbw, Pshufb, Pshufd, Pshufhw,
    Pshuflw, Pshufw, Psignb, Psignd, Psignw, Pslld, Pslldq, Psllq, Psllw,
    Psrad, Psraw, Psrld, Psrldq, Psrlq, Psrlw, Psubb, Psubd, Psubq,
    Psubsb, Psubsw, Psubusb, Psubusw, Psubw, Pswapd, Ptest, Punpckhbw,
    Punpckhdq, Punpckhqdq, Punpckhwd, Punpcklbw, Punpckldq, Punpcklqdq,
    Punpcklwd, Push, Pusha, Pushad, Pushf, Pxor, Rcl, Rcpps, Rcpss, Rcr,
    Rdmsr, Rdpmc, Rdtsc, Rdtscp, Ret, Retf, Rol, Ror, Roundpd, Roundps,
    Roundsd, Roundss, Rsm, Rsqrtps, Rsqrtss, Sahf, Sal, Salc, Sar, Sbb,
    Scasb, Scasd, Scasq, Scasw, Setb, Setbe, Setl, Setle, Setnb, Setnbe,
    Setnl, Setnle, Setno, Setnp, Setns, Setnz, Seto, Setp, Sets, Setz,
    Sfence, Sgdt, Shl, Shld, Shr, Shrd, Shufpd, Shufps, Sidt, Sldt, Smsw,
    Sqrtpd, Sqrtps, Sqrtsd, Sqrtss, Stc, Std, Sti, Stmxcsr, Stosb, Stosd,
    Stosq, Stosw, Str, Sub, Subpd, Subps, Subsd, Subss, Swapgs, Syscall,
    Sysenter, Sysexit, Sysret, Test, Tzcnt, Ucomisd, Ucomiss, Ud2,
    Unpckhpd, Unpckhps, Unpcklpd, Unpcklps, Vaddpd, Vaddps, Vandnpd,
    Vandnps, Vandpd, Vandps, Vblendpd, Vblendps, Vblendvpd, Vblendvps,
    Vdivpd, Vdivps, Verr, Verw, Vextractf128, Vinsertf128, Vlddqu,
    Vmaxpd, Vmaxps, Vmcall, Vminpd, Vminps, Vmlaunch, Vmovapd, Vmovaps,
    Vmovd, Vmovdqa, Vmovdqu, Vmovq, Vmovsd, Vmovss, Vmovupd, Vmovups,
    Vmresume, Vmulpd, Vmulps, Vmxoff, Vorpd, Vorps, Vpabsb, Vpabsd,
    Vpabsw, Vpaddb, Vpaddd, Vpaddq, Vpaddw, Vpalignr, Vpand, Vpblendvb,
    Vpblendw, Vphaddd, Vphaddw, Vpor, Vpshufb, Vpsubb, Vpsubd, Vpsubq,
    Vpsubw, Vptest, Vpxor, Vroundpd, Vroundps, Vroundsd, Vroundss,
    Vsqrtpd, Vsqrtps, Vsubpd, Vsubps, Vxorpd, Vxorps, Vzeroall,
    Vzeroupper, Wbinvd, Wrmsr, Xadd, Xchg, Xgetbv, Xlatb, Xor, Xorpd,
    Xorps, Xsetbv,
}
