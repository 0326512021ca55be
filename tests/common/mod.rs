// Shared helpers for the integration tests (each test file is its own
// crate, so common code lives in a submodule).

use x86_decoder::{
    DisassemblerMode, InstructionDecoder, InstructionInfo, InstructionSetVendor, MemorySource,
};

/// Tiny deterministic PRNG so randomized streams reproduce across runs.
pub struct XorShift64(pub u64);

impl XorShift64 {
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    #[allow(dead_code)]
    pub fn fill(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Decodes one instruction with vendor `Intel` and instruction pointer 0.
#[allow(dead_code)]
pub fn decode_one(mode: DisassemblerMode, bytes: &[u8]) -> (bool, InstructionInfo) {
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(bytes)),
        mode,
        InstructionSetVendor::Intel,
        0,
    );
    let mut info = InstructionInfo::default();
    let more = decoder.decode_instruction(&mut info);
    (more, info)
}

/// Decodes the whole buffer into records.
#[allow(dead_code)]
pub fn decode_all(mode: DisassemblerMode, bytes: &[u8]) -> Vec<InstructionInfo> {
    let mut decoder = InstructionDecoder::with_config(
        Some(MemorySource::new(bytes)),
        mode,
        InstructionSetVendor::Intel,
        0,
    );
    decoder.iter_mut().collect()
}
