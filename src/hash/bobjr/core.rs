//! Bob Jr. sponge state and the absorb/finish cycle.

use crate::hash::bobjr::permutation::kf800_permute;

/// Sponge rate in bytes. The remaining 32 bytes of state are capacity.
pub const RATE: usize = 68;

/// The Bob Jr. sponge state: 100 bytes of Keccak-f[800] state plus a
/// write cursor into the rate region.
///
/// Usage is `new`, any number of `absorb` calls, one `finish`, then
/// `digest`. Absorption runs in overwrite mode: input bytes replace the
/// rate bytes rather than being XORed into them, and the permutation
/// fires each time the rate fills up.
#[cfg_attr(feature = "full", derive(zeroize::Zeroize))]
pub struct BobJr {
    state: [u8; 100],
    ptr: usize,
}

impl BobJr {
    /// Creates a sponge with all-zero state.
    pub fn new() -> Self {
        BobJr {
            state: [0u8; 100],
            ptr: 0,
        }
    }

    /// Absorbs `data` into the rate region, permuting at each rate
    /// boundary.
    pub fn absorb(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (RATE - self.ptr).min(data.len());
            self.state[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            data = &data[take..];
            self.ptr += take;

            if self.ptr == RATE {
                self.permute();
                self.ptr = 0;
            }
        }
    }

    /// Applies padding and the final permutation.
    ///
    /// The unwritten tail of the rate region is cleared, a `0x01` domain
    /// byte is placed at the cursor and the top bit of the last rate byte
    /// is set. When the cursor sits on the last rate byte the two marks
    /// land in the same byte, which is harmless.
    pub fn finish(&mut self) {
        self.state[self.ptr..RATE].fill(0);
        self.state[self.ptr] = 0x01;
        self.state[RATE - 1] |= 0x80;
        self.permute();
        self.ptr = 0;
    }

    /// Returns the first 64 bytes of state as the digest.
    ///
    /// Only meaningful after `finish`.
    pub fn digest(&self) -> [u8; 64] {
        self.state[..64].try_into().unwrap()
    }

    fn permute(&mut self) {
        let mut lanes = [0u32; 25];
        for (lane, chunk) in lanes.iter_mut().zip(self.state.chunks_exact(4)) {
            *lane = u32::from_le_bytes(chunk.try_into().unwrap());
        }

        kf800_permute(&mut lanes);

        for (chunk, lane) in self.state.chunks_exact_mut(4).zip(&lanes) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
    }
}

impl Default for BobJr {
    fn default() -> Self {
        Self::new()
    }
}
