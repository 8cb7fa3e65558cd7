//! Injected randomness
//!
//! Randomized operations take the generator as a `&mut R` handle instead of
//! reaching for a process-wide one. Production code passes `rand::rngs::OsRng`;
//! tests pass a scripted source to pin the ephemeral key and IV.
//!
//! Every draw goes through `try_fill_bytes`. A failing source is reported as
//! `EntropySourceUnavailable` and never replaced by a weaker generator.

use rand::{CryptoRng, RngCore};

use crate::error::{CryptoError, CryptoResult};

/// Fill `buf` from the injected source.
pub(crate) fn fill<R: RngCore + CryptoRng>(rng: &mut R, buf: &mut [u8]) -> CryptoResult<()> {
    rng.try_fill_bytes(buf)
        .map_err(|e| CryptoError::EntropySourceUnavailable(e.to_string()))
}

/// Draw a fixed-size array from the injected source.
pub(crate) fn random_array<R: RngCore + CryptoRng, const N: usize>(
    rng: &mut R,
) -> CryptoResult<[u8; N]> {
    let mut out = [0u8; N];
    fill(rng, &mut out)?;
    Ok(out)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use rand::{CryptoRng, RngCore};

    /// Replays a fixed byte script. Runs dry with an error, not a panic.
    pub struct ScriptedRng {
        script: VecDeque<u8>,
    }

    impl ScriptedRng {
        pub fn new(chunks: &[&[u8]]) -> Self {
            Self {
                script: chunks.iter().flat_map(|c| c.iter().copied()).collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.script.len()
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).expect("scripted rng exhausted")
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            if self.script.len() < dest.len() {
                return Err(rand::Error::new("scripted rng exhausted"));
            }
            for byte in dest.iter_mut() {
                *byte = self.script.pop_front().unwrap_or_default();
            }
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    /// A source that always fails, standing in for an unavailable OS generator.
    pub struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("FailingRng is only drawn from via try_fill_bytes")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("FailingRng is only drawn from via try_fill_bytes")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("FailingRng is only drawn from via try_fill_bytes")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for FailingRng {}
}
