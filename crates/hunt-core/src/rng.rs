//! Seedable simulation RNG.
//!
//! # Determinism strategy
//!
//! Every simulation instance owns exactly one `SimRng`.  Terrain generation,
//! target placement, detection draws and the target's random walk all consume
//! it in a fixed order, so one seed reproduces a whole run.  There is no
//! thread-local or global randomness anywhere in the workspace.
//!
//! Multi-trial sweeps derive one child per trial:
//!
//!   trial_seed = root_seed XOR (trial * MIXING_CONSTANT)
//!
//! Multiplying by the golden-ratio constant scatters neighbouring trial
//! numbers far apart in seed space.  Appending trials to a sweep leaves the
//! seeds of the earlier ones untouched.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// `2^64 / φ`, rounded to odd.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Implements [`RngCore`], so every `rand` API (`gen_bool`, `gen_range`,
/// distributions) works on it directly, and it can be passed anywhere a
/// `&mut impl Rng` is expected.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for trial `trial` of a sweep rooted at `root_seed`.
    #[inline]
    pub fn trial_seed(root_seed: u64, trial: u64) -> u64 {
        root_seed ^ trial.wrapping_mul(MIXING_CONSTANT)
    }

    /// RNG for trial `trial` of a sweep rooted at `root_seed`.
    pub fn for_trial(root_seed: u64, trial: u64) -> Self {
        Self::new(Self::trial_seed(root_seed, trial))
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
