//! Pseudo-random source and entropy seeding

use fastrand::Rng;

/// External noise source used to seed the random generator
///
/// On hardware this is typically a floating analog input. Implementations
/// may wait a little between readings to let the noise settle.
pub trait EntropySource {
    /// Read one noise sample
    fn read_noise(&mut self) -> u32;
}

/// Accumulate a seed from several noise readings
///
/// The first reading is used as is, further readings are XOR-ed in shifted
/// by 3, 6, ... 30 bits so that low-entropy samples still spread over the
/// whole word.
pub fn gather_seed<E: EntropySource + ?Sized>(entropy: &mut E) -> u32 {
    let mut seed = entropy.read_noise();
    for shift in (3..31).step_by(3) {
        seed ^= entropy.read_noise().wrapping_shl(shift);
    }
    seed
}

/// Seedable pseudo-random generator used by the programs
#[derive(Debug, Clone)]
pub struct Random {
    rng: Rng,
}

impl Random {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Restart the sequence from a new seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Value in `0..max`, zero when `max == 0`
    pub fn uniform(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.rng.u32(0..max)
    }

    /// Value in `min..max`, `min` when the range is empty
    pub fn uniform_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.u32(min..max)
    }

    /// Index in `0..len`, zero when `len == 0`
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.usize(0..len)
    }

    /// Channel value in `0..max`
    pub fn channel(&mut self, max: u8) -> u8 {
        if max == 0 {
            return 0;
        }
        self.rng.u8(0..max)
    }

    /// Hue in whole degrees, as a fraction of a full turn
    #[allow(clippy::cast_precision_loss)]
    pub fn hue(&mut self) -> f32 {
        self.uniform(360) as f32 / 360.0
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        self.rng.shuffle(items);
    }
}
