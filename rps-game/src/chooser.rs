//! Computer opponent: uniform choice over an injected random source.

use hmac::{Hmac, Mac};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

use crate::choice::Choice;

/// Capability the round controller draws the computer's choice from.
pub trait ChoiceSource {
    fn pick(&mut self) -> Choice;
}

impl<T: ChoiceSource + ?Sized> ChoiceSource for Box<T> {
    fn pick(&mut self) -> Choice {
        (**self).pick()
    }
}

/// Pick one choice uniformly at random.
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    let index = rng.gen_range(0..Choice::ALL.len());
    Choice::ALL[index]
}

/// Uniform chooser over any generator.
#[derive(Debug, Clone)]
pub struct RandomChooser<R = CountingRng<ChaCha20Rng>> {
    rng: R,
}

impl<R: RngCore> RandomChooser<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the underlying generator.
    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }
}

impl RandomChooser<CountingRng<ChaCha20Rng>> {
    /// Deterministic chooser for a user-visible seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let stream_seed = derive_stream_seed(seed, b"computer");
        Self::new(CountingRng::new(ChaCha20Rng::seed_from_u64(stream_seed)))
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.rng.draws()
    }
}

impl<R: RngCore> ChoiceSource for RandomChooser<R> {
    fn pick(&mut self) -> Choice {
        pick_random(&mut self.rng)
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedChooser {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedChooser {
    /// Build a scripted chooser. An empty script always plays rock.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Chooser that always throws `choice`.
    #[must_use]
    pub fn always(choice: Choice) -> Self {
        Self::new([choice])
    }

    /// How many picks have been served.
    #[must_use]
    pub const fn served(&self) -> usize {
        self.cursor
    }
}

impl ChoiceSource for ScriptedChooser {
    fn pick(&mut self) -> Choice {
        let choice = if self.script.is_empty() {
            Choice::Rock
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor = self.cursor.saturating_add(1);
        choice
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl<R: RngCore> CountingRng<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Domain-separated stream seed derived from the user seed.
fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
