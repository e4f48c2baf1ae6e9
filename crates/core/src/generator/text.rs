//! Synthetic vendor and description text.

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of synthetic vendor names and short free text.
///
/// The generator needs exactly these two operations, so tests can
/// substitute a deterministic stub.
pub trait TextSource {
    /// Returns a synthetic company name.
    fn company_name(&mut self) -> String;

    /// Returns a short free-text snippet of at most `max_chars` characters.
    fn short_text(&mut self, max_chars: usize) -> String;
}

/// Production text source backed by the `fake` crate.
///
/// Owns its own random stream, independent of the stream driving
/// amounts and ids.
#[derive(Debug)]
pub struct FakeTextSource {
    rng: StdRng,
}

impl FakeTextSource {
    /// Creates a text source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic text source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FakeTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for FakeTextSource {
    fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng::<String, _>(&mut self.rng)
    }

    fn short_text(&mut self, max_chars: usize) -> String {
        let text = Sentence(3..8).fake_with_rng::<String, _>(&mut self.rng);
        if text.chars().count() > max_chars {
            text.chars().take(max_chars).collect()
        } else {
            text
        }
    }
}
