//! Random movie titles.
//!
//! A [`TitleSource`] hands out pseudo-English sentences of roughly the
//! requested length; [`title_case`] turns them into something that looks
//! like a film title.

use fake::{Fake, faker::lorem::en::Sentence};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const TITLE_WORDS: usize = 4;

pub trait TitleSource {
    fn sentence(&mut self, words: usize) -> String;
}

pub struct FakerTitles<R = StdRng> {
    rng: R,
}

impl FakerTitles<StdRng> {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> FakerTitles<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for FakerTitles<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TitleSource for FakerTitles<R> {
    fn sentence(&mut self, words: usize) -> String {
        Sentence(words..words + 1).fake_with_rng(&mut self.rng)
    }
}

/// Upper-cases the first letter of each alphabetic run and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
