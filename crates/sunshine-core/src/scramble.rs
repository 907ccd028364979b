//! Character-scramble text effect.
//!
//! Every tick, characters left of the resolve point show their final value
//! and the rest show random glyphs. The resolve point advances by one
//! character every `ticks_per_char` ticks, so the text settles left to right.

use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct Scramble {
    original: Vec<char>,
    glyphs: Vec<char>,
    ticks_per_char: u32,
    ticks: u32,
}

impl Scramble {
    pub fn new(text: &str, glyphs: &str, ticks_per_char: u32) -> Self {
        Self {
            original: text.chars().collect(),
            glyphs: glyphs.chars().collect(),
            ticks_per_char: ticks_per_char.max(1),
            ticks: 0,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Whether character `index` shows its final value on tick number `tick`.
    #[inline]
    pub fn is_locked(&self, index: usize, tick: u32) -> bool {
        (index as u64) * (self.ticks_per_char as u64) < tick as u64
    }

    fn is_finished_after(&self, ticks: u32) -> bool {
        ticks as u64 >= self.original.len() as u64 * self.ticks_per_char as u64
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ScrambleFrame {
        let tick = self.ticks;
        self.ticks = self.ticks.saturating_add(1);
        if self.is_finished_after(self.ticks) {
            return ScrambleFrame {
                text: self.original(),
                done: true,
            };
        }
        let text = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == ' ' || self.is_locked(i, tick) || self.glyphs.is_empty() {
                    c
                } else {
                    self.glyphs[rng.gen_range(0..self.glyphs.len())]
                }
            })
            .collect();
        ScrambleFrame { text, done: false }
    }
}
