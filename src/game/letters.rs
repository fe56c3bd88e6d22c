//! Letter tiles and the weighted distribution used to fill a board.
//!
//! The distribution is a fixed bag of 96 tiles. Q never appears alone:
//! it is always the two-letter tile "Qu".

use once_cell::sync::Lazy;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use std::fmt;

/// Tile faces and how many copies of each are in the bag.
static LETTER_WEIGHTS: [(&str, u32); 26] = [
    ("A", 8),
    ("B", 3),
    ("C", 3),
    ("D", 4),
    ("E", 10),
    ("F", 2),
    ("G", 3),
    ("H", 3),
    ("I", 7),
    ("J", 1),
    ("K", 2),
    ("L", 5),
    ("M", 3),
    ("N", 5),
    ("O", 6),
    ("P", 3),
    ("Qu", 1),
    ("R", 4),
    ("S", 5),
    ("T", 5),
    ("U", 4),
    ("V", 2),
    ("W", 2),
    ("X", 1),
    ("Y", 3),
    ("Z", 1),
];

/// Number of tiles in the bag.
pub const TILE_COUNT: u32 = 96;

static DISTRIBUTION: Lazy<WeightedIndex<u32>> = Lazy::new(|| {
    WeightedIndex::new(LETTER_WEIGHTS.iter().map(|(_, w)| *w)).expect("valid weights")
});

/// A single letter tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(&'static str);

impl Tile {
    /// Look up a tile by its face. Matching is exact: "Qu" is a tile, "Q" and "QU" are not.
    pub fn parse(face: &str) -> Option<Self> {
        LETTER_WEIGHTS
            .iter()
            .find(|(f, _)| *f == face)
            .map(|(f, _)| Tile(*f))
    }

    /// Every valid tile, in alphabetical order.
    pub fn all() -> impl Iterator<Item = Tile> {
        LETTER_WEIGHTS.iter().map(|(f, _)| Tile(*f))
    }

    /// Draw one tile from the bag (with replacement).
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Tile(LETTER_WEIGHTS[DISTRIBUTION.sample(rng)].0)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}
