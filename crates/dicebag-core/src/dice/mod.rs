//! Dice types and rolling.
//!
//! A [`Dice`] describes a roll request: how many dice of how many sides.
//! Rolling it against a [`RandomSource`] produces a [`DiceRoll`]. Dice can
//! also be built from notation like `2d6+3` (see [`notation`]) or from one
//! of the [`StandardDie`] sizes.

pub mod notation;
pub mod roll;

pub use notation::{Notation, NotationMode, parse_notation};
pub use roll::DiceRoll;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::random::RandomSource;

/// Largest number of dice a single request may roll.
pub const MAX_DICE_COUNT: u32 = 1000;

/// A validated roll request: `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DiceParts")]
pub struct Dice {
    sides: u32,
    count: u32,
}

#[derive(Deserialize)]
struct DiceParts {
    sides: u32,
    count: u32,
}

impl TryFrom<DiceParts> for Dice {
    type Error = DiceError;

    fn try_from(parts: DiceParts) -> DiceResult<Self> {
        Self::new(parts.sides, parts.count)
    }
}

impl Dice {
    /// Create a dice request. Fails if `sides` or `count` is zero, or if
    /// `count` exceeds [`MAX_DICE_COUNT`].
    pub fn new(sides: u32, count: u32) -> DiceResult<Self> {
        if sides == 0 {
            return Err(DiceError::InvalidArgument(
                "dice must have at least 1 side".into(),
            ));
        }
        if count == 0 {
            return Err(DiceError::InvalidArgument(
                "dice count must be at least 1".into(),
            ));
        }
        if count > MAX_DICE_COUNT {
            return Err(DiceError::InvalidArgument(format!(
                "at most {MAX_DICE_COUNT} dice per roll, got {count}"
            )));
        }
        Ok(Self { sides, count })
    }

    /// Create a request for a single die.
    pub fn single(sides: u32) -> DiceResult<Self> {
        Self::new(sides, 1)
    }

    /// Caller guarantees both values are non-zero.
    pub(crate) const fn new_unchecked(sides: u32, count: u32) -> Self {
        Self { sides, count }
    }

    /// Number of faces on each die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Number of dice rolled.
    pub fn count(self) -> u32 {
        self.count
    }

    /// Roll every die once, preserving draw order. The result has no modifier.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> DiceRoll {
        let results = (0..self.count).map(|_| rng.draw(self.sides)).collect();
        DiceRoll::new(self, results)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// The common polyhedral die sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardDie {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
}

impl StandardDie {
    /// Every standard die, smallest first.
    pub const ALL: [Self; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    /// The dice offered by a "random die" roll (d100 excluded).
    pub const COMMON: [Self; 6] = [Self::D4, Self::D6, Self::D8, Self::D10, Self::D12, Self::D20];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Look up the standard die with the given number of sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.sides() == sides)
    }

    /// Create a dice request for `count` of this die.
    pub fn dice(self, count: u32) -> DiceResult<Dice> {
        Dice::new(self.sides(), count)
    }
}

impl std::fmt::Display for StandardDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Validate a request and roll it, attaching `modifier` to the result.
pub fn roll_dice<R: RandomSource + ?Sized>(
    sides: u32,
    count: u32,
    modifier: i32,
    rng: &mut R,
) -> DiceResult<DiceRoll> {
    let dice = Dice::new(sides, count)?;
    Ok(dice.roll(rng).with_modifier(modifier))
}

/// Parse `text` as dice notation and roll it.
pub fn roll_from_notation<R: RandomSource + ?Sized>(
    text: &str,
    mode: NotationMode,
    rng: &mut R,
) -> DiceResult<DiceRoll> {
    let notation = parse_notation(text, mode)?;
    Ok(notation.roll(rng))
}
