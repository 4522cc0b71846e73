//! Dice notation parsing (`2d6+3`, `1d20-2`, `3d8`).
//!
//! Grammar, after all whitespace is removed and the text is lowercased:
//!
//! ```text
//! notation := count? "d" sides modifier?
//! modifier := ("+" | "-") digits
//! ```
//!
//! The whole string must match. Whether `count` may be omitted depends on
//! the [`NotationMode`].

use serde::{Deserialize, Serialize};

use super::{Dice, DiceRoll, MAX_DICE_COUNT};
use crate::error::{DiceError, DiceResult};
use crate::random::RandomSource;

/// Which notation grammar to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NotationMode {
    /// The leading count is required: `1d6` is valid, `d6` is not.
    #[default]
    Strict,
    /// The leading count may be omitted and defaults to 1: `d6` means `1d6`.
    Lenient,
}

/// A parsed dice expression: a validated request plus a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notation {
    /// The dice to roll.
    pub dice: Dice,
    /// Amount added to the sum.
    pub modifier: i32,
}

impl Notation {
    /// Number of faces on each die.
    pub fn sides(&self) -> u32 {
        self.dice.sides()
    }

    /// Number of dice.
    pub fn count(&self) -> u32 {
        self.dice.count()
    }

    /// Roll the dice and attach the modifier.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DiceRoll {
        self.dice.roll(rng).with_modifier(self.modifier)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modifier {
            0 => write!(f, "{}", self.dice),
            m if m > 0 => write!(f, "{}+{m}", self.dice),
            m => write!(f, "{}{m}", self.dice),
        }
    }
}

impl std::str::FromStr for Notation {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        parse_notation(s, NotationMode::Strict)
    }
}

/// Parse dice notation under the given grammar.
///
/// # Errors
///
/// [`DiceError::InvalidNotation`] when the text does not match the grammar,
/// [`DiceError::InvalidArgument`] when it matches but count or sides is zero,
/// or count exceeds [`MAX_DICE_COUNT`].
pub fn parse_notation(text: &str, mode: NotationMode) -> DiceResult<Notation> {
    let clean: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if clean.is_empty() {
        return Err(DiceError::InvalidNotation("empty notation".into()));
    }

    let invalid = || DiceError::InvalidNotation(format!("\"{}\"", text.trim()));

    let (count_part, rest) = clean.split_once('d').ok_or_else(invalid)?;
    let count = match (count_part.is_empty(), mode) {
        (true, NotationMode::Lenient) => 1,
        (true, NotationMode::Strict) => return Err(invalid()),
        (false, _) => parse_digits(count_part).ok_or_else(invalid)?,
    };

    let split = rest.find(['+', '-']).unwrap_or(rest.len());
    let (sides_part, modifier_part) = rest.split_at(split);
    let sides = parse_digits(sides_part).ok_or_else(invalid)?;
    let modifier = parse_modifier(modifier_part).ok_or_else(invalid)?;

    let dice = Dice::new(sides, count)?;
    Ok(Notation { dice, modifier })
}

/// A non-empty run of ASCII digits that fits in a `u32`.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// An empty string (no modifier) or a sign followed by digits.
fn parse_modifier(s: &str) -> Option<i32> {
    let Some(sign) = s.chars().next() else {
        return Some(0);
    };
    let magnitude = i64::from(parse_digits(&s[sign.len_utf8()..])?);
    let value = if sign == '-' { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
