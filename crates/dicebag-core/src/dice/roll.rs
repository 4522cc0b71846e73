//! Dice roll results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Dice;
use crate::error::{DiceError, DiceResult};
use crate::history::Record;

/// The immutable result of rolling a [`Dice`] request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RollParts")]
pub struct DiceRoll {
    id: String,
    dice: Dice,
    results: Vec<u32>,
    #[serde(default)]
    modifier: i32,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RollParts {
    id: String,
    dice: Dice,
    results: Vec<u32>,
    #[serde(default)]
    modifier: i32,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RollParts> for DiceRoll {
    type Error = DiceError;

    fn try_from(parts: RollParts) -> DiceResult<Self> {
        let RollParts {
            id,
            dice,
            results,
            modifier,
            timestamp,
        } = parts;
        if results.len() != dice.count() as usize {
            return Err(DiceError::InvalidArgument(format!(
                "{dice} needs {} results, got {}",
                dice.count(),
                results.len()
            )));
        }
        if let Some(bad) = results.iter().find(|v| !(1..=dice.sides()).contains(*v)) {
            return Err(DiceError::InvalidArgument(format!(
                "result {bad} is outside 1..={}",
                dice.sides()
            )));
        }
        Ok(Self {
            id,
            dice,
            results,
            modifier,
            timestamp,
        })
    }
}

impl DiceRoll {
    /// Wrap already-drawn results. `results` holds one value per die.
    pub(crate) fn new(dice: Dice, results: Vec<u32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            dice,
            results,
            modifier: 0,
            timestamp: Utc::now(),
        }
    }

    /// Attach a modifier. Only the total changes; the drawn values do not.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Unique identifier of this roll.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The request that was rolled.
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// Individual die values in draw order.
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// The fixed amount added to the sum.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// When the roll happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Sum of all die values.
    pub fn sum(&self) -> u64 {
        self.results.iter().map(|&v| u64::from(v)).sum()
    }

    /// Sum plus modifier.
    pub fn total(&self) -> i64 {
        self.sum() as i64 + i64::from(self.modifier)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn min(&self) -> u32 {
        self.results.iter().copied().min().unwrap_or(0)
    }

    /// The highest single die value, or 0 if empty.
    pub fn max(&self) -> u32 {
        self.results.iter().copied().max().unwrap_or(0)
    }

    /// Mean die value, or 0.0 if empty.
    pub fn average(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.results.len() as f64
        }
    }

    fn modifier_suffix(&self) -> String {
        match self.modifier {
            0 => String::new(),
            m if m > 0 => format!("+{m}"),
            m => m.to_string(),
        }
    }
}

impl Record for DiceRoll {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = self.modifier_suffix();
        if self.dice.count() == 1 {
            write!(f, "{}{suffix} = {}", self.dice, self.total())
        } else {
            let values: Vec<String> = self.results.iter().map(|v| v.to_string()).collect();
            write!(
                f,
                "{}{suffix} = {}{suffix} = {}",
                self.dice,
                values.join("+"),
                self.total()
            )
        }
    }
}
