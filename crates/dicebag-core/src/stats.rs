//! Summary statistics over roll and selection history.
//!
//! Both aggregators accept any collection, never fail, and return a zeroed
//! record for empty input.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dice::DiceRoll;
use crate::selection::SelectionResult;

/// Aggregate view over a set of dice rolls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiceStatistics {
    /// Number of rolls aggregated.
    pub total_rolls: usize,
    /// Mean of every individual die value.
    pub average_result: f64,
    /// Lowest individual die value.
    pub min_result: u32,
    /// Highest individual die value.
    pub max_result: u32,
    /// Die value seen most often. On ties, any of the tied values.
    pub most_common_result: u32,
    /// Die value -> number of times it came up.
    pub result_distribution: BTreeMap<u32, usize>,
}

/// Aggregate view over a set of selection results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionStatistics {
    /// Number of picks aggregated.
    pub total_selections: usize,
    /// Item text picked most often. On ties, any of the tied texts.
    pub most_common_item: Option<String>,
    /// Item text -> number of times it was picked.
    pub most_used_items: BTreeMap<String, usize>,
}

/// Summarize every die value across `rolls`.
pub fn compute_dice_statistics<'a>(
    rolls: impl IntoIterator<Item = &'a DiceRoll>,
) -> DiceStatistics {
    let mut total_rolls = 0;
    let mut sum = 0u64;
    let mut values = 0usize;
    let mut distribution = BTreeMap::new();

    for roll in rolls {
        total_rolls += 1;
        for &value in roll.results() {
            sum += u64::from(value);
            values += 1;
            *distribution.entry(value).or_insert(0) += 1;
        }
    }

    if values == 0 {
        return DiceStatistics {
            total_rolls,
            ..DiceStatistics::default()
        };
    }

    DiceStatistics {
        total_rolls,
        average_result: sum as f64 / values as f64,
        min_result: distribution.keys().next().copied().unwrap_or(0),
        max_result: distribution.keys().next_back().copied().unwrap_or(0),
        most_common_result: most_common(&distribution).unwrap_or(0),
        result_distribution: distribution,
    }
}

/// Summarize only the rolls made with `sides`-sided dice.
pub fn compute_dice_statistics_for_sides<'a>(
    rolls: impl IntoIterator<Item = &'a DiceRoll>,
    sides: u32,
) -> DiceStatistics {
    compute_dice_statistics(rolls.into_iter().filter(|r| r.dice().sides() == sides))
}

/// Count how often each item text was picked.
pub fn compute_selection_statistics<'a>(
    results: impl IntoIterator<Item = &'a SelectionResult>,
) -> SelectionStatistics {
    let mut total_selections = 0;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for result in results {
        total_selections += 1;
        *counts
            .entry(result.selected_item().text().to_string())
            .or_insert(0) += 1;
    }

    SelectionStatistics {
        total_selections,
        most_common_item: most_common(&counts),
        most_used_items: counts,
    }
}

/// The key with the highest count; the first such key in map order on ties.
fn most_common<K: Clone + Ord>(counts: &BTreeMap<K, usize>) -> Option<K> {
    let mut best: Option<(&K, usize)> = None;
    for (key, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key.clone())
}
