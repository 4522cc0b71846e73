//! Picking an item from a selection, uniformly or by weight.

use super::{Selection, SelectionItem, SelectionResult};
use crate::dice::Dice;
use crate::random::RandomSource;

/// Pick an item uniformly by rolling one die with as many sides as there
/// are items. The die result is the 1-based position of the pick.
pub fn select_uniform<R: RandomSource + ?Sized>(
    selection: &Selection,
    rng: &mut R,
) -> SelectionResult {
    let sides = selection.item_count() as u32;
    let roll = Dice::new_unchecked(sides, 1).roll(rng);
    let position = roll.results().first().copied().unwrap_or(1);
    picked(selection, position)
}

/// Pick an item with probability proportional to its weight.
///
/// Draws a value in `1..=total_weight` and selects the first item whose
/// cumulative weight reaches the draw.
pub fn select_weighted<R: RandomSource + ?Sized>(
    selection: &Selection,
    rng: &mut R,
) -> SelectionResult {
    let draw = rng.draw(selection.total_weight());
    let position = weighted_position(selection.items(), draw).unwrap_or(selection.item_count());
    picked(selection, position as u32)
}

/// The 1-based position of the first item whose cumulative weight is at
/// least `draw`, or `None` if `draw` exceeds the total weight.
pub fn weighted_position(items: &[SelectionItem], draw: u32) -> Option<usize> {
    let mut cumulative = 0u64;
    items
        .iter()
        .position(|item| {
            cumulative += u64::from(item.weight());
            u64::from(draw) <= cumulative
        })
        .map(|index| index + 1)
}

fn picked(selection: &Selection, position: u32) -> SelectionResult {
    let position = position.clamp(1, selection.item_count() as u32);
    let selected_item = selection.items()[position as usize - 1].clone();
    SelectionResult {
        id: uuid::Uuid::new_v4().to_string(),
        selection: selection.clone(),
        dice_roll: position,
        selected_item,
        timestamp: chrono::Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn weighted(weights: &[u32]) -> Selection {
        let items = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                SelectionItem::new(format!("item_{i}"), format!("Option {}", i + 1), w).unwrap()
            })
            .collect();
        Selection::new(items, "weighted").unwrap()
    }

    #[test]
    fn uniform_uses_die_result_as_position() {
        let s = Selection::from_texts(&["a", "b", "c"], "t").unwrap();
        let mut src = ScriptedSource::new([3, 1]);
        let first = select_uniform(&s, &mut src);
        assert_eq!(first.dice_roll(), 3);
        assert_eq!(first.selected_item().text(), "c");
        let second = select_uniform(&s, &mut src);
        assert_eq!(second.dice_roll(), 1);
        assert_eq!(second.selected_item().text(), "a");
    }

    #[test]
    fn uniform_single_item_always_picks_it() {
        let s = Selection::from_texts(&["only"], "t").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(select_uniform(&s, &mut rng).dice_roll(), 1);
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let s = Selection::from_texts(&["1", "2", "3", "4", "5", "6"], "t").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let r = select_uniform(&s, &mut rng);
            assert!((1..=6).contains(&r.dice_roll()));
            assert_eq!(s.item_at(r.dice_roll()), Some(r.selected_item()));
        }
    }

    #[test]
    fn weighted_even_split_follows_draws() {
        let s = weighted(&[1, 1]);
        let mut src = ScriptedSource::new([1, 2]);
        assert_eq!(select_weighted(&s, &mut src).dice_roll(), 1);
        assert_eq!(select_weighted(&s, &mut src).dice_roll(), 2);
    }

    #[test]
    fn weighted_heavy_item_wins_mid_draw() {
        let s = weighted(&[1, 99]);
        let mut src = ScriptedSource::new([50]);
        let r = select_weighted(&s, &mut src);
        assert_eq!(r.dice_roll(), 2);
        assert_eq!(r.selected_item().text(), "Option 2");
    }

    #[test]
    fn weighted_position_boundaries() {
        let s = weighted(&[2, 3, 5]);
        assert_eq!(weighted_position(s.items(), 1), Some(1));
        assert_eq!(weighted_position(s.items(), 2), Some(1));
        assert_eq!(weighted_position(s.items(), 3), Some(2));
        assert_eq!(weighted_position(s.items(), 5), Some(2));
        assert_eq!(weighted_position(s.items(), 6), Some(3));
        assert_eq!(weighted_position(s.items(), 10), Some(3));
        assert_eq!(weighted_position(s.items(), 11), None);
    }

    #[test]
    fn weighted_is_deterministic_with_seed() {
        let s = weighted(&[1, 2, 3, 4]);
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| select_weighted(&s, &mut rng).dice_roll())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(8), picks(8));
    }

    #[test]
    fn weighted_favours_heavier_items() {
        let s = weighted(&[1, 9]);
        let mut rng = StdRng::seed_from_u64(2024);
        let heavy = (0..1000)
            .filter(|_| select_weighted(&s, &mut rng).dice_roll() == 2)
            .count();
        assert!(heavy > 800, "heavy item picked {heavy} times");
    }
}
