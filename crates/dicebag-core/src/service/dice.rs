//! Dice rolling with recorded history.

use crate::config::EngineConfig;
use crate::dice::{Dice, DiceRoll, StandardDie, parse_notation, roll_dice};
use crate::error::DiceResult;
use crate::history::{HistoryStore, MemoryStore};
use crate::random::RandomSource;
use crate::stats::{DiceStatistics, compute_dice_statistics, compute_dice_statistics_for_sides};

/// Rolls dice and appends every roll to a history store.
#[derive(Debug, Clone)]
pub struct DiceService<S = MemoryStore<DiceRoll>> {
    store: S,
    config: EngineConfig,
}

impl Default for DiceService {
    fn default() -> Self {
        Self::new(MemoryStore::new(), EngineConfig::default())
    }
}

impl<S: HistoryStore<DiceRoll>> DiceService<S> {
    /// Create a service over `store`.
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying history store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Roll `count` dice with `sides` faces and record the result.
    pub fn roll<R: RandomSource + ?Sized>(
        &mut self,
        sides: u32,
        count: u32,
        modifier: i32,
        rng: &mut R,
    ) -> DiceResult<DiceRoll> {
        let roll = roll_dice(sides, count, modifier, rng)?;
        Ok(self.record(roll))
    }

    /// Roll `count` of a standard die and record the result.
    pub fn roll_standard<R: RandomSource + ?Sized>(
        &mut self,
        die: StandardDie,
        count: u32,
        modifier: i32,
        rng: &mut R,
    ) -> DiceResult<DiceRoll> {
        self.roll(die.sides(), count, modifier, rng)
    }

    /// Roll each request in turn with the same modifier, recording each.
    pub fn roll_many<R: RandomSource + ?Sized>(
        &mut self,
        dice: &[Dice],
        modifier: i32,
        rng: &mut R,
    ) -> Vec<DiceRoll> {
        dice.iter()
            .map(|d| {
                let roll = d.roll(rng).with_modifier(modifier);
                self.record(roll)
            })
            .collect()
    }

    /// Parse `text` with the configured grammar, roll, and record.
    pub fn roll_notation<R: RandomSource + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> DiceResult<DiceRoll> {
        let notation = parse_notation(text, self.config.notation_mode).inspect_err(|e| {
            tracing::debug!(%text, error = %e, "rejected dice notation");
        })?;
        Ok(self.record(notation.roll(rng)))
    }

    /// Roll a single die of a randomly chosen common size (d4 to d20).
    pub fn roll_random_standard<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> DiceRoll {
        let index = (rng.draw(StandardDie::COMMON.len() as u32) as usize).saturating_sub(1);
        let die = StandardDie::COMMON[index.min(StandardDie::COMMON.len() - 1)];
        let roll = Dice::new_unchecked(die.sides(), 1).roll(rng);
        self.record(roll)
    }

    /// Every recorded roll, oldest first.
    pub fn history(&self) -> Vec<DiceRoll> {
        self.store.list_all()
    }

    /// The most recent rolls, up to the configured limit.
    pub fn recent(&self) -> Vec<DiceRoll> {
        self.store.list_recent(self.config.recent_limit)
    }

    /// The last `limit` rolls, oldest first.
    pub fn recent_n(&self, limit: usize) -> Vec<DiceRoll> {
        self.store.list_recent(limit)
    }

    /// Recorded rolls that used `sides`-sided dice.
    pub fn rolls_for_sides(&self, sides: u32) -> Vec<DiceRoll> {
        self.store
            .list_all()
            .into_iter()
            .filter(|r| r.dice().sides() == sides)
            .collect()
    }

    /// Statistics over the whole history.
    pub fn statistics(&self) -> DiceStatistics {
        compute_dice_statistics(&self.store.list_all())
    }

    /// Statistics over rolls of `sides`-sided dice only.
    pub fn statistics_for_sides(&self, sides: u32) -> DiceStatistics {
        compute_dice_statistics_for_sides(&self.store.list_all(), sides)
    }

    /// Forget every recorded roll.
    pub fn clear_history(&mut self) {
        let cleared = self.store.len();
        self.store.clear();
        tracing::info!(cleared, "dice history cleared");
    }

    fn record(&mut self, roll: DiceRoll) -> DiceRoll {
        tracing::debug!(id = roll.id(), roll = %roll, "roll recorded");
        self.store.append(roll.clone());
        roll
    }
}
