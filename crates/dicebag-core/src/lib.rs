//! Randomization and aggregation engine for Dicebag.
//!
//! Provides a dice model with notation parsing (`2d6+3`), roll execution
//! against an injectable random source, weighted and uniform selection from
//! small sets of choices, and statistics over roll and selection history.
//! Persistence is abstracted behind [`HistoryStore`]; an in-memory store
//! ships for hosts and tests.

pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod random;
pub mod selection;
pub mod service;
pub mod stats;
pub mod todo;

pub use config::{DEFAULT_RECENT_LIMIT, EngineConfig, MAX_SELECTION_ITEMS};
pub use dice::{
    Dice, DiceRoll, MAX_DICE_COUNT, Notation, NotationMode, StandardDie, parse_notation, roll_dice,
    roll_from_notation,
};
pub use error::{DiceError, DiceResult, ErrorKind};
pub use history::{HistoryStore, MemoryStore, Record};
pub use random::{RandomSource, ScriptedSource};
pub use selection::{
    Selection, SelectionItem, SelectionResult, select_uniform, select_weighted, weighted_position,
};
pub use service::{DiceService, SelectorService};
pub use stats::{
    DiceStatistics, SelectionStatistics, compute_dice_statistics,
    compute_dice_statistics_for_sides, compute_selection_statistics,
};
pub use todo::{Priority, Todo};
