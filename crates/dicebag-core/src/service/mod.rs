//! Use-case services that pair the engine with history stores.
//!
//! The pure functions in [`crate::dice`], [`crate::selection`], and
//! [`crate::stats`] never persist anything. These services do the
//! bookkeeping a host application needs: record each roll or pick, look up
//! saved selections by id, and summarize what has been recorded.

pub mod dice;
pub mod selector;

pub use dice::DiceService;
pub use selector::{QUICK_SELECT_TITLE, SelectorService};
