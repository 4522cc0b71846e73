//! Creating selections and picking from them, with recorded history.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{EngineConfig, MAX_SELECTION_ITEMS};
use crate::error::{DiceError, DiceResult};
use crate::history::{HistoryStore, MemoryStore};
use crate::random::RandomSource;
use crate::selection::{Selection, SelectionResult, select_uniform, select_weighted};
use crate::stats::{SelectionStatistics, compute_selection_statistics};
use crate::todo::Todo;

/// Title of selections made by [`SelectorService::quick_select`].
pub const QUICK_SELECT_TITLE: &str = "Quick pick from all todos";

/// Saves selections and records every pick made from them.
#[derive(Debug, Clone)]
pub struct SelectorService<S = MemoryStore<Selection>, H = MemoryStore<SelectionResult>> {
    selections: S,
    results: H,
    config: EngineConfig,
}

impl Default for SelectorService {
    fn default() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new(), EngineConfig::default())
    }
}

impl<S, H> SelectorService<S, H>
where
    S: HistoryStore<Selection>,
    H: HistoryStore<SelectionResult>,
{
    /// Create a service over a selection store and a result store.
    pub fn new(selections: S, results: H, config: EngineConfig) -> Self {
        Self {
            selections,
            results,
            config,
        }
    }

    /// Save a selection, replacing any stored selection with the same id.
    pub fn save(&mut self, selection: Selection) -> Selection {
        tracing::debug!(id = selection.id(), title = selection.title(), "selection saved");
        self.selections.upsert(selection.clone());
        selection
    }

    /// Build and save a selection from plain texts.
    pub fn create_from_texts<T: AsRef<str>>(
        &mut self,
        texts: &[T],
        title: impl Into<String>,
    ) -> DiceResult<Selection> {
        let selection = Selection::from_texts(texts, title)?;
        Ok(self.save(selection))
    }

    /// Build and save a selection from the todos whose ids are listed.
    /// Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if no id matches or more than
    /// [`MAX_SELECTION_ITEMS`] do.
    pub fn create_from_todos(
        &mut self,
        todo_ids: &[&str],
        todos: &[Todo],
        title: impl Into<String>,
    ) -> DiceResult<Selection> {
        let matched: Vec<&Todo> = todo_ids
            .iter()
            .filter_map(|id| todos.iter().find(|t| t.id == *id))
            .collect();
        if matched.is_empty() {
            return Err(DiceError::InvalidArgument("no matching todos found".into()));
        }
        let selection = Selection::from_todos(matched, title)?;
        Ok(self.save(selection))
    }

    /// Build and save a selection from the first open todos in `category`.
    pub fn create_from_category(
        &mut self,
        category: &str,
        todos: &[Todo],
        title: Option<String>,
    ) -> DiceResult<Selection> {
        let open: Vec<&Todo> = todos
            .iter()
            .filter(|t| t.category == category && !t.is_completed)
            .take(MAX_SELECTION_ITEMS)
            .collect();
        if open.is_empty() {
            return Err(DiceError::InvalidArgument(format!(
                "no open todos in category \"{category}\""
            )));
        }
        let title = title.unwrap_or_else(|| format!("Pick from {category}"));
        let selection = Selection::from_todos(open, title)?;
        Ok(self.save(selection))
    }

    /// Look up a saved selection.
    ///
    /// # Errors
    ///
    /// [`DiceError::NotFound`] if no selection has that id.
    pub fn find(&self, id: &str) -> DiceResult<Selection> {
        self.selections.find_by_id(id).ok_or_else(|| {
            tracing::warn!(id, "selection not found");
            DiceError::NotFound(format!("selection {id}"))
        })
    }

    /// Pick uniformly from a saved selection and record the result.
    pub fn perform<R: RandomSource + ?Sized>(
        &mut self,
        id: &str,
        rng: &mut R,
    ) -> DiceResult<SelectionResult> {
        let selection = self.find(id)?;
        Ok(self.record(select_uniform(&selection, rng)))
    }

    /// Pick by weight from a saved selection and record the result.
    pub fn perform_weighted<R: RandomSource + ?Sized>(
        &mut self,
        id: &str,
        rng: &mut R,
    ) -> DiceResult<SelectionResult> {
        let selection = self.find(id)?;
        Ok(self.record(select_weighted(&selection, rng)))
    }

    /// Shuffle the open todos, save up to six of them as a selection, and
    /// pick one uniformly.
    pub fn quick_select<R: Rng + ?Sized>(
        &mut self,
        todos: &[Todo],
        rng: &mut R,
    ) -> DiceResult<SelectionResult> {
        let mut open: Vec<&Todo> = todos.iter().filter(|t| !t.is_completed).collect();
        if open.is_empty() {
            return Err(DiceError::InvalidArgument("no open todos".into()));
        }
        open.shuffle(rng);
        open.truncate(MAX_SELECTION_ITEMS);
        let selection = self.save(Selection::from_todos(open, QUICK_SELECT_TITLE)?);
        self.perform(selection.id(), rng)
    }

    /// Every saved selection.
    pub fn selections(&self) -> Vec<Selection> {
        self.selections.list_all()
    }

    /// Every recorded pick, oldest first.
    pub fn results(&self) -> Vec<SelectionResult> {
        self.results.list_all()
    }

    /// The most recent picks, up to the configured limit.
    pub fn recent_results(&self) -> Vec<SelectionResult> {
        self.results.list_recent(self.config.recent_limit)
    }

    /// The last `limit` picks, oldest first.
    pub fn recent_results_n(&self, limit: usize) -> Vec<SelectionResult> {
        self.results.list_recent(limit)
    }

    /// Delete a saved selection. Recorded picks keep their snapshot.
    pub fn delete_selection(&mut self, id: &str) -> DiceResult<()> {
        self.selections.remove(id).inspect_err(|_| {
            tracing::warn!(id, "cannot delete missing selection");
        })
    }

    /// Forget every recorded pick. Saved selections are kept.
    pub fn clear_history(&mut self) {
        let cleared = self.results.len();
        self.results.clear();
        tracing::info!(cleared, "selection history cleared");
    }

    /// Statistics over every recorded pick.
    pub fn statistics(&self) -> SelectionStatistics {
        compute_selection_statistics(&self.results.list_all())
    }

    fn record(&mut self, result: SelectionResult) -> SelectionResult {
        tracing::debug!(
            selection = result.selection().id(),
            position = result.dice_roll(),
            item = result.selected_item().text(),
            "pick recorded"
        );
        self.results.append(result.clone());
        result
    }
}
