//! Selections: small sets of weighted choices to pick from at random.
//!
//! A [`Selection`] holds 1 to [`MAX_SELECTION_ITEMS`] items. Picking one
//! (see [`selector`]) yields a [`SelectionResult`] that snapshots the whole
//! selection together with the chosen position.

pub mod selector;

pub use selector::{select_uniform, select_weighted, weighted_position};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MAX_SELECTION_ITEMS;
use crate::error::{DiceError, DiceResult};
use crate::history::Record;
use crate::todo::Todo;

/// Title used for selections built from free text.
pub const DEFAULT_TEXT_TITLE: &str = "Custom selection";

/// Title used for selections built from todos.
pub const DEFAULT_TODO_TITLE: &str = "Todo selection";

/// One choice in a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemParts")]
pub struct SelectionItem {
    id: String,
    text: String,
    weight: u32,
}

#[derive(Deserialize)]
struct ItemParts {
    id: String,
    text: String,
    #[serde(default = "default_weight")]
    weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl TryFrom<ItemParts> for SelectionItem {
    type Error = DiceError;

    fn try_from(parts: ItemParts) -> DiceResult<Self> {
        Self::new(parts.id, parts.text, parts.weight)
    }
}

impl SelectionItem {
    /// Create an item. Fails if `text` is blank or `weight` is zero.
    pub fn new(id: impl Into<String>, text: impl Into<String>, weight: u32) -> DiceResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DiceError::InvalidArgument(
                "item text must not be blank".into(),
            ));
        }
        if weight == 0 {
            return Err(DiceError::InvalidArgument(format!(
                "weight of \"{text}\" must be at least 1"
            )));
        }
        Ok(Self {
            id: id.into(),
            text,
            weight,
        })
    }

    /// Create an item with weight 1.
    pub fn unweighted(id: impl Into<String>, text: impl Into<String>) -> DiceResult<Self> {
        Self::new(id, text, 1)
    }

    /// Item identifier (for todo-backed items, the todo id).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Relative weight for weighted picks.
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl std::fmt::Display for SelectionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A titled set of 1 to 6 choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SelectionParts")]
pub struct Selection {
    id: String,
    items: Vec<SelectionItem>,
    title: String,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct SelectionParts {
    id: String,
    items: Vec<SelectionItem>,
    title: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<SelectionParts> for Selection {
    type Error = DiceError;

    fn try_from(parts: SelectionParts) -> DiceResult<Self> {
        let mut selection = Self::new(parts.items, parts.title)?;
        selection.id = parts.id;
        selection.timestamp = parts.timestamp;
        Ok(selection)
    }
}

impl Selection {
    /// Create a selection with a fresh id.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `items` is empty, holds more than
    /// [`MAX_SELECTION_ITEMS`], or the total weight overflows `u32`.
    pub fn new(items: Vec<SelectionItem>, title: impl Into<String>) -> DiceResult<Self> {
        check_item_count(items.len())?;
        if items
            .iter()
            .try_fold(0u32, |acc, item| acc.checked_add(item.weight))
            .is_none()
        {
            return Err(DiceError::InvalidArgument("total weight is too large".into()));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            items,
            title: title.into(),
            timestamp: Utc::now(),
        })
    }

    /// Build a selection from plain texts. Each text is trimmed and gets
    /// weight 1 and the id `item_{index}`.
    pub fn from_texts<S: AsRef<str>>(texts: &[S], title: impl Into<String>) -> DiceResult<Self> {
        check_item_count(texts.len())?;
        let items = texts
            .iter()
            .enumerate()
            .map(|(i, text)| SelectionItem::unweighted(format!("item_{i}"), text.as_ref().trim()))
            .collect::<DiceResult<Vec<_>>>()?;
        Self::new(items, title)
    }

    /// Build a selection with one item per todo: the todo's id and title,
    /// weight 1.
    pub fn from_todos<'a>(
        todos: impl IntoIterator<Item = &'a Todo>,
        title: impl Into<String>,
    ) -> DiceResult<Self> {
        let items = todos
            .into_iter()
            .map(|todo| SelectionItem::unweighted(todo.id.clone(), todo.title.clone()))
            .collect::<DiceResult<Vec<_>>>()?;
        if items.is_empty() {
            return Err(DiceError::InvalidArgument(
                "todo list must not be empty".into(),
            ));
        }
        Self::new(items, title)
    }

    /// Replace the id, e.g. to supersede a stored selection.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The choices, in order.
    pub fn items(&self) -> &[SelectionItem] {
        &self.items
    }

    /// Human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Number of choices (always 1 to 6).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// The item at a 1-based position.
    pub fn item_at(&self, position: u32) -> Option<&SelectionItem> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.items.get(index)
    }
}

impl Record for Selection {
    fn record_id(&self) -> &str {
        &self.id
    }
}

fn check_item_count(len: usize) -> DiceResult<()> {
    if len == 0 {
        return Err(DiceError::InvalidArgument(
            "a selection needs at least 1 item".into(),
        ));
    }
    if len > MAX_SELECTION_ITEMS {
        return Err(DiceError::InvalidArgument(format!(
            "a selection holds at most {MAX_SELECTION_ITEMS} items, got {len}"
        )));
    }
    Ok(())
}

/// The outcome of picking from a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ResultParts")]
pub struct SelectionResult {
    id: String,
    selection: Selection,
    dice_roll: u32,
    selected_item: SelectionItem,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ResultParts {
    id: String,
    selection: Selection,
    dice_roll: u32,
    selected_item: SelectionItem,
    timestamp: DateTime<Utc>,
}

impl TryFrom<ResultParts> for SelectionResult {
    type Error = DiceError;

    fn try_from(parts: ResultParts) -> DiceResult<Self> {
        let mut result = Self::new(parts.selection, parts.dice_roll)?;
        if result.selected_item != parts.selected_item {
            return Err(DiceError::InvalidArgument(format!(
                "selected item does not match position {}",
                parts.dice_roll
            )));
        }
        result.id = parts.id;
        result.timestamp = parts.timestamp;
        Ok(result)
    }
}

impl SelectionResult {
    /// Record a pick of the item at 1-based `dice_roll`.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `dice_roll` is outside
    /// `1..=selection.item_count()`.
    pub fn new(selection: Selection, dice_roll: u32) -> DiceResult<Self> {
        let selected_item = selection.item_at(dice_roll).cloned().ok_or_else(|| {
            DiceError::InvalidArgument(format!(
                "position {dice_roll} is outside 1..={}",
                selection.item_count()
            ))
        })?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            selection,
            dice_roll,
            selected_item,
            timestamp: Utc::now(),
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the selection picked from.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 1-based position of the chosen item.
    pub fn dice_roll(&self) -> u32 {
        self.dice_roll
    }

    /// The chosen item.
    pub fn selected_item(&self) -> &SelectionItem {
        &self.selected_item
    }

    /// When the pick happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Record for SelectionResult {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: rolled {} -> {}",
            self.selection.title, self.dice_roll, self.selected_item.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn item_validation() {
        assert!(SelectionItem::unweighted("a", "Read").is_ok());
        assert_eq!(
            SelectionItem::unweighted("a", "   ").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SelectionItem::new("a", "Read", 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(SelectionItem::new("a", "Read", 3).unwrap().weight(), 3);
    }

    #[test]
    fn rejects_empty_and_oversized() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Selection::from_texts(&empty, "t").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        let seven = ["1", "2", "3", "4", "5", "6", "7"];
        assert_eq!(
            Selection::from_texts(&seven, "t").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Selection::new(Vec::new(), "t").is_err());
    }

    #[test]
    fn accepts_exactly_six() {
        let six = ["1", "2", "3", "4", "5", "6"];
        let s = Selection::from_texts(&six, "dice").unwrap();
        assert_eq!(s.item_count(), 6);
        assert_eq!(s.total_weight(), 6);
    }

    #[test]
    fn from_texts_trims_and_numbers() {
        let s = Selection::from_texts(&["  tea ", "coffee"], DEFAULT_TEXT_TITLE).unwrap();
        assert_eq!(s.items()[0].text(), "tea");
        assert_eq!(s.items()[0].id(), "item_0");
        assert_eq!(s.items()[1].id(), "item_1");
        assert_eq!(s.title(), DEFAULT_TEXT_TITLE);
        assert!(Selection::from_texts(&["ok", "  "], "t").is_err());
    }

    #[test]
    fn from_todos_maps_id_and_title() {
        let todos = vec![Todo::new("Laundry"), Todo::new("Email")];
        let s = Selection::from_todos(&todos, DEFAULT_TODO_TITLE).unwrap();
        assert_eq!(s.item_count(), 2);
        assert_eq!(s.items()[0].id(), todos[0].id);
        assert_eq!(s.items()[1].text(), "Email");
        assert_eq!(s.items()[1].weight(), 1);

        let none: Vec<Todo> = Vec::new();
        assert!(Selection::from_todos(&none, "t").is_err());
        let many: Vec<Todo> = (0..7).map(|i| Todo::new(format!("t{i}"))).collect();
        assert!(Selection::from_todos(&many, "t").is_err());
    }

    #[test]
    fn rejects_weight_overflow() {
        let items = vec![
            SelectionItem::new("a", "A", u32::MAX).unwrap(),
            SelectionItem::new("b", "B", 1).unwrap(),
        ];
        assert!(Selection::new(items, "t").is_err());
    }

    #[test]
    fn item_at_is_one_based() {
        let s = Selection::from_texts(&["a", "b"], "t").unwrap();
        assert!(s.item_at(0).is_none());
        assert_eq!(s.item_at(1).unwrap().text(), "a");
        assert_eq!(s.item_at(2).unwrap().text(), "b");
        assert!(s.item_at(3).is_none());
    }

    #[test]
    fn with_id_overrides() {
        let s = Selection::from_texts(&["a"], "t").unwrap().with_id("fixed");
        assert_eq!(s.id(), "fixed");
        assert_eq!(s.record_id(), "fixed");
    }

    #[test]
    fn result_matches_position() {
        let s = Selection::from_texts(&["a", "b", "c"], "Lunch").unwrap();
        let r = SelectionResult::new(s.clone(), 2).unwrap();
        assert_eq!(r.selected_item().text(), "b");
        assert_eq!(r.selection(), &s);
        assert_eq!(r.to_string(), "Lunch: rolled 2 -> b");
        assert!(SelectionResult::new(s.clone(), 0).is_err());
        assert!(SelectionResult::new(s, 4).is_err());
    }

    #[test]
    fn deserialize_validates_invariants() {
        let s = Selection::from_texts(&["a", "b"], "t").unwrap();
        let r = SelectionResult::new(s, 1).unwrap();
        let mut json = serde_json::to_value(&r).unwrap();
        let back: SelectionResult = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, r);

        json["dice_roll"] = serde_json::json!(2);
        assert!(serde_json::from_value::<SelectionResult>(json).is_err());

        let bad_item = serde_json::json!({"id": "x", "text": "", "weight": 1});
        assert!(serde_json::from_value::<SelectionItem>(bad_item).is_err());
        let default_weight: SelectionItem =
            serde_json::from_value(serde_json::json!({"id": "x", "text": "ok"})).unwrap();
        assert_eq!(default_weight.weight(), 1);
    }
}
