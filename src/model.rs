use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An active todo entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
    // Order key only, never an identity. Ascending order is display order;
    // values are not required to be unique or dense.
    pub position: i64,
}

impl Item {
    pub fn new(text: String, position: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            done: false,
            position,
        }
    }
}

/// Snapshot of an item taken at the moment it was deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedItem {
    pub id: Uuid,
    pub original_id: Uuid,
    pub text: String,
    pub done: bool,
    pub position: i64,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedItem {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_id: item.id,
            text: item.text.clone(),
            done: item.done,
            position: item.position,
            deleted_at: Utc::now(),
        }
    }
}

/// The full persisted document: the active list plus the soft-delete log.
///
/// An item lives in exactly one of the two sets. The deleted log is
/// unbounded on disk but only its most recent entry is restorable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub items: Vec<Item>,
    #[serde(default)]
    pub deleted: Vec<DeletedItem>,
}

impl StoreState {
    /// Active items sorted ascending by position. The sort is stable, so
    /// duplicate positions keep their stored order.
    pub fn ordered_items(&self) -> Vec<Item> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.position);
        items
    }

    /// Position for a newly appended item: max of the existing positions
    /// plus one, or 1 for an empty list.
    pub fn next_position(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.position)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn find_item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_item_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Index of the most recently deleted record: latest `deleted_at`,
    /// ties broken toward the latest appended.
    pub fn latest_deleted_index(&self) -> Option<usize> {
        self.deleted
            .iter()
            .enumerate()
            .max_by_key(|(i, record)| (record.deleted_at, *i))
            .map(|(i, _)| i)
    }
}
