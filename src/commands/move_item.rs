use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Swap an item's position with its neighbor in display order.
///
/// Already first/last or missing id → successful no-op. The swap touches
/// exactly two order keys; the rest of the list is never renumbered.
pub fn run<S: TodoStore>(store: &mut S, id: Uuid, direction: Direction) -> Result<CmdResult> {
    let mut state = store.load()?;
    let ordered = state.ordered_items();

    let Some(current) = ordered.iter().position(|item| item.id == id) else {
        return Ok(CmdResult::default());
    };
    let neighbor = match direction {
        Direction::Up => {
            if current == 0 {
                return Ok(CmdResult::default());
            }
            current - 1
        }
        Direction::Down => {
            if current + 1 >= ordered.len() {
                return Ok(CmdResult::default());
            }
            current + 1
        }
    };

    let (current_id, current_pos) = (ordered[current].id, ordered[current].position);
    let (neighbor_id, neighbor_pos) = (ordered[neighbor].id, ordered[neighbor].position);

    if let Some(item) = state.find_item_mut(current_id) {
        item.position = neighbor_pos;
    }
    if let Some(item) = state.find_item_mut(neighbor_id) {
        item.position = current_pos;
    }
    store.commit(&state)?;

    let moved = state.find_item(current_id).cloned();
    let mut result = CmdResult::default();
    if let Some(item) = moved {
        let word = match direction {
            Direction::Up => "up",
            Direction::Down => "down",
        };
        result.add_message(CmdMessage::info(format!("Moved {}: {}", word, item.text)));
        result.items.push(item);
    }
    Ok(result)
}
