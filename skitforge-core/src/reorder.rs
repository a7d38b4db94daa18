//! # Reorder
//!
//! Drag-and-drop relocation within a command list. Which commands travel with a drag is decided by,
//! in order of precedence:
//! 1. A dragged `group_start` takes its whole group along, whatever is selected.
//! 2. A drag from within a multi-selection takes the selection along. If the drag began inside a
//!    selected top-level group, only that group moves.
//! 3. Otherwise, only the dragged command moves.
//!
//! The moved commands are always re-inserted as one contiguous block, keeping their relative order.

use crate::{
    error::EditError,
    id::CommandID,
    state::{nesting, Command},
};

/// Which rule selected the commands to move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveKind {
    /// The whole span of a group.
    Group,
    /// Every selected command, groups widened to their spans.
    Selection,
    /// Just the dragged command.
    Single,
}

/// The commands a drag will carry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Plan {
    pub kind: MoveKind,
    /// Index of the dragged command.
    pub origin: usize,
    /// Indices to move, ascending.
    pub indices: Vec<usize>,
}

/// Decide what moves when `dragged` is dragged with `selected` as the current selection.
/// None if `dragged` is not in `commands`.
#[must_use]
pub fn plan(commands: &[Command], dragged: CommandID, selected: &[CommandID]) -> Option<Plan> {
    let origin = commands.iter().position(|command| command.id == dragged)?;

    if let Some(span) = nesting::group_span(commands, origin) {
        return Some(Plan {
            kind: MoveKind::Group,
            origin,
            indices: span.collect(),
        });
    }

    if selected.len() > 1 && selected.contains(&dragged) {
        let selected_indices: Vec<usize> = selected
            .iter()
            .filter_map(|id| commands.iter().position(|command| command.id == *id))
            .collect();
        let containing = nesting::top_level_groups(commands, &selected_indices)
            .into_iter()
            .filter_map(|start| nesting::group_span(commands, start))
            .find(|span| span.contains(&origin));
        if let Some(span) = containing {
            return Some(Plan {
                kind: MoveKind::Group,
                origin,
                indices: span.collect(),
            });
        }
        return Some(Plan {
            kind: MoveKind::Selection,
            origin,
            indices: nesting::expand_groups(commands, selected_indices),
        });
    }

    Some(Plan {
        kind: MoveKind::Single,
        origin,
        indices: vec![origin],
    })
}

/// Move the commands at `moved` as a block to the drop target at `target`, both indices into
/// `commands` as it is before the move.
///
/// The block lands after the target when moving down (`origin < target`), else before it.
/// Should the target be part of the moved block, or out of range, the block lands where the
/// target index falls among the unmoved commands.
#[must_use]
pub fn relocate(commands: &[Command], moved: &[usize], origin: usize, target: usize) -> Vec<Command> {
    let (block, mut remaining): (Vec<_>, Vec<_>) = commands
        .iter()
        .enumerate()
        .partition(|(idx, _)| moved.contains(idx));

    let target_id = commands
        .get(target)
        .filter(|_| !moved.contains(&target))
        .map(|command| command.id);
    let insert_at = target_id
        .and_then(|id| remaining.iter().position(|(_, command)| command.id == id))
        .map(|pos| if origin < target { pos + 1 } else { pos })
        .unwrap_or_else(|| remaining.iter().filter(|(idx, _)| *idx < target).count());

    remaining.splice(insert_at..insert_at, block);
    remaining.into_iter().map(|(_, command)| command.clone()).collect()
}

/// Drop `dragged` onto `target`, moving whatever the drag carries according to [`plan`].
///
/// # Errors
/// * [`EditError::NoOp`] when dropped onto itself, or when nothing would change.
/// * [`EditError::UnknownCommand`] when either ID is missing.
/// * [`EditError::Unbalanced`] when balanced group brackets would become unbalanced.
pub fn reorder(
    commands: &[Command],
    dragged: CommandID,
    target: CommandID,
    selected: &[CommandID],
) -> Result<Vec<Command>, EditError> {
    if dragged == target {
        return Err(EditError::NoOp);
    }
    let target_idx = commands
        .iter()
        .position(|command| command.id == target)
        .ok_or(EditError::UnknownCommand(target))?;
    let plan = plan(commands, dragged, selected).ok_or(EditError::UnknownCommand(dragged))?;
    log::debug!("dragging {dragged} onto {target} as {:?}", plan.kind);

    let result = relocate(commands, &plan.indices, plan.origin, target_idx);
    checked(commands, result)
}

/// Move a set of indices as a block to `to`, an index in the list before the move.
/// The lowest moved index is taken as the drag origin.
///
/// # Errors
/// As for [`reorder`], with [`EditError::IndexOutOfRange`] for any invalid `indices`.
pub fn move_indices(commands: &[Command], indices: &[usize], to: usize) -> Result<Vec<Command>, EditError> {
    if let Some(&bad) = indices.iter().find(|&&idx| idx >= commands.len()) {
        return Err(EditError::IndexOutOfRange(bad));
    }
    let origin = indices.iter().copied().min().ok_or(EditError::EmptySelection)?;
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let result = relocate(commands, &sorted, origin, to);
    checked(commands, result)
}

/// Remove the command at `from`, then insert it at `to` within the shortened list.
/// `to` past the end appends.
///
/// # Errors
/// As for [`reorder`], with [`EditError::IndexOutOfRange`] for an invalid `from`.
pub fn move_one(commands: &[Command], from: usize, to: usize) -> Result<Vec<Command>, EditError> {
    if from >= commands.len() {
        return Err(EditError::IndexOutOfRange(from));
    }
    let mut result = commands.to_vec();
    let command = result.remove(from);
    let to = to.min(result.len());
    result.insert(to, command);
    checked(commands, result)
}

fn checked(before: &[Command], after: Vec<Command>) -> Result<Vec<Command>, EditError> {
    if after == before {
        return Err(EditError::NoOp);
    }
    if nesting::is_balanced(before) && !nesting::is_balanced(&after) {
        return Err(EditError::Unbalanced);
    }
    Ok(after)
}
