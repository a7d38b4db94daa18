//! # Nesting
//!
//! Groups are `group_start`/`group_end` bracket pairs within the flat command list, and may nest
//! arbitrarily. A bracket's partner is found by counting depth while scanning, so every query
//! here is a pure function over a command slice.
//!
//! A `group_start` with no partner is unterminated, and is taken to extend to the end of the list.

use super::{Bracket, Command};
use crate::id::CommandID;
use std::ops::RangeInclusive;

/// Nesting depth of every command, keyed by ID.
///
/// A command's depth is recorded before its own effect applies - a `group_start` sits at the depth
/// outside of its group, the commands after it one deeper. Stray `group_end`s never take the depth
/// below zero.
#[must_use]
pub fn nest_levels(commands: &[Command]) -> hashbrown::HashMap<CommandID, usize> {
    let mut levels = hashbrown::HashMap::with_capacity(commands.len());
    let mut level = 0usize;
    for command in commands {
        levels.insert(command.id, level);
        match command.bracket() {
            Some(Bracket::Start) => level += 1,
            Some(Bracket::End) => level = level.saturating_sub(1),
            None => (),
        }
    }
    levels
}

/// Index of the `group_end` closing the `group_start` at `start`.
/// None if `start` is not a group start, or the group is unterminated.
#[must_use]
pub fn matching_end(commands: &[Command], start: usize) -> Option<usize> {
    if !commands.get(start)?.is_group_start() {
        return None;
    }
    let mut depth = 1usize;
    for (idx, command) in commands.iter().enumerate().skip(start + 1) {
        match command.bracket() {
            Some(Bracket::Start) => depth += 1,
            Some(Bracket::End) => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            None => (),
        }
    }
    None
}

/// The inclusive index range spanned by the group opened at `start`, brackets included.
/// None if `start` is not a group start. Unterminated groups run to the last command.
#[must_use]
pub fn group_span(commands: &[Command], start: usize) -> Option<RangeInclusive<usize>> {
    if !commands.get(start)?.is_group_start() {
        return None;
    }
    let end = matching_end(commands, start).unwrap_or(commands.len() - 1);
    Some(start..=end)
}

/// Every index belonging to the group opened at `start`, in order, brackets included.
///
/// A non-group command is its own one-element "group". Out of range yields nothing.
#[must_use]
pub fn group_indices(commands: &[Command], start: usize) -> Vec<usize> {
    match group_span(commands, start) {
        Some(span) => span.collect(),
        None if start < commands.len() => vec![start],
        None => Vec::new(),
    }
}

/// Of the selected indices, the `group_start`s which are not inside another selected group.
/// Preserves the order of `selected`.
#[must_use]
pub fn top_level_groups(commands: &[Command], selected: &[usize]) -> Vec<usize> {
    let spans: Vec<(usize, RangeInclusive<usize>)> = selected
        .iter()
        .filter_map(|&idx| Some((idx, group_span(commands, idx)?)))
        .collect();

    let mut top = Vec::with_capacity(spans.len());
    for (idx, _) in &spans {
        let nested = spans
            .iter()
            .any(|(other, span)| other != idx && span.contains(idx));
        if !nested && !top.contains(idx) {
            top.push(*idx);
        }
    }
    top
}

/// Every valid index in `indices`, with each `group_start` widened to its whole group.
/// Sorted and deduplicated.
#[must_use]
pub fn expand_groups(commands: &[Command], indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut expanded: Vec<usize> = indices
        .into_iter()
        .flat_map(|idx| group_indices(commands, idx))
        .collect();
    expanded.sort_unstable();
    expanded.dedup();
    expanded
}

/// Index of the `group_start` that the `group_end` at `end` closes. None for a stray end.
#[must_use]
pub fn matching_start(commands: &[Command], end: usize) -> Option<usize> {
    if !commands.get(end)?.is_group_end() {
        return None;
    }
    enclosing_group(commands, end).filter(|&start| matching_end(commands, start) == Some(end))
}

/// As [`expand_groups`], except a matched `group_end` also brings its whole group.
#[must_use]
pub fn expand_brackets(commands: &[Command], indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let starts = indices
        .into_iter()
        .map(|idx| matching_start(commands, idx).unwrap_or(idx));
    expand_groups(commands, starts)
}

/// Index of the innermost `group_start` enclosing the command at `index`, if any.
#[must_use]
pub fn enclosing_group(commands: &[Command], index: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, command) in commands.get(..index)?.iter().enumerate().rev() {
        match command.bracket() {
            Some(Bracket::End) => depth += 1,
            Some(Bracket::Start) if depth == 0 => return Some(idx),
            Some(Bracket::Start) => depth -= 1,
            None => (),
        }
    }
    None
}

/// Whether the command is inside any collapsed group.
///
/// The brackets of a collapsed group are treated differently - its `group_start` stays visible
/// so that it may be expanded again, while its `group_end` is hidden with the contents.
#[must_use]
pub fn is_hidden(id: CommandID, commands: &[Command]) -> bool {
    let Some(index) = commands.iter().position(|command| command.id == id) else {
        return false;
    };
    // Walk outwards through every enclosing group.
    let mut depth = 0usize;
    for command in commands[..index].iter().rev() {
        match command.bracket() {
            Some(Bracket::End) => depth += 1,
            Some(Bracket::Start) if depth == 0 => {
                if command.is_collapsed() {
                    return true;
                }
            }
            Some(Bracket::Start) => depth -= 1,
            None => (),
        }
    }
    false
}

/// The commands that are not hidden by a collapsed group, in order.
#[must_use]
pub fn visible(commands: &[Command]) -> Vec<&Command> {
    let mut result = Vec::with_capacity(commands.len());
    // Depth within the outermost collapsed group, or zero if not in one.
    let mut hidden_depth = 0usize;
    for command in commands {
        if hidden_depth > 0 {
            match command.bracket() {
                Some(Bracket::Start) => hidden_depth += 1,
                Some(Bracket::End) => hidden_depth -= 1,
                None => (),
            }
            continue;
        }
        result.push(command);
        if command.is_collapsed() {
            hidden_depth = 1;
        }
    }
    result
}

/// Where a command sits within its innermost enclosing group.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GroupPosition {
    /// The command directly follows the `group_start`.
    pub is_first: bool,
    /// The command directly precedes the `group_end`, or ends an unterminated group.
    pub is_last: bool,
}

/// None if the command is not inside any group.
#[must_use]
pub fn group_position(commands: &[Command], id: CommandID) -> Option<GroupPosition> {
    let index = commands.iter().position(|command| command.id == id)?;
    let start = enclosing_group(commands, index)?;
    let last_inner = match matching_end(commands, start) {
        Some(end) => end.checked_sub(1)?,
        None => commands.len() - 1,
    };
    Some(GroupPosition {
        is_first: index == start + 1,
        is_last: index == last_inner,
    })
}

/// Brackets without a partner: stray `group_end`s, and unterminated `group_start`s.
/// In list order.
#[must_use]
pub fn unmatched_brackets(commands: &[Command]) -> Vec<CommandID> {
    let mut open = smallvec::SmallVec::<[usize; 8]>::new();
    let mut unmatched = Vec::new();
    for (idx, command) in commands.iter().enumerate() {
        match command.bracket() {
            Some(Bracket::Start) => open.push(idx),
            Some(Bracket::End) => {
                if open.pop().is_none() {
                    unmatched.push(idx);
                }
            }
            None => (),
        }
    }
    unmatched.extend(open);
    unmatched.sort_unstable();
    unmatched.into_iter().map(|idx| commands[idx].id).collect()
}

/// Every `group_start` has exactly one matching `group_end`, and depth never goes negative.
#[must_use]
pub fn is_balanced(commands: &[Command]) -> bool {
    let mut depth = 0usize;
    for command in commands {
        match command.bracket() {
            Some(Bracket::Start) => depth += 1,
            Some(Bracket::End) => match depth.checked_sub(1) {
                Some(new) => depth = new,
                None => return false,
            },
            None => (),
        }
    }
    depth == 0
}
