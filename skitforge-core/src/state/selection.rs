use super::Command;
use crate::id::CommandID;

/// Modifier keys held during a selection click.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Modifiers {
    /// Toggle the clicked command in or out of the selection.
    pub ctrl: bool,
    /// Extend the selection over a range, from the last selected command.
    pub shift: bool,
}
impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// Ordered set of selected command IDs. Order is that of selection, not of the command list,
/// and the most recent selection anchors range-selects.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Selection {
    ids: smallvec::SmallVec<[CommandID; 4]>,
}
impl Selection {
    #[must_use]
    pub fn ids(&self) -> &[CommandID] {
        &self.ids
    }
    #[must_use]
    pub fn contains(&self, id: CommandID) -> bool {
        self.ids.contains(&id)
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
    /// The most recently selected ID.
    #[must_use]
    pub fn last(&self) -> Option<CommandID> {
        self.ids.last().copied()
    }
    #[must_use]
    pub fn first(&self) -> Option<CommandID> {
        self.ids.first().copied()
    }
    pub fn clear(&mut self) {
        self.ids.clear();
    }
    /// Replace the selection. Duplicates are dropped, keeping the first occurrence.
    pub fn set(&mut self, ids: impl IntoIterator<Item = CommandID>) {
        self.ids.clear();
        for id in ids {
            self.push(id);
        }
    }
    pub fn retain(&mut self, mut keep: impl FnMut(CommandID) -> bool) {
        self.ids.retain(|id| keep(*id));
    }
    /// Indices into `commands` of every selected ID that exists there, in selection order.
    #[must_use]
    pub fn indices_in(&self, commands: &[Command]) -> Vec<usize> {
        self.ids
            .iter()
            .filter_map(|id| commands.iter().position(|command| command.id == *id))
            .collect()
    }
    fn push(&mut self, id: CommandID) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }
    /// Apply a click on `id` within `commands`. A click on nothing clears the selection.
    ///
    /// Ctrl wins over shift when both are held. A range-select with no anchor, or with either end
    /// missing from `commands`, degrades into a plain click.
    pub fn select(&mut self, id: Option<CommandID>, modifiers: Modifiers, commands: &[Command]) {
        let Some(id) = id else {
            self.clear();
            return;
        };
        if modifiers.ctrl {
            if self.contains(id) {
                self.retain(|selected| selected != id);
            } else {
                self.ids.push(id);
            }
            return;
        }
        if modifiers.shift {
            let position = |target: CommandID| commands.iter().position(|c| c.id == target);
            let range = self
                .last()
                .and_then(position)
                .zip(position(id))
                .map(|(anchor, clicked)| anchor.min(clicked)..=anchor.max(clicked));
            if let Some(range) = range {
                for command in &commands[range] {
                    self.push(command.id);
                }
                return;
            }
        }
        self.ids.clear();
        self.ids.push(id);
    }
}
