//! # Drag sessions
//!
//! A drag is observed as a start, any number of hovers, and an end. Only the end may touch the
//! document; hovering merely reports where the drop would land.

use crate::{error::EditError, id::CommandID, store::EditorState};

/// Where a drop would place the dragged commands, relative to the hovered command.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DropIndicator {
    Above(CommandID),
    Below(CommandID),
}

#[derive(Clone, Debug)]
pub struct DragSession {
    dragged: CommandID,
    over: Option<CommandID>,
}
impl DragSession {
    #[must_use]
    pub fn start(dragged: CommandID) -> Self {
        log::trace!("Drag of {dragged} started");
        Self {
            dragged,
            over: None,
        }
    }
    #[must_use]
    pub fn dragged(&self) -> CommandID {
        self.dragged
    }
    /// The drop target, as of the latest hover.
    #[must_use]
    pub fn target(&self) -> Option<CommandID> {
        self.over
    }
    /// Note the command under the pointer, reporting where a drop there would land.
    ///
    /// None while over nothing, over the dragged command itself, or over a command not in `state`.
    pub fn over(&mut self, state: &EditorState, target: Option<CommandID>) -> Option<DropIndicator> {
        self.over = target;
        let target = target.filter(|&target| target != self.dragged)?;
        let skit = state.current_skit()?;
        let from = skit.index_of(self.dragged)?;
        let to = skit.index_of(target)?;
        Some(if from < to {
            DropIndicator::Below(target)
        } else {
            DropIndicator::Above(target)
        })
    }
    /// Drop onto `over`. Dropping onto nothing cancels, leaving the document and selection be.
    ///
    /// # Errors
    /// [`EditError::NoOp`] when cancelled or dropped onto itself, else as for [`EditorState::reorder`].
    pub fn end(self, state: &mut EditorState, over: Option<CommandID>) -> Result<(), EditError> {
        let Some(target) = over else {
            log::debug!("Drag of {} cancelled", self.dragged);
            return Err(EditError::NoOp);
        };
        state.reorder(self.dragged, target)
    }
}
