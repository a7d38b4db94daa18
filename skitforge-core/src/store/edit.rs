use super::{writer::SkitWriter, EditorState};
use crate::{
    error::EditError,
    id::CommandID,
    reorder,
    state::{
        command::{GROUP_END, GROUP_NAME, GROUP_START},
        nesting, Command, Fields,
    },
};

/// Remove the commands at `indices`, and any selection of them.
fn remove_indices(writer: &mut SkitWriter<'_>, indices: &[usize]) {
    let mut idx = 0;
    writer.commands_mut().retain(|_| {
        let keep = !indices.contains(&idx);
        idx += 1;
        keep
    });
    writer.prune_selection();
}

/// Indices of `ids` in the list, each group bracket widened to its whole group.
fn resolve_with_groups(commands: &[Command], ids: &[CommandID]) -> Vec<usize> {
    let indices = ids
        .iter()
        .filter_map(|id| commands.iter().position(|command| command.id == *id));
    let expanded = nesting::expand_brackets(commands, indices);
    for &idx in &expanded {
        if commands[idx].is_group_start() && nesting::matching_end(commands, idx).is_none() {
            log::warn!(
                "Group {} has no end, treating it as running to the end of the skit",
                commands[idx].id
            );
        }
    }
    expanded
}

impl EditorState {
    /// Append a command with the given fields, selecting it.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`]
    pub fn add_command(&mut self, ty: &str, fields: Fields) -> Result<CommandID, EditError> {
        self.write_with(|writer| {
            let id = writer.allocate_id();
            writer
                .commands_mut()
                .push(Command::with_fields(id, ty, fields));
            writer.selection_mut().set([id]);
            Ok(id)
        })
    }
    /// Append a command of type `ty`, filled with its definition's defaults, selecting it.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownType`]
    pub fn add_command_of_type(&mut self, ty: &str) -> Result<CommandID, EditError> {
        let fields = self
            .registry()
            .defaults_for(ty)
            .ok_or_else(|| EditError::UnknownType(ty.to_owned()))?;
        self.add_command(ty, fields)
    }
    /// Shallow-merge `patch` into a command. See [`Command::apply_patch`].
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`], [`EditError::NoOp`]
    pub fn update_command(&mut self, id: CommandID, patch: &Fields) -> Result<(), EditError> {
        self.write_with(|writer| {
            writer
                .commands_mut()
                .iter_mut()
                .find(|command| command.id == id)
                .ok_or(EditError::UnknownCommand(id))?
                .apply_patch(patch);
            Ok(())
        })
    }
    /// Remove a command. Removing either bracket of a group removes the whole group.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`]
    pub fn remove_command(&mut self, id: CommandID) -> Result<(), EditError> {
        self.remove_commands(&[id]).map(|_| ())
    }
    /// Remove many commands, widening group brackets to their whole groups. Unknown IDs are skipped.
    /// Returns the number of commands removed.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::EmptySelection`] for no IDs, or
    /// [`EditError::UnknownCommand`] if none are found.
    pub fn remove_commands(&mut self, ids: &[CommandID]) -> Result<usize, EditError> {
        self.write_with(|writer| {
            let first = *ids.first().ok_or(EditError::EmptySelection)?;
            let indices = resolve_with_groups(&writer.commands, ids);
            if indices.is_empty() {
                return Err(EditError::UnknownCommand(first));
            }
            remove_indices(writer, &indices);
            Ok(indices.len())
        })
    }
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::EmptySelection`]
    pub fn remove_selected_commands(&mut self) -> Result<usize, EditError> {
        let ids = self.selected_ids().to_vec();
        self.remove_commands(&ids)
    }
    /// Insert a copy of a command directly after it, selecting the copy.
    ///
    /// Only the command itself is copied - duplicating a group start does not copy its contents.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`]
    pub fn duplicate_command(&mut self, id: CommandID) -> Result<CommandID, EditError> {
        self.write_with(|writer| {
            let idx = writer.index_of(id).ok_or(EditError::UnknownCommand(id))?;
            let mut copy = writer.commands[idx].clone();
            copy.id = writer.allocate_id();
            let copy_id = copy.id;
            writer.commands_mut().insert(idx + 1, copy);
            writer.selection_mut().set([copy_id]);
            Ok(copy_id)
        })
    }
    /// Duplicate the first selected command.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::EmptySelection`]
    pub fn duplicate_selected_command(&mut self) -> Result<CommandID, EditError> {
        let id = self.selection().first().ok_or(EditError::EmptySelection)?;
        self.duplicate_command(id)
    }
    /// Remove the command at `from` and re-insert it at `to` in the shortened list.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::IndexOutOfRange`], [`EditError::Unbalanced`],
    /// [`EditError::NoOp`]
    pub fn move_command(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        self.write_with(|writer| {
            let moved = reorder::move_one(&writer.commands, from, to)?;
            writer.set_commands(moved);
            Ok(())
        })
    }
    /// Move the commands at `indices` as one block to the index `to`, both relative to the list
    /// before the move.
    ///
    /// # Errors
    /// As for [`Self::move_command`], and [`EditError::EmptySelection`] for no indices.
    pub fn move_commands(&mut self, indices: &[usize], to: usize) -> Result<(), EditError> {
        self.write_with(|writer| {
            let moved = reorder::move_indices(&writer.commands, indices, to)?;
            writer.set_commands(moved);
            Ok(())
        })
    }
    /// Drop the dragged command onto `target`, carrying its group or the selection as appropriate.
    /// See [`reorder`](crate::reorder) for the rules.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`], [`EditError::Unbalanced`],
    /// [`EditError::NoOp`]
    pub fn reorder(&mut self, dragged: CommandID, target: CommandID) -> Result<(), EditError> {
        let selected = self.selected_ids().to_vec();
        self.write_with(|writer| {
            let moved = reorder::reorder(&writer.commands, dragged, target, &selected)?;
            writer.set_commands(moved);
            Ok(())
        })
    }
    /// Wrap the selected commands in a new group, selecting its start.
    ///
    /// The group spans from the first selected command to the last, in list order, taking along
    /// anything unselected in between. Selected group starts bring their whole group.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::EmptySelection`]
    pub fn create_group(&mut self) -> Result<CommandID, EditError> {
        self.write_with(|writer| {
            let indices = resolve_with_groups(&writer.commands, writer.selection().ids());
            let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
                return Err(EditError::EmptySelection);
            };

            let mut start_fields = writer
                .registry()
                .defaults_for(GROUP_START)
                .unwrap_or_default();
            start_fields.insert(
                GROUP_NAME.to_owned(),
                writer.settings().default_group_name.clone().into(),
            );
            let end_fields = writer.registry().defaults_for(GROUP_END).unwrap_or_default();

            let start_id = writer.allocate_id();
            let end_id = writer.allocate_id();
            let commands = writer.commands_mut();
            commands.insert(last + 1, Command::with_fields(end_id, GROUP_END, end_fields));
            commands.insert(first, Command::with_fields(start_id, GROUP_START, start_fields));
            writer.selection_mut().set([start_id]);
            Ok(start_id)
        })
    }
    /// Remove a group's brackets, leaving its contents in place. Clears the selection.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`], [`EditError::NotAGroup`],
    /// [`EditError::UnmatchedGroup`]
    pub fn ungroup_commands(&mut self, id: CommandID) -> Result<(), EditError> {
        self.write_with(|writer| {
            let start = writer.index_of(id).ok_or(EditError::UnknownCommand(id))?;
            if !writer.commands[start].is_group_start() {
                return Err(EditError::NotAGroup(id));
            }
            let Some(end) = nesting::matching_end(&writer.commands, start) else {
                log::warn!("Group {id} has no end, not ungrouping");
                return Err(EditError::UnmatchedGroup(id));
            };
            let commands = writer.commands_mut();
            commands.remove(end);
            commands.remove(start);
            writer.selection_mut().clear();
            Ok(())
        })
    }
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`], [`EditError::NotAGroup`],
    /// [`EditError::NoOp`]
    pub fn rename_group(&mut self, id: CommandID, name: &str) -> Result<(), EditError> {
        self.write_with(|writer| {
            let command = writer
                .commands_mut()
                .iter_mut()
                .find(|command| command.id == id)
                .ok_or(EditError::UnknownCommand(id))?;
            if !command.is_group_start() {
                return Err(EditError::NotAGroup(id));
            }
            command.set_field(GROUP_NAME, name.into());
            Ok(())
        })
    }
}
