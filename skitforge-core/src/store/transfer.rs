//! Copy, cut, and paste of commands through a text clipboard, as a JSON array of commands.

use super::EditorState;
use crate::{
    clipboard::{Clipboard, ClipboardError, TransferError},
    error::EditError,
    state::{nesting, Command},
};

impl EditorState {
    /// The selected commands in list order, groups with a selected bracket whole.
    fn selected_for_transfer(&self) -> Result<Vec<Command>, EditError> {
        let skit = self.current_skit().ok_or(EditError::NoCurrentSkit)?;
        let selected = self.selection().indices_in(&skit.commands);
        if selected.is_empty() {
            return Err(EditError::EmptySelection);
        }
        Ok(nesting::expand_brackets(&skit.commands, selected)
            .into_iter()
            .map(|idx| skit.commands[idx].clone())
            .collect())
    }
    /// Write the selected commands to the clipboard. Returns how many were copied.
    ///
    /// # Errors
    /// With nothing to copy, or if the clipboard fails.
    pub async fn copy_selected_commands(
        &self,
        clipboard: &(impl Clipboard + ?Sized),
    ) -> Result<usize, TransferError> {
        let commands = self.selected_for_transfer()?;
        let text = serde_json::to_string_pretty(&commands)
            .map_err(|err| ClipboardError::Encode(err.to_string()))?;
        clipboard.write_text(text).await?;
        log::debug!("Copied {} commands", commands.len());
        Ok(commands.len())
    }
    /// Copy the selected commands, then remove them. Nothing is removed if the copy fails.
    ///
    /// # Errors
    /// With nothing to cut, or if the clipboard fails.
    pub async fn cut_selected_commands(
        &mut self,
        clipboard: &(impl Clipboard + ?Sized),
    ) -> Result<usize, TransferError> {
        let commands = self.selected_for_transfer()?;
        self.copy_selected_commands(clipboard).await?;
        let ids: Vec<_> = commands.iter().map(|command| command.id).collect();
        Ok(self.remove_commands(&ids)?)
    }
    /// Insert the clipboard's commands after the last selected command, or at the end.
    /// They are given fresh IDs, and become the selection.
    ///
    /// Clipboard read failures and content that is not a command list are no-ops.
    ///
    /// # Errors
    /// [`EditError::ClipboardPayload`] when there is nothing usable to paste,
    /// [`EditError::Unbalanced`] when the pasted commands would leave a group bracket unmatched,
    /// and the usual edit errors.
    pub async fn paste_commands_from_clipboard(
        &mut self,
        clipboard: &(impl Clipboard + ?Sized),
    ) -> Result<usize, EditError> {
        // Fail before touching the clipboard.
        self.current_skit().ok_or(EditError::NoCurrentSkit)?;

        let text = match clipboard.read_text().await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Paste skipped, {err}");
                return Err(EditError::ClipboardPayload);
            }
        };
        let pasted = parse_payload(&text).ok_or_else(|| {
            log::warn!("Paste skipped, clipboard does not hold commands");
            EditError::ClipboardPayload
        })?;
        if pasted.is_empty() {
            return Err(EditError::NoOp);
        }

        self.write_with(|writer| {
            let insert_at = writer
                .selection()
                .indices_in(&writer.commands)
                .into_iter()
                .max()
                .map_or(writer.commands.len(), |last| last + 1);
            let was_balanced = nesting::is_balanced(&writer.commands);
            let ids = writer.allocate_ids(pasted.len());
            let count = ids.len();
            let commands = pasted
                .into_iter()
                .zip(&ids)
                .map(|((ty, fields), &id)| Command::with_fields(id, ty, fields));
            writer
                .commands_mut()
                .splice(insert_at..insert_at, commands);
            if was_balanced && !nesting::is_balanced(&writer.commands) {
                log::warn!("Paste skipped, clipboard holds an incomplete group");
                return Err(EditError::Unbalanced);
            }
            writer.selection_mut().set(ids);
            Ok(count)
        })
    }
}

/// Type and fields of each command in a JSON array. None if any element isn't a typed object.
fn parse_payload(text: &str) -> Option<Vec<(String, crate::state::Fields)>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text).ok()?;
    values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::Object(fields) => {
                let ty = fields.get("type")?.as_str()?.to_owned();
                Some((ty, fields))
            }
            _ => None,
        })
        .collect()
}
