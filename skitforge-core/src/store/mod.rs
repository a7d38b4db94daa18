//! # Editor state
//!
//! The single owner of every open skit, the selection, and the undo history. All document edits
//! funnel through [`EditorState::write_with`], which snapshots the skit beforehand and either records
//! the edit into history or rolls it back entirely.
//!
//! Edits report why they were skipped as an [`EditError`]. Interactive callers are free to discard it,
//! the state is unchanged either way.

mod edit;
pub mod history;
mod transfer;
pub mod writer;

#[cfg(test)]
mod test;

use crate::{
    definitions::{Registry, SchemaError},
    error::EditError,
    id::CommandID,
    io::{ProjectError, SkitStorage},
    settings::EditorSettings,
    state::{nesting, Command, Modifiers, Selection, Skit},
};

pub type SkitID = String;

#[derive(Default, Debug)]
pub struct EditorState {
    skits: hashbrown::HashMap<SkitID, Skit>,
    current: Option<SkitID>,
    selection: Selection,
    history: history::History,
    /// Per skit, the greatest command ID handed out this session.
    high_water: hashbrown::HashMap<SkitID, CommandID>,
    registry: Registry,
    settings: EditorSettings,
    validation_errors: Vec<String>,
}
impl EditorState {
    #[must_use]
    pub fn new(registry: Registry, settings: EditorSettings) -> Self {
        Self {
            registry,
            settings,
            ..Default::default()
        }
    }
    /// Run an edit on the current skit.
    ///
    /// If the edit fails, or leaves the skit exactly as it was, every change it made to the skit and
    /// selection is undone and nothing is recorded. Otherwise the skit's modified time is bumped and
    /// the prior state pushed to the undo history.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::NoOp`] for an unchanged skit, or whatever `write` returned.
    pub fn write_with<F, T>(&mut self, write: F) -> Result<T, EditError>
    where
        F: FnOnce(&mut writer::SkitWriter<'_>) -> Result<T, EditError>,
    {
        let key = self.current.as_ref().ok_or(EditError::NoCurrentSkit)?;
        let skit = self.skits.get_mut(key).ok_or(EditError::NoCurrentSkit)?;
        let high_water = self
            .high_water
            .entry_ref(key.as_str())
            .or_insert(CommandID::NONE);

        let before = skit.clone();
        let selection_before = self.selection.clone();
        let high_water_before = *high_water;

        let result = {
            let mut writer = writer::SkitWriter {
                skit: &mut *skit,
                selection: &mut self.selection,
                high_water: &mut *high_water,
                registry: &self.registry,
                settings: &self.settings,
            };
            write(&mut writer)
        };
        let result = result.and_then(|value| {
            if *skit == before {
                Err(EditError::NoOp)
            } else {
                Ok(value)
            }
        });

        match result {
            Ok(value) => {
                skit.touch(chrono::Utc::now());
                log::trace!("Recorded edit of {key}, {} commands", skit.commands.len());
                self.history.record(before, self.settings.history_limit);
                Ok(value)
            }
            Err(err) => {
                log::debug!("Edit of {key} skipped: {err}");
                *skit = before;
                self.selection = selection_before;
                *high_water = high_water_before;
                Err(err)
            }
        }
    }

    /// Replace every skit. No skit is current afterwards.
    pub fn load_skits(&mut self, skits: impl IntoIterator<Item = (SkitID, Skit)>) {
        self.skits = skits.into_iter().collect();
        self.current = None;
        self.selection.clear();
        self.history.clear();
        self.high_water.clear();
        log::debug!("Loaded {} skits", self.skits.len());
    }
    /// Add or replace a single skit, without making it current.
    pub fn insert_skit(&mut self, id: SkitID, skit: Skit) {
        if self.current.as_ref() == Some(&id) {
            self.selection.clear();
            self.history.clear();
        }
        self.skits.insert(id, skit);
    }
    /// Switch to another skit, discarding the selection and history.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`] if there is no such skit, leaving the current one open.
    pub fn set_current_skit(&mut self, id: &str) -> Result<(), EditError> {
        if !self.skits.contains_key(id) {
            return Err(EditError::NoCurrentSkit);
        }
        self.current = Some(id.to_owned());
        self.selection.clear();
        self.history.clear();
        log::debug!("Opened skit {id}");
        Ok(())
    }
    /// Install a new command-definition schema, returning its structural problems.
    ///
    /// # Errors
    /// If the text is not a schema. The current definitions are kept.
    pub fn load_commands_yaml(&mut self, yaml: &str) -> Result<Vec<String>, SchemaError> {
        let (registry, problems) = Registry::parse(yaml)?;
        self.registry = registry;
        Ok(problems)
    }
    pub fn set_registry(&mut self, registry: Registry) {
        self.registry = registry;
    }
    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }
    pub fn set_validation_errors(&mut self, errors: Vec<String>) {
        self.validation_errors = errors;
    }

    /// Validate and write the current skit through `storage`. Any validation errors are
    /// remembered as well as returned, and leave the file untouched.
    ///
    /// # Errors
    /// With no current skit, or when storage fails.
    pub fn save_current_skit(
        &mut self,
        storage: &impl SkitStorage,
    ) -> Result<Vec<String>, ProjectError> {
        let (id, skit) = self
            .current
            .as_ref()
            .and_then(|id| Some((id, self.skits.get(id)?)))
            .ok_or(EditError::NoCurrentSkit)?;
        let errors = storage.save_skit(id, skit, &self.registry)?;
        if errors.is_empty() {
            log::info!("Saved skit {id}");
        } else {
            log::warn!("Skit {id} not saved, {} validation errors", errors.len());
        }
        self.validation_errors.clone_from(&errors);
        Ok(errors)
    }

    /// Apply a click on `id`, or on nothing.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`]
    pub fn select_command(
        &mut self,
        id: Option<CommandID>,
        modifiers: Modifiers,
    ) -> Result<(), EditError> {
        let skit = self
            .current
            .as_ref()
            .and_then(|key| self.skits.get(key))
            .ok_or(EditError::NoCurrentSkit)?;
        self.selection.select(id, modifiers, &skit.commands);
        log::debug!("Selection is now {:?}", self.selection.ids());
        Ok(())
    }
    /// Replace the selection outright, ignoring unknown IDs.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`]
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = CommandID>) -> Result<(), EditError> {
        let skit = self
            .current
            .as_ref()
            .and_then(|key| self.skits.get(key))
            .ok_or(EditError::NoCurrentSkit)?;
        let ids: Vec<_> = ids.into_iter().filter(|id| skit.get(*id).is_some()).collect();
        self.selection.set(ids);
        Ok(())
    }

    /// Flip a group between collapsed and expanded.
    ///
    /// Collapse is view state rather than content: it bumps the modified time, but is not undoable.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], [`EditError::UnknownCommand`], [`EditError::NotAGroup`]
    pub fn toggle_group_collapse(&mut self, id: CommandID) -> Result<bool, EditError> {
        let skit = self
            .current
            .as_ref()
            .and_then(|key| self.skits.get_mut(key))
            .ok_or(EditError::NoCurrentSkit)?;
        let command = skit.get_mut(id).ok_or(EditError::UnknownCommand(id))?;
        if !command.is_group_start() {
            return Err(EditError::NotAGroup(id));
        }
        let collapsed = !command.is_collapsed();
        command.set_collapsed(collapsed);
        skit.touch(chrono::Utc::now());
        Ok(collapsed)
    }

    /// Step the current skit back one edit.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], or [`EditError::NoOp`] with nothing to undo.
    pub fn undo(&mut self) -> Result<(), EditError> {
        self.step_history(history::History::undo)
    }
    /// Re-apply the most recently undone edit.
    ///
    /// # Errors
    /// [`EditError::NoCurrentSkit`], or [`EditError::NoOp`] with nothing to redo.
    pub fn redo(&mut self) -> Result<(), EditError> {
        self.step_history(history::History::redo)
    }
    fn step_history(
        &mut self,
        step: impl FnOnce(&mut history::History, &mut Skit) -> bool,
    ) -> Result<(), EditError> {
        let skit = self
            .current
            .as_ref()
            .and_then(|key| self.skits.get_mut(key))
            .ok_or(EditError::NoCurrentSkit)?;
        if !step(&mut self.history, skit) {
            return Err(EditError::NoOp);
        }
        self.selection.retain(|id| skit.get(id).is_some());
        Ok(())
    }

    #[must_use]
    pub fn current_skit_id(&self) -> Option<&str> {
        self.current.as_deref()
    }
    #[must_use]
    pub fn current_skit(&self) -> Option<&Skit> {
        self.skits.get(self.current.as_ref()?)
    }
    #[must_use]
    pub fn skit(&self, id: &str) -> Option<&Skit> {
        self.skits.get(id)
    }
    /// Every skit ID, sorted.
    #[must_use]
    pub fn skit_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.skits.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    #[must_use]
    pub fn selected_ids(&self) -> &[CommandID] {
        self.selection.ids()
    }
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }
    #[must_use]
    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }
    fn commands(&self) -> &[Command] {
        self.current_skit()
            .map(|skit| skit.commands.as_slice())
            .unwrap_or_default()
    }
    /// Commands of the current skit that are not within a collapsed group.
    #[must_use]
    pub fn visible_commands(&self) -> Vec<&Command> {
        nesting::visible(self.commands())
    }
    #[must_use]
    pub fn nest_levels(&self) -> hashbrown::HashMap<CommandID, usize> {
        nesting::nest_levels(self.commands())
    }
    #[must_use]
    pub fn group_indices(&self, start: usize) -> Vec<usize> {
        nesting::group_indices(self.commands(), start)
    }
    #[must_use]
    pub fn top_level_groups(&self, selected: &[usize]) -> Vec<usize> {
        nesting::top_level_groups(self.commands(), selected)
    }
    #[must_use]
    pub fn is_hidden(&self, id: CommandID) -> bool {
        nesting::is_hidden(id, self.commands())
    }
    #[must_use]
    pub fn group_position(&self, id: CommandID) -> Option<nesting::GroupPosition> {
        nesting::group_position(self.commands(), id)
    }
    /// List label of a command in the current skit.
    #[must_use]
    pub fn label(&self, id: CommandID) -> Option<String> {
        let command = self.current_skit()?.get(id)?;
        Some(self.registry.format_label(command))
    }
}
