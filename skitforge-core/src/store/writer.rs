use crate::{
    definitions::Registry,
    id::CommandID,
    settings::EditorSettings,
    state::{Command, Selection, Skit},
};

/// Mutable access to the current skit for the span of one edit.
///
/// Reads see through to the skit via `Deref`. Whatever is written is kept only if the edit succeeds
/// and changes the skit - see [`super::EditorState::write_with`].
pub struct SkitWriter<'a> {
    pub(super) skit: &'a mut Skit,
    pub(super) selection: &'a mut Selection,
    /// Greatest ID ever handed out for this skit this session.
    pub(super) high_water: &'a mut CommandID,
    pub(super) registry: &'a Registry,
    pub(super) settings: &'a EditorSettings,
}
impl std::ops::Deref for SkitWriter<'_> {
    type Target = Skit;
    fn deref(&self) -> &Skit {
        self.skit
    }
}
impl SkitWriter<'_> {
    pub fn commands_mut(&mut self) -> &mut Vec<Command> {
        &mut self.skit.commands
    }
    pub fn set_commands(&mut self, commands: Vec<Command>) {
        self.skit.commands = commands;
    }
    pub fn selection(&self) -> &Selection {
        self.selection
    }
    pub fn selection_mut(&mut self) -> &mut Selection {
        self.selection
    }
    pub fn registry(&self) -> &Registry {
        self.registry
    }
    pub fn settings(&self) -> &EditorSettings {
        self.settings
    }
    /// A fresh ID, above any in the skit and any handed out before.
    pub fn allocate_id(&mut self) -> CommandID {
        let id = self.skit.max_id().max(*self.high_water).next();
        *self.high_water = id;
        id
    }
    /// `count` fresh, consecutive IDs.
    pub fn allocate_ids(&mut self, count: usize) -> Vec<CommandID> {
        let start = self.skit.max_id().max(*self.high_water);
        let ids: Vec<_> = CommandID::many_after(start, count).collect();
        if let Some(&last) = ids.last() {
            *self.high_water = last;
        }
        ids
    }
    /// Drop selected IDs which are no longer in the skit.
    pub fn prune_selection(&mut self) {
        let skit = &*self.skit;
        self.selection.retain(|id| skit.get(id).is_some());
    }
}
