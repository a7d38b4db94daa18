use super::Command;
use crate::id::CommandID;

pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct SkitMeta {
    pub title: String,
    pub version: u32,
    pub created: Timestamp,
    /// Bumped by every mutation of the owning skit.
    pub modified: Timestamp,
}

/// A single skit document: an ordered list of commands plus metadata.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct Skit {
    pub meta: SkitMeta,
    pub commands: Vec<Command>,
}
impl Skit {
    /// An empty skit, created and modified at `now`.
    #[must_use]
    pub fn new(title: impl Into<String>, now: Timestamp) -> Self {
        Self {
            meta: SkitMeta {
                title: title.into(),
                version: 1,
                created: now,
                modified: now,
            },
            commands: Vec::new(),
        }
    }
    #[must_use]
    pub fn index_of(&self, id: CommandID) -> Option<usize> {
        self.commands.iter().position(|command| command.id == id)
    }
    #[must_use]
    pub fn get(&self, id: CommandID) -> Option<&Command> {
        self.commands.iter().find(|command| command.id == id)
    }
    pub fn get_mut(&mut self, id: CommandID) -> Option<&mut Command> {
        self.commands.iter_mut().find(|command| command.id == id)
    }
    /// Greatest ID in use, or [`CommandID::NONE`] for an empty skit.
    #[must_use]
    pub fn max_id(&self) -> CommandID {
        CommandID::max_of(self.commands.iter().map(|command| command.id))
    }
    pub fn touch(&mut self, now: Timestamp) {
        self.meta.modified = now;
    }
}
