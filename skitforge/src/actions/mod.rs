//! Editor intents that can be triggered from a hotkey, independent of what triggered them.

pub mod hotkeys;

#[derive(
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub enum Action {
    Copy,
    Cut,
    Paste,
    /// Remove every selected command, along with the contents of selected groups.
    Delete,
    /// Duplicate the first selected command.
    Duplicate,
    Undo,
    Redo,
}
impl Action {
    /// Short human-readable description, for listings.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Copy => "Copy the selection to the clipboard",
            Self::Cut => "Move the selection to the clipboard",
            Self::Paste => "Insert commands from the clipboard after the selection",
            Self::Delete => "Remove the selected commands",
            Self::Duplicate => "Duplicate the selected command",
            Self::Undo => "Undo the last edit",
            Self::Redo => "Redo the last undone edit",
        }
    }
}
