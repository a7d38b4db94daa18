use super::Source;
use crate::actions;

const DOCUMENTATION: &str = r#"# Skitforge hotkeys. You may edit this file, but be aware that formatting and comments will not
# be preserved, and all keys and values are case sensitive.

# See `actions::Action` for available actions, specified here in [brackets].
# Keyboard hotkeys, specified by the "keyboard" field of an action, are written `[ctrl+][alt+][shift+]<key name>`.
# Key names are letters A to Z, or one of Delete, Backspace, Insert, Enter, Escape, Tab, Space,
# Home, End, PageUp, PageDown, ArrowUp, ArrowDown, ArrowLeft, ArrowRight.
# Each action may have many hotkeys associated with it, but each hotkey should only be used at most once.

# Examples:
# [Undo]
# keyboard = ["ctrl+Z"]
# [Redo]
# keyboard = ["ctrl+Y", "ctrl+shift+Z"]

"#;

pub struct Hotkeys {
    source: Source,
    pub actions_to_keys: actions::hotkeys::ActionsToKeys,
    pub keys_to_actions: actions::hotkeys::KeysToActions,
}
impl Hotkeys {
    const FILENAME: &'static str = "hotkeys.toml";
    /// Shared global hotkeys, loaded from user preferences.
    /// (Or defaulted, if unavailable for some reason)
    #[must_use]
    pub fn get() -> &'static Self {
        static GLOBAL_HOTKEYS: std::sync::OnceLock<Hotkeys> = std::sync::OnceLock::new();

        GLOBAL_HOTKEYS.get_or_init(Self::load_or_default)
    }
    #[must_use]
    fn load_or_default() -> Self {
        let (actions_to_keys, source) =
            super::load_toml::<actions::hotkeys::ActionsToKeys>(Self::FILENAME);
        let Some(actions_to_keys) = actions_to_keys else {
            return Self::defaulted(source);
        };
        Self::from_actions(actions_to_keys, source)
            .unwrap_or_else(|err| Self::defaulted(Source::Invalid(err.to_string())))
    }
    /// Bind keys as `actions_to_keys` lists them.
    ///
    /// # Errors
    /// If a hotkey is bound to more than one action.
    pub fn from_actions(
        actions_to_keys: actions::hotkeys::ActionsToKeys,
        source: Source,
    ) -> Result<Self, actions::hotkeys::KeysToActionsError> {
        let keys_to_actions = (&actions_to_keys).try_into()?;
        Ok(Self {
            source,
            actions_to_keys,
            keys_to_actions,
        })
    }
    #[must_use]
    pub fn defaulted(source: Source) -> Self {
        use actions::hotkeys::{ActionsToKeys, KeysToActions};
        match &source {
            Source::Invalid(err) => log::warn!("Hotkeys file is invalid, defaulting: {err}"),
            Source::Missing | Source::NoPath => log::warn!("Hotkeys weren't available, defaulting."),
            Source::File => (),
        }
        let default = ActionsToKeys::default();
        // Default action map is reversible - this is asserted by the default impl when debugging.
        let reverse = KeysToActions::try_from(&default).expect("default hotkeys bind a key twice");

        Self {
            source,
            keys_to_actions: reverse,
            actions_to_keys: default,
        }
    }
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }
    /// Write these hotkeys to the preferences directory.
    ///
    /// # Errors
    /// If there is no preferences directory, or it couldn't be written.
    pub fn save(&self) -> anyhow::Result<()> {
        super::save_toml(Self::FILENAME, DOCUMENTATION, &self.actions_to_keys)
    }
}
