use super::Source;
use skitforge_core::settings::EditorSettings;

const DOCUMENTATION: &str = r#"# Skitforge editor settings. You may edit this file, but be aware that formatting and comments
# will not be preserved. Missing entries take their default values.

# history_limit: greatest number of undo steps kept per skit. Unbounded when absent.
# default_group_name: name given to new groups.

# Example:
# history_limit = 200
# default_group_name = "Scene"

"#;

pub struct Settings {
    source: Source,
    pub editor: EditorSettings,
}
impl Settings {
    const FILENAME: &'static str = "settings.toml";
    /// Shared global settings, loaded from user preferences.
    #[must_use]
    pub fn get() -> &'static Self {
        static GLOBAL_SETTINGS: std::sync::OnceLock<Settings> = std::sync::OnceLock::new();

        GLOBAL_SETTINGS.get_or_init(|| {
            let (editor, source) = super::load_toml::<EditorSettings>(Self::FILENAME);
            match &source {
                Source::File => (),
                Source::Invalid(err) => log::warn!("Settings file is invalid, defaulting: {err}"),
                Source::Missing | Source::NoPath => {
                    log::warn!("Settings weren't available, defaulting.");
                }
            }
            Self {
                source,
                editor: editor.unwrap_or_default(),
            }
        })
    }
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }
    /// Write these settings to the preferences directory.
    ///
    /// # Errors
    /// If there is no preferences directory, or it couldn't be written.
    pub fn save(&self) -> anyhow::Result<()> {
        super::save_toml(Self::FILENAME, DOCUMENTATION, &self.editor)
    }
}
