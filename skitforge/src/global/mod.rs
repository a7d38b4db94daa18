//! Global singletons: user preferences, loaded once from the preferences directory.

pub mod hotkeys;
pub mod settings;

/// Where preference files are kept, if the platform has such a place.
#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

/// How a preferences file was obtained.
#[derive(Debug)]
pub enum Source {
    /// Read from disk.
    File,
    /// Defaulted, since there was no file to read.
    Missing,
    /// Defaulted, since the file could not be understood. It should not be overwritten.
    Invalid(String),
    /// Defaulted, since the platform has no preferences directory.
    NoPath,
}
impl Source {
    /// Defaults should be written back only when nothing is there to lose.
    #[must_use]
    pub fn should_write_defaults(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Read and parse a TOML preferences file named `filename`.
fn load_toml<T: serde::de::DeserializeOwned>(filename: &str) -> (Option<T>, Source) {
    let Some(mut path) = preferences_dir() else {
        return (None, Source::NoPath);
    };
    path.push(filename);
    if !path.is_file() {
        return (None, Source::Missing);
    }
    let value: anyhow::Result<T> = try_block::try_block! {
        let string = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&string)?)
    };
    match value {
        Ok(value) => (Some(value), Source::File),
        Err(err) => (None, Source::Invalid(format!("{err:#}"))),
    }
}

/// Write `value` as TOML to the preferences file `filename`, prefixed with a `documentation` header.
fn save_toml<T: serde::Serialize>(filename: &str, documentation: &str, value: &T) -> anyhow::Result<()> {
    let mut preferences =
        preferences_dir().ok_or_else(|| anyhow::anyhow!("No preferences dir found"))?;
    // Not recursive. If the parent is missing, the user probably has a good reason.
    // Ignore errors (could already exist). Any real errors will be emitted by file access below.
    let _ = std::fs::DirBuilder::new().create(&preferences);

    preferences.push(filename);
    let string = documentation.to_owned() + &toml::ser::to_string_pretty(value)?;
    std::fs::write(preferences, string)?;
    Ok(())
}
