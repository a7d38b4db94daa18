//! # Project folders
//!
//! A project is a directory holding a command-definition schema and a `skits` folder with one JSON
//! file per skit, named by its skit ID:
//!
//! ```text
//! project/
//!   commandForgeEditor.config.yml   (optional, names the schema)
//!   commands.yaml
//!   skits/
//!     intro.json
//! ```

pub mod validate;

use crate::{
    definitions::Registry,
    error::EditError,
    state::Skit,
    store::SkitID,
};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "commandForgeEditor.config.yml";
pub const DEFAULT_SCHEMA_FILE: &str = "commands.yaml";
pub const SKITS_DIR: &str = "skits";

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("failed to encode skit: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Edit(#[from] EditError),
}
impl ProjectError {
    fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Contents of [`CONFIG_FILE`].
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Path to the command-definition schema, relative to the project root.
    pub commands_schema: String,
}

/// Where skits and their schema are kept.
pub trait SkitStorage {
    /// Every readable skit, by ID.
    ///
    /// # Errors
    /// When the storage itself cannot be read. Individual unreadable skits are skipped.
    fn load_skits(&self) -> Result<hashbrown::HashMap<SkitID, Skit>, ProjectError>;
    /// Validate `skit`, and write it only if there are no problems.
    /// Returns the problems found.
    ///
    /// # Errors
    /// When writing fails.
    fn save_skit(&self, id: &str, skit: &Skit, registry: &Registry)
        -> Result<Vec<String>, ProjectError>;
    /// The command-definition schema text.
    ///
    /// # Errors
    /// When it cannot be read.
    fn load_commands_yaml(&self) -> Result<String, ProjectError>;
}

/// The ID a new skit titled `title` is stored under. Only letters, digits, `-` and `_` are kept,
/// anything else becomes `_` so the ID is always a plain file name.
#[must_use]
pub fn skit_id_for(title: &str) -> SkitID {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A project directory on disk.
#[derive(Clone, Debug)]
pub struct ProjectFolder {
    root: PathBuf,
    config: Option<ProjectConfig>,
}
impl ProjectFolder {
    /// Open the project at `root`, reading its configuration file if it has one.
    ///
    /// # Errors
    /// If the configuration file exists but can't be read or parsed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ProjectError> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.is_file() {
            let text = std::fs::read_to_string(&config_path)
                .map_err(ProjectError::io(&config_path))?;
            Some(serde_yaml::from_str(&text)?)
        } else {
            log::debug!("No {CONFIG_FILE} in {}, using defaults", root.display());
            None
        };
        Ok(Self { root, config })
    }
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
    #[must_use]
    pub fn config(&self) -> Option<&ProjectConfig> {
        self.config.as_ref()
    }
    /// The project's name, or the folder's if unnamed.
    #[must_use]
    pub fn name(&self) -> String {
        self.config
            .as_ref()
            .and_then(|config| config.project_name.clone())
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_default()
    }
    #[must_use]
    pub fn schema_path(&self) -> PathBuf {
        let relative = self
            .config
            .as_ref()
            .map_or(DEFAULT_SCHEMA_FILE, |config| config.commands_schema.as_str());
        self.root.join(relative)
    }
    #[must_use]
    pub fn skits_dir(&self) -> PathBuf {
        self.root.join(SKITS_DIR)
    }
    #[must_use]
    pub fn skit_path(&self, id: &str) -> PathBuf {
        self.skits_dir().join(format!("{id}.json"))
    }
    /// Create and immediately save an empty skit.
    ///
    /// # Errors
    /// If it could not be written.
    pub fn create_skit(&self, title: &str) -> Result<(SkitID, Skit, Vec<String>), ProjectError> {
        let skit = Skit::new(title, chrono::Utc::now());
        let id = skit_id_for(title);
        // No commands yet, so definitions don't matter.
        let errors = self.save_skit(&id, &skit, &Registry::default())?;
        Ok((id, skit, errors))
    }
}
impl SkitStorage for ProjectFolder {
    fn load_skits(&self) -> Result<hashbrown::HashMap<SkitID, Skit>, ProjectError> {
        let dir = self.skits_dir();
        if !dir.is_dir() {
            log::debug!("No skits folder at {}", dir.display());
            return Ok(hashbrown::HashMap::new());
        }
        let mut skits = hashbrown::HashMap::new();
        for entry in std::fs::read_dir(&dir).map_err(ProjectError::io(&dir))? {
            let path = entry.map_err(ProjectError::io(&dir))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                log::warn!("Skipping skit with unreadable name {}", path.display());
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(ProjectError::io(&path))?;
            match serde_json::from_str::<Skit>(&text) {
                Ok(skit) => {
                    skits.insert(id.to_owned(), skit);
                }
                Err(err) => log::warn!("Skipping invalid skit {}: {err}", path.display()),
            }
        }
        log::info!("Loaded {} skits from {}", skits.len(), dir.display());
        Ok(skits)
    }
    fn save_skit(
        &self,
        id: &str,
        skit: &Skit,
        registry: &Registry,
    ) -> Result<Vec<String>, ProjectError> {
        let mut errors = validate::validate_skit(skit);
        errors.extend(validate::validate_command_properties(skit, registry));
        if !errors.is_empty() {
            return Ok(errors);
        }

        let mut skit = skit.clone();
        skit.touch(chrono::Utc::now());
        let dir = self.skits_dir();
        std::fs::create_dir_all(&dir).map_err(ProjectError::io(&dir))?;
        let path = self.skit_path(id);
        let text = serde_json::to_string_pretty(&skit)?;
        std::fs::write(&path, text).map_err(ProjectError::io(&path))?;
        Ok(errors)
    }
    fn load_commands_yaml(&self) -> Result<String, ProjectError> {
        let path = self.schema_path();
        std::fs::read_to_string(&path).map_err(ProjectError::io(&path))
    }
}
