//! # Command definitions
//!
//! Every command type is described by a [`CommandDefinition`], listing its typed properties and how
//! it is labelled in the command list. Definitions come from a project's YAML schema, merged with the
//! built-in group bracket types.

use std::collections::BTreeMap;

mod categories;
mod defaults;
mod format;
pub mod reserved;

pub use categories::CategoryNode;

#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    #[error("failed to parse command definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Enum,
    /// Path to a project asset.
    Asset,
    /// Reference to another command, by ID.
    Command,
    Vector2,
    Vector3,
    Vector4,
    #[strum(serialize = "vector2Int")]
    Vector2Int,
    #[strum(serialize = "vector3Int")]
    Vector3Int,
}
impl PropertyType {
    /// Element count, if this is a vector type.
    #[must_use]
    pub fn vector_arity(self) -> Option<usize> {
        match self {
            Self::Vector2 | Self::Vector2Int => Some(2),
            Self::Vector3 | Self::Vector3Int => Some(3),
            Self::Vector4 => Some(4),
            _ => None,
        }
    }
    #[must_use]
    pub fn is_integer_vector(self) -> bool {
        matches!(self, Self::Vector2Int | Self::Vector3Int)
    }
}

/// Allowed values of an `enum` property.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OptionsSource {
    List(Vec<String>),
    /// Indirected through a named table of the schema's master data.
    Master { master: String },
}

#[derive(Clone, Default, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct Constraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Regular expression a string value must match.
    pub pattern: Option<String>,
}
impl Constraints {
    fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.pattern.is_none()
    }
}

#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(rename = "type")]
    pub ty: PropertyType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_from: Option<String>,
    /// For `command` properties, the types a referenced command may have. Any, if None.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
}
impl PropertyDefinition {
    #[must_use]
    pub fn new(ty: PropertyType) -> Self {
        Self {
            ty,
            required: false,
            default: None,
            multiline: false,
            options: None,
            options_from: None,
            command_types: None,
            constraints: Constraints::default(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDefinition {
    /// The command type this defines.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Path through the category tree, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,
    /// Label template, with `{field}` placeholders.
    #[serde(default)]
    pub command_list_label_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_command_label_color: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDefinition>,
}

/// A command-definition schema file, as written.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandsConfig {
    pub version: u32,
    /// Named option tables, for `enum` properties.
    #[serde(default)]
    pub master: BTreeMap<String, Vec<String>>,
    pub commands: Vec<CommandDefinition>,
}
impl CommandsConfig {
    /// Structural problems within the schema. These do not prevent use of the schema.
    #[must_use]
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = hashbrown::HashSet::new();
        for (idx, def) in self.commands.iter().enumerate() {
            if def.id.is_empty() {
                errors.push(format!("Command definition #{idx} has no id"));
            } else if !seen.insert(def.id.as_str()) {
                errors.push(format!("Command id \"{}\" is defined more than once", def.id));
            }
            if def.label.is_empty() {
                errors.push(format!("Command \"{}\" has an empty label", def.id));
            }
            for (name, prop) in &def.properties {
                if let Some(OptionsSource::Master { master }) = &prop.options {
                    if !self.master.contains_key(master) {
                        errors.push(format!(
                            "Command \"{}\" property \"{name}\" refers to unknown master data \"{master}\"",
                            def.id
                        ));
                    }
                }
                if let Some(pattern) = &prop.constraints.pattern {
                    if let Err(err) = regex::Regex::new(pattern) {
                        errors.push(format!(
                            "Command \"{}\" property \"{name}\" has an invalid pattern: {err}",
                            def.id
                        ));
                    }
                }
            }
        }
        errors
    }
}

/// All known command definitions, looked up by command type.
///
/// The reserved group bracket types are always present, and shadow any schema entry of the same id.
#[derive(Clone, Debug)]
pub struct Registry {
    version: u32,
    master: BTreeMap<String, Vec<String>>,
    definitions: Vec<CommandDefinition>,
}
impl Default for Registry {
    fn default() -> Self {
        Self {
            version: 1,
            master: BTreeMap::new(),
            definitions: reserved::definitions().into(),
        }
    }
}
impl Registry {
    #[must_use]
    pub fn from_config(config: CommandsConfig) -> Self {
        let mut definitions: Vec<CommandDefinition> = reserved::definitions().into();
        definitions.extend(
            config
                .commands
                .into_iter()
                .filter(|def| !reserved::is_reserved(&def.id)),
        );
        Self {
            version: config.version,
            master: config.master,
            definitions,
        }
    }
    /// Parse a schema from YAML, returning it alongside any structural problems found.
    ///
    /// # Errors
    /// If the text is not a schema at all. Structural problems are not errors.
    pub fn parse(yaml: &str) -> Result<(Self, Vec<String>), SchemaError> {
        let config: CommandsConfig = serde_yaml::from_str(yaml)?;
        let problems = config.check();
        for problem in &problems {
            log::warn!("{problem}");
        }
        Ok((Self::from_config(config), problems))
    }
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
    #[must_use]
    pub fn lookup(&self, ty: &str) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|def| def.id == ty)
    }
    /// Every definition, the reserved ones first.
    pub fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> + '_ {
        self.definitions.iter()
    }
    #[must_use]
    pub fn master(&self, key: &str) -> Option<&[String]> {
        self.master.get(key).map(Vec::as_slice)
    }
    /// The values an `enum` property may take. Empty if unconstrained or the master table is missing.
    #[must_use]
    pub fn resolve_options<'a>(&'a self, property: &'a PropertyDefinition) -> &'a [String] {
        match &property.options {
            Some(OptionsSource::List(list)) => list.as_slice(),
            Some(OptionsSource::Master { master }) => self.master(master).unwrap_or_default(),
            None => &[],
        }
    }
}
