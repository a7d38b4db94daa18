use crate::id::CommandID;

/// Free-form properties of a command, keyed by property name.
/// Their shape is dictated by the command's definition, not by this type.
pub type Fields = serde_json::Map<String, serde_json::Value>;

pub const GROUP_START: &str = "group_start";
pub const GROUP_END: &str = "group_end";

pub const BACKGROUND_COLOR: &str = "backgroundColor";
pub const COMMAND_LABEL_COLOR: &str = "commandLabelColor";
pub const GROUP_NAME: &str = "groupName";
pub const IS_COLLAPSED: &str = "isCollapsed";

/// Which half of a group a bracket command is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Bracket {
    Start,
    End,
}

/// A single entry in a skit's command list.
///
/// Serialized flat, `{"id": 1, "type": "text", ...fields}`, matching the skit file layout.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub id: CommandID,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(flatten)]
    fields: Fields,
}
impl Command {
    #[must_use]
    pub fn new(id: CommandID, ty: impl Into<String>) -> Self {
        Self {
            id,
            ty: ty.into(),
            fields: Fields::new(),
        }
    }
    /// Construct with fields. `id` and `type` keys within `fields` are ignored.
    #[must_use]
    pub fn with_fields(id: CommandID, ty: impl Into<String>, fields: Fields) -> Self {
        let mut this = Self::new(id, ty);
        for (key, value) in fields {
            this.set_field(key, value);
        }
        this
    }
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
    /// Set a property. The reserved `id` and `type` names are not fields, and are ignored.
    pub fn set_field(&mut self, name: impl Into<String>, value: serde_json::Value) {
        let name = name.into();
        if name == "id" || name == "type" {
            return;
        }
        self.fields.insert(name, value);
    }
    pub fn remove_field(&mut self, name: &str) -> Option<serde_json::Value> {
        self.fields.remove(name)
    }
    /// Shallow-merge `patch` into this command.
    ///
    /// A string `type` retypes the command, `id` is never patched, and a `null` value removes the field.
    pub fn apply_patch(&mut self, patch: &Fields) {
        for (key, value) in patch {
            match (key.as_str(), value) {
                ("id", _) => (),
                ("type", serde_json::Value::String(ty)) => self.ty.clone_from(ty),
                ("type", _) => (),
                (_, serde_json::Value::Null) => {
                    self.fields.remove(key);
                }
                _ => {
                    self.fields.insert(key.clone(), value.clone());
                }
            }
        }
    }
    #[must_use]
    pub fn bracket(&self) -> Option<Bracket> {
        match self.ty.as_str() {
            GROUP_START => Some(Bracket::Start),
            GROUP_END => Some(Bracket::End),
            _ => None,
        }
    }
    #[must_use]
    pub fn is_group_start(&self) -> bool {
        self.bracket() == Some(Bracket::Start)
    }
    #[must_use]
    pub fn is_group_end(&self) -> bool {
        self.bracket() == Some(Bracket::End)
    }
    /// Name shown for a `group_start`. None for other commands, or if unnamed.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.is_group_start()
            .then(|| self.fields.get(GROUP_NAME)?.as_str())
            .flatten()
    }
    /// Only ever true on a `group_start`.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.is_group_start()
            && self
                .fields
                .get(IS_COLLAPSED)
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false)
    }
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.fields
            .insert(IS_COLLAPSED.to_owned(), serde_json::Value::Bool(collapsed));
    }
    #[must_use]
    pub fn background_color(&self) -> Option<&str> {
        self.fields.get(BACKGROUND_COLOR)?.as_str()
    }
}
