use crate::definitions::reserved::DEFAULT_GROUP_NAME;

/// Editor behaviour that may be tuned by the user.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Greatest number of undo steps kept per skit, oldest dropped first. Unbounded if None.
    pub history_limit: Option<usize>,
    /// Name given to groups made from the selection.
    pub default_group_name: String,
}
impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: None,
            default_group_name: DEFAULT_GROUP_NAME.to_owned(),
        }
    }
}
