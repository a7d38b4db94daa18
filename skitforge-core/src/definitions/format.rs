use super::Registry;
use crate::state::{
    command::{BACKGROUND_COLOR, COMMAND_LABEL_COLOR},
    Command,
};

/// Text substituted for a field placeholder. Strings appear bare, anything else as JSON.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}

impl Registry {
    /// The one-line label shown for `command` in the command list.
    ///
    /// Each `{field}` placeholder in the definition's format is replaced, first occurrence only,
    /// by the command's value for that field. Placeholders for absent fields are left as written.
    /// Without a format, the first meaningful string field stands in, else the type name.
    #[must_use]
    pub fn format_label(&self, command: &Command) -> String {
        let format = self
            .lookup(&command.ty)
            .map(|def| def.command_list_label_format.as_str())
            .filter(|format| !format.is_empty());
        let Some(format) = format else {
            return command
                .fields()
                .iter()
                .filter(|(key, _)| *key != BACKGROUND_COLOR && *key != COMMAND_LABEL_COLOR)
                .find_map(|(_, value)| {
                    value
                        .as_str()
                        .filter(|string| !string.is_empty() && *string != command.ty)
                })
                .unwrap_or(&command.ty)
                .to_owned();
        };

        let mut label = format.to_owned();
        for (key, value) in command.fields() {
            let placeholder = format!("{{{key}}}");
            if label.contains(&placeholder) {
                label = label.replacen(&placeholder, &display_value(value), 1);
            }
        }
        label
    }
}
