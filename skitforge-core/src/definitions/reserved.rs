//! Built-in definitions for the group brackets, present whatever the project schema says.

use super::{CommandDefinition, PropertyDefinition, PropertyType};
use crate::state::command::{GROUP_END, GROUP_NAME, GROUP_START, IS_COLLAPSED};

pub const DEFAULT_GROUP_NAME: &str = "New Group";
pub const GROUP_COLOR: &str = "#b9b9b9";

#[must_use]
pub fn is_reserved(ty: &str) -> bool {
    ty == GROUP_START || ty == GROUP_END
}

#[must_use]
pub fn definitions() -> [CommandDefinition; 2] {
    let mut group_name = PropertyDefinition::new(PropertyType::String);
    group_name.required = true;
    group_name.default = Some(DEFAULT_GROUP_NAME.into());

    let mut is_collapsed = PropertyDefinition::new(PropertyType::Boolean);
    is_collapsed.default = Some(false.into());

    [
        CommandDefinition {
            id: GROUP_START.to_owned(),
            label: "Group Start".to_owned(),
            description: "Opens a group of commands".to_owned(),
            category: Vec::new(),
            command_list_label_format: format!("{{{GROUP_NAME}}}"),
            default_background_color: Some(GROUP_COLOR.to_owned()),
            default_command_label_color: None,
            properties: [
                (GROUP_NAME.to_owned(), group_name),
                (IS_COLLAPSED.to_owned(), is_collapsed),
            ]
            .into(),
        },
        CommandDefinition {
            id: GROUP_END.to_owned(),
            label: "Group End".to_owned(),
            description: "Closes the innermost open group".to_owned(),
            category: Vec::new(),
            command_list_label_format: "Group End".to_owned(),
            default_background_color: Some(GROUP_COLOR.to_owned()),
            default_command_label_color: None,
            properties: std::collections::BTreeMap::new(),
        },
    ]
}
