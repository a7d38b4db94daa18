use super::{OptionsSource, PropertyDefinition, PropertyType, Registry};
use crate::state::{command::BACKGROUND_COLOR, Fields};
use serde_json::{json, Value};

const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Value given to a required property that has no default.
fn zero_value(property: &PropertyDefinition) -> Option<Value> {
    Some(match property.ty {
        PropertyType::String | PropertyType::Asset => json!(""),
        PropertyType::Number => json!(0),
        PropertyType::Boolean => json!(false),
        PropertyType::Enum => match &property.options {
            Some(OptionsSource::List(list)) => json!(list.first().map_or("", String::as_str)),
            // Master data may change after creation, don't pick from it.
            Some(OptionsSource::Master { .. }) | None => json!(""),
        },
        PropertyType::Vector2 | PropertyType::Vector2Int => json!([0, 0]),
        PropertyType::Vector3 | PropertyType::Vector3Int => json!([0, 0, 0]),
        PropertyType::Vector4 => json!([0, 0, 0, 0]),
        PropertyType::Command => return None,
    })
}

impl Registry {
    /// Fields for a freshly created command of type `ty`. None if `ty` has no definition.
    #[must_use]
    pub fn defaults_for(&self, ty: &str) -> Option<Fields> {
        let def = self.lookup(ty)?;
        let mut fields = Fields::new();
        fields.insert(
            BACKGROUND_COLOR.to_owned(),
            def.default_background_color
                .as_deref()
                .unwrap_or(DEFAULT_BACKGROUND)
                .into(),
        );
        for (name, property) in &def.properties {
            let value = match &property.default {
                Some(default) => Some(default.clone()),
                None if property.required => zero_value(property),
                None => None,
            };
            if let Some(value) = value {
                fields.insert(name.clone(), value);
            }
        }
        Some(fields)
    }
}
