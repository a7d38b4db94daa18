//! Checks run on a skit before it is written. Problems are collected as messages for display,
//! never raised as errors.

use crate::{
    definitions::{PropertyDefinition, PropertyType, Registry},
    state::{nesting, Command, Skit},
};
use serde_json::Value;

/// Document-level problems: metadata, IDs, and group brackets.
#[must_use]
pub fn validate_skit(skit: &Skit) -> Vec<String> {
    let mut errors = Vec::new();
    if skit.meta.title.trim().is_empty() {
        errors.push("meta.title must not be empty".to_owned());
    }
    if skit.meta.version < 1 {
        errors.push("meta.version must be at least 1".to_owned());
    }

    let mut seen = hashbrown::HashSet::with_capacity(skit.commands.len());
    for command in &skit.commands {
        if command.ty.is_empty() {
            errors.push(format!("Command {}: type must not be empty", command.id));
        }
        if !seen.insert(command.id) {
            errors.push(format!("Command id {} is used more than once", command.id));
        }
    }

    for id in nesting::unmatched_brackets(&skit.commands) {
        match skit.get(id) {
            Some(command) if command.is_group_start() => {
                errors.push(format!("Group {id} has no matching group_end"));
            }
            _ => errors.push(format!("Command {id}: group_end has no matching group_start")),
        }
    }
    errors
}

/// Compiled patterns, by source.
type Patterns = hashbrown::HashMap<String, Option<regex::Regex>>;

/// Every command's fields against its definition.
#[must_use]
pub fn validate_command_properties(skit: &Skit, registry: &Registry) -> Vec<String> {
    let mut errors = Vec::new();
    let mut patterns = Patterns::new();
    for command in &skit.commands {
        let Some(def) = registry.lookup(&command.ty) else {
            errors.push(format!("Command type \"{}\" is not defined", command.ty));
            continue;
        };
        for (name, property) in &def.properties {
            let value = command.field(name);
            let missing = match value {
                None | Some(Value::Null) => true,
                Some(Value::String(string)) => string.is_empty(),
                Some(_) => false,
            };
            if missing {
                if property.required {
                    errors.push(format!(
                        "Command {}: Required property \"{name}\" is missing",
                        command.id
                    ));
                }
                continue;
            }
            if let Some(value) = value {
                if let Some(problem) = check_value(skit, registry, &mut patterns, property, value) {
                    errors.push(format!("Command {}: Property \"{name}\" {problem}", command.id));
                }
            }
        }
    }
    errors
}

/// What is wrong with a present value, phrased to follow the property's name.
fn check_value(
    skit: &Skit,
    registry: &Registry,
    patterns: &mut Patterns,
    property: &PropertyDefinition,
    value: &Value,
) -> Option<String> {
    let constraints = &property.constraints;
    match property.ty {
        PropertyType::Number => {
            let Some(number) = value.as_f64() else {
                return Some("must be a number".to_owned());
            };
            if let Some(min) = constraints.min.filter(|&min| number < min) {
                return Some(format!("must be at least {min}"));
            }
            if let Some(max) = constraints.max.filter(|&max| number > max) {
                return Some(format!("must be at most {max}"));
            }
            None
        }
        PropertyType::String | PropertyType::Asset => {
            let Some(string) = value.as_str() else {
                return Some("must be a string".to_owned());
            };
            let pattern = constraints.pattern.as_ref()?;
            // Uncompilable patterns are reported against the schema, not here.
            let regex = patterns
                .entry_ref(pattern.as_str())
                .or_insert_with(|| regex::Regex::new(pattern).ok())
                .as_ref()?;
            (!regex.is_match(string)).then(|| format!("does not match pattern {pattern}"))
        }
        PropertyType::Boolean => (!value.is_boolean()).then(|| "must be true or false".to_owned()),
        PropertyType::Enum => {
            let options = registry.resolve_options(property);
            let known = value
                .as_str()
                .is_some_and(|string| options.iter().any(|option| option == string));
            (!options.is_empty() && !known).then(|| format!("must be one of: {}", options.join(", ")))
        }
        ty @ (PropertyType::Vector2
        | PropertyType::Vector3
        | PropertyType::Vector4
        | PropertyType::Vector2Int
        | PropertyType::Vector3Int) => {
            let arity = ty.vector_arity()?;
            let elements = value.as_array().filter(|array| array.len() == arity);
            let well_formed = elements.is_some_and(|array| {
                array.iter().all(|element| match element.as_f64() {
                    Some(number) => !ty.is_integer_vector() || number.fract() == 0.0,
                    None => false,
                })
            });
            let kind = if ty.is_integer_vector() { "integers" } else { "numbers" };
            (!well_formed).then(|| format!("must be a list of {arity} {kind}"))
        }
        PropertyType::Command => {
            let Some(target) = value.as_u64() else {
                return Some("must be a command id".to_owned());
            };
            let Some(referenced) = skit.get(target.into()) else {
                return Some(format!("refers to missing command {target}"));
            };
            check_command_type(property, referenced)
        }
    }
}

fn check_command_type(property: &PropertyDefinition, referenced: &Command) -> Option<String> {
    let allowed = property.command_types.as_ref()?;
    (!allowed.is_empty() && !allowed.contains(&referenced.ty)).then(|| {
        format!(
            "refers to command {} of type \"{}\", expected one of: {}",
            referenced.id,
            referenced.ty,
            allowed.join(", ")
        )
    })
}
