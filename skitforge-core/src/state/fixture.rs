//! Terse construction of command lists for tests.

use super::{Command, Skit};
use crate::id::CommandID;

pub fn commands(list: &[(u64, &str)]) -> Vec<Command> {
    list.iter()
        .map(|&(id, ty)| Command::new(CommandID::new(id), ty))
        .collect()
}
/// `count` text commands, with ids `1..=count`.
pub fn texts(count: u64) -> Vec<Command> {
    (1..=count)
        .map(|id| Command::new(CommandID::new(id), "text"))
        .collect()
}
pub fn skit(list: Vec<Command>) -> Skit {
    let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    let mut skit = Skit::new("Test", now);
    skit.commands = list;
    skit
}
/// Collapse the group start with the given id.
pub fn collapsed(list: &mut [Command], id: u64) {
    list.iter_mut()
        .find(|command| command.id == CommandID::new(id))
        .unwrap()
        .set_collapsed(true);
}
pub fn ids<'a>(list: impl IntoIterator<Item = &'a Command>) -> Vec<u64> {
    list.into_iter().map(|command| command.id.get()).collect()
}
pub fn types<'a>(list: impl IntoIterator<Item = &'a Command>) -> Vec<&'a str> {
    list.into_iter().map(|command| command.ty.as_str()).collect()
}
