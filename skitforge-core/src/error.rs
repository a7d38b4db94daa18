//! # Edit outcomes
//!
//! Every document mutation either applies in full or is skipped, leaving the skit, selection, and
//! history exactly as they were. The reason a mutation was skipped is reported through [`EditError`],
//! which callers driving the editor interactively are free to ignore.

use crate::id::CommandID;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no skit is currently open")]
    NoCurrentSkit,
    #[error("command {0} not found in the current skit")]
    UnknownCommand(CommandID),
    #[error("command type {0:?} has no definition")]
    UnknownType(String),
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("nothing is selected")]
    EmptySelection,
    #[error("command {0} is not a group start")]
    NotAGroup(CommandID),
    #[error("group {0} has no matching group end")]
    UnmatchedGroup(CommandID),
    #[error("edit would leave group brackets unbalanced")]
    Unbalanced,
    #[error("clipboard content is not a command list")]
    ClipboardPayload,
    #[error("command makes no changes")]
    NoOp,
}
