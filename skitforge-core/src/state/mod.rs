//! # State
//!
//! The skit document itself, and the derived views computed from it. Nesting is never stored:
//! a command's place in a group is inferred from the positions of `group_start`/`group_end`
//! brackets in the flat command list.

pub mod command;
pub mod nesting;
pub mod selection;
pub mod skit;

pub use command::{Bracket, Command, Fields};
pub use selection::{Modifiers, Selection};
pub use skit::{Skit, SkitMeta};

#[cfg(test)]
pub(crate) mod fixture;
