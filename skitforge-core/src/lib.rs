pub mod clipboard;
pub mod definitions;
pub mod drag;
pub mod error;
pub mod id;
pub mod io;
pub mod reorder;
pub mod settings;
pub mod state;
pub mod store;

pub use error::EditError;
pub use id::CommandID;
pub use state::{Command, Skit};
pub use store::EditorState;
