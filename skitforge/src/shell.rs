//! A line-oriented front end. Each line is one verb and its arguments, turned into an intent on the
//! editor state. Failures are reported back and never end the session.

use crate::{
    actions::{
        hotkeys::{KeyboardHotkey, KeyboardHotkeyFromStrError},
        Action,
    },
    global::hotkeys::Hotkeys,
};
use skitforge_core::{
    clipboard::{MemoryClipboard, TransferError},
    drag::{DragSession, DropIndicator},
    io::{ProjectError, ProjectFolder},
    state::{Fields, Modifiers},
    CommandID, EditError, EditorState,
};

const HELP: &str = "\
skits                      list skits
open <skit>                open a skit
new <title>                create and open a skit
list                       show the visible commands
select <id> [ctrl|shift]   click a command
clear                      select nothing
add <type>                 append a command
set <id> <field> <json>    change a field
rm [id...]                 remove commands, or the selection
dup [id]                   duplicate a command, or the selection
drag <id> <target|none>    drag a command onto another
group                      group the selection
ungroup <id>               dissolve a group
collapse <id>              collapse or expand a group
rename <id> <name>         rename a group
copy | cut | paste         clipboard
undo | redo                history
key <chord>                press a hotkey, such as ctrl+Z
keys                       list actions and their hotkeys
save                       validate and write the skit
quit";

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("unknown command {0:?}, try `help`")]
    UnknownVerb(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0:?} is not a command id")]
    BadId(String),
    #[error("invalid value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0:?} is not a hotkey: {1}")]
    BadHotkey(String, KeyboardHotkeyFromStrError),
    #[error("{0} is not bound to an action")]
    Unbound(KeyboardHotkey),
    #[error("skit not saved:\n{}", .0.join("\n"))]
    NotSaved(Vec<String>),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// What the caller should do after a line.
#[derive(PartialEq, Eq, Debug)]
pub enum Reply {
    Quiet,
    Print(String),
    Quit,
}

pub struct Shell<'a> {
    state: EditorState,
    project: ProjectFolder,
    clipboard: MemoryClipboard,
    hotkeys: &'a Hotkeys,
}

fn parse_id(arg: &str) -> Result<CommandID, ShellError> {
    arg.parse().map_err(|_| ShellError::BadId(arg.to_owned()))
}
fn one_id(args: &[&str], usage: &'static str) -> Result<CommandID, ShellError> {
    match args {
        [id] => parse_id(id),
        _ => Err(ShellError::Usage(usage)),
    }
}

impl<'a> Shell<'a> {
    #[must_use]
    pub fn new(state: EditorState, project: ProjectFolder, hotkeys: &'a Hotkeys) -> Self {
        Self {
            state,
            project,
            clipboard: MemoryClipboard::new(),
            hotkeys,
        }
    }
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }
    /// Run a single line.
    ///
    /// # Errors
    /// When the line isn't understood, or its intent was skipped.
    pub async fn execute(&mut self, line: &str) -> Result<Reply, ShellError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Reply::Quiet);
        };
        let args: Vec<&str> = words.collect();
        // Verbs whose trailing argument is free text, spaces and all.
        let rest = |skip: usize| -> Option<String> {
            let text = line
                .trim_start()
                .splitn(skip + 2, char::is_whitespace)
                .nth(skip + 1)?
                .trim();
            (!text.is_empty()).then(|| text.to_owned())
        };

        match verb {
            "help" => Ok(Reply::Print(HELP.to_owned())),
            "quit" | "exit" => Ok(Reply::Quit),
            "skits" => Ok(Reply::Print(self.skits())),
            "open" => {
                let [id] = args[..] else {
                    return Err(ShellError::Usage("open <skit>"));
                };
                self.state.set_current_skit(id)?;
                Ok(Reply::Print(self.list()))
            }
            "new" => {
                let title = rest(0).ok_or(ShellError::Usage("new <title>"))?;
                let (id, skit, errors) = self.project.create_skit(&title)?;
                if !errors.is_empty() {
                    return Err(ShellError::NotSaved(errors));
                }
                self.state.insert_skit(id.clone(), skit);
                self.state.set_current_skit(&id)?;
                Ok(Reply::Print(format!("Created skit {id}")))
            }
            "list" => Ok(Reply::Print(self.list())),
            "select" => {
                let modifiers = match args[..] {
                    [_] => Modifiers::NONE,
                    [_, "ctrl"] => Modifiers::CTRL,
                    [_, "shift"] => Modifiers::SHIFT,
                    _ => return Err(ShellError::Usage("select <id> [ctrl|shift]")),
                };
                let id = parse_id(args[0])?;
                self.state.select_command(Some(id), modifiers)?;
                Ok(Reply::Print(self.list()))
            }
            "clear" => {
                self.state.select_command(None, Modifiers::NONE)?;
                Ok(Reply::Quiet)
            }
            "add" => {
                let [ty] = args[..] else {
                    return Err(ShellError::Usage("add <type>"));
                };
                let id = self.state.add_command_of_type(ty)?;
                Ok(Reply::Print(format!("Added {id}")))
            }
            "set" => {
                const USAGE: &str = "set <id> <field> <json>";
                let (Some(id), Some(field), Some(value)) = (args.first(), args.get(1), rest(2))
                else {
                    return Err(ShellError::Usage(USAGE));
                };
                let id = parse_id(id)?;
                let mut patch = Fields::new();
                patch.insert((*field).to_owned(), serde_json::from_str(&value)?);
                self.state.update_command(id, &patch)?;
                Ok(Reply::Quiet)
            }
            "rm" => {
                let removed = if args.is_empty() {
                    self.state.remove_selected_commands()?
                } else {
                    let ids = args
                        .iter()
                        .map(|arg| parse_id(arg))
                        .collect::<Result<Vec<_>, _>>()?;
                    self.state.remove_commands(&ids)?
                };
                Ok(Reply::Print(format!("Removed {removed} commands")))
            }
            "dup" => {
                let copy = match args[..] {
                    [] => self.state.duplicate_selected_command()?,
                    [id] => self.state.duplicate_command(parse_id(id)?)?,
                    _ => return Err(ShellError::Usage("dup [id]")),
                };
                Ok(Reply::Print(format!("Added {copy}")))
            }
            "drag" => {
                let [dragged, target] = args[..] else {
                    return Err(ShellError::Usage("drag <id> <target|none>"));
                };
                let dragged = parse_id(dragged)?;
                let target = match target {
                    "none" => None,
                    target => Some(parse_id(target)?),
                };
                self.drag(dragged, target)
            }
            "group" => {
                let id = self.state.create_group()?;
                Ok(Reply::Print(format!("Created group {id}")))
            }
            "ungroup" => {
                let id = one_id(&args, "ungroup <id>")?;
                self.state.ungroup_commands(id)?;
                Ok(Reply::Quiet)
            }
            "collapse" => {
                let id = one_id(&args, "collapse <id>")?;
                let collapsed = self.state.toggle_group_collapse(id)?;
                let now = if collapsed { "collapsed" } else { "expanded" };
                Ok(Reply::Print(format!("Group {id} {now}")))
            }
            "rename" => {
                let (Some(id), Some(name)) = (args.first(), rest(1)) else {
                    return Err(ShellError::Usage("rename <id> <name>"));
                };
                self.state.rename_group(parse_id(id)?, &name)?;
                Ok(Reply::Quiet)
            }
            "copy" => self.perform(Action::Copy).await,
            "cut" => self.perform(Action::Cut).await,
            "paste" => self.perform(Action::Paste).await,
            "undo" => self.perform(Action::Undo).await,
            "redo" => self.perform(Action::Redo).await,
            "key" => {
                let [chord] = args[..] else {
                    return Err(ShellError::Usage("key <chord>"));
                };
                let hotkey: KeyboardHotkey = chord
                    .parse()
                    .map_err(|err| ShellError::BadHotkey(chord.to_owned(), err))?;
                let action = self
                    .hotkeys
                    .keys_to_actions
                    .action_of(hotkey)
                    .ok_or(ShellError::Unbound(hotkey))?;
                log::debug!("{hotkey} triggered {action:?}");
                self.perform(action).await
            }
            "keys" => Ok(Reply::Print(self.bindings())),
            "save" => {
                let errors = self.state.save_current_skit(&self.project)?;
                if errors.is_empty() {
                    Ok(Reply::Print("Saved".to_owned()))
                } else {
                    Err(ShellError::NotSaved(errors))
                }
            }
            other => Err(ShellError::UnknownVerb(other.to_owned())),
        }
    }
    /// Carry out a hotkey action.
    ///
    /// # Errors
    /// When the action was skipped.
    pub async fn perform(&mut self, action: Action) -> Result<Reply, ShellError> {
        let message = match action {
            Action::Copy => {
                let count = self.state.copy_selected_commands(&self.clipboard).await?;
                format!("Copied {count} commands")
            }
            Action::Cut => {
                let count = self.state.cut_selected_commands(&self.clipboard).await?;
                format!("Cut {count} commands")
            }
            Action::Paste => {
                let count = self
                    .state
                    .paste_commands_from_clipboard(&self.clipboard)
                    .await?;
                format!("Pasted {count} commands")
            }
            Action::Delete => {
                let count = self.state.remove_selected_commands()?;
                format!("Removed {count} commands")
            }
            Action::Duplicate => {
                let copy = self.state.duplicate_selected_command()?;
                format!("Added {copy}")
            }
            Action::Undo => {
                self.state.undo()?;
                return Ok(Reply::Quiet);
            }
            Action::Redo => {
                self.state.redo()?;
                return Ok(Reply::Quiet);
            }
        };
        Ok(Reply::Print(message))
    }
    fn drag(&mut self, dragged: CommandID, target: Option<CommandID>) -> Result<Reply, ShellError> {
        let mut session = DragSession::start(dragged);
        let indicator = session.over(&self.state, target);
        session.end(&mut self.state, target)?;
        Ok(match indicator {
            Some(DropIndicator::Above(target)) => Reply::Print(format!("Dropped above {target}")),
            Some(DropIndicator::Below(target)) => Reply::Print(format!("Dropped below {target}")),
            None => Reply::Quiet,
        })
    }
    /// Every action, its bound hotkeys and what it does.
    fn bindings(&self) -> String {
        <Action as strum::IntoEnumIterator>::iter()
            .map(|action| {
                let keys = self
                    .hotkeys
                    .actions_to_keys
                    .keys_of(action)
                    .map(|keys| {
                        keys.iter()
                            .map(|key| key.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!(
                    "{:<10} {keys:<22} {}",
                    action.as_ref(),
                    action.description()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
    fn skits(&self) -> String {
        let current = self.state.current_skit_id();
        self.state
            .skit_ids()
            .into_iter()
            .map(|id| {
                let marker = if Some(id) == current { '*' } else { ' ' };
                format!("{marker} {id}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
    /// The visible commands, indented by depth. Selected commands are starred, collapsed groups
    /// marked `[+]`.
    fn list(&self) -> String {
        let levels = self.state.nest_levels();
        self.state
            .visible_commands()
            .into_iter()
            .map(|command| {
                let marker = if self.state.selection().contains(command.id) {
                    '*'
                } else {
                    ' '
                };
                let indent = "  ".repeat(levels.get(&command.id).copied().unwrap_or_default());
                let label = self.state.label(command.id).unwrap_or_default();
                let folded = if command.is_collapsed() { " [+]" } else { "" };
                format!("{marker} {indent}{}: {label}{folded}", command.id)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{actions::hotkeys::ActionsToKeys, global::Source};

    const SCHEMA: &str = r#"
version: 1
commands:
  - id: text
    label: Text
    commandListLabelFormat: "{body}"
    properties:
      body: { type: string, required: true, default: "..." }
"#;

    fn keys() -> Hotkeys {
        Hotkeys::defaulted(Source::NoPath)
    }
    fn project(dir: &tempfile::TempDir) -> ProjectFolder {
        std::fs::write(dir.path().join("commands.yaml"), SCHEMA).unwrap();
        ProjectFolder::open(dir.path()).unwrap()
    }
    fn state(project: &ProjectFolder) -> EditorState {
        let mut state = EditorState::default();
        state
            .load_commands_yaml(&skitforge_core::io::SkitStorage::load_commands_yaml(project).unwrap())
            .unwrap();
        state
    }
    fn ids(shell: &Shell) -> Vec<u64> {
        shell
            .state()
            .current_skit()
            .unwrap()
            .commands
            .iter()
            .map(|command| command.id.get())
            .collect()
    }
    async fn run(shell: &mut Shell<'_>, lines: &[&str]) {
        for line in lines {
            if let Err(err) = shell.execute(line).await {
                panic!("{line:?} failed: {err}");
            }
        }
    }

    #[tokio::test]
    async fn session() {
        let dir = tempfile::tempdir().unwrap();
        let project = project(&dir);
        let keys = keys();
        let mut shell = Shell::new(state(&project), project.clone(), &keys);

        run(&mut shell, &["new My Skit", "add text", "add text", "add text"]).await;
        assert_eq!(shell.state().current_skit_id(), Some("my_skit"));
        assert_eq!(ids(&shell), [1, 2, 3]);

        run(&mut shell, &["set 2 body \"Hello there\"", "select 1", "select 2 shift", "group"]).await;
        assert_eq!(ids(&shell), [4, 1, 2, 5, 3]);
        assert_eq!(
            shell.execute("list").await.unwrap(),
            Reply::Print(
                "* 4: New Group\n    1: ...\n    2: Hello there\n    5: Group End\n  3: ...".to_owned()
            )
        );

        run(&mut shell, &["rename 4 Opening", "collapse 4"]).await;
        assert_eq!(
            shell.execute("list").await.unwrap(),
            Reply::Print("* 4: Opening [+]\n  3: ...".to_owned())
        );

        assert_eq!(
            shell.execute("save").await.unwrap(),
            Reply::Print("Saved".to_owned())
        );
        assert!(project.skit_path("my_skit").is_file());
    }
    #[tokio::test]
    async fn hotkeys_and_clipboard() {
        let dir = tempfile::tempdir().unwrap();
        let project = project(&dir);
        let keys = keys();
        let mut shell = Shell::new(state(&project), project, &keys);
        run(&mut shell, &["new Clip", "add text", "add text", "select 1"]).await;

        assert_eq!(
            shell.execute("key ctrl+X").await.unwrap(),
            Reply::Print("Cut 1 commands".to_owned())
        );
        assert_eq!(ids(&shell), [2]);
        run(&mut shell, &["select 2", "key ctrl+V"]).await;
        assert_eq!(ids(&shell), [2, 3]);

        run(&mut shell, &["key ctrl+Z"]).await;
        assert_eq!(ids(&shell), [2]);
        run(&mut shell, &["key ctrl+shift+Z"]).await;
        assert_eq!(ids(&shell), [2, 3]);

        assert!(matches!(
            shell.execute("key ctrl+Q").await,
            Err(ShellError::Unbound(_))
        ));
        assert!(matches!(
            shell.execute("key hyper+Q").await,
            Err(ShellError::BadHotkey(..))
        ));
    }
    #[tokio::test]
    async fn bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let project = project(&dir);
        let keys = keys();
        let mut shell = Shell::new(state(&project), project, &keys);

        assert_eq!(shell.execute("   ").await.unwrap(), Reply::Quiet);
        assert_eq!(shell.execute("quit").await.unwrap(), Reply::Quit);
        assert!(matches!(
            shell.execute("frobnicate").await,
            Err(ShellError::UnknownVerb(_))
        ));
        assert!(matches!(
            shell.execute("add text").await,
            Err(ShellError::Edit(EditError::NoCurrentSkit))
        ));
        run(&mut shell, &["new Errors", "add text"]).await;
        assert!(matches!(
            shell.execute("add sound").await,
            Err(ShellError::Edit(EditError::UnknownType(_)))
        ));
        assert!(matches!(
            shell.execute("select one").await,
            Err(ShellError::BadId(_))
        ));
        assert!(matches!(
            shell.execute("set 1 body {oops").await,
            Err(ShellError::Json(_))
        ));
        assert!(matches!(
            shell.execute("drag 1").await,
            Err(ShellError::Usage(_))
        ));
        assert!(matches!(
            shell.execute("drag 1 none").await,
            Err(ShellError::Edit(EditError::NoOp))
        ));
        run(&mut shell, &["set 1 body \"\""]).await;
        assert!(matches!(
            shell.execute("save").await,
            Err(ShellError::NotSaved(errors)) if errors.len() == 1
        ));
    }
    #[tokio::test]
    async fn lists_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let project = project(&dir);
        let toml = "[Copy]\nkeyboard = [\"ctrl+C\", \"Insert\"]\n[Undo]\nkeyboard = [\"ctrl+Z\"]\n";
        let actions_to_keys: ActionsToKeys = toml::from_str(toml).unwrap();
        let keys = Hotkeys::from_actions(actions_to_keys, Source::File).unwrap();
        let mut shell = Shell::new(state(&project), project, &keys);

        let Reply::Print(listing) = shell.execute("keys").await.unwrap() else {
            panic!("keys printed nothing");
        };
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 7, "{listing}");
        assert!(lines[0].starts_with("Copy"), "{listing}");
        assert!(lines[0].contains("ctrl+C, Insert"), "{listing}");
        assert!(lines[0].ends_with(Action::Copy.description()), "{listing}");
        // Unbound actions are still listed.
        let redo = lines.iter().find(|line| line.starts_with("Redo")).unwrap();
        assert!(!redo.contains("ctrl"), "{listing}");

        run(&mut shell, &["new Insert", "add text", "select 1"]).await;
        assert_eq!(
            shell.execute("key Insert").await.unwrap(),
            Reply::Print("Copied 1 commands".to_owned())
        );
    }
    #[tokio::test]
    async fn drag_reports_drop_side() {
        let dir = tempfile::tempdir().unwrap();
        let project = project(&dir);
        let keys = keys();
        let mut shell = Shell::new(state(&project), project, &keys);
        run(&mut shell, &["new Drag", "add text", "add text", "add text", "clear"]).await;

        assert_eq!(
            shell.execute("drag 1 3").await.unwrap(),
            Reply::Print("Dropped below 3".to_owned())
        );
        assert_eq!(ids(&shell), [2, 3, 1]);
        assert_eq!(
            shell.execute("drag 1 2").await.unwrap(),
            Reply::Print("Dropped above 2".to_owned())
        );
        assert_eq!(ids(&shell), [1, 2, 3]);
    }
}
