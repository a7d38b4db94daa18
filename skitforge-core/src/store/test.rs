use super::EditorState;
use crate::{
    clipboard::{test::BrokenClipboard, Clipboard, MemoryClipboard, TransferError},
    error::EditError,
    id::CommandID,
    io::{ProjectFolder, SkitStorage},
    settings::EditorSettings,
    state::{
        fixture::{commands, ids, skit, texts, types},
        nesting, Command, Fields, Modifiers,
    },
};

fn id(n: u64) -> CommandID {
    CommandID::new(n)
}
fn open(list: Vec<Command>) -> EditorState {
    let mut state = EditorState::default();
    state.load_skits([("skit".to_owned(), skit(list))]);
    state.set_current_skit("skit").unwrap();
    state
}
fn current_ids(state: &EditorState) -> Vec<u64> {
    ids(&state.current_skit().unwrap().commands)
}
fn selected(state: &EditorState) -> Vec<u64> {
    state.selected_ids().iter().map(|id| id.get()).collect()
}
fn patch(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

#[test]
fn no_current_skit() {
    let mut state = EditorState::default();
    assert_eq!(
        state.add_command("text", Fields::new()),
        Err(EditError::NoCurrentSkit)
    );
    assert_eq!(state.undo(), Err(EditError::NoCurrentSkit));
    assert_eq!(state.set_current_skit("missing"), Err(EditError::NoCurrentSkit));
    assert!(state.visible_commands().is_empty());
}
#[test]
fn range_select_then_group() {
    let mut state = open(texts(3));
    state.select_command(Some(id(1)), Modifiers::NONE).unwrap();
    state.select_command(Some(id(3)), Modifiers::SHIFT).unwrap();
    assert_eq!(selected(&state), [1, 2, 3]);

    let start = state.create_group().unwrap();
    assert_eq!(start, id(4));
    assert_eq!(current_ids(&state), [4, 1, 2, 3, 5]);
    assert_eq!(
        types(&state.current_skit().unwrap().commands),
        ["group_start", "text", "text", "text", "group_end"]
    );
    assert_eq!(selected(&state), [4]);

    let group = state.current_skit().unwrap().get(start).unwrap();
    assert_eq!(group.group_name(), Some("New Group"));
    assert!(!group.is_collapsed());
    assert_eq!(state.label(start).as_deref(), Some("New Group"));
}
#[test]
fn group_of_empty_selection() {
    let mut state = open(texts(2));
    assert_eq!(state.create_group(), Err(EditError::EmptySelection));
    assert!(!state.can_undo());
}
#[test]
fn group_name_from_settings() {
    let mut state = open(texts(2));
    state.set_settings(EditorSettings {
        default_group_name: "Scene".into(),
        ..Default::default()
    });
    state.set_selection([id(2)]).unwrap();
    let start = state.create_group().unwrap();
    assert_eq!(current_ids(&state), [1, 3, 2, 4]);
    assert_eq!(
        state.current_skit().unwrap().get(start).unwrap().group_name(),
        Some("Scene")
    );
}
#[test]
fn collapse_hides_without_history() {
    let mut state = open(commands(&[
        (1, "group_start"),
        (2, "text"),
        (3, "group_end"),
        (4, "text"),
    ]));
    let modified = state.current_skit().unwrap().meta.modified;
    assert_eq!(state.toggle_group_collapse(id(1)), Ok(true));
    assert!(!state.is_hidden(id(1)));
    assert!(state.is_hidden(id(2)));
    assert!(state.is_hidden(id(3)));
    assert!(!state.is_hidden(id(4)));
    assert!(!state.can_undo());
    assert!(state.current_skit().unwrap().meta.modified >= modified);
    assert_eq!(
        ids(state.visible_commands()),
        [1, 4]
    );

    assert_eq!(state.toggle_group_collapse(id(1)), Ok(false));
    assert!(!state.is_hidden(id(2)));
    assert_eq!(state.toggle_group_collapse(id(4)), Err(EditError::NotAGroup(id(4))));
}
#[test]
fn drag_single_down() {
    let mut state = open(texts(4));
    state.reorder(id(2), id(4)).unwrap();
    assert_eq!(current_ids(&state), [1, 3, 4, 2]);
    state.undo().unwrap();
    assert_eq!(current_ids(&state), [1, 2, 3, 4]);
}
#[test]
fn drag_selection() {
    let mut state = open(texts(5));
    state.set_selection([id(1), id(2)]).unwrap();
    state.reorder(id(2), id(5)).unwrap();
    assert_eq!(current_ids(&state), [3, 4, 5, 1, 2]);
    // Selection survives a move.
    assert_eq!(selected(&state), [1, 2]);
}
#[test]
fn move_by_index() {
    let mut state = open(texts(4));
    state.move_commands(&[0, 1], 3).unwrap();
    assert_eq!(current_ids(&state), [3, 4, 1, 2]);
    state.move_command(0, 3).unwrap();
    assert_eq!(current_ids(&state), [4, 1, 2, 3]);
    assert_eq!(state.move_command(9, 0), Err(EditError::IndexOutOfRange(9)));
}
#[tokio::test]
async fn cut_then_paste() {
    let clipboard = MemoryClipboard::new();
    let mut state = open(texts(4));
    state.set_selection([id(2), id(3)]).unwrap();
    assert_eq!(state.cut_selected_commands(&clipboard).await, Ok(2));
    assert_eq!(current_ids(&state), [1, 4]);
    assert!(state.selected_ids().is_empty());

    state.select_command(Some(id(1)), Modifiers::NONE).unwrap();
    assert_eq!(state.paste_commands_from_clipboard(&clipboard).await, Ok(2));
    assert_eq!(current_ids(&state), [1, 5, 6, 4]);
    assert_eq!(selected(&state), [5, 6]);

    // Undo the paste, then the cut.
    state.undo().unwrap();
    assert_eq!(current_ids(&state), [1, 4]);
    state.undo().unwrap();
    assert_eq!(current_ids(&state), [1, 2, 3, 4]);
}
#[tokio::test]
async fn copy_takes_whole_groups() {
    let clipboard = MemoryClipboard::new();
    let mut state = open(commands(&[
        (1, "text"),
        (2, "group_start"),
        (3, "text"),
        (4, "group_end"),
    ]));
    state.set_selection([id(2)]).unwrap();
    assert_eq!(state.copy_selected_commands(&clipboard).await, Ok(3));
    assert!(!state.can_undo());

    // Nothing selected, pastes at the end.
    state.select_command(None, Modifiers::NONE).unwrap();
    state.paste_commands_from_clipboard(&clipboard).await.unwrap();
    assert_eq!(current_ids(&state), [1, 2, 3, 4, 5, 6, 7]);
    assert!(nesting::is_balanced(&state.current_skit().unwrap().commands));
}
#[tokio::test]
async fn bad_paste_is_noop() {
    let clipboard = MemoryClipboard::new();
    let mut state = open(texts(2));
    for text in ["", "{\"type\": \"text\"}", "[1]", "nonsense"] {
        clipboard.write_text(text.to_owned()).await.unwrap();
        assert_eq!(
            state.paste_commands_from_clipboard(&clipboard).await,
            Err(EditError::ClipboardPayload)
        );
    }
    assert_eq!(
        state.paste_commands_from_clipboard(&BrokenClipboard).await,
        Err(EditError::ClipboardPayload)
    );
    assert_eq!(current_ids(&state), [1, 2]);
    assert!(!state.can_undo());
}
#[tokio::test]
async fn failed_cut_keeps_commands() {
    let mut state = open(texts(2));
    state.set_selection([id(1)]).unwrap();
    assert!(matches!(
        state.cut_selected_commands(&BrokenClipboard).await,
        Err(TransferError::Clipboard(_))
    ));
    assert_eq!(current_ids(&state), [1, 2]);
    assert!(matches!(
        state.copy_selected_commands(&BrokenClipboard).await,
        Err(TransferError::Clipboard(_))
    ));
    state.select_command(None, Modifiers::NONE).unwrap();
    assert_eq!(
        state.copy_selected_commands(&MemoryClipboard::new()).await,
        Err(TransferError::Edit(EditError::EmptySelection))
    );
}
#[test]
fn ids_never_reused() {
    let mut state = open(texts(2));
    assert_eq!(state.add_command("text", Fields::new()), Ok(id(3)));
    state.remove_command(id(3)).unwrap();
    assert_eq!(state.add_command("text", Fields::new()), Ok(id(4)));
    state.undo().unwrap();
    assert_eq!(state.add_command("text", Fields::new()), Ok(id(5)));
    assert_eq!(selected(&state), [5]);
}
#[test]
fn add_with_defaults() {
    let mut state = open(Vec::new());
    assert_eq!(
        state.add_command_of_type("text"),
        Err(EditError::UnknownType("text".into()))
    );
    state
        .load_commands_yaml(
            "version: 1\ncommands:\n  - id: text\n    label: Text\n    properties:\n      body: { type: string, required: true }\n",
        )
        .unwrap();
    let new = state.add_command_of_type("text").unwrap();
    let command = state.current_skit().unwrap().get(new).unwrap();
    assert_eq!(command.field("body"), Some(&serde_json::json!("")));
    assert_eq!(command.background_color(), Some("#ffffff"));
}
#[test]
fn update_and_noop() {
    let mut state = open(texts(1));
    state
        .update_command(id(1), &patch(serde_json::json!({"body": "Hello"})))
        .unwrap();
    assert_eq!(
        state.current_skit().unwrap().commands[0].field("body"),
        Some(&serde_json::json!("Hello"))
    );
    // Same again changes nothing, and records nothing.
    assert_eq!(
        state.update_command(id(1), &patch(serde_json::json!({"body": "Hello"}))),
        Err(EditError::NoOp)
    );
    state.undo().unwrap();
    assert!(!state.can_undo());
    assert_eq!(
        state.update_command(id(9), &Fields::new()),
        Err(EditError::UnknownCommand(id(9)))
    );
}
#[test]
fn remove_group_takes_span() {
    let mut state = open(commands(&[
        (1, "text"),
        (2, "group_start"),
        (3, "text"),
        (4, "group_end"),
        (5, "text"),
    ]));
    state.set_selection([id(3), id(5)]).unwrap();
    state.remove_command(id(2)).unwrap();
    assert_eq!(current_ids(&state), [1, 5]);
    assert_eq!(selected(&state), [5]);
    assert_eq!(state.remove_command(id(2)), Err(EditError::UnknownCommand(id(2))));
    assert_eq!(state.remove_commands(&[]), Err(EditError::EmptySelection));
}
#[test]
fn remove_group_end_takes_span() {
    let mut state = open(commands(&[
        (1, "group_start"),
        (2, "text"),
        (3, "group_end"),
        (4, "text"),
    ]));
    assert_eq!(state.remove_commands(&[id(3)]), Ok(3));
    assert_eq!(current_ids(&state), [4]);
    assert!(nesting::is_balanced(&state.current_skit().unwrap().commands));

    // A stray end has no group to bring along.
    let mut state = open(commands(&[(1, "text"), (2, "group_end")]));
    assert_eq!(state.remove_commands(&[id(2)]), Ok(1));
    assert_eq!(current_ids(&state), [1]);
}
#[tokio::test]
async fn cut_group_end_takes_span() {
    let clipboard = MemoryClipboard::new();
    let mut state = open(commands(&[
        (1, "text"),
        (2, "group_start"),
        (3, "text"),
        (4, "group_end"),
    ]));
    state.set_selection([id(4)]).unwrap();
    assert_eq!(state.cut_selected_commands(&clipboard).await, Ok(3));
    assert_eq!(current_ids(&state), [1]);

    state.paste_commands_from_clipboard(&clipboard).await.unwrap();
    assert_eq!(current_ids(&state), [1, 5, 6, 7]);
    assert!(nesting::is_balanced(&state.current_skit().unwrap().commands));
}
#[tokio::test]
async fn paste_refuses_lone_bracket() {
    let clipboard = MemoryClipboard::new();
    let mut state = open(commands(&[
        (1, "group_start"),
        (2, "text"),
        (3, "group_end"),
    ]));
    clipboard
        .write_text(r#"[{"id": 3, "type": "group_end"}]"#.to_owned())
        .await
        .unwrap();
    state.set_selection([id(2)]).unwrap();
    assert_eq!(
        state.paste_commands_from_clipboard(&clipboard).await,
        Err(EditError::Unbalanced)
    );
    assert_eq!(current_ids(&state), [1, 2, 3]);
    assert_eq!(selected(&state), [2]);
    assert!(!state.can_undo());
    // The refused paste used up no IDs.
    assert_eq!(state.add_command("text", Fields::new()), Ok(id(4)));
}
#[test]
fn remove_selected() {
    let mut state = open(texts(4));
    state.set_selection([id(4), id(2)]).unwrap();
    assert_eq!(state.remove_selected_commands(), Ok(2));
    assert_eq!(current_ids(&state), [1, 3]);
    assert!(state.selected_ids().is_empty());
    assert_eq!(state.remove_selected_commands(), Err(EditError::EmptySelection));
}
#[test]
fn duplicate_marker_only() {
    let mut state = open(commands(&[
        (1, "group_start"),
        (2, "text"),
        (3, "group_end"),
    ]));
    assert_eq!(state.duplicate_command(id(1)), Ok(id(4)));
    assert_eq!(current_ids(&state), [1, 4, 2, 3]);
    assert_eq!(selected(&state), [4]);

    state.set_selection([id(2)]).unwrap();
    assert_eq!(state.duplicate_selected_command(), Ok(id(5)));
    assert_eq!(current_ids(&state), [1, 4, 2, 5, 3]);
}
#[test]
fn ungroup() {
    let mut state = open(commands(&[
        (1, "group_start"),
        (2, "group_start"),
        (3, "text"),
        (4, "group_end"),
        (5, "group_end"),
    ]));
    state.set_selection([id(3)]).unwrap();
    state.ungroup_commands(id(1)).unwrap();
    assert_eq!(current_ids(&state), [2, 3, 4]);
    assert!(state.selected_ids().is_empty());
    assert_eq!(state.ungroup_commands(id(3)), Err(EditError::NotAGroup(id(3))));

    let mut broken = open(commands(&[(1, "group_start"), (2, "text")]));
    assert_eq!(
        broken.ungroup_commands(id(1)),
        Err(EditError::UnmatchedGroup(id(1)))
    );
}
#[test]
fn rename() {
    let mut state = open(commands(&[(1, "group_start"), (2, "group_end")]));
    state.rename_group(id(1), "Intro").unwrap();
    assert_eq!(state.label(id(1)).as_deref(), Some("Intro"));
    assert_eq!(state.rename_group(id(2), "x"), Err(EditError::NotAGroup(id(2))));
}
#[test]
fn views() {
    let state = open(commands(&[
        (1, "group_start"),
        (2, "text"),
        (3, "group_end"),
    ]));
    assert_eq!(state.nest_levels()[&id(2)], 1);
    assert_eq!(state.group_indices(0), [0, 1, 2]);
    assert_eq!(state.top_level_groups(&[0]), [0]);
    let position = state.group_position(id(2)).unwrap();
    assert!(position.is_first && position.is_last);
    assert_eq!(state.skit_ids(), ["skit"]);
}
#[test]
fn switching_skits_resets() {
    let mut state = EditorState::default();
    state.load_skits([
        ("b".to_owned(), skit(texts(2))),
        ("a".to_owned(), skit(texts(1))),
    ]);
    assert_eq!(state.skit_ids(), ["a", "b"]);
    state.set_current_skit("b").unwrap();
    state.select_command(Some(id(1)), Modifiers::NONE).unwrap();
    state.remove_command(id(2)).unwrap();
    assert!(state.can_undo());

    state.set_current_skit("a").unwrap();
    assert!(!state.can_undo());
    assert!(state.selected_ids().is_empty());
    // Edits to the other skit are kept.
    assert_eq!(state.skit("b").unwrap().commands.len(), 1);
}
#[test]
fn bounded_history() {
    let mut state = open(Vec::new());
    state.set_settings(EditorSettings {
        history_limit: Some(2),
        ..Default::default()
    });
    for _ in 0..4 {
        state.add_command("text", Fields::new()).unwrap();
    }
    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(state.undo(), Err(EditError::NoOp));
    assert_eq!(current_ids(&state), [1, 2]);
    state.redo().unwrap();
    state.redo().unwrap();
    assert_eq!(state.redo(), Err(EditError::NoOp));
    assert_eq!(current_ids(&state), [1, 2, 3, 4]);
}
#[test]
fn undo_prunes_selection() {
    let mut state = open(texts(1));
    state.add_command("text", Fields::new()).unwrap();
    assert_eq!(selected(&state), [2]);
    state.undo().unwrap();
    assert!(state.selected_ids().is_empty());
}
#[test]
fn failed_write_rolls_back() {
    let mut state = open(texts(2));
    state.set_selection([id(1)]).unwrap();
    let result: Result<(), EditError> = state.write_with(|writer| {
        writer.commands_mut().clear();
        writer.selection_mut().clear();
        let _ = writer.allocate_id();
        Err(EditError::Unbalanced)
    });
    assert_eq!(result, Err(EditError::Unbalanced));
    assert_eq!(current_ids(&state), [1, 2]);
    assert_eq!(selected(&state), [1]);
    assert!(!state.can_undo());
    assert_eq!(state.add_command("text", Fields::new()), Ok(id(3)));
}
#[test]
fn save_through_storage() {
    let dir = tempfile::tempdir().unwrap();
    let project = ProjectFolder::open(dir.path()).unwrap();

    let mut state = EditorState::default();
    assert!(state.save_current_skit(&project).is_err());

    state.load_skits([("intro".to_owned(), skit(commands(&[(1, "text")])))]);
    state.set_current_skit("intro").unwrap();
    let errors = state.save_current_skit(&project).unwrap();
    assert_eq!(errors, ["Command type \"text\" is not defined"]);
    assert_eq!(state.validation_errors(), errors.as_slice());
    assert!(!project.skit_path("intro").exists());

    state.remove_command(id(1)).unwrap();
    assert!(state.save_current_skit(&project).unwrap().is_empty());
    assert!(state.validation_errors().is_empty());
    assert_eq!(project.load_skits().unwrap()["intro"].commands.len(), 0);
    // Saving keeps history.
    assert!(state.can_undo());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Add,
        Duplicate(usize),
        Remove(usize),
        Select(usize, bool, bool),
        Group,
        Ungroup(usize),
        Drag(usize, usize),
        Move(usize, usize),
    }
    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => Just(Op::Add),
            1 => any::<usize>().prop_map(Op::Duplicate),
            1 => any::<usize>().prop_map(Op::Remove),
            3 => (any::<usize>(), any::<bool>(), any::<bool>())
                .prop_map(|(at, ctrl, shift)| Op::Select(at, ctrl, shift)),
            2 => Just(Op::Group),
            1 => any::<usize>().prop_map(Op::Ungroup),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(from, to)| Op::Drag(from, to)),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(from, to)| Op::Move(from, to)),
        ]
    }
    /// The ID at `at`, wrapping around the list.
    fn id_at(state: &EditorState, at: usize) -> Option<CommandID> {
        let commands = &state.current_skit()?.commands;
        (!commands.is_empty()).then(|| commands[at % commands.len()].id)
    }
    fn apply(state: &mut EditorState, op: &Op) -> Result<(), EditError> {
        let len = state.current_skit().map_or(0, |skit| skit.commands.len()).max(1);
        match *op {
            Op::Add => state.add_command("text", Fields::new()).map(|_| ()),
            Op::Duplicate(at) => {
                let id = id_at(state, at).ok_or(EditError::EmptySelection)?;
                state.duplicate_command(id).map(|_| ())
            }
            Op::Remove(at) => {
                let id = id_at(state, at).ok_or(EditError::EmptySelection)?;
                state.remove_command(id)
            }
            Op::Select(at, ctrl, shift) => {
                state.select_command(id_at(state, at), Modifiers { ctrl, shift })
            }
            Op::Group => state.create_group().map(|_| ()),
            Op::Ungroup(at) => {
                let id = id_at(state, at).ok_or(EditError::EmptySelection)?;
                state.ungroup_commands(id)
            }
            Op::Drag(from, to) => {
                let from = id_at(state, from).ok_or(EditError::EmptySelection)?;
                let to = id_at(state, to).ok_or(EditError::EmptySelection)?;
                state.reorder(from, to)
            }
            Op::Move(from, to) => state.move_command(from % len, to % len),
        }
    }
    /// A balanced list built from `tokens`: 0 is a text, 1 opens a group, 2 closes the innermost
    /// open group. Groups still open at the end are closed there.
    fn nested_list(tokens: &[u8]) -> Vec<Command> {
        let mut list = Vec::new();
        let mut depth = 0usize;
        for token in tokens {
            let ty = match token {
                1 => {
                    depth += 1;
                    "group_start"
                }
                2 if depth > 0 => {
                    depth -= 1;
                    "group_end"
                }
                _ => "text",
            };
            list.push(ty);
        }
        list.extend(std::iter::repeat("group_end").take(depth));
        let list: Vec<_> = (1..).zip(list).collect();
        commands(&list)
    }
    fn all_unique(state: &EditorState) -> bool {
        let commands = &state.current_skit().unwrap().commands;
        let unique: hashbrown::HashSet<_> = commands.iter().map(|command| command.id).collect();
        unique.len() == commands.len()
    }

    proptest! {
        #[test]
        fn ids_stay_unique(ops in prop::collection::vec(op(), 0..48)) {
            let mut state = open(texts(3));
            for op in &ops {
                let _ = apply(&mut state, op);
                prop_assert!(all_unique(&state), "after {op:?}");
            }
        }
        #[test]
        fn brackets_stay_balanced(ops in prop::collection::vec(op(), 0..48)) {
            let mut state = open(texts(3));
            for op in &ops {
                // Duplicating a group start copies only the marker.
                if matches!(op, Op::Duplicate(_)) {
                    continue;
                }
                let _ = apply(&mut state, op);
                let commands = &state.current_skit().unwrap().commands;
                prop_assert!(nesting::is_balanced(commands), "after {op:?}: {:?}", types(commands));
            }
        }
        #[test]
        fn group_moves_as_block(
            tokens in prop::collection::vec(0u8..3, 1..24),
            pick in any::<usize>(),
            target in any::<usize>(),
        ) {
            let list = nested_list(&tokens);
            let starts: Vec<usize> = (0..list.len()).filter(|&at| list[at].is_group_start()).collect();
            prop_assume!(!starts.is_empty());
            let start = starts[pick % starts.len()];
            let span = nesting::group_span(&list, start).unwrap();
            let block: Vec<u64> = ids(&list[span.clone()]);
            let rest: Vec<u64> = list
                .iter()
                .enumerate()
                .filter(|(at, _)| !span.contains(at))
                .map(|(_, command)| command.id.get())
                .collect();

            let mut state = open(list.clone());
            let target = list[target % list.len()].id;
            if state.reorder(list[start].id, target).is_err() {
                prop_assert_eq!(current_ids(&state), ids(&list));
                return Ok(());
            }
            let after = current_ids(&state);
            let at = after.iter().position(|&id| id == block[0]).unwrap();
            prop_assert_eq!(&after[at..at + block.len()], &block[..]);
            let others: Vec<u64> = after.iter().copied().filter(|id| !block.contains(id)).collect();
            prop_assert_eq!(others, rest);
            prop_assert!(nesting::is_balanced(&state.current_skit().unwrap().commands));
        }
        #[test]
        fn undo_redo_round_trip(ops in prop::collection::vec(op(), 1..32)) {
            let mut state = open(texts(3));
            for op in &ops {
                let before = state.current_skit().cloned();
                if apply(&mut state, op).is_err() || matches!(op, Op::Select(..)) {
                    prop_assert_eq!(state.current_skit().cloned(), before);
                    continue;
                }
                let after = state.current_skit().cloned();
                state.undo().unwrap();
                prop_assert_eq!(state.current_skit().cloned(), before);
                state.redo().unwrap();
                prop_assert_eq!(state.current_skit().cloned(), after);
            }
        }
        #[test]
        fn removed_leave_selection(
            ops in prop::collection::vec(op(), 0..24),
            doomed in prop::collection::vec(any::<usize>(), 1..4),
        ) {
            let mut state = open(texts(4));
            for op in &ops {
                let _ = apply(&mut state, op);
            }
            let ids: Vec<_> = doomed.iter().filter_map(|&at| id_at(&state, at)).collect();
            let _ = state.remove_commands(&ids);
            for id in ids {
                prop_assert!(!state.selected_ids().contains(&id));
            }
        }
    }
}
