use super::super::Action;
use super::{Key, KeyboardHotkey};

pub const KEYBOARD: &[(Action, &[KeyboardHotkey])] = &[
    (Action::Copy, &[KeyboardHotkey::ctrl(Key::C)]),
    (Action::Cut, &[KeyboardHotkey::ctrl(Key::X)]),
    (Action::Paste, &[KeyboardHotkey::ctrl(Key::V)]),
    (
        Action::Delete,
        &[
            KeyboardHotkey::plain(Key::Delete),
            KeyboardHotkey::plain(Key::Backspace),
        ],
    ),
    (Action::Duplicate, &[KeyboardHotkey::ctrl(Key::D)]),
    (Action::Undo, &[KeyboardHotkey::ctrl(Key::Z)]),
    (
        Action::Redo,
        &[
            KeyboardHotkey::ctrl(Key::Y),
            KeyboardHotkey::ctrl_shift(Key::Z),
        ],
    ),
];
