//! Names of the keys a hotkey may use.

/// A physical key, named as written in hotkey files.
#[derive(
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Delete,
    Backspace,
    Insert,
    Enter,
    Escape,
    Tab,
    Space,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}
impl Key {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
