use crate::state::Skit;

/// Undo and redo stacks of whole-skit snapshots.
#[derive(Clone, Default, Debug)]
pub struct History {
    /// Oldest first; the top is the most recent undo target.
    past: Vec<Skit>,
    future: Vec<Skit>,
}
impl History {
    /// Record the state from before an edit. Anything undone is no longer redoable.
    pub fn record(&mut self, before: Skit, limit: Option<usize>) {
        self.past.push(before);
        self.future.clear();
        if let Some(limit) = limit {
            let excess = self.past.len().saturating_sub(limit);
            self.past.drain(..excess);
        }
    }
    /// Step `current` back, returning false if there is nothing to undo.
    pub fn undo(&mut self, current: &mut Skit) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future.push(std::mem::replace(current, previous));
        true
    }
    /// Step `current` forward, returning false if there is nothing to redo.
    pub fn redo(&mut self, current: &mut Skit) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.past.push(std::mem::replace(current, next));
        true
    }
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
