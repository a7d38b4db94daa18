//! # IDs
//! Commands within a skit are identified by a small integer, unique within that skit's command list.
//! Unlike process-unique handles, these are persisted as plain JSON numbers and are allocated
//! by the skit itself as `max(existing) + 1`.
//!
//! To hand out a run of fresh IDs above some high-water mark, use [`CommandID::many_after`].

/// ID of a command, unique within the skit that owns it.
/// IDs from different skits may share a value and should not be compared.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CommandID(u64);

impl CommandID {
    /// The value below every allocated ID. Never assigned to a command.
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
    /// Get the raw numeric value of this ID.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
    /// The ID directly after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
    /// Allocate `count` sequential IDs strictly above `high_water`.
    ///
    /// IDs are assigned eagerly - dropping the returned iterator early does *not* mean
    /// the caller may reuse the skipped values, callers track their own high-water mark.
    pub fn many_after(high_water: Self, count: usize) -> impl ExactSizeIterator<Item = Self> {
        // Usize is always <= 64bits
        let start = high_water.0;
        (0..count).map(move |idx| Self(start.saturating_add(idx as u64 + 1)))
    }
    /// The greatest ID in the iterator, or [`Self::NONE`] if empty.
    pub fn max_of(ids: impl IntoIterator<Item = Self>) -> Self {
        ids.into_iter().max().unwrap_or(Self::NONE)
    }
}
impl From<u64> for CommandID {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
impl std::str::FromStr for CommandID {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}
impl std::fmt::Display for CommandID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Debug for CommandID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Command#{}", self.0)
    }
}
