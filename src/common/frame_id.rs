//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame table.
///
/// Slots are stored in a `Vec`, so the id is a plain `usize` that can
/// index the table directly: `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The slot index this id refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The next slot clockwise in a table of `slot_count` slots.
    #[inline]
    pub fn next_wrapping(self, slot_count: usize) -> Self {
        FrameId((self.0 + 1) % slot_count)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
