// regcapture.rs - Per-search capture table.
//
// Nine slots, addressed 1..=9. Spans are offsets into the subject, which
// outlives the search, so backreference bytes are borrowed instead of copied.

use smallvec::SmallVec;

use crate::bre::BRE_MAX_GROUPS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Slot {
    /// Set by `\(`; not a capture until the matching `\)` runs.
    open_at: Option<usize>,
    span: Option<(usize, usize)>,
}

#[derive(Debug)]
pub struct CaptureStore<'s> {
    subject: &'s [u8],
    slots: [Slot; BRE_MAX_GROUPS],
}

impl<'s> CaptureStore<'s> {
    pub fn new(subject: &'s [u8]) -> Self {
        CaptureStore {
            subject,
            slots: [Slot::default(); BRE_MAX_GROUPS],
        }
    }

    pub fn reset(&mut self) {
        self.slots = [Slot::default(); BRE_MAX_GROUPS];
    }

    fn slot(&self, group: usize) -> Option<&Slot> {
        self.slots.get(group.checked_sub(1)?)
    }

    fn slot_mut(&mut self, group: usize) -> Option<&mut Slot> {
        self.slots.get_mut(group.checked_sub(1)?)
    }

    /// Mark the provisional start of `group`.
    pub fn open(&mut self, group: usize, pos: usize) {
        if let Some(slot) = self.slot_mut(group) {
            slot.open_at = Some(pos);
        }
    }

    pub fn provisional_start(&self, group: usize) -> Option<usize> {
        self.slot(group)?.open_at
    }

    /// Install `start..end` as the capture of `group`, replacing whatever an
    /// earlier close left there.
    pub fn close(&mut self, group: usize, start: usize, end: usize) {
        if let Some(slot) = self.slot_mut(group) {
            slot.span = Some((start, end));
        }
    }

    /// Span of a closed group; `None` when it has not closed in this attempt.
    pub fn read(&self, group: usize) -> Option<(usize, usize)> {
        self.slot(group)?.span
    }

    /// Bytes captured by `group`, borrowed from the subject.
    pub fn snapshot_bytes(&self, group: usize) -> Option<&'s [u8]> {
        let (start, end) = self.read(group)?;
        self.subject.get(start..end)
    }

    /// Spans of groups `1..=n`.
    pub(crate) fn spans(&self, n: usize) -> SmallVec<[Option<(usize, usize)>; BRE_MAX_GROUPS]> {
        self.slots.iter().take(n).map(|s| s.span).collect()
    }
}
