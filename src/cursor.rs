//! Forward-only position markers into a sequence.
//!
//! A cursor holds no reference to its sequence. It carries the sequence's
//! identity token, a logical position, and the generation it was minted at,
//! and every use revalidates those against the sequence it is handed to.
//! A cursor can therefore be copied freely and can never dangle; at worst
//! it earns a `ForeignCursor` or `StaleCursor` error.
//!
//! Valid positions run over `[0, len]` inclusive. `len` is the end marker:
//! reachable, comparable, never dereferenceable.

use crate::seq::Seq;
use crate::seq::SeqError;
use crate::seq::SeqId;

/// A forward-only position marker minted by [`Seq::begin`] or [`Seq::end`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    seq: SeqId,
    pos: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) fn mint(seq: SeqId, pos: usize, generation: u64) -> Cursor {
        return Cursor { seq, pos, generation };
    }

    /// Logical position within the owning sequence.
    pub fn pos(&self) -> usize {
        return self.pos;
    }

    pub(crate) fn owner(&self) -> SeqId {
        return self.seq;
    }

    pub(crate) fn minted_at(&self) -> u64 {
        return self.generation;
    }

    /// Step one position forward. `OutOfRange` when already at the end.
    ///
    /// There is no decrement and no random-access jump; stepping by `n` is
    /// the caller's loop, which surfaces the same error if it overruns.
    pub fn advance<T>(&mut self, seq: &Seq<T>) -> Result<(), SeqError> {
        seq.check_cursor(self)?;
        if self.pos + 1 > seq.len() {
            return Err(SeqError::OutOfRange { index: self.pos + 1, len: seq.len() });
        }
        self.pos += 1;
        return Ok(());
    }

    /// Step forward, returning a copy of the cursor as it was before the
    /// step. Postfix-increment shape.
    pub fn advance_post<T>(&mut self, seq: &Seq<T>) -> Result<Cursor, SeqError> {
        let before = *self;
        self.advance(seq)?;
        return Ok(before);
    }
}

/// Cursors are equal when they mark the same position of the same sequence.
/// Cursors from different sequences are never equal, whatever the position.
impl PartialEq for Cursor {
    fn eq(&self, other: &Cursor) -> bool {
        return self.seq == other.seq && self.pos == other.pos;
    }
}

impl Eq for Cursor {}
