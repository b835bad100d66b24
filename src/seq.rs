//! A growable random-access sequence over clone-on-write shared storage.
//!
//! `Seq` keeps its logical length equal to its buffer capacity at all times:
//! every structural mutation (`resize`, `insert`, `erase`) allocates a fresh
//! exact-size buffer and copies, so each one is O(len). There is no slack
//! capacity and no amortized growth.
//!
//! The container is neither `Clone` nor `Copy`. Sharing is the explicit
//! [`Seq::share`] call, which hands out an O(1) snapshot over the same
//! buffer; the snapshot detaches the moment either side writes.
//!
//! Cursors ([`crate::cursor::Cursor`]) carry the container's identity token
//! and the generation they were minted at. Every structural mutation bumps
//! the generation, so using an outdated cursor is a checked `StaleCursor`
//! error rather than silent corruption.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use crate::buffer::SharedBuf;
use crate::cursor::Cursor;

/// Error raised by sequence and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// The index (or cursor position) is not a live element of the sequence.
    OutOfRange { index: usize, len: usize },
    /// The cursor was minted by a different sequence.
    ForeignCursor,
    /// The cursor predates a structural mutation of its sequence.
    StaleCursor,
}

impl std::fmt::Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            SeqError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            SeqError::ForeignCursor => {
                write!(f, "cursor belongs to a different sequence")
            }
            SeqError::StaleCursor => {
                write!(f, "cursor was invalidated by a structural mutation")
            }
        };
    }
}

impl std::error::Error for SeqError {}

/// Identity token distinguishing one sequence instance from another.
/// Tokens are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqId(u64);

impl SeqId {
    fn mint() -> SeqId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        return SeqId(NEXT.fetch_add(1, Ordering::Relaxed));
    }
}

/// A growable random-access sequence.
///
/// Invariants:
/// - `len == 0` exactly when no buffer is held;
/// - when a buffer is held, its capacity equals `len`;
/// - `generation` strictly increases across structural mutations.
pub struct Seq<T> {
    buf: Option<SharedBuf<T>>,
    len: usize,
    id: SeqId,
    generation: u64,
}

impl<T> Seq<T> {
    /// An empty sequence. Holds no buffer.
    pub fn new() -> Seq<T> {
        return Seq {
            buf: None,
            len: 0,
            id: SeqId::mint(),
            generation: 0,
        };
    }

    /// A sequence of `len` default-constructed elements.
    pub fn with_len(len: usize) -> Seq<T>
    where
        T: Default,
    {
        let buf = if len == 0 { None } else { Some(SharedBuf::with_len(len)) };
        return Seq {
            buf,
            len,
            id: SeqId::mint(),
            generation: 0,
        };
    }

    /// A sequence of `len` clones of `value`.
    pub fn filled(len: usize, value: T) -> Seq<T>
    where
        T: Clone,
    {
        let buf = if len == 0 { None } else { Some(SharedBuf::filled(len, &value)) };
        return Seq {
            buf,
            len,
            id: SeqId::mint(),
            generation: 0,
        };
    }

    /// Current logical length.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Read-only view of every live element. Empty sequences yield `&[]`.
    pub fn as_slice(&self) -> &[T] {
        return match &self.buf {
            Some(buf) => buf.as_slice(),
            None => &[],
        };
    }

    /// Read-only traversal, for callers that want a std iterator rather
    /// than a cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    /// Bounds-checked element read.
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        if index >= self.len {
            return Err(SeqError::OutOfRange { index, len: self.len });
        }
        return Ok(&self.as_slice()[index]);
    }

    /// Bounds-checked element write access. Detaches from any shared
    /// snapshot first, so the write is never visible through other handles.
    /// Not a structural mutation: cursors stay valid.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError>
    where
        T: Clone,
    {
        if index >= self.len {
            return Err(SeqError::OutOfRange { index, len: self.len });
        }
        let buf = self.buf.as_mut().expect("non-zero length implies a buffer");
        return Ok(&mut buf.make_mut()[index]);
    }

    /// Change the logical length to exactly `new_len`.
    ///
    /// A no-op when the length already matches. Otherwise allocates a fresh
    /// buffer of exactly `new_len`, copies the surviving prefix by index,
    /// and default-fills any tail. Shrinking to zero drops the buffer.
    /// Always O(len); invalidates all outstanding cursors.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Clone + Default,
    {
        if new_len == self.len {
            return;
        }
        self.generation += 1;
        if new_len == 0 {
            self.buf = None;
            self.len = 0;
            return;
        }
        let mut fresh = Vec::with_capacity(new_len);
        if let Some(buf) = &self.buf {
            let keep = new_len.min(self.len);
            fresh.extend(buf.as_slice()[..keep].iter().cloned());
        }
        fresh.resize_with(new_len, T::default);
        self.buf = Some(SharedBuf::from_vec(fresh));
        self.len = new_len;
    }

    /// Cursor at position 0.
    pub fn begin(&self) -> Cursor {
        return Cursor::mint(self.id, 0, self.generation);
    }

    /// Cursor at the end position `len`. Reachable, never dereferenceable.
    pub fn end(&self) -> Cursor {
        return Cursor::mint(self.id, self.len, self.generation);
    }

    /// Insert `value` at the cursor's position, shifting everything at or
    /// after it one slot right. Inserting at `end` appends.
    ///
    /// Grows through the exact-size resize path, so this is O(len) and
    /// invalidates all outstanding cursors, including the one passed in.
    pub fn insert(&mut self, cursor: Cursor, value: T) -> Result<(), SeqError>
    where
        T: Clone + Default,
    {
        self.check_cursor(&cursor)?;
        let pos = cursor.pos();
        debug_assert!(pos <= self.len, "generation match bounds the cursor");
        self.resize(self.len + 1);
        let buf = self.buf.as_mut().expect("resize to non-zero leaves a buffer");
        let slots = buf.make_mut();
        // Shift top-down so nothing is clobbered before it moves.
        for i in (pos + 1..self.len).rev() {
            slots.swap(i, i - 1);
        }
        slots[pos] = value;
        return Ok(());
    }

    /// Remove the element at the cursor's position, shifting everything
    /// after it one slot left. The cursor must sit on a live element;
    /// erasing at `end` is `OutOfRange`.
    ///
    /// Shrinks through the exact-size resize path, so this is O(len) and
    /// invalidates all outstanding cursors.
    pub fn erase(&mut self, cursor: Cursor) -> Result<(), SeqError>
    where
        T: Clone + Default,
    {
        self.check_cursor(&cursor)?;
        let pos = cursor.pos();
        if pos >= self.len {
            return Err(SeqError::OutOfRange { index: pos, len: self.len });
        }
        let buf = self.buf.as_mut().expect("non-zero length implies a buffer");
        let slots = buf.make_mut();
        // Shift bottom-up from the erase point.
        for i in pos..self.len - 1 {
            slots.swap(i, i + 1);
        }
        self.resize(self.len - 1);
        return Ok(());
    }

    /// Dereference a cursor. `OutOfRange` at the end position.
    pub fn deref(&self, cursor: Cursor) -> Result<&T, SeqError> {
        self.check_cursor(&cursor)?;
        return self.get(cursor.pos());
    }

    /// Dereference a cursor for writing. Not a structural mutation.
    pub fn deref_mut(&mut self, cursor: Cursor) -> Result<&mut T, SeqError>
    where
        T: Clone,
    {
        self.check_cursor(&cursor)?;
        return self.get_mut(cursor.pos());
    }

    /// An O(1) snapshot viewing the same buffer.
    ///
    /// The snapshot is an independent sequence with its own identity and
    /// cursor generation; it shares storage only until either side writes
    /// or structurally mutates, at which point the writer detaches.
    pub fn share(&self) -> Seq<T> {
        return Seq {
            buf: self.buf.as_ref().map(|buf| buf.share()),
            len: self.len,
            id: SeqId::mint(),
            generation: 0,
        };
    }

    /// True when `self` and `other` currently view the same allocation.
    pub fn shares_storage_with(&self, other: &Seq<T>) -> bool {
        return match (&self.buf, &other.buf) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        };
    }

    /// Reject cursors minted by another sequence or before the most recent
    /// structural mutation.
    pub(crate) fn check_cursor(&self, cursor: &Cursor) -> Result<(), SeqError> {
        if cursor.owner() != self.id {
            return Err(SeqError::ForeignCursor);
        }
        if cursor.minted_at() != self.generation {
            return Err(SeqError::StaleCursor);
        }
        return Ok(());
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Seq<T> {
        return Seq::new();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
